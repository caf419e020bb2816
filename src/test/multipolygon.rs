use arrow_array::ArrayRef;

use crate::test::{list, n_coords};

/// Feature 0 has polygons 0 and 1, feature 1 has polygon 2.
///
/// Polygon 0 has two rings of 5 and 4 vertices, polygons 1 and 2 have one ring of 4 vertices.
pub(crate) fn mp_array() -> ArrayRef {
    let rings = list(vec![0, 5, 9, 13, 17], n_coords(17));
    let polygons = list(vec![0, 2, 3, 4], rings);
    list(vec![0, 2, 3], polygons)
}
