use arrow_array::ArrayRef;

use crate::test::{list, n_coords};

/// Feature 0 has linestrings of 2 and 3 vertices, feature 1 has one of 4 vertices.
pub(crate) fn ml_array() -> ArrayRef {
    let linestrings = list(vec![0, 2, 5, 9], n_coords(9));
    list(vec![0, 2, 3], linestrings)
}
