use arrow_array::ArrayRef;

use crate::test::{list, n_coords};

/// Two linestrings of 2 and 3 vertices.
pub(crate) fn ls_array() -> ArrayRef {
    list(vec![0, 2, 5], n_coords(5))
}
