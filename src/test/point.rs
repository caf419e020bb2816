use arrow_array::ArrayRef;

use crate::test::xy;

pub(crate) fn point_array() -> ArrayRef {
    xy(vec![0., 1., 1., 2., 2., 3.])
}
