pub(crate) mod linestring;
pub(crate) mod multilinestring;
pub(crate) mod multipolygon;
pub(crate) mod point;
pub(crate) mod properties;

use std::sync::Arc;

use arrow_array::{ArrayRef, FixedSizeListArray, Float64Array, ListArray};
use arrow_buffer::OffsetBuffer;
use arrow_schema::{DataType, Field};

/// Interleaved XY coordinates.
pub(crate) fn xy(values: Vec<f64>) -> ArrayRef {
    let field = Arc::new(Field::new("xy", DataType::Float64, false));
    Arc::new(FixedSizeListArray::new(
        field,
        2,
        Arc::new(Float64Array::from(values)),
        None,
    ))
}

/// Wrap `values` in one list level.
pub(crate) fn list(offsets: Vec<i32>, values: ArrayRef) -> ArrayRef {
    let field = Arc::new(Field::new("item", values.data_type().clone(), false));
    Arc::new(ListArray::new(
        field,
        OffsetBuffer::new(offsets.into()),
        values,
        None,
    ))
}

/// `n` distinct XY coordinates.
pub(crate) fn n_coords(n: usize) -> ArrayRef {
    xy((0..n * 2).map(|v| v as f64).collect())
}
