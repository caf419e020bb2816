use std::sync::Arc;

use arrow_array::{ArrayRef, FixedSizeListArray, Float32Array, UInt8Array};
use arrow_schema::{DataType, Field};

pub(crate) fn f32_array(values: Vec<f32>) -> ArrayRef {
    Arc::new(Float32Array::from(values))
}

/// A color column with `size` `u8` channels per row.
pub(crate) fn color_array(size: i32, values: Vec<u8>) -> ArrayRef {
    let field = Arc::new(Field::new("item", DataType::UInt8, false));
    Arc::new(FixedSizeListArray::new(
        field,
        size,
        Arc::new(UInt8Array::from(values)),
        None,
    ))
}
