use std::sync::Arc;

use arrow_array::cast::AsArray;
use arrow_array::types::ArrowPrimitiveType;
use arrow_array::{
    downcast_primitive_array, Array, ArrayRef, FixedSizeListArray, OffsetSizeTrait, PrimitiveArray,
};
use arrow_buffer::OffsetBuffer;
use arrow_schema::DataType;

use crate::error::{GeoArrowError, Result};
use crate::util::OffsetBufferUtils;

/// Repeat each geometry's value across the coordinates it owns.
///
/// `values` holds `size` channels per geometry, so geometry `g` owns
/// `values[g * size..(g + 1) * size]`. For every coordinate `c` in
/// `offsets[g]..offsets[g + 1]` those channels are copied to `output[c * size..(c + 1) * size]`.
///
/// e.g. with offsets `[0, 2, 5]` and values `[10, 20]`, the output is `[10, 10, 20, 20, 20]`.
///
/// The output has `size * offsets.last()` values. Empty geometries write nothing.
///
/// # Errors
///
/// - if `size` is zero
/// - if `values.len() != size * (offsets.len() - 1)`
pub fn expand_values<T: Copy + Default, O: OffsetSizeTrait>(
    values: &[T],
    size: usize,
    offsets: &OffsetBuffer<O>,
) -> Result<Vec<T>> {
    if size == 0 {
        return Err(GeoArrowError::General(
            "cannot expand values with zero channels".to_string(),
        ));
    }
    let num_geoms = offsets.len_proxy();
    if values.len() != size * num_geoms {
        return Err(GeoArrowError::General(format!(
            "expected {} values ({} geometries of {} channels), found {}",
            size * num_geoms,
            num_geoms,
            size,
            values.len()
        )));
    }

    let mut output = vec![T::default(); size * offsets.last_usize()];
    for (geom_idx, value) in values.chunks_exact(size).enumerate() {
        let (start, end) = offsets.start_end(geom_idx);
        for slot in output[start * size..end * size].chunks_exact_mut(size) {
            slot.copy_from_slice(value);
        }
    }
    Ok(output)
}

/// Expand a primitive array holding `size` channels per geometry.
///
/// The output keeps the input's data type. Validity is not carried over.
pub fn expand_primitive<T: ArrowPrimitiveType, O: OffsetSizeTrait>(
    array: &PrimitiveArray<T>,
    size: usize,
    offsets: &OffsetBuffer<O>,
) -> Result<PrimitiveArray<T>> {
    let expanded = expand_values(&array.values()[..], size, offsets)?;
    Ok(PrimitiveArray::<T>::new(expanded.into(), None).with_data_type(array.data_type().clone()))
}

fn expand_flat_values<O: OffsetSizeTrait>(
    values: &dyn Array,
    size: usize,
    offsets: &OffsetBuffer<O>,
) -> Result<ArrayRef> {
    downcast_primitive_array!(
        values => {
            Ok(Arc::new(expand_primitive(values, size, offsets)?))
        }
        dt => Err(GeoArrowError::TypeMismatch {
            expected: "primitive attribute values".to_string(),
            found: dt.to_string(),
        })
    )
}

/// Expand a per-geometry attribute array into a per-coordinate array.
///
/// Accepts a primitive array (one channel) or a `FixedSizeList` of primitives (`list_size`
/// channels, e.g. RGBA colors). The output has the same type as the input.
pub fn expand_array<O: OffsetSizeTrait>(
    array: &dyn Array,
    offsets: &OffsetBuffer<O>,
) -> Result<ArrayRef> {
    match array.data_type() {
        DataType::FixedSizeList(field, list_size) => {
            let list = array.as_fixed_size_list();
            let size = usize::try_from(*list_size).map_err(|_| GeoArrowError::Overflow)?;
            let flat = list
                .values()
                .slice(list.offset() * size, list.len() * size);
            let values = expand_flat_values(flat.as_ref(), size, offsets)?;
            Ok(Arc::new(FixedSizeListArray::try_new(
                field.clone(),
                *list_size,
                values,
                None,
            )?))
        }
        _ => expand_flat_values(array, 1, offsets),
    }
}
