use arrow_array::OffsetSizeTrait;
use arrow_buffer::OffsetBuffer;

use crate::error::{GeoArrowError, Result};
use crate::util::OffsetBufferUtils;

/// Collapse a chain of nested offsets into a single mapping from top-level item to leaf index.
///
/// `levels` is ordered outer to inner: `levels[0]` indexes into the domain of `levels[1]`, and so
/// on, with the last level indexing directly into the flat coordinate buffer. The result `R`
/// satisfies `R[i] = O_k[... O_2[O_1[i]] ...]` and has the same length as `levels[0]`.
///
/// e.g. for a polygon array with geometry offsets `[0, 1, 3]` and ring offsets `[0, 4, 8, 12]`,
/// the resolved offsets are `[0, 4, 12]`: polygon 0 covers coordinates `0..4` and polygon 1 covers
/// `4..12`.
///
/// A single level is returned as-is. Each level is applied in place to one output buffer.
///
/// # Errors
///
/// - if `levels` is empty
/// - if any offset of one level points past the end of the next level
pub fn resolve_offsets<O: OffsetSizeTrait>(levels: &[&OffsetBuffer<O>]) -> Result<OffsetBuffer<O>> {
    let (outer, inner_levels) = levels.split_first().ok_or_else(|| {
        GeoArrowError::General("cannot resolve an empty chain of offsets".to_string())
    })?;

    if inner_levels.is_empty() {
        return Ok((*outer).clone());
    }

    let mut resolved: Vec<O> = outer.to_vec();
    for (depth, level) in inner_levels.iter().enumerate() {
        let max_index = *resolved.last().unwrap_or(&O::zero());
        if max_index.as_usize() >= level.len() {
            return Err(GeoArrowError::InvalidGeoArrow(format!(
                "offset {} at level {} exceeds the {} items of level {}",
                max_index.as_usize(),
                depth,
                level.len_proxy(),
                depth + 1
            )));
        }
        for offset in resolved.iter_mut() {
            *offset = level[offset.as_usize()];
        }
    }

    // Composition of monotonic lookups stays monotonic
    Ok(OffsetBuffer::new(resolved.into()))
}
