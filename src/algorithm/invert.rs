use arrow_array::types::{ArrowPrimitiveType, UInt16Type, UInt32Type, UInt8Type};
use arrow_array::{OffsetSizeTrait, PrimitiveArray, UInt16Array, UInt32Array, UInt8Array};
use arrow_buffer::{ArrowNativeType, OffsetBuffer};

use crate::error::{GeoArrowError, Result};
use crate::util::OffsetBufferUtils;

/// The inverse of an offsets buffer, mapping each leaf index back to the item that owns it.
///
/// The integer width is the narrowest that can hold every source index.
#[derive(Debug, Clone, PartialEq)]
pub enum InvertedOffsets {
    UInt8(UInt8Array),
    UInt16(UInt16Array),
    UInt32(UInt32Array),
}

impl InvertedOffsets {
    pub fn len(&self) -> usize {
        match self {
            Self::UInt8(arr) => arr.len(),
            Self::UInt16(arr) => arr.len(),
            Self::UInt32(arr) => arr.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The source index owning leaf `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<usize> {
        if index >= self.len() {
            return None;
        }
        let value = match self {
            Self::UInt8(arr) => arr.value(index) as usize,
            Self::UInt16(arr) => arr.value(index) as usize,
            Self::UInt32(arr) => arr.value(index) as usize,
        };
        Some(value)
    }
}

fn fill_inverted<T: ArrowPrimitiveType, O: OffsetSizeTrait>(
    offsets: &OffsetBuffer<O>,
) -> Result<PrimitiveArray<T>> {
    let mut output = vec![T::Native::default(); offsets.last_usize()];
    for source_idx in 0..offsets.len_proxy() {
        let value = T::Native::from_usize(source_idx).ok_or(GeoArrowError::Overflow)?;
        let (start, end) = offsets.start_end(source_idx);
        output[start..end].fill(value);
    }
    Ok(PrimitiveArray::new(output.into(), None))
}

/// Convert an offsets buffer into the index of the item owning each leaf position.
///
/// e.g. if `offsets` is `[0, 2, 5]`, then item 0 owns two leaves and item 1 owns three, so the
/// inverse is
/// ```notest
/// [0, 0, 1, 1, 1]
/// ```
/// For every position `p`, `offsets[inverse[p]] <= p < offsets[inverse[p] + 1]`. The output has
/// `offsets.last()` elements, and its width is chosen from `offsets.len()` against `2^8` and
/// `2^16`.
pub fn invert_offsets<O: OffsetSizeTrait>(offsets: &OffsetBuffer<O>) -> Result<InvertedOffsets> {
    let inverted = if offsets.len() < 1 << 8 {
        InvertedOffsets::UInt8(fill_inverted::<UInt8Type, O>(offsets)?)
    } else if offsets.len() < 1 << 16 {
        InvertedOffsets::UInt16(fill_inverted::<UInt16Type, O>(offsets)?)
    } else {
        InvertedOffsets::UInt32(fill_inverted::<UInt32Type, O>(offsets)?)
    };
    Ok(inverted)
}
