use arrow_array::{OffsetSizeTrait, UInt8Array};
use arrow_buffer::OffsetBuffer;

use crate::error::{GeoArrowError, Result};
use crate::util::OffsetBufferUtils;

/// An RGB triple identifying a feature on the GPU.
pub type PickingColor = [u8; 3];

/// The most features one picking color buffer can tell apart. Black is reserved.
pub const MAX_PICKING_FEATURES: usize = (1 << 24) - 1;

/// Encode a feature index as a picking color.
///
/// Index `i` is stored as `i + 1` in little-endian RGB, leaving black (`[0, 0, 0]`) free to mean
/// "no feature". Indices of [`MAX_PICKING_FEATURES`] and above wrap.
pub fn encode_picking_color(index: usize) -> PickingColor {
    let value = index.wrapping_add(1);
    [
        (value & 0xff) as u8,
        ((value >> 8) & 0xff) as u8,
        ((value >> 16) & 0xff) as u8,
    ]
}

/// Decode a color produced by [`encode_picking_color`]. Black decodes to `None`.
pub fn decode_picking_color(color: PickingColor) -> Option<usize> {
    let value = color[0] as usize | (color[1] as usize) << 8 | (color[2] as usize) << 16;
    value.checked_sub(1)
}

/// Build a per-coordinate picking color buffer.
///
/// For each feature `f`, `color_of(f)` is evaluated once and written to every coordinate in
/// `offsets[f]..offsets[f + 1]`. The output holds `3 * offsets.last()` bytes.
///
/// # Errors
///
/// - [`GeoArrowError::Overflow`] if there are more than [`MAX_PICKING_FEATURES`] features
pub fn encode_picking_colors<O: OffsetSizeTrait, F: Fn(usize) -> PickingColor>(
    offsets: &OffsetBuffer<O>,
    color_of: F,
) -> Result<UInt8Array> {
    check_feature_count(offsets.len_proxy())?;
    let mut output = vec![0u8; 3 * offsets.last_usize()];
    for feature_idx in 0..offsets.len_proxy() {
        let (start, end) = offsets.start_end(feature_idx);
        if start == end {
            continue;
        }
        let color = color_of(feature_idx);
        for slot in output[start * 3..end * 3].chunks_exact_mut(3) {
            slot.copy_from_slice(&color);
        }
    }
    Ok(UInt8Array::new(output.into(), None))
}

fn check_feature_count(num_features: usize) -> Result<()> {
    if num_features > MAX_PICKING_FEATURES {
        return Err(GeoArrowError::Overflow);
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn color_roundtrip() {
        for index in [0, 1, 254, 255, 256, 65_535, 1 << 20] {
            assert_eq!(decode_picking_color(encode_picking_color(index)), Some(index));
        }
        assert_eq!(decode_picking_color([0, 0, 0]), None);
    }

    #[test]
    fn colors_per_coordinate() {
        let offsets = OffsetBuffer::<i32>::new(vec![0, 2, 2, 3].into());
        let colors = encode_picking_colors(&offsets, encode_picking_color).unwrap();
        assert_eq!(colors.len(), 9);
        assert_eq!(&colors.values()[..], &[1, 0, 0, 1, 0, 0, 3, 0, 0]);
    }

    #[test]
    fn color_computed_once_per_feature() {
        let calls = Cell::new(0);
        let offsets = OffsetBuffer::<i32>::new(vec![0, 100, 250].into());
        let colors = encode_picking_colors(&offsets, |index| {
            calls.set(calls.get() + 1);
            encode_picking_color(index)
        })
        .unwrap();
        assert_eq!(calls.get(), 2);
        assert_eq!(colors.len(), 750);
    }

    #[test]
    fn feature_count_limit() {
        check_feature_count(MAX_PICKING_FEATURES).unwrap();
        assert!(matches!(
            check_feature_count(MAX_PICKING_FEATURES + 1),
            Err(GeoArrowError::Overflow)
        ));
        // The last admitted feature still decodes to itself
        let last = MAX_PICKING_FEATURES - 1;
        assert_eq!(decode_picking_color(encode_picking_color(last)), Some(last));
        assert_ne!(encode_picking_color(last), [0, 0, 0]);
    }
}
