use arrow_array::OffsetSizeTrait;
use arrow_buffer::OffsetBuffer;

use crate::error::{GeoArrowError, Result};

pub(crate) fn offsets_buffer_i64_to_i32(offsets: &OffsetBuffer<i64>) -> Result<OffsetBuffer<i32>> {
    i32::try_from(*offsets.last()).map_err(|_| GeoArrowError::Overflow)?;

    let i32_offsets = offsets.iter().map(|x| *x as i32).collect::<Vec<_>>();
    // Narrowing is monotonic and the largest value fits, so the invariants carry over
    Ok(unsafe { OffsetBuffer::new_unchecked(i32_offsets.into()) })
}

/// Offsets utils that I miss from arrow2
pub(crate) trait OffsetBufferUtils<O: OffsetSizeTrait> {
    /// Returns the length an array with these offsets would be.
    fn len_proxy(&self) -> usize;

    /// Returns a range (start, end) corresponding to the position `index`
    /// # Panic
    /// This function panics iff `index >= self.len_proxy()`
    fn start_end(&self, index: usize) -> (usize, usize);

    /// Returns the last offset.
    fn last(&self) -> &O;

    /// Returns the last offset as a `usize`.
    fn last_usize(&self) -> usize;
}

impl<O: OffsetSizeTrait> OffsetBufferUtils<O> for OffsetBuffer<O> {
    #[inline]
    fn len_proxy(&self) -> usize {
        self.len() - 1
    }

    #[inline]
    fn start_end(&self, index: usize) -> (usize, usize) {
        assert!(index < self.len_proxy());
        let start = self[index].as_usize();
        let end = self[index + 1].as_usize();
        (start, end)
    }

    #[inline]
    fn last(&self) -> &O {
        // An OffsetBuffer always holds at least one element
        self.as_ref().last().unwrap()
    }

    #[inline]
    fn last_usize(&self) -> usize {
        self.last().as_usize()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn narrow_large_offsets() {
        let offsets = OffsetBuffer::<i64>::new(vec![0, 2, 5].into());
        let narrowed = offsets_buffer_i64_to_i32(&offsets).unwrap();
        assert_eq!(narrowed.as_ref(), &[0, 2, 5]);
    }

    #[test]
    fn narrow_large_offsets_overflow() {
        let offsets = OffsetBuffer::<i64>::new(vec![0, i64::from(i32::MAX) + 1].into());
        assert!(matches!(
            offsets_buffer_i64_to_i32(&offsets),
            Err(GeoArrowError::Overflow)
        ));
    }

    #[test]
    fn start_end_of_empty_item() {
        let offsets = OffsetBuffer::<i32>::new(vec![0, 4, 4, 7].into());
        assert_eq!(offsets.len_proxy(), 3);
        assert_eq!(offsets.start_end(1), (4, 4));
        assert_eq!(offsets.last_usize(), 7);
    }
}
