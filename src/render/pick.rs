use crate::algorithm::InvertedOffsets;

/// Map a rendered primitive of one chunk back to its row in the full column.
///
/// For multi kinds, `inverted_offsets` maps the primitive (point, path or polygon) to the
/// chunk-local feature that produced it; otherwise the primitive index is already the row.
/// `chunk_offset` is the number of rows in all preceding chunks, see
/// [`chunk_offsets`][crate::chunked_array::chunk_offsets].
///
/// Returns `None` if `primitive_index` is outside the inverted offsets, or for single kinds, at or
/// past `num_rows`.
pub fn global_row_index(
    primitive_index: usize,
    inverted_offsets: Option<&InvertedOffsets>,
    chunk_offset: usize,
    num_rows: usize,
) -> Option<usize> {
    let local_index = match inverted_offsets {
        Some(inverted) => inverted.get(primitive_index)?,
        None if primitive_index < num_rows => primitive_index,
        None => return None,
    };
    Some(chunk_offset + local_index)
}

#[cfg(test)]
mod test {
    use arrow_buffer::OffsetBuffer;

    use super::*;
    use crate::algorithm::invert_offsets;

    #[test]
    fn direct_rows() {
        assert_eq!(global_row_index(3, None, 10, 4), Some(13));
        assert_eq!(global_row_index(4, None, 10, 4), None);
        assert_eq!(global_row_index(0, None, 10, 0), None);
    }

    #[test]
    fn through_inverted_offsets() {
        let offsets = OffsetBuffer::<i32>::new(vec![0, 2, 5].into());
        let inverted = invert_offsets(&offsets).unwrap();
        assert_eq!(global_row_index(1, Some(&inverted), 100, 2), Some(100));
        assert_eq!(global_row_index(4, Some(&inverted), 100, 2), Some(101));
        assert_eq!(global_row_index(5, Some(&inverted), 100, 2), None);
    }
}
