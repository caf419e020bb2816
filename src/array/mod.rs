//! Read-only views over one chunk of a GeoArrow geometry column.

pub use coord::CoordBuffer;
pub use geometry::GeometryArray;
pub use linestring::LineStringArray;
pub use multilinestring::MultiLineStringArray;
pub use multipoint::MultiPointArray;
pub use multipolygon::MultiPolygonArray;
pub use point::PointArray;
pub use polygon::PolygonArray;

pub mod coord;
pub mod geometry;
pub mod linestring;
pub mod multilinestring;
pub mod multipoint;
pub mod multipolygon;
pub mod point;
pub mod polygon;

use arrow_array::cast::AsArray;
use arrow_array::{Array, ArrayRef, OffsetSizeTrait};
use arrow_buffer::OffsetBuffer;
use arrow_schema::DataType;

use crate::error::{GeoArrowError, Result};
use crate::util::{offsets_buffer_i64_to_i32, OffsetBufferUtils};

/// Split one list level into its offsets and child values, narrowing `LargeList` offsets.
///
/// A sliced list keeps its full child array; the offsets are rebased to start at zero and the
/// child is sliced to the range they cover.
pub(crate) fn list_parts(array: &dyn Array) -> Result<(OffsetBuffer<i32>, ArrayRef)> {
    match array.data_type() {
        DataType::List(_) => {
            let list = array.as_list::<i32>();
            Ok(rebase_offsets(list.offsets(), list.values()))
        }
        DataType::LargeList(_) => {
            let list = array.as_list::<i64>();
            let (offsets, values) = rebase_offsets(list.offsets(), list.values());
            Ok((offsets_buffer_i64_to_i32(&offsets)?, values))
        }
        dt => Err(GeoArrowError::TypeMismatch {
            expected: "list".to_string(),
            found: dt.to_string(),
        }),
    }
}

fn rebase_offsets<O: OffsetSizeTrait>(
    offsets: &OffsetBuffer<O>,
    values: &ArrayRef,
) -> (OffsetBuffer<O>, ArrayRef) {
    let start = offsets[0];
    let end = *offsets.last();
    if start.as_usize() == 0 && end.as_usize() == values.len() {
        return (offsets.clone(), values.clone());
    }
    let rebased = offsets.iter().map(|offset| *offset - start).collect::<Vec<_>>();
    let values = values.slice(start.as_usize(), (end - start).as_usize());
    (OffsetBuffer::new(rebased.into()), values)
}

/// Check that the largest offset of one level stays within the level it points into.
pub(crate) fn check_offsets(
    offsets: &OffsetBuffer<i32>,
    child_len: usize,
    name: &str,
) -> Result<()> {
    if offsets.last_usize() > child_len {
        return Err(GeoArrowError::InvalidGeoArrow(format!(
            "largest {name} offset {} exceeds child length {child_len}",
            offsets.last_usize()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::{multipolygon, polygon};

    #[test]
    fn sliced_list_is_rebased() {
        let arr = polygon::p_array().slice(1, 1);
        let (geom_offsets, rings) = list_parts(arr.as_ref()).unwrap();
        assert_eq!(geom_offsets.as_ref(), &[0, 1]);
        assert_eq!(rings.len(), 1);

        let (ring_offsets, vertices) = list_parts(rings.as_ref()).unwrap();
        assert_eq!(ring_offsets.as_ref(), &[0, 3]);
        assert_eq!(vertices.len(), 3);
    }

    #[test]
    fn unsliced_list_is_unchanged() {
        let arr = multipolygon::mp_array();
        let (geom_offsets, polygons) = list_parts(arr.as_ref()).unwrap();
        assert_eq!(geom_offsets.as_ref(), &[0, 2, 3]);
        assert_eq!(polygons.len(), 3);
    }
}
