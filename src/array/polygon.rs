use arrow_array::Array;
use arrow_buffer::OffsetBuffer;

use crate::algorithm::resolve_offsets;
use crate::array::{check_offsets, list_parts, CoordBuffer};
use crate::error::{GeoArrowError, Result};
use crate::util::OffsetBufferUtils;

/// An immutable chunk of Polygon geometries.
#[derive(Debug, Clone)]
pub struct PolygonArray {
    pub(crate) coords: CoordBuffer,

    /// Offsets into the ring array where each geometry starts
    pub(crate) geom_offsets: OffsetBuffer<i32>,

    /// Offsets into the coordinate array where each ring starts
    pub(crate) ring_offsets: OffsetBuffer<i32>,
}

impl PolygonArray {
    /// Create a new PolygonArray from parts
    ///
    /// # Errors
    ///
    /// - if the largest ring offset exceeds the number of coordinates
    /// - if the largest geometry offset exceeds the number of rings
    pub fn try_new(
        coords: CoordBuffer,
        geom_offsets: OffsetBuffer<i32>,
        ring_offsets: OffsetBuffer<i32>,
    ) -> Result<Self> {
        check_offsets(&ring_offsets, coords.len(), "ring")?;
        check_offsets(&geom_offsets, ring_offsets.len_proxy(), "geometry")?;
        Ok(Self {
            coords,
            geom_offsets,
            ring_offsets,
        })
    }

    pub fn coords(&self) -> &CoordBuffer {
        &self.coords
    }

    pub fn geom_offsets(&self) -> &OffsetBuffer<i32> {
        &self.geom_offsets
    }

    pub fn ring_offsets(&self) -> &OffsetBuffer<i32> {
        &self.ring_offsets
    }

    /// Offsets from each polygon directly to its coordinates, skipping the ring level.
    pub fn geom_to_coord_offsets(&self) -> Result<OffsetBuffer<i32>> {
        resolve_offsets(&[&self.geom_offsets, &self.ring_offsets])
    }

    pub fn len(&self) -> usize {
        self.geom_offsets.len_proxy()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TryFrom<&dyn Array> for PolygonArray {
    type Error = GeoArrowError;

    fn try_from(value: &dyn Array) -> Result<Self> {
        let (geom_offsets, rings) = list_parts(value)?;
        let (ring_offsets, vertices) = list_parts(rings.as_ref())?;
        let coords = CoordBuffer::from_arrow(vertices.as_ref())?;
        Self::try_new(coords, geom_offsets, ring_offsets)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::polygon;

    #[test]
    fn resolved_offsets_skip_rings() {
        let arr = polygon::p_array();
        let polygons = PolygonArray::try_from(arr.as_ref()).unwrap();
        assert_eq!(polygons.len(), 2);
        assert_eq!(polygons.ring_offsets().as_ref(), &[0, 4, 4, 7]);
        assert_eq!(polygons.geom_to_coord_offsets().unwrap().as_ref(), &[0, 4, 7]);
    }

    #[test]
    fn reject_inconsistent_offsets() {
        let coords = CoordBuffer::from_arrow(crate::test::n_coords(3).as_ref()).unwrap();
        let geom_offsets = OffsetBuffer::new(vec![0, 1].into());
        let ring_offsets = OffsetBuffer::new(vec![0, 4].into());
        assert!(matches!(
            PolygonArray::try_new(coords, geom_offsets, ring_offsets),
            Err(GeoArrowError::InvalidGeoArrow(_))
        ));
    }
}
