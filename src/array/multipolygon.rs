use arrow_array::Array;
use arrow_buffer::OffsetBuffer;

use crate::algorithm::resolve_offsets;
use crate::array::{check_offsets, list_parts, CoordBuffer};
use crate::error::{GeoArrowError, Result};
use crate::util::OffsetBufferUtils;

/// An immutable chunk of MultiPolygon geometries.
#[derive(Debug, Clone)]
pub struct MultiPolygonArray {
    pub(crate) coords: CoordBuffer,

    /// Offsets into the polygon array where each geometry starts
    pub(crate) geom_offsets: OffsetBuffer<i32>,

    /// Offsets into the ring array where each polygon starts
    pub(crate) polygon_offsets: OffsetBuffer<i32>,

    /// Offsets into the coordinate array where each ring starts
    pub(crate) ring_offsets: OffsetBuffer<i32>,
}

impl MultiPolygonArray {
    /// Create a new MultiPolygonArray from parts
    ///
    /// # Errors
    ///
    /// - if the largest ring offset exceeds the number of coordinates
    /// - if the largest polygon offset exceeds the number of rings
    /// - if the largest geometry offset exceeds the number of polygons
    pub fn try_new(
        coords: CoordBuffer,
        geom_offsets: OffsetBuffer<i32>,
        polygon_offsets: OffsetBuffer<i32>,
        ring_offsets: OffsetBuffer<i32>,
    ) -> Result<Self> {
        check_offsets(&ring_offsets, coords.len(), "ring")?;
        check_offsets(&polygon_offsets, ring_offsets.len_proxy(), "polygon")?;
        check_offsets(&geom_offsets, polygon_offsets.len_proxy(), "geometry")?;
        Ok(Self {
            coords,
            geom_offsets,
            polygon_offsets,
            ring_offsets,
        })
    }

    pub fn coords(&self) -> &CoordBuffer {
        &self.coords
    }

    pub fn geom_offsets(&self) -> &OffsetBuffer<i32> {
        &self.geom_offsets
    }

    pub fn polygon_offsets(&self) -> &OffsetBuffer<i32> {
        &self.polygon_offsets
    }

    pub fn ring_offsets(&self) -> &OffsetBuffer<i32> {
        &self.ring_offsets
    }

    /// Offsets from each polygon to its coordinates.
    ///
    /// Polygons are the rendered primitive, so these mark primitive boundaries.
    pub fn polygon_to_coord_offsets(&self) -> Result<OffsetBuffer<i32>> {
        resolve_offsets(&[&self.polygon_offsets, &self.ring_offsets])
    }

    /// Offsets from each multipolygon (feature) to its coordinates.
    ///
    /// Attributes and picking colors are keyed per feature, so they are broadcast with these.
    pub fn geom_to_coord_offsets(&self) -> Result<OffsetBuffer<i32>> {
        resolve_offsets(&[&self.geom_offsets, &self.polygon_offsets, &self.ring_offsets])
    }

    pub fn len(&self) -> usize {
        self.geom_offsets.len_proxy()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TryFrom<&dyn Array> for MultiPolygonArray {
    type Error = GeoArrowError;

    fn try_from(value: &dyn Array) -> Result<Self> {
        let (geom_offsets, polygons) = list_parts(value)?;
        let (polygon_offsets, rings) = list_parts(polygons.as_ref())?;
        let (ring_offsets, vertices) = list_parts(rings.as_ref())?;
        let coords = CoordBuffer::from_arrow(vertices.as_ref())?;
        Self::try_new(coords, geom_offsets, polygon_offsets, ring_offsets)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::multipolygon;

    #[test]
    fn two_resolutions() {
        let arr = multipolygon::mp_array();
        let multipolygons = MultiPolygonArray::try_from(arr.as_ref()).unwrap();
        assert_eq!(multipolygons.len(), 2);
        assert_eq!(
            multipolygons.polygon_to_coord_offsets().unwrap().as_ref(),
            &[0, 9, 13, 17]
        );
        assert_eq!(
            multipolygons.geom_to_coord_offsets().unwrap().as_ref(),
            &[0, 13, 17]
        );
    }

    #[test]
    fn sliced_rows_are_rebased() {
        let arr = multipolygon::mp_array().slice(1, 1);
        let multipolygons = MultiPolygonArray::try_from(arr.as_ref()).unwrap();
        assert_eq!(multipolygons.len(), 1);
        assert_eq!(multipolygons.coords().len(), 4);
        assert_eq!(multipolygons.geom_offsets().as_ref(), &[0, 1]);
        assert_eq!(
            multipolygons.polygon_to_coord_offsets().unwrap().as_ref(),
            &[0, 4]
        );
        assert_eq!(
            multipolygons.geom_to_coord_offsets().unwrap().as_ref(),
            &[0, 4]
        );
    }
}
