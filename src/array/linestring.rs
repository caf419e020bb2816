use arrow_array::Array;
use arrow_buffer::OffsetBuffer;

use crate::array::{check_offsets, list_parts, CoordBuffer};
use crate::error::{GeoArrowError, Result};
use crate::util::OffsetBufferUtils;

/// An immutable chunk of LineString geometries.
#[derive(Debug, Clone)]
pub struct LineStringArray {
    pub(crate) coords: CoordBuffer,

    /// Offsets into the coordinate array where each geometry starts
    pub(crate) geom_offsets: OffsetBuffer<i32>,
}

impl LineStringArray {
    /// Create a new LineStringArray from parts
    ///
    /// # Errors
    ///
    /// - if the largest geometry offset exceeds the number of coordinates
    pub fn try_new(coords: CoordBuffer, geom_offsets: OffsetBuffer<i32>) -> Result<Self> {
        check_offsets(&geom_offsets, coords.len(), "geometry")?;
        Ok(Self {
            coords,
            geom_offsets,
        })
    }

    pub fn coords(&self) -> &CoordBuffer {
        &self.coords
    }

    pub fn geom_offsets(&self) -> &OffsetBuffer<i32> {
        &self.geom_offsets
    }

    /// Offsets from each linestring to its coordinates. A linestring is its own path, so these
    /// are the geometry offsets.
    pub fn geom_to_coord_offsets(&self) -> &OffsetBuffer<i32> {
        &self.geom_offsets
    }

    pub fn len(&self) -> usize {
        self.geom_offsets.len_proxy()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TryFrom<&dyn Array> for LineStringArray {
    type Error = GeoArrowError;

    fn try_from(value: &dyn Array) -> Result<Self> {
        let (geom_offsets, vertices) = list_parts(value)?;
        let coords = CoordBuffer::from_arrow(vertices.as_ref())?;
        Self::try_new(coords, geom_offsets)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::{linestring, point};

    #[test]
    fn from_arrow() {
        let arr = linestring::ls_array();
        let linestrings = LineStringArray::try_from(arr.as_ref()).unwrap();
        assert_eq!(linestrings.len(), 2);
        assert_eq!(linestrings.coords().len(), 5);
        assert_eq!(linestrings.geom_to_coord_offsets().as_ref(), &[0, 2, 5]);
    }

    #[test]
    fn reject_points() {
        let arr = point::point_array();
        assert!(matches!(
            LineStringArray::try_from(arr.as_ref()),
            Err(GeoArrowError::TypeMismatch { .. })
        ));
    }
}
