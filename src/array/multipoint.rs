use arrow_array::Array;
use arrow_buffer::OffsetBuffer;

use crate::array::{check_offsets, list_parts, CoordBuffer};
use crate::error::{GeoArrowError, Result};
use crate::util::OffsetBufferUtils;

/// An immutable chunk of MultiPoint geometries.
///
/// Shares its layout with [`LineStringArray`][crate::array::LineStringArray]; the two are told
/// apart by the declared extension name.
#[derive(Debug, Clone)]
pub struct MultiPointArray {
    pub(crate) coords: CoordBuffer,

    /// Offsets into the coordinate array where each geometry starts
    pub(crate) geom_offsets: OffsetBuffer<i32>,
}

impl MultiPointArray {
    /// Create a new MultiPointArray from parts
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

    /// Offsets from each feature to its points.
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

impl TryFrom<&dyn Array> for MultiPointArray {
    type Error = GeoArrowError;

    fn try_from(value: &dyn Array) -> Result<Self> {
        let (geom_offsets, points) = list_parts(value)?;
        let coords = CoordBuffer::from_arrow(points.as_ref())?;
        Self::try_new(coords, geom_offsets)
    }
}
