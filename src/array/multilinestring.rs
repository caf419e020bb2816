use arrow_array::Array;
use arrow_buffer::OffsetBuffer;

use crate::algorithm::resolve_offsets;
use crate::array::{check_offsets, list_parts, CoordBuffer};
use crate::error::{GeoArrowError, Result};
use crate::util::OffsetBufferUtils;

/// An immutable chunk of MultiLineString geometries.
#[derive(Debug, Clone)]
pub struct MultiLineStringArray {
    pub(crate) coords: CoordBuffer,

    /// Offsets into the ring array where each geometry starts
    pub(crate) geom_offsets: OffsetBuffer<i32>,

    /// Offsets into the coordinate array where each linestring starts
    pub(crate) ring_offsets: OffsetBuffer<i32>,
}

impl MultiLineStringArray {
    /// Create a new MultiLineStringArray from parts
    ///
    /// # Errors
    ///
    /// - if the largest ring offset exceeds the number of coordinates
    /// - if the largest geometry offset exceeds the number of linestrings
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

    /// Offsets from each linestring to its coordinates. These delimit the rendered paths.
    pub fn ring_offsets(&self) -> &OffsetBuffer<i32> {
        &self.ring_offsets
    }

    /// Offsets from each feature directly to its coordinates.
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

impl TryFrom<&dyn Array> for MultiLineStringArray {
    type Error = GeoArrowError;

    fn try_from(value: &dyn Array) -> Result<Self> {
        let (geom_offsets, linestrings) = list_parts(value)?;
        let (ring_offsets, vertices) = list_parts(linestrings.as_ref())?;
        let coords = CoordBuffer::from_arrow(vertices.as_ref())?;
        Self::try_new(coords, geom_offsets, ring_offsets)
    }
}
