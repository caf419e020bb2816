use arrow_array::Array;

use crate::array::CoordBuffer;
use crate::error::{GeoArrowError, Result};

/// An immutable chunk of Point geometries: one coordinate per row.
#[derive(Debug, Clone)]
pub struct PointArray {
    pub(crate) coords: CoordBuffer,
}

impl PointArray {
    pub fn new(coords: CoordBuffer) -> Self {
        Self { coords }
    }

    /// Access the underlying coordinate buffer
    pub fn coords(&self) -> &CoordBuffer {
        &self.coords
    }

    /// Returns the number of geometries in this array
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TryFrom<&dyn Array> for PointArray {
    type Error = GeoArrowError;

    fn try_from(value: &dyn Array) -> Result<Self> {
        Ok(Self::new(CoordBuffer::from_arrow(value)?))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::datatypes::Dimension;
    use crate::test::point;

    #[test]
    fn from_arrow() {
        let arr = point::point_array();
        let points = PointArray::try_from(arr.as_ref()).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points.coords().dim(), Dimension::XY);
    }
}
