use arrow_array::cast::AsArray;
use arrow_array::{Array, ArrayRef};
use arrow_schema::DataType;

use crate::datatypes::Dimension;
use crate::error::{GeoArrowError, Result};

/// An array of coordinates stored interleaved (XYXYXY or XYZXYZ) in a single buffer.
///
/// The values array is kept as the storage provider supplied it, so it is either a
/// `Float64Array` or a `Float32Array`.
#[derive(Debug, Clone)]
pub struct CoordBuffer {
    values: ArrayRef,
    dim: Dimension,
}

impl CoordBuffer {
    /// Construct a new CoordBuffer
    ///
    /// # Errors
    ///
    /// - if the values are not floating point
    /// - if the number of values is not a multiple of the dimension
    pub fn try_new(values: ArrayRef, dim: Dimension) -> Result<Self> {
        if !matches!(values.data_type(), DataType::Float32 | DataType::Float64) {
            return Err(GeoArrowError::TypeMismatch {
                expected: "floating-point coordinates".to_string(),
                found: format!("coordinates of type {}", values.data_type()),
            });
        }
        if values.len() % dim.size() != 0 {
            return Err(GeoArrowError::InvalidGeoArrow(format!(
                "{} coordinate values is not a multiple of dimension {}",
                values.len(),
                dim.size()
            )));
        }
        Ok(Self { values, dim })
    }

    /// Extract the interleaved values from a `FixedSizeList` coordinate array.
    pub fn from_arrow(array: &dyn Array) -> Result<Self> {
        match array.data_type() {
            DataType::FixedSizeList(_, list_size) => {
                let dim = Dimension::try_from(*list_size)?;
                let coords = array.as_fixed_size_list();
                let values = coords
                    .values()
                    .slice(coords.offset() * dim.size(), coords.len() * dim.size());
                Self::try_new(values, dim)
            }
            DataType::Struct(_) => Err(GeoArrowError::UnsupportedCoordinateEncoding(
                "separated coordinates must be interleaved before rendering".to_string(),
            )),
            dt => Err(GeoArrowError::TypeMismatch {
                expected: "fixed-size list coordinate tuple".to_string(),
                found: dt.to_string(),
            }),
        }
    }

    /// The flat values, `dim.size()` per coordinate.
    pub fn values(&self) -> &ArrayRef {
        &self.values
    }

    pub fn dim(&self) -> Dimension {
        self.dim
    }

    /// The number of coordinates.
    pub fn len(&self) -> usize {
        self.values.len() / self.dim.size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use arrow_array::{FixedSizeListArray, Float32Array, Float64Array, Int32Array};
    use arrow_schema::Field;

    use super::*;

    #[test]
    fn from_fixed_size_list() {
        let values = Float32Array::from(vec![0., 1., 2., 3., 4., 5.]);
        let field = Arc::new(Field::new("xyz", DataType::Float32, false));
        let array = FixedSizeListArray::new(field, 3, Arc::new(values), None);
        let coords = CoordBuffer::from_arrow(&array).unwrap();
        assert_eq!(coords.dim(), Dimension::XYZ);
        assert_eq!(coords.len(), 2);
        assert_eq!(coords.values().data_type(), &DataType::Float32);
    }

    #[test]
    fn reject_ragged_values() {
        let values = Arc::new(Float64Array::from(vec![0., 1., 2.]));
        assert!(matches!(
            CoordBuffer::try_new(values, Dimension::XY),
            Err(GeoArrowError::InvalidGeoArrow(_))
        ));
    }

    #[test]
    fn reject_integer_values() {
        let values = Arc::new(Int32Array::from(vec![0, 1]));
        assert!(matches!(
            CoordBuffer::try_new(values, Dimension::XY),
            Err(GeoArrowError::TypeMismatch { .. })
        ));
    }
}
