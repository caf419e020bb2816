use arrow_array::Array;
use arrow_schema::Field;

use crate::array::*;
use crate::datatypes::{classify_field, validate_kind, GeometryKind};
use crate::error::Result;

/// One chunk of any supported geometry kind.
#[derive(Debug, Clone)]
pub enum GeometryArray {
    Point(PointArray),
    LineString(LineStringArray),
    Polygon(PolygonArray),
    MultiPoint(MultiPointArray),
    MultiLineString(MultiLineStringArray),
    MultiPolygon(MultiPolygonArray),
}

impl GeometryArray {
    /// Interpret `array` as geometries of `kind`.
    ///
    /// When `validate` is false the nested type is not checked against `kind` up front; a
    /// mismatch then surfaces from the first list level that fails to downcast.
    pub fn try_new(array: &dyn Array, kind: GeometryKind, validate: bool) -> Result<Self> {
        if validate {
            validate_kind(array.data_type(), kind)?;
        }
        let geometry = match kind {
            GeometryKind::Point => Self::Point(array.try_into()?),
            GeometryKind::LineString => Self::LineString(array.try_into()?),
            GeometryKind::Polygon => Self::Polygon(array.try_into()?),
            GeometryKind::MultiPoint => Self::MultiPoint(array.try_into()?),
            GeometryKind::MultiLineString => Self::MultiLineString(array.try_into()?),
            GeometryKind::MultiPolygon => Self::MultiPolygon(array.try_into()?),
        };
        Ok(geometry)
    }

    /// Interpret `array` using the kind declared by or inferred from `field`.
    pub fn from_arrow(array: &dyn Array, field: &Field) -> Result<Self> {
        let (kind, _dim) = classify_field(field)?;
        Self::try_new(array, kind, true)
    }

    pub fn kind(&self) -> GeometryKind {
        match self {
            Self::Point(_) => GeometryKind::Point,
            Self::LineString(_) => GeometryKind::LineString,
            Self::Polygon(_) => GeometryKind::Polygon,
            Self::MultiPoint(_) => GeometryKind::MultiPoint,
            Self::MultiLineString(_) => GeometryKind::MultiLineString,
            Self::MultiPolygon(_) => GeometryKind::MultiPolygon,
        }
    }

    pub fn coords(&self) -> &CoordBuffer {
        match self {
            Self::Point(arr) => arr.coords(),
            Self::LineString(arr) => arr.coords(),
            Self::Polygon(arr) => arr.coords(),
            Self::MultiPoint(arr) => arr.coords(),
            Self::MultiLineString(arr) => arr.coords(),
            Self::MultiPolygon(arr) => arr.coords(),
        }
    }

    /// Returns the number of top-level geometries (rows) in this chunk.
    pub fn len(&self) -> usize {
        match self {
            Self::Point(arr) => arr.len(),
            Self::LineString(arr) => arr.len(),
            Self::Polygon(arr) => arr.len(),
            Self::MultiPoint(arr) => arr.len(),
            Self::MultiLineString(arr) => arr.len(),
            Self::MultiPolygon(arr) => arr.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
