//! Geometry kinds and structural classification of nested Arrow types.

use std::fmt::Display;

use arrow_schema::{DataType, Field};

use crate::error::{GeoArrowError, Result};

/// Field metadata key carrying the GeoArrow extension name.
pub const EXTENSION_NAME_KEY: &str = "ARROW:extension:name";

/// The closed set of geometry kinds handled by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
}

impl GeometryKind {
    /// The GeoArrow extension name for this kind.
    pub fn extension_name(&self) -> &'static str {
        match self {
            Self::Point => "geoarrow.point",
            Self::LineString => "geoarrow.linestring",
            Self::Polygon => "geoarrow.polygon",
            Self::MultiPoint => "geoarrow.multipoint",
            Self::MultiLineString => "geoarrow.multilinestring",
            Self::MultiPolygon => "geoarrow.multipolygon",
        }
    }

    pub fn from_extension_name(name: &str) -> Option<Self> {
        let kind = match name {
            "geoarrow.point" => Self::Point,
            "geoarrow.linestring" => Self::LineString,
            "geoarrow.polygon" => Self::Polygon,
            "geoarrow.multipoint" => Self::MultiPoint,
            "geoarrow.multilinestring" => Self::MultiLineString,
            "geoarrow.multipolygon" => Self::MultiPolygon,
            _ => return None,
        };
        Some(kind)
    }

    /// Number of list levels wrapping the coordinate tuple.
    pub fn nesting_depth(&self) -> usize {
        match self {
            Self::Point => 0,
            Self::LineString | Self::MultiPoint => 1,
            Self::Polygon | Self::MultiLineString => 2,
            Self::MultiPolygon => 3,
        }
    }

    /// The kind inferred from nesting depth alone.
    ///
    /// MultiPoint and MultiLineString share their layout with LineString and Polygon, so they are
    /// never returned here.
    fn from_depth(depth: usize) -> Option<Self> {
        match depth {
            0 => Some(Self::Point),
            1 => Some(Self::LineString),
            2 => Some(Self::Polygon),
            3 => Some(Self::MultiPolygon),
            _ => None,
        }
    }
}

impl Display for GeometryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Point => "Point",
            Self::LineString => "LineString",
            Self::Polygon => "Polygon",
            Self::MultiPoint => "MultiPoint",
            Self::MultiLineString => "MultiLineString",
            Self::MultiPolygon => "MultiPolygon",
        };
        write!(f, "{name}")
    }
}

/// The dimension of the coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Two-dimensional.
    XY,

    /// Three-dimensional.
    XYZ,
}

impl Dimension {
    /// Returns the number of dimensions.
    pub fn size(&self) -> usize {
        match self {
            Dimension::XY => 2,
            Dimension::XYZ => 3,
        }
    }
}

impl TryFrom<i32> for Dimension {
    type Error = GeoArrowError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            2 => Ok(Dimension::XY),
            3 => Ok(Dimension::XYZ),
            _ => Err(GeoArrowError::TypeMismatch {
                expected: "coordinate tuple of width 2 or 3".to_string(),
                found: format!("coordinate tuple of width {value}"),
            }),
        }
    }
}

/// Parse the innermost coordinate tuple type.
fn parse_point(data_type: &DataType) -> Result<Dimension> {
    match data_type {
        DataType::FixedSizeList(inner_field, list_size) => match inner_field.data_type() {
            DataType::Float32 | DataType::Float64 => Dimension::try_from(*list_size),
            dt => Err(GeoArrowError::TypeMismatch {
                expected: "floating-point coordinates".to_string(),
                found: format!("coordinates of type {dt}"),
            }),
        },
        DataType::Struct(fields) => Err(GeoArrowError::UnsupportedCoordinateEncoding(format!(
            "separated coordinates with fields {:?}",
            fields.iter().map(|f| f.name()).collect::<Vec<_>>()
        ))),
        dt => Err(GeoArrowError::TypeMismatch {
            expected: "fixed-size list coordinate tuple".to_string(),
            found: dt.to_string(),
        }),
    }
}

/// Strip list levels until the coordinate tuple is reached, returning the depth and dimension.
fn parse_nested(data_type: &DataType) -> Result<(usize, Dimension)> {
    let mut depth = 0;
    let mut current = data_type;
    while let DataType::List(inner) | DataType::LargeList(inner) = current {
        depth += 1;
        current = inner.data_type();
    }
    let dim = parse_point(current)?;
    Ok((depth, dim))
}

/// Classify a nested Arrow type by structure alone.
///
/// A list of points is reported as [`GeometryKind::LineString`] and a list of lists of points as
/// [`GeometryKind::Polygon`]; use [`classify_field`] to honor a declared multi kind.
pub fn classify(data_type: &DataType) -> Result<(GeometryKind, Dimension)> {
    let (depth, dim) = parse_nested(data_type)?;
    let kind = GeometryKind::from_depth(depth).ok_or_else(|| GeoArrowError::TypeMismatch {
        expected: "nesting depth of at most 3".to_string(),
        found: format!("nesting depth {depth} ({data_type})"),
    })?;
    Ok((kind, dim))
}

/// Validate that `data_type` has the layout of `expected`.
pub fn validate_kind(data_type: &DataType, expected: GeometryKind) -> Result<Dimension> {
    let (depth, dim) = parse_nested(data_type)?;
    if depth != expected.nesting_depth() {
        return Err(GeoArrowError::TypeMismatch {
            expected: format!(
                "{expected} with nesting depth {}",
                expected.nesting_depth()
            ),
            found: format!("nesting depth {depth} ({data_type})"),
        });
    }
    Ok(dim)
}

/// The declared extension kind of a field, if it carries a known GeoArrow extension name.
pub fn extension_kind(field: &Field) -> Option<GeometryKind> {
    field
        .metadata()
        .get(EXTENSION_NAME_KEY)
        .and_then(|name| GeometryKind::from_extension_name(name))
}

/// Classify a field, resolving MultiPoint and MultiLineString from the extension name.
///
/// If the field declares an extension kind its layout must match; otherwise the kind is inferred
/// structurally with [`classify`].
pub fn classify_field(field: &Field) -> Result<(GeometryKind, Dimension)> {
    match extension_kind(field) {
        Some(kind) => Ok((kind, validate_kind(field.data_type(), kind)?)),
        None => classify(field.data_type()),
    }
}

/// Build a [`Field`] with the layout and extension name of `kind`.
pub fn geometry_field(name: &str, kind: GeometryKind, dim: Dimension, nullable: bool) -> Field {
    let coord_field = Field::new(
        match dim {
            Dimension::XY => "xy",
            Dimension::XYZ => "xyz",
        },
        DataType::Float64,
        false,
    );
    let mut data_type = DataType::FixedSizeList(coord_field.into(), dim.size() as i32);
    let names = ["vertices", "rings", "polygons"];
    for level in 0..kind.nesting_depth() {
        data_type = DataType::List(Field::new(names[level], data_type, false).into());
    }
    let metadata = [(
        EXTENSION_NAME_KEY.to_string(),
        kind.extension_name().to_string(),
    )]
    .into_iter()
    .collect();
    Field::new(name, data_type, nullable).with_metadata(metadata)
}

#[cfg(test)]
mod test {
    use super::*;

    fn coord_type(width: i32) -> DataType {
        DataType::FixedSizeList(Field::new("xy", DataType::Float64, false).into(), width)
    }

    fn list_of(data_type: DataType) -> DataType {
        DataType::List(Field::new("item", data_type, false).into())
    }

    #[test]
    fn classify_by_depth() {
        let point = coord_type(2);
        assert_eq!(
            classify(&point).unwrap(),
            (GeometryKind::Point, Dimension::XY)
        );
        let linestring = list_of(point.clone());
        assert_eq!(classify(&linestring).unwrap().0, GeometryKind::LineString);
        let polygon = list_of(linestring.clone());
        assert_eq!(classify(&polygon).unwrap().0, GeometryKind::Polygon);
        let multipolygon = list_of(polygon.clone());
        assert_eq!(classify(&multipolygon).unwrap().0, GeometryKind::MultiPolygon);
    }

    #[test]
    fn classify_large_list_and_xyz() {
        let point = coord_type(3);
        let linestring = DataType::LargeList(Field::new("vertices", point, false).into());
        assert_eq!(
            classify(&linestring).unwrap(),
            (GeometryKind::LineString, Dimension::XYZ)
        );
    }

    #[test]
    fn reject_too_deep() {
        let dt = list_of(list_of(list_of(list_of(coord_type(2)))));
        assert!(matches!(
            classify(&dt),
            Err(GeoArrowError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn reject_bad_tuple() {
        assert!(matches!(
            classify(&coord_type(4)),
            Err(GeoArrowError::TypeMismatch { .. })
        ));
        let ints = DataType::FixedSizeList(Field::new("xy", DataType::Int32, false).into(), 2);
        assert!(matches!(
            classify(&ints),
            Err(GeoArrowError::TypeMismatch { .. })
        ));
        assert!(matches!(
            classify(&DataType::Utf8),
            Err(GeoArrowError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn reject_separated_coords() {
        let separated = DataType::Struct(
            vec![
                Field::new("x", DataType::Float64, false),
                Field::new("y", DataType::Float64, false),
            ]
            .into(),
        );
        assert!(matches!(
            classify(&list_of(separated)),
            Err(GeoArrowError::UnsupportedCoordinateEncoding(_))
        ));
    }

    #[test]
    fn extension_name_resolves_multi_kinds() {
        let field = geometry_field("geometry", GeometryKind::MultiPoint, Dimension::XY, true);
        assert_eq!(
            classify_field(&field).unwrap(),
            (GeometryKind::MultiPoint, Dimension::XY)
        );
        let field = geometry_field(
            "geometry",
            GeometryKind::MultiLineString,
            Dimension::XYZ,
            true,
        );
        assert_eq!(
            classify_field(&field).unwrap(),
            (GeometryKind::MultiLineString, Dimension::XYZ)
        );
    }

    #[test]
    fn extension_name_must_match_layout() {
        let field = geometry_field("geometry", GeometryKind::Polygon, Dimension::XY, true)
            .with_metadata(
                [(
                    EXTENSION_NAME_KEY.to_string(),
                    "geoarrow.multipolygon".to_string(),
                )]
                .into_iter()
                .collect(),
            );
        let err = classify_field(&field).unwrap_err();
        assert!(matches!(err, GeoArrowError::TypeMismatch { .. }));
    }
}
