//! Defines [`GeoArrowError`], representing all errors returned by this crate.

use std::fmt::Debug;

use arrow_schema::ArrowError;
use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeoArrowError {
    /// [ArrowError]
    #[error(transparent)]
    Arrow(#[from] ArrowError),

    /// The nested type of a geometry or attribute column does not match the expected kind.
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// An attribute's per-chunk length disagrees with the geometry column.
    #[error(
        "Length mismatch for attribute `{attribute}` in chunk {chunk}: expected {expected}, found {found}"
    )]
    LengthMismatch {
        attribute: String,
        chunk: usize,
        expected: usize,
        found: usize,
    },

    /// A color attribute is not 3 or 4 channels of `u8`.
    #[error("Invalid color encoding for attribute `{attribute}`: {reason}")]
    InvalidColorEncoding { attribute: String, reason: String },

    /// No column matches the requested geometry kind or name.
    #[error("Missing geometry column: {0}")]
    MissingGeometryColumn(String),

    /// Coordinates are stored in a layout that is not converted here.
    #[error("Unsupported coordinate encoding: {0}")]
    UnsupportedCoordinateEncoding(String),

    /// Invalid data not conforming to GeoArrow specification
    #[error("Data not conforming to GeoArrow specification: {0}")]
    InvalidGeoArrow(String),

    /// General error.
    #[error("General error: {0}")]
    General(String),

    /// Whenever pushing to a container fails because it does not support more entries.
    ///
    /// The solution is usually to use a higher-capacity container-backing type.
    #[error("Overflow: data does not fit in the target index type.")]
    Overflow,
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeoArrowError>;

impl From<GeoArrowError> for ArrowError {
    /// Many APIs where we pass in a callback into the Arrow crate require the returned error type
    /// to be ArrowError, so implementing this `From` makes the conversion less verbose there.
    fn from(err: GeoArrowError) -> Self {
        match err {
            GeoArrowError::Arrow(err) => err,
            _ => ArrowError::ExternalError(Box::new(err)),
        }
    }
}
