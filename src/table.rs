//! Locating the geometry column of a table of record batches.

use arrow_array::{ArrayRef, RecordBatch};
use arrow_schema::Schema;

use crate::accessor::Accessor;
use crate::chunked_array::ChunkedGeometryArray;
use crate::datatypes::{classify, extension_kind, GeometryKind};
use crate::error::{GeoArrowError, Result};

/// How to pick the geometry column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryColumn<'a> {
    /// The first column declaring this kind, or failing that the first untagged column whose
    /// layout matches it.
    Kind(GeometryKind),

    /// The column with this name.
    Name(&'a str),
}

/// Find the index of the geometry column in `schema`.
pub fn find_geometry_column(schema: &Schema, selector: GeometryColumn) -> Result<usize> {
    match selector {
        GeometryColumn::Name(name) => schema
            .index_of(name)
            .map_err(|_| GeoArrowError::MissingGeometryColumn(format!("no column named `{name}`"))),
        GeometryColumn::Kind(kind) => {
            let fields = schema.fields();
            fields
                .iter()
                .position(|field| extension_kind(field) == Some(kind))
                .or_else(|| {
                    fields.iter().position(|field| {
                        extension_kind(field).is_none()
                            && classify(field.data_type()).is_ok_and(|(found, _)| found == kind)
                    })
                })
                .ok_or_else(|| {
                    GeoArrowError::MissingGeometryColumn(format!("no {kind} column"))
                })
        }
    }
}

/// Collect the geometry column across `batches`, one chunk per batch.
pub fn geometry_column(
    schema: &Schema,
    batches: &[RecordBatch],
    selector: GeometryColumn,
    validate: bool,
) -> Result<ChunkedGeometryArray> {
    let index = find_geometry_column(schema, selector)?;
    let field = schema.field(index);
    let chunks: Vec<ArrayRef> = batches
        .iter()
        .map(|batch| batch.column(index).clone())
        .collect();
    ChunkedGeometryArray::from_arrow_chunks(&chunks, field, validate)
}

/// A per-geometry accessor reading column `name` of every batch.
pub fn column_accessor(schema: &Schema, batches: &[RecordBatch], name: &str) -> Result<Accessor> {
    let index = schema.index_of(name)?;
    Ok(Accessor::per_geometry(
        batches
            .iter()
            .map(|batch| batch.column(index).clone())
            .collect(),
    ))
}
