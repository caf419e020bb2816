//! Resolution of attribute accessors into per-chunk render buffers.
//!
//! An attribute is either a constant, one value per geometry, or one value per vertex. Per
//! geometry values are broadcast over each geometry's coordinates when the rendered primitive is
//! finer than the row.

use arrow_array::cast::AsArray;
use arrow_array::{Array, ArrayRef};
use arrow_buffer::OffsetBuffer;
use arrow_schema::DataType;
use indexmap::IndexMap;

use crate::algorithm::expand_array;
use crate::chunked_array::{ChunkedArray, ChunkedGeometryArray};
use crate::error::{GeoArrowError, Result};

/// How the values of one attribute are supplied.
#[derive(Debug, Clone)]
pub enum Accessor {
    /// A single value applied to every geometry, stored as a length-1 array.
    Constant(ArrayRef),

    /// One value per geometry, chunked like the geometry column.
    PerGeometry(ChunkedArray<ArrayRef>),

    /// One value per coordinate, chunked like the geometry column.
    PerVertex(ChunkedArray<ArrayRef>),
}

impl Accessor {
    /// Create a constant accessor from a length-1 array.
    pub fn constant(value: ArrayRef) -> Result<Self> {
        if value.len() != 1 {
            return Err(GeoArrowError::General(format!(
                "constant accessor must hold exactly one value, found {}",
                value.len()
            )));
        }
        Ok(Self::Constant(value))
    }

    pub fn per_geometry(chunks: Vec<ArrayRef>) -> Self {
        Self::PerGeometry(ChunkedArray::new(chunks))
    }

    pub fn per_vertex(chunks: Vec<ArrayRef>) -> Self {
        Self::PerVertex(ChunkedArray::new(chunks))
    }

    fn data_types(&self) -> Vec<&DataType> {
        match self {
            Self::Constant(value) => vec![value.data_type()],
            Self::PerGeometry(chunked) | Self::PerVertex(chunked) => chunked
                .chunks()
                .iter()
                .map(|chunk| chunk.data_type())
                .collect(),
        }
    }
}

/// What an attribute's values mean to the consumer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AttributeKind {
    /// Plain numeric channels.
    #[default]
    Numeric,

    /// RGB or RGBA `u8` channels.
    Color,
}

/// A named attribute of a layer: its kind and, if supplied, its accessor.
#[derive(Debug, Clone, Default)]
pub struct Attribute {
    pub kind: AttributeKind,
    pub accessor: Option<Accessor>,
}

/// The attributes of a layer, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Accessors {
    attributes: IndexMap<String, Attribute>,
}

impl Accessors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a numeric attribute. `None` leaves the consumer's default in place.
    pub fn with_numeric(mut self, name: impl Into<String>, accessor: Option<Accessor>) -> Self {
        self.attributes.insert(
            name.into(),
            Attribute {
                kind: AttributeKind::Numeric,
                accessor,
            },
        );
        self
    }

    /// Declare a color attribute. `None` leaves the consumer's default in place.
    pub fn with_color(mut self, name: impl Into<String>, accessor: Option<Accessor>) -> Self {
        self.attributes.insert(
            name.into(),
            Attribute {
                kind: AttributeKind::Color,
                accessor,
            },
        );
        self
    }

    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Attribute)> {
        self.attributes.iter()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

/// A flat buffer handed to the consumer.
#[derive(Debug, Clone)]
pub struct AttributeBuffer {
    /// Flat primitive values, `size` per element.
    pub values: ArrayRef,

    /// Number of channels per element.
    pub size: usize,

    /// Whether integer channels are already normalized, so the consumer must not rescale them.
    pub normalized: bool,
}

impl AttributeBuffer {
    /// Flatten a primitive or `FixedSizeList` array into values tagged with a channel count.
    pub fn new(array: ArrayRef, kind: AttributeKind) -> Result<Self> {
        let (values, size) = match array.data_type() {
            DataType::FixedSizeList(_, list_size) => {
                let size = usize::try_from(*list_size).map_err(|_| GeoArrowError::Overflow)?;
                let list = array.as_fixed_size_list();
                let values = list
                    .values()
                    .slice(list.offset() * size, list.len() * size);
                (values, size)
            }
            _ => (array, 1),
        };
        let normalized = kind == AttributeKind::Color && values.data_type() == &DataType::UInt8;
        Ok(Self {
            values,
            size,
            normalized,
        })
    }

    /// Number of elements (vertices or geometries) in this buffer.
    pub fn len(&self) -> usize {
        self.values.len() / self.size
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An accessor resolved for one chunk.
#[derive(Debug, Clone)]
pub enum ResolvedAccessor {
    /// Assigned directly; no per-chunk buffer.
    Constant(ArrayRef),

    /// A buffer with one element per vertex, or per geometry where no broadcast was needed.
    Buffer(AttributeBuffer),
}

/// Resolve one attribute for chunk `chunk_index`.
///
/// Returns `None` if the attribute has no accessor. Per-geometry values are broadcast with
/// `resolved_offsets` when given and used as-is otherwise.
pub fn resolve_accessor(
    name: &str,
    attribute: &Attribute,
    chunk_index: usize,
    resolved_offsets: Option<&OffsetBuffer<i32>>,
) -> Result<Option<ResolvedAccessor>> {
    let Some(accessor) = &attribute.accessor else {
        return Ok(None);
    };

    let resolved = match accessor {
        Accessor::Constant(value) => ResolvedAccessor::Constant(value.clone()),
        Accessor::PerGeometry(chunked) => {
            let chunk = chunk_of(name, chunked, chunk_index)?;
            let values = match resolved_offsets {
                Some(offsets) => expand_array(chunk.as_ref(), offsets)?,
                None => chunk.clone(),
            };
            ResolvedAccessor::Buffer(AttributeBuffer::new(values, attribute.kind)?)
        }
        Accessor::PerVertex(chunked) => {
            let chunk = chunk_of(name, chunked, chunk_index)?;
            ResolvedAccessor::Buffer(AttributeBuffer::new(chunk.clone(), attribute.kind)?)
        }
    };
    tracing::trace!(attribute = name, chunk = chunk_index, "resolved accessor");
    Ok(Some(resolved))
}

fn chunk_of<'a>(
    name: &str,
    chunked: &'a ChunkedArray<ArrayRef>,
    chunk_index: usize,
) -> Result<&'a ArrayRef> {
    chunked
        .chunks()
        .get(chunk_index)
        .ok_or_else(|| GeoArrowError::LengthMismatch {
            attribute: name.to_string(),
            chunk: chunk_index,
            expected: chunk_index + 1,
            found: chunked.num_chunks(),
        })
}

/// Check that a color attribute has 3 or 4 `u8` channels.
pub fn validate_color_type(name: &str, data_type: &DataType) -> Result<()> {
    let invalid = |reason: String| GeoArrowError::InvalidColorEncoding {
        attribute: name.to_string(),
        reason,
    };
    match data_type {
        DataType::FixedSizeList(field, list_size) => {
            if !matches!(list_size, 3 | 4) {
                return Err(invalid(format!(
                    "expected 3 or 4 channels, found {list_size}"
                )));
            }
            if field.data_type() != &DataType::UInt8 {
                return Err(invalid(format!(
                    "expected UInt8 channels, found {}",
                    field.data_type()
                )));
            }
            Ok(())
        }
        dt => Err(invalid(format!(
            "expected a fixed-size list of UInt8, found {dt}"
        ))),
    }
}

/// Validate every accessor against the geometry column before any buffer is built.
///
/// # Errors
///
/// - [`GeoArrowError::LengthMismatch`] if a chunked accessor has a different number of chunks, or
///   a chunk of a different length, than the geometry column
/// - [`GeoArrowError::InvalidColorEncoding`] if a color accessor is not 3 or 4 `u8` channels
pub fn validate_accessors(accessors: &Accessors, geometry: &ChunkedGeometryArray) -> Result<()> {
    for (name, attribute) in accessors.iter() {
        let Some(accessor) = &attribute.accessor else {
            continue;
        };

        if attribute.kind == AttributeKind::Color {
            for data_type in accessor.data_types() {
                validate_color_type(name, data_type)?;
            }
        }

        let (chunked, per_vertex) = match accessor {
            Accessor::Constant(_) => continue,
            Accessor::PerGeometry(chunked) => (chunked, false),
            Accessor::PerVertex(chunked) => (chunked, true),
        };

        if chunked.num_chunks() != geometry.num_chunks() {
            return Err(GeoArrowError::LengthMismatch {
                attribute: name.clone(),
                chunk: chunked.num_chunks().min(geometry.num_chunks()),
                expected: geometry.num_chunks(),
                found: chunked.num_chunks(),
            });
        }

        for (chunk_index, (values, geometry_chunk)) in chunked
            .chunks()
            .iter()
            .zip(geometry.chunks())
            .enumerate()
        {
            let expected = if per_vertex {
                geometry_chunk.coords().len()
            } else {
                geometry_chunk.len()
            };
            if values.len() != expected {
                return Err(GeoArrowError::LengthMismatch {
                    attribute: name.clone(),
                    chunk: chunk_index,
                    expected,
                    found: values.len(),
                });
            }
        }
    }
    Ok(())
}
