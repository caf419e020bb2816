use std::sync::Arc;

use arrow_buffer::OffsetBuffer;
use indexmap::IndexMap;

use crate::accessor::{
    resolve_accessor, validate_accessors, Accessors, AttributeBuffer, ResolvedAccessor,
};
use crate::algorithm::{encode_picking_colors, invert_offsets, InvertedOffsets, PickingColor};
use crate::array::GeometryArray;
use crate::chunked_array::ChunkedGeometryArray;
use crate::datatypes::GeometryKind;
use crate::error::Result;
use crate::render::global_row_index;

/// Options controlling buffer preparation.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Run the whole-column accessor checks before building any buffer.
    ///
    /// Disable only for inputs already validated upstream. Without validation a malformed
    /// accessor yields unspecified buffer contents or an error from the chunk it is used in.
    pub validate: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { validate: true }
    }
}

/// The flat buffers for one chunk of a geometry column.
#[derive(Debug, Clone)]
pub struct RenderChunk {
    /// Position of this chunk in the column.
    pub chunk_index: usize,

    /// Number of rows in all preceding chunks.
    pub chunk_offset: usize,

    pub kind: GeometryKind,

    /// Number of rows (features) in this chunk.
    pub num_rows: usize,

    /// Interleaved coordinates, `size` values per vertex.
    pub positions: AttributeBuffer,

    /// Vertex offsets where each rendered primitive (path or polygon) starts.
    ///
    /// `None` for point kinds, where every vertex is its own primitive.
    pub start_indices: Option<OffsetBuffer<i32>>,

    /// Resolved attributes, in declaration order. Attributes without an accessor are absent.
    pub attributes: IndexMap<String, ResolvedAccessor>,

    /// For multi kinds, the feature owning each rendered primitive.
    pub inverted_offsets: Option<InvertedOffsets>,

    /// For multi kinds, an RGB color per vertex identifying its feature.
    pub picking_colors: Option<AttributeBuffer>,
}

impl RenderChunk {
    /// The column-wide row index of a rendered primitive of this chunk.
    pub fn row_index(&self, primitive_index: usize) -> Option<usize> {
        global_row_index(
            primitive_index,
            self.inverted_offsets.as_ref(),
            self.chunk_offset,
            self.num_rows,
        )
    }
}

/// Which offsets each stage of preparation uses for one geometry kind.
struct ChunkLayout {
    start_indices: Option<OffsetBuffer<i32>>,
    /// Feature to vertex offsets used for attribute broadcast and picking colors.
    feature_offsets: Option<OffsetBuffer<i32>>,
    /// Feature offsets over rendered primitives, for multi kinds.
    primitive_offsets: Option<OffsetBuffer<i32>>,
}

impl ChunkLayout {
    fn new(chunk: &GeometryArray) -> Result<Self> {
        let layout = match chunk {
            GeometryArray::Point(_) => Self {
                start_indices: None,
                feature_offsets: None,
                primitive_offsets: None,
            },
            GeometryArray::LineString(arr) => Self {
                start_indices: Some(arr.geom_offsets().clone()),
                feature_offsets: Some(arr.geom_to_coord_offsets().clone()),
                primitive_offsets: None,
            },
            GeometryArray::Polygon(arr) => {
                let geom_to_coord = arr.geom_to_coord_offsets()?;
                Self {
                    start_indices: Some(geom_to_coord.clone()),
                    feature_offsets: Some(geom_to_coord),
                    primitive_offsets: None,
                }
            }
            GeometryArray::MultiPoint(arr) => Self {
                start_indices: None,
                feature_offsets: Some(arr.geom_to_coord_offsets().clone()),
                primitive_offsets: Some(arr.geom_offsets().clone()),
            },
            GeometryArray::MultiLineString(arr) => Self {
                start_indices: Some(arr.ring_offsets().clone()),
                feature_offsets: Some(arr.geom_to_coord_offsets()?),
                primitive_offsets: Some(arr.geom_offsets().clone()),
            },
            GeometryArray::MultiPolygon(arr) => Self {
                start_indices: Some(arr.polygon_to_coord_offsets()?),
                feature_offsets: Some(arr.geom_to_coord_offsets()?),
                primitive_offsets: Some(arr.geom_offsets().clone()),
            },
        };
        Ok(layout)
    }
}

/// Build the render buffers of one chunk.
///
/// `chunk_offset` is the number of rows in the preceding chunks. `color_of` encodes a chunk-local
/// feature index as a picking color and is called at most once per feature.
pub fn prepare_chunk<F: Fn(usize) -> PickingColor>(
    chunk_index: usize,
    chunk: &GeometryArray,
    chunk_offset: usize,
    accessors: &Accessors,
    color_of: F,
) -> Result<RenderChunk> {
    let layout = ChunkLayout::new(chunk)?;

    let mut attributes = IndexMap::with_capacity(accessors.len());
    for (name, attribute) in accessors.iter() {
        let resolved = resolve_accessor(
            name,
            attribute,
            chunk_index,
            layout.feature_offsets.as_ref(),
        )?;
        if let Some(resolved) = resolved {
            attributes.insert(name.clone(), resolved);
        }
    }

    let (inverted_offsets, picking_colors) =
        match (&layout.primitive_offsets, &layout.feature_offsets) {
            (Some(primitive_offsets), Some(feature_offsets)) => {
                let inverted = invert_offsets(primitive_offsets)?;
                let colors = AttributeBuffer {
                    values: Arc::new(encode_picking_colors(feature_offsets, color_of)?),
                    size: 3,
                    normalized: true,
                };
                (Some(inverted), Some(colors))
            }
            _ => (None, None),
        };

    let coords = chunk.coords();
    let positions = AttributeBuffer {
        values: coords.values().clone(),
        size: coords.dim().size(),
        normalized: false,
    };

    tracing::debug!(
        chunk = chunk_index,
        kind = %chunk.kind(),
        rows = chunk.len(),
        vertices = coords.len(),
        attributes = attributes.len(),
        "prepared render chunk"
    );

    Ok(RenderChunk {
        chunk_index,
        chunk_offset,
        kind: chunk.kind(),
        num_rows: chunk.len(),
        positions,
        start_indices: layout.start_indices,
        attributes,
        inverted_offsets,
        picking_colors,
    })
}

/// Build the render buffers of every chunk of a geometry column.
///
/// With [`RenderOptions::validate`] set, every accessor is checked against the geometry column
/// before any buffer is built. Chunks are independent; with the `rayon` feature they are prepared
/// in parallel. The output is in chunk order.
pub fn prepare_chunks<F: Fn(usize) -> PickingColor + Sync + Send>(
    geometry: &ChunkedGeometryArray,
    accessors: &Accessors,
    options: RenderOptions,
    color_of: F,
) -> Result<Vec<RenderChunk>> {
    if options.validate {
        validate_accessors(accessors, geometry)?;
    }

    let chunk_offsets = geometry.chunk_offsets();
    geometry.try_map_indexed(|chunk_index, chunk| {
        prepare_chunk(
            chunk_index,
            chunk,
            chunk_offsets[chunk_index],
            accessors,
            &color_of,
        )
    })
}
