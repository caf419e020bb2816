#[allow(clippy::module_inception)]
pub mod chunked_array;

pub use chunked_array::{chunk_offsets, ChunkedArray, ChunkedGeometryArray};
