//! Assembly of the flat per-chunk buffer set handed to a renderer.

mod chunk;
mod pick;

pub use chunk::{prepare_chunk, prepare_chunks, RenderChunk, RenderOptions};
pub use pick::global_row_index;
