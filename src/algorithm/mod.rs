//! Offset resolution, attribute broadcast, offset inversion and picking colors.
//!
//! Every function here is a pure function of one chunk's buffers.

pub mod expand;
pub mod invert;
pub mod picking;
pub mod resolve;

pub use expand::{expand_array, expand_primitive, expand_values};
pub use invert::{invert_offsets, InvertedOffsets};
pub use picking::{
    decode_picking_color, encode_picking_color, encode_picking_colors, PickingColor,
    MAX_PICKING_FEATURES,
};
pub use resolve::resolve_offsets;
