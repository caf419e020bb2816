//! Decoding of [GeoArrow](https://github.com/geoarrow/geoarrow) geometry columns into the flat
//! buffers a GPU renderer consumes.
//!
//! A geometry column is classified into one of six kinds, its nested offsets are resolved down to
//! coordinate ranges, per-feature attributes are broadcast to per-vertex buffers, and each
//! rendered coordinate can be traced back to the feature row it came from, either through the
//! inverted offsets or through a picking color.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub mod accessor;
pub mod algorithm;
pub mod array;
pub mod chunked_array;
pub mod datatypes;
pub mod error;
pub mod render;
pub mod table;
#[cfg(test)]
pub(crate) mod test;
mod util;
