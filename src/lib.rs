//! A compact, flat, columnar in-memory encoding of GeoJSON-style feature
//! collections, with O(1) random access by feature index and partial deletion.
//!
//! All structural information (geometry type codes and counts) is packed into
//! one `u32` buffer, all ordinates into one `f64` buffer, and a per-feature
//! lookup table records where each feature's geometry begins in both, so
//! decoding feature `i` never requires visiting features `0..i`.

#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use collection::MemoryCollection;
pub use error::{GeoMemError, Result};
pub use feature::{Feature, Geometry, Position, Properties};

pub mod buffer;
pub mod codec;
pub mod collection;
pub mod error;
pub mod feature;
pub mod io;
#[cfg(test)]
pub(crate) mod test;
