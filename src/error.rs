//! Defines [`GeoMemError`], representing all errors returned by this crate.

use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeoMemError {
    /// A word read at a type-code position matched none of the eight known
    /// geometry codes.
    ///
    /// Signals a corrupted index buffer or an encoder/decoder version
    /// mismatch; never coerced into a partial geometry.
    #[error("Unknown geometry type code: {0}")]
    UnknownGeometryCode(u32),

    /// A decode step required more words or floats than remain in the
    /// supplied buffer.
    #[error("Buffer underrun: {0}")]
    BufferUnderrun(String),

    /// A feature index at or past the feature count of the collection.
    #[error("Feature index out of range: {index} >= {len}")]
    IndexOutOfRange {
        /// The requested feature index.
        index: usize,
        /// The number of features in the collection.
        len: usize,
    },

    /// Whenever a count or offset does not fit in a u32 index word.
    #[error("Overflow: value does not fit in u32 index words.")]
    Overflow,

    /// Invalid data at the GeoJSON conversion boundary.
    #[error("GeoJSON error: {0}")]
    GeoJson(String),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeoMemError>;
