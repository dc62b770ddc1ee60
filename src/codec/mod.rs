//! Recursive encoder/decoder for geometries over a flat index buffer and a
//! flat coordinate buffer.

pub use decode::GeometryDecoder;
pub use encode::GeometryEncoder;

pub mod decode;
pub mod encode;

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Code words identifying each geometry variant in the index buffer.
///
/// `try_from` on a word outside this set is the only structural validation
/// the decoder performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u32)]
pub enum GeometryType {
    Point = 0,
    MultiPoint = 1,
    LineString = 2,
    MultiLineString = 3,
    Polygon = 4,
    MultiPolygon = 5,
    GeometryCollection = 6,
    None = 7,
}

/// Reserved z value marking a position with no third ordinate.
///
/// Every position is stored as exactly three floats so the coordinate stride
/// stays fixed; the sentinel fills the z slot of 2D positions. NaN never
/// equals itself, so presence is tested with `is_nan` rather than `==`, and
/// no legitimate ordinate can collide with it.
pub(crate) const NO_Z: f64 = f64::NAN;
