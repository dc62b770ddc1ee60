//! Conversions at the crate boundary. The engine itself never sees GeoJSON
//! text; callers parse with the `geojson` crate and convert here.

pub mod geojson;
