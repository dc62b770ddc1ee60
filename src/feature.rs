//! The logical feature model: positions, geometries and features.

use serde_json::{Map, Value};

/// A feature's non-geometry fields, stored and returned unchanged.
///
/// The engine never inspects keys or values.
pub type Properties = Map<String, Value>;

/// A single coordinate with an optional third ordinate.
///
/// z-presence is part of the value: a position with an explicit `z` of `0.0`
/// is distinct from a position with no `z` at all, and both survive an
/// encode/decode round trip exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
}

impl Position {
    /// A 2D position.
    pub fn xy(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    /// A 3D position.
    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }
}

/// The eight recognized geometry kinds, including the null/absent case.
///
/// Mirrors the GeoJSON geometry taxonomy, with `None` standing in for a
/// feature's `"geometry": null`. `GeometryCollection` recurses; a child may
/// be any variant, including `None` or another collection.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Geometry {
    /// No geometry.
    #[default]
    None,
    Point(Position),
    MultiPoint(Vec<Position>),
    LineString(Vec<Position>),
    MultiLineString(Vec<Vec<Position>>),
    Polygon(Vec<Vec<Position>>),
    MultiPolygon(Vec<Vec<Vec<Position>>>),
    GeometryCollection(Vec<Geometry>),
}

/// A geometry plus an opaque bag of property fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Feature {
    pub properties: Properties,
    pub geometry: Geometry,
}

impl Feature {
    pub fn new(properties: Properties, geometry: Geometry) -> Self {
        Self {
            properties,
            geometry,
        }
    }
}

impl From<Geometry> for Feature {
    /// A feature with no properties.
    fn from(geometry: Geometry) -> Self {
        Self {
            properties: Properties::new(),
            geometry,
        }
    }
}
