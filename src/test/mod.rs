//! Shared fixtures for the crate's tests: a small collection exercising
//! every geometry variant, 2D and 3D positions, and an explicit z of zero.

use serde_json::Value;

use crate::feature::{Feature, Geometry, Position, Properties};

pub(crate) fn props(name: &str) -> Properties {
    let mut properties = Properties::new();
    properties.insert("name".to_string(), Value::from(name));
    properties.insert("rank".to_string(), Value::from(1));
    properties
}

pub(crate) fn null_feature() -> Feature {
    Feature::new(props("null"), Geometry::None)
}

pub(crate) fn multi_polygon_feature() -> Feature {
    let geometry = Geometry::MultiPolygon(vec![vec![
        vec![
            Position::xyz(1.0, 2.0, 0.0),
            Position::xyz(3.0, 4.0, 0.0),
            Position::xyz(1.0, 2.0, 0.0),
        ],
        vec![
            Position::xyz(8.0, 7.0, 0.0),
            Position::xyz(2.0, 7.0, 0.0),
            Position::xyz(8.0, 7.0, 0.0),
        ],
    ]]);
    Feature::new(props("multipolygon"), geometry)
}

pub(crate) fn point_feature() -> Feature {
    Feature::new(props("point"), Geometry::Point(Position::xyz(42.32, 24.2, 20.0)))
}

pub(crate) fn collection_feature() -> Feature {
    let geometry =
        Geometry::GeometryCollection(vec![Geometry::Point(Position::xy(42.32, 24.2))]);
    Feature::new(props("collection"), geometry)
}

pub(crate) fn zero_z_feature() -> Feature {
    Feature::new(props("zero-z"), Geometry::Point(Position::xyz(42.32, 24.2, 0.0)))
}

pub(crate) fn line_string_feature() -> Feature {
    let geometry = Geometry::LineString(vec![
        Position::xyz(1.0, 2.0, 0.0),
        Position::xyz(2.0, 3.0, 0.0),
        Position::xyz(3.0, 4.0, 0.0),
    ]);
    Feature::new(props("linestring"), geometry)
}

pub(crate) fn multi_line_string_feature() -> Feature {
    let geometry = Geometry::MultiLineString(vec![
        vec![Position::xyz(1.0, 2.0, 0.0), Position::xyz(3.0, 4.0, 0.0)],
        vec![Position::xyz(8.0, 7.0, 0.0), Position::xyz(8.0, 7.0, 0.0)],
    ]);
    Feature::new(props("multilinestring"), geometry)
}

/// The full seven-feature fixture collection.
pub(crate) fn features() -> Vec<Feature> {
    vec![
        null_feature(),
        multi_polygon_feature(),
        point_feature(),
        collection_feature(),
        zero_z_feature(),
        line_string_feature(),
        multi_line_string_feature(),
    ]
}
