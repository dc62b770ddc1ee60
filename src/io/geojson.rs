//! Conversions between the logical feature model and `geojson` crate types.
//!
//! A feature's property record is its JSON object minus the `"type"` and
//! `"geometry"` members, so `id`, `bbox` and any foreign members pass
//! through the engine opaquely and are restored on the way back out.
//! Geometry-level `bbox` and foreign members are not part of the model and
//! are dropped.

use geojson::{Feature as GeoJsonFeature, FeatureCollection, Value as GeoJsonValue};
use serde_json::Value as JsonValue;

use crate::error::{GeoMemError, Result};
use crate::feature::{Feature, Geometry, Position, Properties};

/// Converts a parsed GeoJSON feature collection into the logical model.
///
/// Collection-level `bbox` and foreign members are dropped.
pub fn from_geojson(collection: &FeatureCollection) -> Result<Vec<Feature>> {
    collection
        .features
        .iter()
        .map(from_geojson_feature)
        .collect()
}

/// Converts features back into a GeoJSON feature collection.
pub fn to_geojson(features: &[Feature]) -> Result<FeatureCollection> {
    Ok(FeatureCollection {
        bbox: None,
        features: features
            .iter()
            .map(to_geojson_feature)
            .collect::<Result<_>>()?,
        foreign_members: None,
    })
}

/// Converts one GeoJSON feature into the logical model.
pub fn from_geojson_feature(feature: &GeoJsonFeature) -> Result<Feature> {
    let geometry = feature
        .geometry
        .as_ref()
        .map(Geometry::try_from)
        .transpose()?
        .unwrap_or_default();
    Ok(Feature {
        properties: property_record(feature)?,
        geometry,
    })
}

/// Converts one feature back into a GeoJSON feature, re-attaching the
/// `"type": "Feature"` tag and the geometry (JSON `null` for
/// [`Geometry::None`]).
pub fn to_geojson_feature(feature: &Feature) -> Result<GeoJsonFeature> {
    let geometry = match &feature.geometry {
        Geometry::None => JsonValue::Null,
        geometry => serde_json::to_value(geojson::Geometry::new(to_value(geometry)?))
            .map_err(|err| GeoMemError::GeoJson(err.to_string()))?,
    };

    let mut record = feature.properties.clone();
    record.insert("type".to_string(), JsonValue::from("Feature"));
    record.insert("geometry".to_string(), geometry);
    serde_json::from_value(JsonValue::Object(record))
        .map_err(|err| GeoMemError::GeoJson(err.to_string()))
}

/// All of the feature's JSON members except `"type"` and `"geometry"`.
fn property_record(feature: &GeoJsonFeature) -> Result<Properties> {
    match serde_json::to_value(feature).map_err(|err| GeoMemError::GeoJson(err.to_string()))? {
        JsonValue::Object(mut record) => {
            record.remove("type");
            record.remove("geometry");
            Ok(record)
        }
        _ => Err(GeoMemError::GeoJson(
            "feature did not serialize to a JSON object".to_string(),
        )),
    }
}

impl TryFrom<&geojson::Geometry> for Geometry {
    type Error = GeoMemError;

    fn try_from(geometry: &geojson::Geometry) -> Result<Self> {
        match &geometry.value {
            GeoJsonValue::Point(ordinates) => Ok(Geometry::Point(position(ordinates)?)),
            GeoJsonValue::MultiPoint(list) => Ok(Geometry::MultiPoint(positions(list)?)),
            GeoJsonValue::LineString(list) => Ok(Geometry::LineString(positions(list)?)),
            GeoJsonValue::MultiLineString(list) => Ok(Geometry::MultiLineString(rings(list)?)),
            GeoJsonValue::Polygon(list) => Ok(Geometry::Polygon(rings(list)?)),
            GeoJsonValue::MultiPolygon(list) => Ok(Geometry::MultiPolygon(
                list.iter().map(|polygon| rings(polygon)).collect::<Result<_>>()?,
            )),
            GeoJsonValue::GeometryCollection(children) => Ok(Geometry::GeometryCollection(
                children.iter().map(Geometry::try_from).collect::<Result<_>>()?,
            )),
        }
    }
}

/// GeoJSON has no null geometry inside a `GeometryCollection`, so a nested
/// [`Geometry::None`] is an error rather than a silent drop.
fn to_value(geometry: &Geometry) -> Result<GeoJsonValue> {
    match geometry {
        Geometry::None => Err(GeoMemError::GeoJson(
            "GeoJSON cannot represent a null geometry inside a GeometryCollection".to_string(),
        )),
        Geometry::Point(p) => Ok(GeoJsonValue::Point(ordinates(p))),
        Geometry::MultiPoint(list) => {
            Ok(GeoJsonValue::MultiPoint(list.iter().map(ordinates).collect()))
        }
        Geometry::LineString(list) => {
            Ok(GeoJsonValue::LineString(list.iter().map(ordinates).collect()))
        }
        Geometry::MultiLineString(list) => Ok(GeoJsonValue::MultiLineString(ring_values(list))),
        Geometry::Polygon(list) => Ok(GeoJsonValue::Polygon(ring_values(list))),
        Geometry::MultiPolygon(list) => Ok(GeoJsonValue::MultiPolygon(
            list.iter().map(|polygon| ring_values(polygon)).collect(),
        )),
        Geometry::GeometryCollection(children) => Ok(GeoJsonValue::GeometryCollection(
            children
                .iter()
                .map(|child| to_value(child).map(geojson::Geometry::new))
                .collect::<Result<_>>()?,
        )),
    }
}

fn position(ordinates: &[f64]) -> Result<Position> {
    match *ordinates {
        [x, y] => Ok(Position::xy(x, y)),
        [x, y, z] => Ok(Position::xyz(x, y, z)),
        _ => Err(GeoMemError::GeoJson(format!(
            "expected 2 or 3 ordinates per position, got {}",
            ordinates.len()
        ))),
    }
}

fn positions(list: &[Vec<f64>]) -> Result<Vec<Position>> {
    list.iter().map(|ordinates| position(ordinates)).collect()
}

fn rings(list: &[Vec<Vec<f64>>]) -> Result<Vec<Vec<Position>>> {
    list.iter().map(|ring| positions(ring)).collect()
}

fn ordinates(position: &Position) -> Vec<f64> {
    match position.z {
        Some(z) => vec![position.x, position.y, z],
        None => vec![position.x, position.y],
    }
}

fn ring_values(list: &[Vec<Position>]) -> Vec<Vec<Vec<f64>>> {
    list.iter()
        .map(|ring| ring.iter().map(ordinates).collect())
        .collect()
}
