//! Writes geometries into the shared index and coordinate buffers.

use arrow_buffer::ScalarBuffer;

use crate::buffer::BufferBuilder;
use crate::codec::{GeometryType, NO_Z};
use crate::error::{GeoMemError, Result};
use crate::feature::{Geometry, Position};

/// Recursive-descent geometry writer.
///
/// Owns the two growable buffers; their lengths double as the write cursors,
/// so every call to [`encode`](Self::encode) appends one geometry's
/// structural words and coordinate triples at the current end of each
/// buffer. The cursor state lives here rather than in captured variables so
/// unrelated call trees can never share it.
#[derive(Debug, Default)]
pub struct GeometryEncoder {
    indexes: BufferBuilder<u32>,
    coords: BufferBuilder<f64>,
}

impl GeometryEncoder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Current index-buffer cursor, in words.
    pub fn index_pos(&self) -> usize {
        self.indexes.len()
    }

    /// Current coordinate-buffer cursor, in floats.
    pub fn coord_pos(&self) -> usize {
        self.coords.len()
    }

    /// Appends one geometry: its type code, variant-specific counts, and
    /// coordinate triples.
    ///
    /// Errors with [`GeoMemError::Overflow`] iff a count does not fit in a
    /// u32 index word.
    pub fn encode(&mut self, geometry: &Geometry) -> Result<()> {
        match geometry {
            Geometry::None => {
                self.indexes.push(GeometryType::None.into());
            }
            Geometry::Point(position) => {
                self.indexes.push(GeometryType::Point.into());
                self.push_position(position);
            }
            Geometry::MultiPoint(positions) => {
                self.indexes.push(GeometryType::MultiPoint.into());
                self.push_positions(positions)?;
            }
            Geometry::LineString(positions) => {
                self.indexes.push(GeometryType::LineString.into());
                self.push_positions(positions)?;
            }
            Geometry::MultiLineString(rings) => {
                self.indexes.push(GeometryType::MultiLineString.into());
                self.push_rings(rings)?;
            }
            Geometry::Polygon(rings) => {
                self.indexes.push(GeometryType::Polygon.into());
                self.push_rings(rings)?;
            }
            Geometry::MultiPolygon(polygons) => {
                self.indexes.push(GeometryType::MultiPolygon.into());
                self.push_count(polygons.len())?;
                for rings in polygons {
                    self.push_rings(rings)?;
                }
            }
            Geometry::GeometryCollection(children) => {
                self.indexes.push(GeometryType::GeometryCollection.into());
                self.push_count(children.len())?;
                for child in children {
                    self.encode(child)?;
                }
            }
        }
        Ok(())
    }

    /// Trims both buffers to their exact written length and freezes them.
    pub fn finish(self) -> (ScalarBuffer<u32>, ScalarBuffer<f64>) {
        (self.indexes.finish(), self.coords.finish())
    }

    fn push_count(&mut self, count: usize) -> Result<()> {
        let count = u32::try_from(count).map_err(|_| GeoMemError::Overflow)?;
        self.indexes.push(count);
        Ok(())
    }

    fn push_positions(&mut self, positions: &[Position]) -> Result<()> {
        self.push_count(positions.len())?;
        for position in positions {
            self.push_position(position);
        }
        Ok(())
    }

    fn push_rings(&mut self, rings: &[Vec<Position>]) -> Result<()> {
        self.push_count(rings.len())?;
        for ring in rings {
            self.push_positions(ring)?;
        }
        Ok(())
    }

    /// Always exactly three floats; the sentinel fills the z slot of 2D
    /// positions.
    fn push_position(&mut self, position: &Position) {
        self.coords.push(position.x);
        self.coords.push(position.y);
        self.coords.push(position.z.unwrap_or(NO_Z));
    }
}
