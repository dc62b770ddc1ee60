//! Reads geometries back out of the frozen index and coordinate buffers.

use crate::codec::GeometryType;
use crate::error::{GeoMemError, Result};
use crate::feature::{Geometry, Position};

/// Recursive-descent geometry reader.
///
/// Borrows the frozen buffers and owns its cursor pair; after a successful
/// [`decode`](Self::decode) the cursors rest at the start of the next
/// geometry, so calls chain over shared buffers. Ring and polygon boundaries
/// are never known in advance; the reader trusts the counts written by the
/// matching encoder.
#[derive(Debug)]
pub struct GeometryDecoder<'a> {
    indexes: &'a [u32],
    coords: &'a [f64],
    index_pos: usize,
    coord_pos: usize,
}

impl<'a> GeometryDecoder<'a> {
    /// A decoder positioned at the start of both buffers.
    pub fn new(indexes: &'a [u32], coords: &'a [f64]) -> Self {
        Self::at(indexes, coords, 0, 0)
    }

    /// A decoder positioned at an offset pair taken from a lookup table.
    pub fn at(indexes: &'a [u32], coords: &'a [f64], index_pos: usize, coord_pos: usize) -> Self {
        Self {
            indexes,
            coords,
            index_pos,
            coord_pos,
        }
    }

    /// Current `(index, coordinate)` cursor pair.
    pub fn position(&self) -> (usize, usize) {
        (self.index_pos, self.coord_pos)
    }

    /// Reads one geometry starting at the current cursors.
    ///
    /// Errors with [`GeoMemError::UnknownGeometryCode`] on an unrecognized
    /// type-code word and [`GeoMemError::BufferUnderrun`] if either buffer
    /// ends mid-geometry. On error the cursor state is unspecified and the
    /// decoder should be discarded.
    pub fn decode(&mut self) -> Result<Geometry> {
        let word = self.read_word()?;
        let code =
            GeometryType::try_from(word).map_err(|_| GeoMemError::UnknownGeometryCode(word))?;

        match code {
            GeometryType::None => Ok(Geometry::None),
            GeometryType::Point => Ok(Geometry::Point(self.read_position()?)),
            GeometryType::MultiPoint => Ok(Geometry::MultiPoint(self.read_positions()?)),
            GeometryType::LineString => Ok(Geometry::LineString(self.read_positions()?)),
            GeometryType::MultiLineString => Ok(Geometry::MultiLineString(self.read_rings()?)),
            GeometryType::Polygon => Ok(Geometry::Polygon(self.read_rings()?)),
            GeometryType::MultiPolygon => {
                let count = self.read_word()? as usize;
                let mut polygons = Vec::with_capacity(count);
                for _ in 0..count {
                    polygons.push(self.read_rings()?);
                }
                Ok(Geometry::MultiPolygon(polygons))
            }
            GeometryType::GeometryCollection => {
                let count = self.read_word()? as usize;
                let mut children = Vec::with_capacity(count);
                for _ in 0..count {
                    children.push(self.decode()?);
                }
                Ok(Geometry::GeometryCollection(children))
            }
        }
    }

    fn read_word(&mut self) -> Result<u32> {
        let word = self.indexes.get(self.index_pos).copied().ok_or_else(|| {
            GeoMemError::BufferUnderrun(format!(
                "index buffer ended at word {} mid-geometry",
                self.index_pos
            ))
        })?;
        self.index_pos += 1;
        Ok(word)
    }

    /// Reads one triple; the z ordinate is dropped from the returned
    /// position iff it is the NaN sentinel.
    fn read_position(&mut self) -> Result<Position> {
        let end = self.coord_pos + 3;
        let triple = self.coords.get(self.coord_pos..end).ok_or_else(|| {
            GeoMemError::BufferUnderrun(format!(
                "coordinate buffer ended at float {} mid-position",
                self.coord_pos
            ))
        })?;
        self.coord_pos = end;

        let z = triple[2];
        Ok(Position {
            x: triple[0],
            y: triple[1],
            z: (!z.is_nan()).then_some(z),
        })
    }

    fn read_positions(&mut self) -> Result<Vec<Position>> {
        let count = self.read_word()? as usize;
        let mut positions = Vec::with_capacity(count.min(self.remaining_positions()));
        for _ in 0..count {
            positions.push(self.read_position()?);
        }
        Ok(positions)
    }

    fn read_rings(&mut self) -> Result<Vec<Vec<Position>>> {
        let count = self.read_word()? as usize;
        let mut rings = Vec::with_capacity(count.min(self.indexes.len() - self.index_pos));
        for _ in 0..count {
            rings.push(self.read_positions()?);
        }
        Ok(rings)
    }

    /// Upper bound used to keep a corrupt count word from preallocating
    /// unbounded memory before the underrun surfaces.
    fn remaining_positions(&self) -> usize {
        (self.coords.len() - self.coord_pos) / 3
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::codec::GeometryEncoder;

    fn roundtrip(geometry: Geometry) {
        let mut encoder = GeometryEncoder::new();
        encoder.encode(&geometry).unwrap();
        let (indexes, coords) = encoder.finish();

        let mut decoder = GeometryDecoder::new(&indexes, &coords);
        assert_eq!(decoder.decode().unwrap(), geometry);
        // Both buffers fully consumed.
        assert_eq!(decoder.position(), (indexes.len(), coords.len()));
    }

    #[test]
    fn roundtrips_every_variant() {
        let ring = vec![
            Position::xy(0.0, 0.0),
            Position::xy(4.0, 0.0),
            Position::xy(4.0, 1.0),
            Position::xy(0.0, 0.0),
        ];
        roundtrip(Geometry::None);
        roundtrip(Geometry::Point(Position::xyz(42.32, 24.2, 20.0)));
        roundtrip(Geometry::MultiPoint(vec![
            Position::xy(1.0, 2.0),
            Position::xyz(3.0, 4.0, 5.0),
        ]));
        roundtrip(Geometry::LineString(ring.clone()));
        roundtrip(Geometry::MultiLineString(vec![ring.clone(), ring.clone()]));
        roundtrip(Geometry::Polygon(vec![ring.clone()]));
        roundtrip(Geometry::MultiPolygon(vec![
            vec![ring.clone(), ring.clone()],
            vec![ring.clone()],
        ]));
        roundtrip(Geometry::GeometryCollection(vec![
            Geometry::Point(Position::xy(42.32, 24.2)),
            Geometry::None,
            Geometry::GeometryCollection(vec![Geometry::LineString(ring)]),
        ]));
    }

    #[test]
    fn empty_containers_roundtrip() {
        roundtrip(Geometry::MultiPoint(vec![]));
        roundtrip(Geometry::Polygon(vec![]));
        roundtrip(Geometry::GeometryCollection(vec![]));
    }

    #[test]
    fn explicit_zero_z_stays_distinct_from_no_z() {
        let mut encoder = GeometryEncoder::new();
        encoder.encode(&Geometry::Point(Position::xy(1.5, 2.5))).unwrap();
        encoder
            .encode(&Geometry::Point(Position::xyz(1.5, 2.5, 0.0)))
            .unwrap();
        let (indexes, coords) = encoder.finish();

        let mut decoder = GeometryDecoder::new(&indexes, &coords);
        assert_eq!(
            decoder.decode().unwrap(),
            Geometry::Point(Position::xy(1.5, 2.5))
        );
        assert_eq!(
            decoder.decode().unwrap(),
            Geometry::Point(Position::xyz(1.5, 2.5, 0.0))
        );
    }

    #[test]
    fn unknown_code_errors() {
        let indexes = [42u32];
        let mut decoder = GeometryDecoder::new(&indexes, &[]);
        assert!(matches!(
            decoder.decode(),
            Err(GeoMemError::UnknownGeometryCode(42))
        ));
    }

    #[test]
    fn truncated_coordinates_underrun() {
        // A Point code with only two floats behind it.
        let indexes = [0u32];
        let coords = [1.0, 2.0];
        let mut decoder = GeometryDecoder::new(&indexes, &coords);
        assert!(matches!(
            decoder.decode(),
            Err(GeoMemError::BufferUnderrun(_))
        ));
    }

    #[test]
    fn truncated_index_words_underrun() {
        // A LineString code with no count word behind it.
        let indexes = [2u32];
        let mut decoder = GeometryDecoder::new(&indexes, &[]);
        assert!(matches!(
            decoder.decode(),
            Err(GeoMemError::BufferUnderrun(_))
        ));
    }
}
