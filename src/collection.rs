//! Contains [`MemoryCollection`], the frozen columnar encoding of a feature
//! collection, plus its encode, decode, seek and delete operations.

use arrow_buffer::{ArrowNativeType, ScalarBuffer};

use crate::buffer::BufferBuilder;
use crate::codec::{GeometryDecoder, GeometryEncoder};
use crate::error::{GeoMemError, Result};
use crate::feature::{Feature, Properties};

/// Buffer positions recorded per feature in the lookup table.
const LOOKUP_STRIDE: usize = 2;

/// A feature collection encoded into flat columnar buffers.
///
/// All structural words live in `indexes`, all ordinates in `coords` (three
/// per position), and `lookup` holds one `(index_offset, coord_offset)` pair
/// per feature recording where that feature's geometry begins in the other
/// two buffers. Property records ride alongside, index-aligned with the
/// lookup table.
///
/// The buffers are immutable once built: decoding and seeking take `&self`,
/// and [`delete`](Self::delete) returns a new collection instead of shifting
/// buffers a concurrent reader could observe mid-move.
#[derive(Debug, Clone)]
pub struct MemoryCollection {
    indexes: ScalarBuffer<u32>,
    coords: ScalarBuffer<f64>,
    lookup: ScalarBuffer<u32>,
    properties: Vec<Properties>,
}

impl MemoryCollection {
    /// Encodes an ordered sequence of features.
    ///
    /// Features are visited once, in order; each one's lookup pair is
    /// recorded before its geometry is written. The finished buffers are
    /// trimmed to their exact used length.
    pub fn encode(features: &[Feature]) -> Result<Self> {
        let mut encoder = GeometryEncoder::new();
        let mut lookup = BufferBuilder::<u32>::new();
        let mut properties = Vec::with_capacity(features.len());

        for feature in features {
            lookup.push(u32::try_from(encoder.index_pos()).map_err(|_| GeoMemError::Overflow)?);
            lookup.push(u32::try_from(encoder.coord_pos()).map_err(|_| GeoMemError::Overflow)?);
            encoder.encode(&feature.geometry)?;
            properties.push(feature.properties.clone());
        }

        let (indexes, coords) = encoder.finish();
        Ok(Self {
            indexes,
            coords,
            lookup: lookup.finish(),
            properties,
        })
    }

    /// Number of features in the collection.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// The structural words (type codes and counts).
    pub fn indexes(&self) -> &[u32] {
        &self.indexes
    }

    /// The ordinates, three per position.
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    /// The per-feature offset pairs, two words per feature.
    pub fn lookup(&self) -> &[u32] {
        &self.lookup
    }

    /// The property records, index-aligned with the lookup table.
    pub fn properties(&self) -> &[Properties] {
        &self.properties
    }

    /// Reassembles a collection from previously extracted parts.
    ///
    /// The parts are trusted to satisfy the layout invariants; only a
    /// later decode will surface inconsistencies. Intended for a
    /// persistence layer that frames and restores the raw buffers.
    pub fn from_parts(
        indexes: ScalarBuffer<u32>,
        coords: ScalarBuffer<f64>,
        lookup: ScalarBuffer<u32>,
        properties: Vec<Properties>,
    ) -> Self {
        Self {
            indexes,
            coords,
            lookup,
            properties,
        }
    }

    /// Extracts the raw buffer triple and property records.
    pub fn into_parts(
        self,
    ) -> (
        ScalarBuffer<u32>,
        ScalarBuffer<f64>,
        ScalarBuffer<u32>,
        Vec<Properties>,
    ) {
        (self.indexes, self.coords, self.lookup, self.properties)
    }

    /// Offsets where feature `i`'s geometry begins, without decoding.
    pub fn seek(&self, i: usize) -> Result<(usize, usize)> {
        if i >= self.len() {
            return Err(GeoMemError::IndexOutOfRange {
                index: i,
                len: self.len(),
            });
        }
        Ok((
            self.lookup[i * LOOKUP_STRIDE] as usize,
            self.lookup[i * LOOKUP_STRIDE + 1] as usize,
        ))
    }

    /// Decodes exactly one feature via the lookup table.
    ///
    /// Equivalent to `decode()?[i]`, but never visits features `0..i`.
    pub fn feature(&self, i: usize) -> Result<Feature> {
        let (index_pos, coord_pos) = self.seek(i)?;
        let mut decoder = GeometryDecoder::at(&self.indexes, &self.coords, index_pos, coord_pos);
        let geometry = decoder.decode()?;
        Ok(Feature {
            properties: self.properties[i].clone(),
            geometry,
        })
    }

    /// Decodes the whole collection in order.
    ///
    /// Replays one chained decoder across the buffers; the lookup table is
    /// never consulted.
    pub fn decode(&self) -> Result<Vec<Feature>> {
        let mut decoder = GeometryDecoder::new(&self.indexes, &self.coords);
        let mut features = Vec::with_capacity(self.len());
        for properties in &self.properties {
            let geometry = decoder.decode()?;
            features.push(Feature {
                properties: properties.clone(),
                geometry,
            });
        }
        Ok(features)
    }

    /// Removes feature `i`, producing a collection with one fewer feature.
    ///
    /// Deleting the last feature truncates all three buffers at its lookup
    /// pair (zero-copy slices) and no other feature's offsets change.
    /// Deleting an interior feature excises its word range from the index
    /// and coordinate buffers and decrements every later lookup pair by the
    /// excised per-buffer span. Either way `self` is left untouched, so
    /// failure can never corrupt the original.
    pub fn delete(&self, i: usize) -> Result<Self> {
        let (index_start, coord_start) = self.seek(i)?;

        let mut properties = self.properties.clone();
        properties.remove(i);

        if i + 1 == self.len() {
            return Ok(Self {
                indexes: self.indexes.slice(0, index_start),
                coords: self.coords.slice(0, coord_start),
                lookup: self.lookup.slice(0, i * LOOKUP_STRIDE),
                properties,
            });
        }

        // The range [lookup[i], lookup[i+1]) belongs exclusively to
        // feature i in both buffers.
        let (index_end, coord_end) = self.seek(i + 1)?;
        let index_span = (index_end - index_start) as u32;
        let coord_span = (coord_end - coord_start) as u32;

        let mut lookup = Vec::with_capacity(self.lookup.len() - LOOKUP_STRIDE);
        lookup.extend_from_slice(&self.lookup[..i * LOOKUP_STRIDE]);
        for pair in self.lookup[(i + 1) * LOOKUP_STRIDE..].chunks_exact(LOOKUP_STRIDE) {
            lookup.push(pair[0] - index_span);
            lookup.push(pair[1] - coord_span);
        }

        Ok(Self {
            indexes: excise(&self.indexes, index_start, index_end),
            coords: excise(&self.coords, coord_start, coord_end),
            lookup: lookup.into(),
            properties,
        })
    }
}

impl PartialEq for MemoryCollection {
    fn eq(&self, other: &Self) -> bool {
        self.indexes[..] == other.indexes[..]
            && self.coords[..] == other.coords[..]
            && self.lookup[..] == other.lookup[..]
            && self.properties == other.properties
    }
}

/// Copies `buffer` minus the range `[start, end)` into a fresh exact-length
/// buffer.
fn excise<T: ArrowNativeType>(buffer: &ScalarBuffer<T>, start: usize, end: usize) -> ScalarBuffer<T> {
    let mut out = Vec::with_capacity(buffer.len() - (end - start));
    out.extend_from_slice(&buffer[..start]);
    out.extend_from_slice(&buffer[end..]);
    out.into()
}
