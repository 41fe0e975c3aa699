//! # Catalog
//!
//! The fixed, ordered collection of species records. A catalog is validated
//! once at construction and never mutated afterwards, so it can be shared
//! read-only (behind an `Arc`) by any number of sessions.

mod builtin;
mod error;
mod types;

pub use error::CatalogError;
pub use types::{GeoPoint, MarkerIcon, Record};

/// Ordered, non-empty sequence of records. Order defines next/previous
/// adjacency.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    /// Build a catalog, validating that it is non-empty, that every id equals
    /// its index, and that locations and zoom levels are well formed.
    pub fn new(records: Vec<Record>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (index, record) in records.iter().enumerate() {
            if record.id != index {
                return Err(CatalogError::IdMismatch {
                    index,
                    id: record.id,
                });
            }
            if !record.location.is_valid() {
                return Err(CatalogError::InvalidLocation {
                    id: record.id,
                    lat: record.location.lat,
                    lng: record.location.lng,
                });
            }
            if record.zoom == 0 {
                return Err(CatalogError::InvalidZoom { id: record.id });
            }
        }

        Ok(Self { records })
    }

    /// The compiled-in endangered-species catalog.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(builtin::records())
    }

    /// Returns the record at `id`.
    pub fn get(&self, id: usize) -> Result<&Record, CatalogError> {
        self.records.get(id).ok_or(CatalogError::OutOfRange {
            id,
            len: self.records.len(),
        })
    }

    /// Number of records. Always at least one.
    pub fn size(&self) -> usize {
        self.records.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }

    /// First record, in catalog order, whose location lies within
    /// `tolerance` of `point` on both axes.
    pub fn find_near(&self, point: &GeoPoint, tolerance: f64) -> Option<&Record> {
        self.records
            .iter()
            .find(|r| r.location.is_near(point, tolerance))
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn record(id: usize, lat: f64, lng: f64) -> Record {
        Record {
            id,
            title: format!("Species {}", id),
            subtitle: String::new(),
            location: GeoPoint::new(lat, lng),
            zoom: 6,
            media: format!("species-{}.jpg", id),
            icon: MarkerIcon::Paw,
            summary: String::new(),
            biography: String::new(),
            habitat: String::new(),
            population_trend: String::new(),
            threats: String::new(),
        }
    }

    /// Catalog of `n` records spread out along the equator.
    pub fn catalog(n: usize) -> Catalog {
        let records = (0..n).map(|i| record(i, 0.0, i as f64 * 10.0)).collect();
        Catalog::new(records).unwrap()
    }
}
