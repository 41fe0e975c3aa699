//! Catalog error type.

use thiserror::Error;

/// Errors raised while building or indexing a [`Catalog`](super::Catalog).
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("Catalog must contain at least one record")]
    Empty,

    #[error("Record {id} out of range: catalog has {len} records")]
    OutOfRange { id: usize, len: usize },

    #[error("Record at index {index} has id {id}")]
    IdMismatch { index: usize, id: usize },

    #[error("Record {id} has invalid location ({lat}, {lng})")]
    InvalidLocation { id: usize, lat: f64, lng: f64 },

    #[error("Record {id} has zero zoom level")]
    InvalidZoom { id: usize },
}
