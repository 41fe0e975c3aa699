//! Domain types for catalog records.

use serde::Serialize;
use std::fmt;

/// A point on the Earth's surface, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    /// Latitude, positive north.
    pub lat: f64,

    /// Longitude, positive east.
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns true if both components are finite and within Earth bounds.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Per-axis approximate equality: both `|Δlat|` and `|Δlng|` strictly
    /// below `tolerance`.
    pub fn is_near(&self, other: &GeoPoint, tolerance: f64) -> bool {
        (self.lat - other.lat).abs() < tolerance && (self.lng - other.lng).abs() < tolerance
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ns = if self.lat < 0.0 { 'S' } else { 'N' };
        let ew = if self.lng < 0.0 { 'W' } else { 'E' };
        write!(
            f,
            "{:.4}°{} {:.4}°{}",
            self.lat.abs(),
            ns,
            self.lng.abs(),
            ew
        )
    }
}

/// Marker glyph drawn for a record on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerIcon {
    #[default]
    Home,
    Paw,
    Tree,
    Star,
    Water,
    Feather,
    Mountain,
}

impl MarkerIcon {
    /// Single-cell symbol used on the terminal map.
    pub fn symbol(&self) -> &'static str {
        match self {
            MarkerIcon::Home => "⌂",
            MarkerIcon::Paw => "●",
            MarkerIcon::Tree => "♣",
            MarkerIcon::Star => "★",
            MarkerIcon::Water => "≈",
            MarkerIcon::Feather => "▲",
            MarkerIcon::Mountain => "◆",
        }
    }
}

/// One catalog entry describing a single species.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    /// Ordinal position in the catalog.
    pub id: usize,

    pub title: String,
    pub subtitle: String,

    /// Habitat location, used for map placement and click matching.
    pub location: GeoPoint,

    /// Initial map zoom while this record is active.
    pub zoom: u8,

    /// Path or URL of the record's image.
    pub media: String,

    pub icon: MarkerIcon,

    pub summary: String,
    pub biography: String,
    pub habitat: String,
    pub population_trend: String,
    pub threats: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_points() {
        assert!(GeoPoint::new(0.0, 0.0).is_valid());
        assert!(GeoPoint::new(90.0, 180.0).is_valid());
        assert!(GeoPoint::new(-90.0, -180.0).is_valid());
        assert!(GeoPoint::new(30.8, 103.0).is_valid());
    }

    #[test]
    fn test_invalid_points() {
        assert!(!GeoPoint::new(90.5, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, -180.1).is_valid());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn test_is_near_is_per_axis_and_strict() {
        let p = GeoPoint::new(30.8, 103.0);
        assert!(p.is_near(&GeoPoint::new(30.8005, 103.0002), 0.001));
        assert!(!p.is_near(&GeoPoint::new(30.8, 103.002), 0.001));
        assert!(!p.is_near(&GeoPoint::new(30.802, 103.0), 0.001));
        // Exactly at tolerance is not a match.
        assert!(!GeoPoint::new(0.0, 0.0).is_near(&GeoPoint::new(0.5, 0.0), 0.5));
    }

    #[test]
    fn test_display_hemispheres() {
        assert_eq!(GeoPoint::new(30.8, 103.0).to_string(), "30.8000°N 103.0000°E");
        assert_eq!(GeoPoint::new(-12.5, -77.25).to_string(), "12.5000°S 77.2500°W");
    }

    #[test]
    fn test_marker_icon_serializes_lowercase() {
        let json = serde_json::to_string(&MarkerIcon::Feather).unwrap();
        assert_eq!(json, "\"feather\"");
    }
}
