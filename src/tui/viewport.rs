//! Geographic viewport for the map pane.
//!
//! Maps between screen cells and coordinates with the same scaling the
//! ratatui canvas uses for printed labels, so a marker drawn at a cell
//! projects back onto that cell.

use crate::catalog::GeoPoint;
use crate::story::Marker;
use ratatui::layout::Rect;

/// Longitude span shown at zoom 0, halved for each zoom level.
const BASE_SPAN: f64 = 1440.0;

/// Deepest zoom the viewer can reach.
pub const MAX_ZOOM: u8 = 12;

/// Fraction of the visible span moved by one pan step.
const PAN_STEP: f64 = 0.25;

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f64 = 2.0;

/// A click within this many cells of a marker counts as a click on it.
/// Markers this close to each other are drawn as one cluster.
const HIT_RADIUS: i32 = 1;

/// Viewer adjustments on top of a record's initial view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MapOffset {
    /// Zoom levels added to the record's zoom.
    pub zoom: i8,
    /// Pan steps toward the east (negative is west).
    pub east: i16,
    /// Pan steps toward the north (negative is south).
    pub north: i16,
}

impl MapOffset {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Record zoom with this offset applied, kept within `0..=MAX_ZOOM`.
    pub fn zoom_for(&self, base: u8) -> u8 {
        (i16::from(base) + i16::from(self.zoom)).clamp(0, i16::from(MAX_ZOOM)) as u8
    }
}

/// Markers drawn as one glyph because they project onto the same or
/// neighbouring cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    /// Cell of the first member, where the glyph is drawn.
    pub cell: (u16, u16),
    /// Indices into the marker slice, in catalog order.
    pub members: Vec<usize>,
}

impl Cluster {
    pub fn count(&self) -> usize {
        self.members.len()
    }

    /// Member a click on this cluster selects: the one after the active
    /// member, wrapping, or the first one when none is active.
    pub fn pick(&self, markers: &[Marker<'_>]) -> usize {
        match self.members.iter().position(|&i| markers[i].active) {
            Some(pos) => self.members[(pos + 1) % self.members.len()],
            None => self.members[0],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapViewport {
    /// `[west, east]` longitude bounds.
    pub x_bounds: [f64; 2],
    /// `[south, north]` latitude bounds.
    pub y_bounds: [f64; 2],
    zoom: u8,
    area: Rect,
}

impl MapViewport {
    /// Viewport centered on `center` at `zoom`, drawn into `area` (the
    /// canvas area inside any border).
    pub fn new(center: GeoPoint, zoom: u8, area: Rect) -> Self {
        let width = f64::from(area.width.max(1));
        let height = f64::from(area.height.max(1));

        let lng_span = (BASE_SPAN / 2f64.powi(i32::from(zoom))).min(360.0);
        let lat_span = (lng_span / width * CELL_ASPECT * height).min(180.0);

        Self {
            x_bounds: clamp_window(center.lng, lng_span, -180.0, 180.0),
            y_bounds: clamp_window(center.lat, lat_span, -90.0, 90.0),
            zoom,
            area,
        }
    }

    /// Viewport for a record at `center` and `zoom`, adjusted by the
    /// viewer's `offset`.
    pub fn with_offset(center: GeoPoint, zoom: u8, offset: MapOffset, area: Rect) -> Self {
        let zoom = offset.zoom_for(zoom);
        if offset.east == 0 && offset.north == 0 {
            return Self::new(center, zoom, area);
        }

        let unpanned = Self::new(center, zoom, area);
        let lng_step = (unpanned.x_bounds[1] - unpanned.x_bounds[0]) * PAN_STEP;
        let lat_step = (unpanned.y_bounds[1] - unpanned.y_bounds[0]) * PAN_STEP;
        let panned = GeoPoint::new(
            (center.lat + f64::from(offset.north) * lat_step).clamp(-90.0, 90.0),
            (center.lng + f64::from(offset.east) * lng_step).clamp(-180.0, 180.0),
        );
        Self::new(panned, zoom, area)
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn contains(&self, point: &GeoPoint) -> bool {
        (self.x_bounds[0]..=self.x_bounds[1]).contains(&point.lng)
            && (self.y_bounds[0]..=self.y_bounds[1]).contains(&point.lat)
    }

    /// Screen cell for `point`, if it is inside the viewport.
    pub fn project(&self, point: &GeoPoint) -> Option<(u16, u16)> {
        if !self.contains(point) || self.area.width == 0 || self.area.height == 0 {
            return None;
        }
        let [west, east] = self.x_bounds;
        let [south, north] = self.y_bounds;
        let cols = f64::from(self.area.width - 1);
        let rows = f64::from(self.area.height - 1);

        let col = ((point.lng - west) * cols / (east - west)) as u16;
        let row = ((north - point.lat) * rows / (north - south)) as u16;
        Some((self.area.x + col, self.area.y + row))
    }

    /// Coordinate at the center of screen cell `(col, row)`, if it is inside
    /// the map.
    pub fn unproject(&self, col: u16, row: u16) -> Option<GeoPoint> {
        let area = self.area;
        if col < area.x || col >= area.x + area.width || row < area.y || row >= area.y + area.height {
            return None;
        }
        let [west, east] = self.x_bounds;
        let [south, north] = self.y_bounds;
        let cols = f64::from(area.width.saturating_sub(1).max(1));
        let rows = f64::from(area.height.saturating_sub(1).max(1));

        let lng = west + (f64::from(col - area.x) + 0.5) * (east - west) / cols;
        let lat = north - (f64::from(row - area.y) + 0.5) * (north - south) / rows;
        Some(GeoPoint::new(lat.clamp(south, north), lng.clamp(west, east)))
    }

    /// Group the visible markers into clusters. A marker joins the first
    /// cluster whose cell is within reach of its own, otherwise it starts a
    /// new one.
    pub fn clusters(&self, markers: &[Marker<'_>]) -> Vec<Cluster> {
        let mut clusters: Vec<Cluster> = Vec::new();
        for (index, marker) in markers.iter().enumerate() {
            let Some(cell) = self.project(&marker.location) else {
                continue;
            };
            match clusters.iter_mut().find(|c| cell_distance(c.cell, cell) <= HIT_RADIUS) {
                Some(cluster) => cluster.members.push(index),
                None => clusters.push(Cluster {
                    cell,
                    members: vec![index],
                }),
            }
        }
        clusters
    }

    /// Cluster under or next to cell `(col, row)`, nearest first and
    /// catalog order on ties.
    pub fn hit(&self, col: u16, row: u16, markers: &[Marker<'_>]) -> Option<Cluster> {
        self.unproject(col, row)?;
        self.clusters(markers)
            .into_iter()
            .map(|c| (cell_distance(c.cell, (col, row)), c))
            .filter(|(distance, _)| *distance <= HIT_RADIUS)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, cluster)| cluster)
    }

    /// Resolve a click to a map coordinate.
    ///
    /// A click on or next to a drawn cluster reports the stored location of
    /// the member [`Cluster::pick`] chooses, so repeated clicks cycle
    /// through stacked markers. Any other click inside the map reports the
    /// coordinate under the cell.
    pub fn click(&self, col: u16, row: u16, markers: &[Marker<'_>]) -> Option<GeoPoint> {
        let under_cursor = self.unproject(col, row)?;
        Some(match self.hit(col, row, markers) {
            Some(cluster) => markers[cluster.pick(markers)].location,
            None => under_cursor,
        })
    }
}

/// Chebyshev distance between two cells.
fn cell_distance(a: (u16, u16), b: (u16, u16)) -> i32 {
    (i32::from(a.0) - i32::from(b.0))
        .abs()
        .max((i32::from(a.1) - i32::from(b.1)).abs())
}

/// `[lo, hi]` window of `span` centered on `center`, shifted to stay inside
/// `[min, max]`.
fn clamp_window(center: f64, span: f64, min: f64, max: f64) -> [f64; 2] {
    let mut lo = center - span / 2.0;
    let mut hi = center + span / 2.0;
    if lo < min {
        hi += min - lo;
        lo = min;
    }
    if hi > max {
        lo -= hi - max;
        hi = max;
    }
    [lo.max(min), hi]
}
