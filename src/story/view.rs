//! The render contract handed to presentation layers.

use crate::catalog::{Catalog, GeoPoint, MarkerIcon, Record};
use serde::Serialize;
use std::fmt;

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, Serialize)]
pub struct StoryView<'a> {
    /// Record shown in the detail panel.
    pub active: &'a Record,

    /// One marker per record, in catalog order.
    pub markers: Vec<Marker<'a>>,

    pub progress: Progress,

    pub has_previous: bool,
    pub has_next: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Marker<'a> {
    pub id: usize,
    pub title: &'a str,
    pub location: GeoPoint,
    pub icon: MarkerIcon,
    pub active: bool,
}

/// 1-based position and total count, displayed as `"3 / 8"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub position: usize,
    pub count: usize,
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.position, self.count)
    }
}

impl<'a> StoryView<'a> {
    /// Callers guarantee `cursor < catalog.size()`.
    pub(crate) fn new(catalog: &'a Catalog, cursor: usize) -> Self {
        let records = catalog.as_slice();
        let markers = records
            .iter()
            .map(|r| Marker {
                id: r.id,
                title: &r.title,
                location: r.location,
                icon: r.icon,
                active: r.id == cursor,
            })
            .collect();

        Self {
            active: &records[cursor],
            markers,
            progress: Progress {
                position: cursor + 1,
                count: records.len(),
            },
            has_previous: cursor > 0,
            has_next: cursor + 1 < records.len(),
        }
    }

    pub fn active_marker(&self) -> Option<&Marker<'a>> {
        self.markers.iter().find(|m| m.active)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::fixtures::catalog;
    use crate::story::SelectionController;
    use std::sync::Arc;

    #[test]
    fn test_view_at_start() {
        let c = SelectionController::new(Arc::new(catalog(3)));
        let view = c.view();
        assert_eq!(view.active.id, 0);
        assert_eq!(view.progress.to_string(), "1 / 3");
        assert!(!view.has_previous);
        assert!(view.has_next);
    }

    #[test]
    fn test_exactly_one_active_marker() {
        let mut c = SelectionController::new(Arc::new(catalog(4)));
        c.advance();
        c.advance();
        let view = c.view();
        assert_eq!(view.markers.len(), 4);
        let active: Vec<_> = view.markers.iter().filter(|m| m.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, 2);
        assert_eq!(view.active_marker().map(|m| m.id), Some(view.active.id));
        assert_eq!(view.progress.to_string(), "3 / 4");
    }

    #[test]
    fn test_view_at_end() {
        let mut c = SelectionController::new(Arc::new(catalog(2)));
        c.advance();
        let view = c.view();
        assert!(view.has_previous);
        assert!(!view.has_next);
    }

    #[test]
    fn test_view_serializes() {
        let c = SelectionController::new(Arc::new(catalog(2)));
        let json = serde_json::to_value(c.view()).unwrap();
        assert_eq!(json["progress"]["position"], 1);
        assert_eq!(json["progress"]["count"], 2);
        assert_eq!(json["markers"][0]["active"], true);
        assert_eq!(json["markers"][1]["active"], false);
        assert_eq!(json["active"]["title"], "Species 0");
    }
}
