//! The selection controller: one cursor into a shared catalog.

use super::event::{StoryEvent, Transition};
use super::view::StoryView;
use crate::catalog::{Catalog, CatalogError, GeoPoint, Record};
use std::sync::Arc;

/// Default click tolerance in decimal degrees (about 100 m at the equator).
pub const DEFAULT_CLICK_TOLERANCE: f64 = 1e-3;

/// Outcome of resolving a coordinate to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateMatch {
    /// A record matched and the cursor moved to it.
    Changed { from: usize, to: usize },
    /// A record matched but it was already active.
    Unchanged,
    /// Nothing within tolerance; the cursor is untouched.
    NoMatch,
}

/// Owns the cursor for one viewing session.
///
/// The cursor always satisfies `0 <= cursor < catalog.size()`. Every
/// operation is total over a well-formed catalog.
#[derive(Debug, Clone)]
pub struct SelectionController {
    catalog: Arc<Catalog>,
    cursor: usize,
    tolerance: f64,
}

impl SelectionController {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_tolerance(catalog, DEFAULT_CLICK_TOLERANCE)
    }

    /// Create a controller whose [`apply`](Self::apply) resolves map clicks
    /// with `tolerance`.
    pub fn with_tolerance(catalog: Arc<Catalog>, tolerance: f64) -> Self {
        Self {
            catalog,
            cursor: 0,
            tolerance,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Current cursor.
    pub fn current(&self) -> usize {
        self.cursor
    }

    /// The active record.
    pub fn active(&self) -> &Record {
        // cursor is kept within catalog bounds by every mutation
        &self.catalog.as_slice()[self.cursor]
    }

    pub fn is_first(&self) -> bool {
        self.cursor == 0
    }

    pub fn is_last(&self) -> bool {
        self.cursor + 1 >= self.catalog.size()
    }

    /// Move to the next record. Clamps at the last one; returns whether the
    /// cursor moved.
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Move to the previous record. Clamps at zero; returns whether the
    /// cursor moved.
    pub fn retreat(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Select the first record, in catalog order, within `tolerance` of
    /// `point` on both axes.
    pub fn select_by_coordinate(&mut self, point: GeoPoint, tolerance: f64) -> CoordinateMatch {
        let Some(record) = self.catalog.find_near(&point, tolerance) else {
            return CoordinateMatch::NoMatch;
        };

        let to = record.id;
        if to == self.cursor {
            CoordinateMatch::Unchanged
        } else {
            let from = self.cursor;
            self.cursor = to;
            CoordinateMatch::Changed { from, to }
        }
    }

    /// Move directly to record `id`. Returns whether the cursor moved.
    pub fn jump(&mut self, id: usize) -> Result<bool, CatalogError> {
        self.catalog.get(id)?;
        let moved = id != self.cursor;
        self.cursor = id;
        Ok(moved)
    }

    /// Back to the first record.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Apply one inbound event and report what happened.
    pub fn apply(&mut self, event: StoryEvent) -> Transition {
        let from = self.cursor;
        let transition = match event {
            StoryEvent::Next => {
                let moved = self.advance();
                self.moved_from(from, moved)
            }
            StoryEvent::Previous => {
                let moved = self.retreat();
                self.moved_from(from, moved)
            }
            StoryEvent::MapClick { lat, lng } => {
                match self.select_by_coordinate(GeoPoint::new(lat, lng), self.tolerance) {
                    CoordinateMatch::Changed { from, to } => Transition::Moved { from, to },
                    CoordinateMatch::Unchanged => Transition::Unchanged,
                    CoordinateMatch::NoMatch => Transition::NoMatch,
                }
            }
        };

        tracing::debug!(?event, ?transition, cursor = self.cursor, "Applied story event");
        transition
    }

    fn moved_from(&self, from: usize, moved: bool) -> Transition {
        if moved {
            Transition::Moved {
                from,
                to: self.cursor,
            }
        } else {
            Transition::Unchanged
        }
    }

    /// Derive the render contract from the current cursor.
    pub fn view(&self) -> StoryView<'_> {
        StoryView::new(&self.catalog, self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::{catalog, record};

    fn controller(n: usize) -> SelectionController {
        SelectionController::new(Arc::new(catalog(n)))
    }

    fn two_habitats() -> SelectionController {
        let catalog = Catalog::new(vec![record(0, 30.8, 103.0), record(1, 29.5, 116.0)]).unwrap();
        SelectionController::new(Arc::new(catalog))
    }

    #[test]
    fn test_starts_at_zero() {
        let c = controller(3);
        assert_eq!(c.current(), 0);
        assert!(c.is_first());
        assert!(!c.is_last());
    }

    #[test]
    fn test_three_record_walk() {
        let mut c = controller(3);
        assert!(c.advance());
        assert!(c.advance());
        assert_eq!(c.current(), 2);
        assert!(!c.advance());
        assert_eq!(c.current(), 2);
        assert!(c.retreat());
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn test_retreat_at_zero_is_noop() {
        let mut c = controller(3);
        assert!(!c.retreat());
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_single_record_never_moves() {
        let mut c = controller(1);
        assert!(c.is_first() && c.is_last());
        assert!(!c.advance());
        assert!(!c.retreat());
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_net_cursor_is_clamped_walk() {
        // Deterministic pseudo-random step sequences over several sizes.
        let mut seed: u32 = 0x2545_f491;
        for n in 1..=6 {
            let mut c = controller(n);
            let mut expected: i64 = 0;
            for _ in 0..200 {
                seed ^= seed << 13;
                seed ^= seed >> 17;
                seed ^= seed << 5;
                if seed % 2 == 0 {
                    c.advance();
                    expected += 1;
                } else {
                    c.retreat();
                    expected -= 1;
                }
                expected = expected.clamp(0, n as i64 - 1);
                assert_eq!(c.current() as i64, expected);
                assert!(c.current() < n);
            }
        }
    }

    #[test]
    fn test_select_by_coordinate_with_jitter() {
        let mut c = two_habitats();
        c.advance();
        let result = c.select_by_coordinate(GeoPoint::new(30.8005, 103.0002), 0.001);
        assert_eq!(result, CoordinateMatch::Changed { from: 1, to: 0 });
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_select_by_coordinate_unchanged() {
        let mut c = two_habitats();
        let result = c.select_by_coordinate(GeoPoint::new(30.8005, 103.0002), 0.001);
        assert_eq!(result, CoordinateMatch::Unchanged);
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_select_by_coordinate_exact() {
        let mut c = two_habitats();
        let result = c.select_by_coordinate(GeoPoint::new(29.5, 116.0), 0.001);
        assert_eq!(result, CoordinateMatch::Changed { from: 0, to: 1 });
    }

    #[test]
    fn test_select_by_coordinate_no_match_keeps_cursor() {
        let mut c = two_habitats();
        c.advance();
        let result = c.select_by_coordinate(GeoPoint::new(0.0, 0.0), 0.001);
        assert_eq!(result, CoordinateMatch::NoMatch);
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn test_select_by_coordinate_tie_goes_to_first() {
        let catalog = Catalog::new(vec![
            record(0, 0.0, 0.0),
            record(1, 5.0, 5.0),
            record(2, 5.0002, 5.0002),
        ])
        .unwrap();
        let mut c = SelectionController::new(Arc::new(catalog));
        let result = c.select_by_coordinate(GeoPoint::new(5.0001, 5.0001), 0.001);
        assert_eq!(result, CoordinateMatch::Changed { from: 0, to: 1 });
    }

    #[test]
    fn test_reset_from_anywhere() {
        let mut c = controller(5);
        c.advance();
        c.advance();
        c.advance();
        c.reset();
        assert_eq!(c.current(), 0);
        c.reset();
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_jump() {
        let mut c = controller(4);
        assert_eq!(c.jump(3), Ok(true));
        assert_eq!(c.jump(3), Ok(false));
        assert_eq!(c.current(), 3);
        assert_eq!(
            c.jump(4),
            Err(CatalogError::OutOfRange { id: 4, len: 4 })
        );
        assert_eq!(c.current(), 3);
    }

    #[test]
    fn test_apply_events() {
        let mut c = two_habitats();
        assert_eq!(c.apply(StoryEvent::Next), Transition::Moved { from: 0, to: 1 });
        assert_eq!(c.apply(StoryEvent::Next), Transition::Unchanged);
        assert_eq!(
            c.apply(StoryEvent::MapClick {
                lat: 30.8005,
                lng: 103.0002
            }),
            Transition::Moved { from: 1, to: 0 }
        );
        assert_eq!(
            c.apply(StoryEvent::MapClick { lat: 0.0, lng: 0.0 }),
            Transition::NoMatch
        );
        assert_eq!(c.apply(StoryEvent::Previous), Transition::Unchanged);
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_apply_previous_reports_move() {
        let mut c = controller(3);
        c.apply(StoryEvent::Next);
        c.apply(StoryEvent::Next);
        assert_eq!(c.apply(StoryEvent::Previous), Transition::Moved { from: 2, to: 1 });
        assert_eq!(c.apply(StoryEvent::Previous), Transition::Moved { from: 1, to: 0 });
        assert_eq!(c.apply(StoryEvent::Previous), Transition::Unchanged);
    }

    #[test]
    fn test_apply_uses_configured_tolerance() {
        let catalog = Arc::new(Catalog::new(vec![record(0, 0.0, 0.0), record(1, 10.0, 10.0)]).unwrap());
        let mut strict = SelectionController::new(catalog.clone());
        let mut loose = SelectionController::with_tolerance(catalog, 0.5);
        let click = StoryEvent::MapClick {
            lat: 10.2,
            lng: 9.9,
        };
        assert_eq!(strict.apply(click), Transition::NoMatch);
        assert_eq!(loose.apply(click), Transition::Moved { from: 0, to: 1 });
    }

    #[test]
    fn test_sessions_are_independent() {
        let catalog = Arc::new(catalog(4));
        let mut a = SelectionController::new(catalog.clone());
        let b = SelectionController::new(catalog);
        a.advance();
        a.advance();
        assert_eq!(a.current(), 2);
        assert_eq!(b.current(), 0);
    }

    #[test]
    fn test_active_follows_cursor() {
        let mut c = two_habitats();
        assert_eq!(c.active().id, 0);
        c.advance();
        assert_eq!(c.active().location, GeoPoint::new(29.5, 116.0));
    }
}
