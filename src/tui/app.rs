//! Application state and core logic.

use super::event::Action;
use super::theme::Theme;
use super::ui;
use super::viewport::{MapOffset, MapViewport};
use crate::catalog::Catalog;
use crate::config::Config;
use crate::media::{self, MediaResolver, MediaStatus};
use crate::story::{SelectionController, StoryEvent, Transition};
use ratatui::layout::Rect;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
}

pub struct App {
    pub story: SelectionController,
    pub theme: Theme,
    pub overlay: Overlay,
    /// Feedback for the last map click that selected nothing.
    pub status: Option<String>,
    /// Image availability for the active record.
    pub media: MediaStatus,
    /// Title of the marker under the pointer.
    pub hover: Option<String>,
    /// Zoom and pan applied on top of the active record's view.
    pub offset: MapOffset,
    /// Last known terminal size.
    pub screen: Rect,
    pub should_quit: bool,
    resolver: Box<dyn MediaResolver>,
}

impl App {
    pub fn new(config: &Config, catalog: Arc<Catalog>, resolver: Box<dyn MediaResolver>) -> Self {
        let story = SelectionController::with_tolerance(catalog, config.story.click_tolerance);
        let media = media::probe(resolver.as_ref(), &story.active().media);

        Self {
            story,
            theme: Theme::by_name(&config.tui.theme).unwrap_or_default(),
            overlay: Overlay::None,
            status: None,
            hover: None,
            offset: MapOffset::default(),
            media,
            screen: Rect::default(),
            should_quit: false,
            resolver,
        }
    }

    /// Apply a key action. Returns whether the screen must be redrawn.
    pub fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => {
                self.quit();
                false
            }
            Action::Next => self.dispatch(StoryEvent::Next).needs_render(),
            Action::Previous => self.dispatch(StoryEvent::Previous).needs_render(),
            Action::Restart => self.restart(),
            Action::Back => self.back(),
            Action::Help => {
                self.toggle_help();
                true
            }
            Action::CycleTheme => {
                self.cycle_theme();
                true
            }
            Action::ZoomIn => self.zoom(1),
            Action::ZoomOut => self.zoom(-1),
            Action::Pan { east, north } => self.pan(east, north),
            Action::ResetView => self.reset_view(),
            Action::None => false,
        }
    }

    /// Apply one story event, refreshing derived state if the cursor moved.
    pub fn dispatch(&mut self, event: StoryEvent) -> Transition {
        let transition = self.story.apply(event);
        if transition.needs_render() {
            self.on_moved();
        }
        transition
    }

    /// Map viewport for the active record with the viewer's zoom and pan.
    pub fn viewport(&self) -> MapViewport {
        ui::map_viewport(self.screen, self.story.active(), self.offset)
    }

    /// Handle a left click at a screen cell. Returns whether the screen
    /// must be redrawn.
    pub fn click(&mut self, col: u16, row: u16) -> bool {
        if self.overlay != Overlay::None {
            return false;
        }

        let viewport = self.viewport();
        let Some(point) = viewport.click(col, row, &self.story.view().markers) else {
            return false;
        };

        match self.dispatch(StoryEvent::MapClick {
            lat: point.lat,
            lng: point.lng,
        }) {
            Transition::Moved { .. } => true,
            Transition::Unchanged => false,
            Transition::NoMatch => {
                tracing::debug!(%point, "Map click matched no record");
                self.status = Some(format!("No species recorded at {}", point));
                true
            }
        }
    }

    /// Start the story over from the first record.
    pub fn restart(&mut self) -> bool {
        let moved = !self.story.is_first();
        self.story.reset();
        if moved {
            self.on_moved();
        }
        moved
    }

    /// Show the titles of the markers under the pointer. Returns whether the
    /// hover text changed.
    pub fn hover(&mut self, col: u16, row: u16) -> bool {
        let text = if self.overlay == Overlay::None {
            let view = self.story.view();
            self.viewport().hit(col, row, &view.markers).map(|cluster| {
                let titles: Vec<&str> = cluster
                    .members
                    .iter()
                    .map(|&i| view.markers[i].title)
                    .collect();
                format!("Click to view: {}", titles.join(", "))
            })
        } else {
            None
        };

        if text == self.hover {
            return false;
        }
        self.hover = text;
        true
    }

    /// Change the zoom by `delta` levels. Returns false when already at the
    /// limit.
    pub fn zoom(&mut self, delta: i8) -> bool {
        let offset = MapOffset {
            zoom: self.offset.zoom.saturating_add(delta),
            ..self.offset
        };
        self.set_offset(offset)
    }

    /// Pan by whole steps. Returns false when the map is already at the
    /// edge of the globe.
    pub fn pan(&mut self, east: i8, north: i8) -> bool {
        let offset = MapOffset {
            east: self.offset.east.saturating_add(i16::from(east)),
            north: self.offset.north.saturating_add(i16::from(north)),
            ..self.offset
        };
        self.set_offset(offset)
    }

    /// Back to the active record's initial view.
    pub fn reset_view(&mut self) -> bool {
        self.set_offset(MapOffset::default())
    }

    fn set_offset(&mut self, offset: MapOffset) -> bool {
        let before = self.viewport();
        let after = ui::map_viewport(self.screen, self.story.active(), offset);
        if after.x_bounds == before.x_bounds && after.y_bounds == before.y_bounds {
            return false;
        }
        self.offset = offset;
        self.hover = None;
        tracing::debug!(zoom = after.zoom(), ?offset, "Map view changed");
        true
    }

    fn on_moved(&mut self) {
        self.status = None;
        self.hover = None;
        self.offset = MapOffset::default();
        self.refresh_media();
    }

    pub fn back(&mut self) -> bool {
        if self.overlay != Overlay::None {
            self.overlay = Overlay::None;
            return true;
        }
        if self.status.take().is_some() {
            return true;
        }
        false
    }

    pub fn toggle_help(&mut self) {
        self.overlay = match self.overlay {
            Overlay::Help => Overlay::None,
            Overlay::None => Overlay::Help,
        };
    }

    pub fn cycle_theme(&mut self) {
        let next = Theme::next_name(self.theme.name);
        self.theme = Theme::by_name(next).unwrap_or_default();
        tracing::debug!(theme = self.theme.name, "Theme changed");
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.screen = Rect::new(0, 0, width, height);
    }

    fn refresh_media(&mut self) {
        self.media = media::probe(self.resolver.as_ref(), &self.story.active().media);
    }
}
