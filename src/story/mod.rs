//! # Story
//!
//! Selection and navigation over a [`Catalog`](crate::catalog::Catalog).
//!
//! ```text
//! StoryEvent ──apply──▶ SelectionController ──view──▶ StoryView
//!  (key, click, CLI)       (owns the cursor)          (render contract)
//! ```
//!
//! Each session owns its own [`SelectionController`]; the catalog behind it
//! is shared read-only.

mod controller;
mod event;
mod view;

pub use controller::{CoordinateMatch, SelectionController, DEFAULT_CLICK_TOLERANCE};
pub use event::{EventParseError, StoryEvent, Transition};
pub use view::{Marker, Progress, StoryView};
