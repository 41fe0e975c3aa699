//! # Storymap
//!
//! An interactive story map of China's endangered wildlife for the terminal.
//!
//! ## Overview
//!
//! A fixed catalog of records is presented one at a time. The active record
//! is shown as a story card beside a world map, and the selection moves with
//! next/previous navigation or by clicking a record's marker on the map.
//!
//! ## Modules
//!
//! - [`catalog`] — Built-in record catalog
//! - [`story`] — Selection state machine and view model
//! - [`media`] — Local image lookup for story cards
//! - [`tui`] — Terminal user interface
//! - [`cli`] — Command-line interface commands
//! - [`config`] — Configuration loading and validation

pub mod catalog;
pub mod cli;
pub mod config;
pub mod logging;
pub mod media;
pub mod story;
pub mod tui;

// Re-export commonly used types
pub use catalog::Catalog;
pub use config::Config;
pub use story::SelectionController;
