//! Inbound story events and their transitions.

use crate::catalog::GeoPoint;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An inbound event from any front end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StoryEvent {
    Next,
    Previous,
    MapClick { lat: f64, lng: f64 },
}

/// What an event did to the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Moved { from: usize, to: usize },
    Unchanged,
    NoMatch,
}

impl Transition {
    /// Only an actual cursor change warrants a re-render.
    pub fn needs_render(&self) -> bool {
        matches!(self, Transition::Moved { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            Transition::Moved { .. } => "moved",
            Transition::Unchanged => "unchanged",
            Transition::NoMatch => "no match",
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum EventParseError {
    #[error("Unknown event '{0}': expected next, prev or click:LAT,LNG")]
    Unknown(String),

    #[error("Invalid click coordinates '{0}': expected click:LAT,LNG")]
    Coordinates(String),

    #[error("Click coordinates out of range: {0}")]
    OutOfRange(String),
}

impl FromStr for StoryEvent {
    type Err = EventParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "next" | "n" => return Ok(StoryEvent::Next),
            "prev" | "previous" | "p" => return Ok(StoryEvent::Previous),
            _ => {}
        }

        let Some(coords) = s.strip_prefix("click:") else {
            return Err(EventParseError::Unknown(s.to_string()));
        };

        let (lat, lng): (f64, f64) = coords
            .split_once(',')
            .and_then(|(lat, lng)| Some((lat.trim().parse().ok()?, lng.trim().parse().ok()?)))
            .ok_or_else(|| EventParseError::Coordinates(s.to_string()))?;

        if !GeoPoint::new(lat, lng).is_valid() {
            return Err(EventParseError::OutOfRange(coords.to_string()));
        }

        Ok(StoryEvent::MapClick { lat, lng })
    }
}

impl fmt::Display for StoryEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoryEvent::Next => write!(f, "next"),
            StoryEvent::Previous => write!(f, "prev"),
            StoryEvent::MapClick { lat, lng } => write!(f, "click:{},{}", lat, lng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_navigation() {
        assert_eq!("next".parse::<StoryEvent>().unwrap(), StoryEvent::Next);
        assert_eq!("N".parse::<StoryEvent>().unwrap(), StoryEvent::Next);
        assert_eq!("prev".parse::<StoryEvent>().unwrap(), StoryEvent::Previous);
        assert_eq!("previous".parse::<StoryEvent>().unwrap(), StoryEvent::Previous);
        assert_eq!(" p ".parse::<StoryEvent>().unwrap(), StoryEvent::Previous);
    }

    #[test]
    fn test_parse_click() {
        assert_eq!(
            "click:30.8005,103.0002".parse::<StoryEvent>().unwrap(),
            StoryEvent::MapClick {
                lat: 30.8005,
                lng: 103.0002
            }
        );
        assert_eq!(
            "click: -12.5 , -77".parse::<StoryEvent>().unwrap(),
            StoryEvent::MapClick {
                lat: -12.5,
                lng: -77.0
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "jump".parse::<StoryEvent>(),
            Err(EventParseError::Unknown(_))
        ));
        assert!(matches!(
            "click:30.8".parse::<StoryEvent>(),
            Err(EventParseError::Coordinates(_))
        ));
        assert!(matches!(
            "click:abc,1".parse::<StoryEvent>(),
            Err(EventParseError::Coordinates(_))
        ));
        assert!(matches!(
            "click:91,0".parse::<StoryEvent>(),
            Err(EventParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_display_parses_back() {
        let event = StoryEvent::MapClick {
            lat: 29.5,
            lng: 116.0,
        };
        assert_eq!(event.to_string().parse::<StoryEvent>().unwrap(), event);
    }

    #[test]
    fn test_needs_render() {
        assert!(Transition::Moved { from: 0, to: 1 }.needs_render());
        assert!(!Transition::Unchanged.needs_render());
        assert!(!Transition::NoMatch.needs_render());
    }
}
