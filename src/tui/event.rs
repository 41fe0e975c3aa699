//! Terminal input for the TUI.

use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Tick,
    Resize(u16, u16),
}

/// Polls crossterm on a dedicated thread and forwards events over a channel.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        std::thread::spawn(move || loop {
            let event = if event::poll(tick_rate).unwrap_or(false) {
                match event::read() {
                    Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                        Event::Key(key)
                    }
                    Ok(CrosstermEvent::Mouse(mouse)) => Event::Mouse(mouse),
                    Ok(CrosstermEvent::Resize(w, h)) => Event::Resize(w, h),
                    Ok(_) => continue,
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to read terminal event");
                        break;
                    }
                }
            } else {
                Event::Tick
            };

            if tx.send(event).is_err() {
                break;
            }
        });

        Self { rx }
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Next,
    Previous,
    Restart,
    Back,
    Help,
    CycleTheme,
    ZoomIn,
    ZoomOut,
    /// Shift the map by whole pan steps.
    Pan { east: i8, north: i8 },
    ResetView,
    None,
}

impl From<KeyEvent> for Action {
    fn from(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Right if key.modifiers.contains(KeyModifiers::SHIFT) => Action::Pan { east: 1, north: 0 },
            KeyCode::Left if key.modifiers.contains(KeyModifiers::SHIFT) => Action::Pan { east: -1, north: 0 },
            KeyCode::Up | KeyCode::Char('w') => Action::Pan { east: 0, north: 1 },
            KeyCode::Down | KeyCode::Char('s') => Action::Pan { east: 0, north: -1 },
            KeyCode::Char('a') => Action::Pan { east: -1, north: 0 },
            KeyCode::Char('d') => Action::Pan { east: 1, north: 0 },
            KeyCode::Char('+') | KeyCode::Char('=') => Action::ZoomIn,
            KeyCode::Char('-') | KeyCode::Char('_') => Action::ZoomOut,
            KeyCode::Char('0') => Action::ResetView,
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') | KeyCode::Char(' ') => {
                Action::Next
            }
            KeyCode::PageDown => Action::Next,
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') | KeyCode::PageUp => {
                Action::Previous
            }
            KeyCode::Home | KeyCode::Char('g') => Action::Restart,
            KeyCode::Esc => Action::Back,
            KeyCode::Char('?') => Action::Help,
            KeyCode::Char('t') => Action::CycleTheme,
            _ => Action::None,
        }
    }
}

/// Screen cell of a left-button press, if `mouse` is one.
pub fn left_click(mouse: &MouseEvent) -> Option<(u16, u16)> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some((mouse.column, mouse.row)),
        _ => None,
    }
}

/// Screen cell under the pointer, if `mouse` is a plain move.
pub fn hover(mouse: &MouseEvent) -> Option<(u16, u16)> {
    match mouse.kind {
        MouseEventKind::Moved => Some((mouse.column, mouse.row)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_keys() {
        for code in [KeyCode::Right, KeyCode::Char('l'), KeyCode::Char('n'), KeyCode::Char(' ')] {
            assert_eq!(Action::from(key(code)), Action::Next);
        }
        for code in [KeyCode::Left, KeyCode::Char('h'), KeyCode::Char('p')] {
            assert_eq!(Action::from(key(code)), Action::Previous);
        }
        assert_eq!(Action::from(key(KeyCode::Home)), Action::Restart);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(Action::from(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(
            Action::from(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
        assert_eq!(Action::from(key(KeyCode::Char('c'))), Action::None);
    }

    #[test]
    fn test_overlay_keys() {
        assert_eq!(Action::from(key(KeyCode::Char('?'))), Action::Help);
        assert_eq!(Action::from(key(KeyCode::Esc)), Action::Back);
        assert_eq!(Action::from(key(KeyCode::Char('t'))), Action::CycleTheme);
    }

    #[test]
    fn test_left_click_only() {
        let mut mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 7,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(left_click(&mouse), Some((12, 7)));

        mouse.kind = MouseEventKind::Down(MouseButton::Right);
        assert_eq!(left_click(&mouse), None);

        mouse.kind = MouseEventKind::Moved;
        assert_eq!(left_click(&mouse), None);
        assert_eq!(hover(&mouse), Some((12, 7)));

        mouse.kind = MouseEventKind::Drag(MouseButton::Left);
        assert_eq!(hover(&mouse), None);
    }

    #[test]
    fn test_map_keys() {
        assert_eq!(Action::from(key(KeyCode::Char('+'))), Action::ZoomIn);
        assert_eq!(Action::from(key(KeyCode::Char('='))), Action::ZoomIn);
        assert_eq!(Action::from(key(KeyCode::Char('-'))), Action::ZoomOut);
        assert_eq!(Action::from(key(KeyCode::Char('0'))), Action::ResetView);
        assert_eq!(Action::from(key(KeyCode::Char('w'))), Action::Pan { east: 0, north: 1 });
        assert_eq!(Action::from(key(KeyCode::Down)), Action::Pan { east: 0, north: -1 });
        assert_eq!(Action::from(key(KeyCode::Char('a'))), Action::Pan { east: -1, north: 0 });
        assert_eq!(
            Action::from(KeyEvent::new(KeyCode::Right, KeyModifiers::SHIFT)),
            Action::Pan { east: 1, north: 0 }
        );
        assert_eq!(Action::from(key(KeyCode::Right)), Action::Next);
    }
}
