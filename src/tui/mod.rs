//! Terminal User Interface.
//!
//! This module implements the story map using ratatui and crossterm: a
//! world map canvas with one marker per record beside a story panel for
//! the active record. Keys and left clicks drive the selection.

mod app;
mod event;
mod theme;
mod ui;
mod viewport;

pub use app::{App, Overlay};
pub use event::{hover, left_click, Action, Event, EventHandler};
pub use theme::Theme;
pub use viewport::{Cluster, MapOffset, MapViewport};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::media::FsMediaResolver;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;

pub async fn run(config: Config, catalog: Arc<Catalog>) -> anyhow::Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, &config, catalog).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &Config,
    catalog: Arc<Catalog>,
) -> anyhow::Result<()> {
    let resolver = FsMediaResolver::new(&config.media.dir);
    let mut app = App::new(config, catalog, Box::new(resolver));
    let size = terminal.size()?;
    app.resize(size.width, size.height);

    let mut events = EventHandler::new(config.tui.tick_rate);
    tracing::info!(
        records = app.story.catalog().size(),
        theme = app.theme.name,
        "Story map started"
    );

    let mut dirty = true;
    loop {
        if dirty {
            terminal.draw(|frame| ui::render(frame, &app))?;
        }

        let Some(event) = events.next().await else {
            break;
        };

        dirty = handle_event(&mut app, event);

        if app.should_quit {
            break;
        }
    }

    tracing::info!(record = app.story.current(), "Story map closed");
    Ok(())
}

/// Apply one terminal event to the app. Returns whether a redraw is needed.
fn handle_event(app: &mut App, event: Event) -> bool {
    match event {
        Event::Key(key) => app.handle_action(Action::from(key)),
        Event::Mouse(mouse) => {
            if let Some((col, row)) = left_click(&mouse) {
                app.click(col, row)
            } else if let Some((col, row)) = hover(&mouse) {
                app.hover(col, row)
            } else {
                false
            }
        }
        Event::Resize(width, height) => {
            app.resize(width, height);
            true
        }
        Event::Tick => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{MediaError, MediaResolver};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

    struct NoMedia;

    impl MediaResolver for NoMedia {
        fn resolve(&self, reference: &str) -> Result<Vec<u8>, MediaError> {
            Err(MediaError::NotFound {
                path: reference.into(),
            })
        }
    }

    fn app() -> App {
        let catalog = Arc::new(Catalog::builtin().unwrap());
        let mut app = App::new(&Config::default(), catalog, Box::new(NoMedia));
        app.resize(120, 40);
        app
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_tick_does_not_redraw() {
        let mut app = app();
        assert!(!handle_event(&mut app, Event::Tick));
    }

    #[test]
    fn test_resize_redraws() {
        let mut app = app();
        assert!(handle_event(&mut app, Event::Resize(100, 30)));
        assert_eq!(app.screen.width, 100);
        assert_eq!(app.screen.height, 30);
    }

    #[test]
    fn test_keys_redraw_only_on_change() {
        let mut app = app();
        let key = |code| Event::Key(KeyEvent::new(code, KeyModifiers::NONE));
        assert!(!handle_event(&mut app, key(KeyCode::Left)));
        assert!(handle_event(&mut app, key(KeyCode::Right)));
        assert_eq!(app.story.current(), 1);
        assert!(!handle_event(&mut app, key(KeyCode::Char('q'))));
        assert!(app.should_quit);
    }

    #[test]
    fn test_pointer_moves_update_hover() {
        let mut app = app();
        let (col, row) = app.viewport().project(&app.story.active().location).unwrap();
        assert!(handle_event(&mut app, mouse(MouseEventKind::Moved, col, row)));
        assert!(app.hover.is_some());
        assert!(!handle_event(&mut app, mouse(MouseEventKind::Moved, col, row)));
        assert!(!handle_event(&mut app, mouse(MouseEventKind::ScrollDown, col, row)));
    }
}
