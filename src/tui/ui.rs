//! UI rendering functions.

use super::app::{App, Overlay};
use super::theme::Theme;
use super::viewport::{MapOffset, MapViewport};
use crate::catalog::Record;
use crate::media::MediaStatus;
use crate::story::StoryView;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Map, MapResolution},
        Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap,
    },
    Frame,
};

/// Screen regions, derived only from the terminal size so input handling
/// can recompute them without a frame.
struct Panes {
    header: Rect,
    map: Rect,
    story: Rect,
    footer: Rect,
}

fn panes(area: Rect) -> Panes {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
        .split(rows[1]);

    Panes {
        header: rows[0],
        map: columns[0],
        story: columns[1],
        footer: rows[2],
    }
}

fn map_block(t: &Theme, zoom: u8) -> Block<'static> {
    Block::default()
        .title(format!(" Habitat Map · zoom {} ", zoom))
        .title_style(Style::default().fg(t.text_title).bold())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(t.border))
}

/// Viewport the map pane shows for `record` on a screen of size `screen`.
pub(super) fn map_viewport(screen: Rect, record: &Record, offset: MapOffset) -> MapViewport {
    let inner = Block::default().borders(Borders::ALL).inner(panes(screen).map);
    MapViewport::with_offset(record.location, record.zoom, offset, inner)
}

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let t = &app.theme;
    let view = app.story.view();
    let panes = panes(area);

    render_header(frame, t, &view, panes.header);
    render_map(frame, t, &view, app.viewport(), panes.map);
    render_story(frame, t, &view, &app.media, panes.story);
    render_footer(frame, t, app.hover.as_deref(), app.status.as_deref(), panes.footer);

    if app.overlay == Overlay::Help {
        if let Some(help_area) = centered_rect(50, 50, area) {
            render_help_overlay(frame, t, help_area);
        }
    }
}

fn render_header(frame: &mut Frame, t: &Theme, view: &StoryView<'_>, area: Rect) {
    let title = Line::from(vec![
        Span::styled(" Storymap ", Style::default().bold().fg(t.text)),
        Span::styled("│ ", Style::default().fg(t.border_dim)),
        Span::styled(view.active.title.clone(), Style::default().fg(t.text_title)),
    ]);
    let progress = Line::from(Span::styled(
        format!("{} ", view.progress),
        Style::default().fg(t.text_dim),
    ))
    .alignment(Alignment::Right);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(t.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(title), inner);
    frame.render_widget(Paragraph::new(progress), inner);
}

fn render_map(
    frame: &mut Frame,
    t: &Theme,
    view: &StoryView<'_>,
    viewport: MapViewport,
    area: Rect,
) {
    struct Pin {
        lng: f64,
        lat: f64,
        symbol: String,
        label: Option<String>,
        style: Style,
    }

    // Markers sharing a cell are drawn once with their count. Inactive
    // pins go first so the active one is printed on top.
    let mut pins: Vec<Pin> = viewport
        .clusters(&view.markers)
        .into_iter()
        .map(|cluster| {
            let anchor = &view.markers[cluster.members[0]];
            let active = cluster
                .members
                .iter()
                .map(|&i| &view.markers[i])
                .find(|m| m.active);
            let symbol = match cluster.count() {
                1 => anchor.icon.symbol().to_string(),
                n if n < 10 => n.to_string(),
                _ => "+".to_string(),
            };
            Pin {
                lng: anchor.location.lng,
                lat: anchor.location.lat,
                symbol,
                label: active.map(|m| format!(" {}", m.title)),
                style: if active.is_some() {
                    Style::default().fg(t.marker_active).bold()
                } else if cluster.count() > 1 {
                    Style::default().fg(t.marker_inactive).bold()
                } else {
                    Style::default().fg(t.marker_inactive)
                },
            }
        })
        .collect();
    pins.sort_by_key(|p| p.label.is_some());

    let outline = t.map_outline;
    let canvas = Canvas::default()
        .block(map_block(t, viewport.zoom()))
        .marker(symbols::Marker::Braille)
        .x_bounds(viewport.x_bounds)
        .y_bounds(viewport.y_bounds)
        .paint(move |ctx| {
            ctx.draw(&Map {
                color: outline,
                resolution: MapResolution::High,
            });
            ctx.layer();
            for pin in &pins {
                let line = match &pin.label {
                    Some(label) => Line::from(vec![
                        Span::styled(pin.symbol.clone(), pin.style),
                        Span::styled(label.clone(), pin.style),
                    ]),
                    None => Line::from(Span::styled(pin.symbol.clone(), pin.style)),
                };
                ctx.print(pin.lng, pin.lat, line);
            }
        });

    frame.render_widget(canvas, area);
}

fn render_story(
    frame: &mut Frame,
    t: &Theme,
    view: &StoryView<'_>,
    media: &MediaStatus,
    area: Rect,
) {
    let record = view.active;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(t.border))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(7),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    let media_line = match media {
        MediaStatus::Available { .. } => Line::from(vec![
            Span::styled("▣ ", Style::default().fg(t.success)),
            Span::styled(media.display_message(), Style::default().fg(t.text_dim)),
        ]),
        MediaStatus::Unavailable { .. } => Line::from(Span::styled(
            format!("⚠ {}", media.display_message()),
            Style::default().fg(t.warning),
        )),
    };

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            record.title.clone(),
            Style::default().fg(t.text_title).bold(),
        )),
        Line::from(Span::styled(
            record.subtitle.clone(),
            Style::default().fg(t.text_dim),
        )),
        Line::from(""),
        media_line,
    ]);
    frame.render_widget(heading, chunks[0]);

    let card = Paragraph::new(record.summary.clone())
        .style(Style::default().fg(t.text).bg(t.card_bg))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::LEFT)
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(t.border_highlight))
                .padding(Padding::new(1, 1, 0, 0)),
        );
    frame.render_widget(card, chunks[1]);

    let label = Style::default().fg(t.key_hint).bold();
    let text = Style::default().fg(t.text);
    let mut details = Vec::new();
    for (name, value) in [
        ("Habitat", &record.habitat),
        ("Population", &record.population_trend),
        ("Threats", &record.threats),
        ("About", &record.biography),
    ] {
        if value.is_empty() {
            continue;
        }
        details.push(Line::from(Span::styled(name, label)));
        details.push(Line::from(Span::styled(value.clone(), text)));
        details.push(Line::from(""));
    }
    frame.render_widget(
        Paragraph::new(details).wrap(Wrap { trim: true }),
        chunks[2],
    );

    render_navigation(frame, t, view, chunks[3]);
}

/// Previous/next hints are hidden at the ends of the story.
fn render_navigation(frame: &mut Frame, t: &Theme, view: &StoryView<'_>, area: Rect) {
    let key = Style::default().fg(t.key_hint);
    let dim = Style::default().fg(t.text_dim);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    if view.has_previous {
        frame.render_widget(Paragraph::new(Span::styled("◀ Previous", key)), columns[0]);
    }
    frame.render_widget(
        Paragraph::new(Span::styled(view.progress.to_string(), dim)).alignment(Alignment::Center),
        columns[1],
    );
    if view.has_next {
        frame.render_widget(
            Paragraph::new(Span::styled("Next ▶", key.bold())).alignment(Alignment::Right),
            columns[2],
        );
    }
}

fn render_footer(
    frame: &mut Frame,
    t: &Theme,
    hover: Option<&str>,
    status: Option<&str>,
    area: Rect,
) {
    let key_style = Style::default().fg(t.key_hint);
    let desc_style = Style::default().fg(t.text_dim);

    let line = match (hover, status) {
        (Some(titles), _) => Line::from(Span::styled(
            format!(" {} ", titles),
            Style::default().fg(t.text_title),
        )),
        (None, Some(message)) => Line::from(vec![
            Span::styled(format!(" {} ", message), Style::default().fg(t.warning)),
            Span::styled(" Esc ", key_style),
            Span::styled("Dismiss", desc_style),
        ]),
        (None, None) => Line::from(vec![
            Span::styled(" ←/→ ", key_style),
            Span::styled("Navigate  ", desc_style),
            Span::styled("Click ", key_style),
            Span::styled("Select  ", desc_style),
            Span::styled("+/- ", key_style),
            Span::styled("Zoom  ", desc_style),
            Span::styled("wasd ", key_style),
            Span::styled("Pan  ", desc_style),
            Span::styled("Home ", key_style),
            Span::styled("Restart  ", desc_style),
            Span::styled("t ", key_style),
            Span::styled("Theme  ", desc_style),
            Span::styled("? ", key_style),
            Span::styled("Help  ", desc_style),
            Span::styled("q ", key_style),
            Span::styled("Quit", desc_style),
        ]),
    };

    let footer = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(t.border_dim)),
    );
    frame.render_widget(footer, area);
}

fn render_help_overlay(frame: &mut Frame, t: &Theme, area: Rect) {
    let key_style = Style::default().fg(t.key_hint).bold();
    let desc_style = Style::default().fg(t.text);
    let section_style = Style::default().fg(t.text_title).bold();
    let dim_style = Style::default().fg(t.text_dim);

    let section = |name: &'static str| {
        Line::from(vec![
            Span::styled("─── ", dim_style),
            Span::styled(name, section_style),
            Span::styled(" ───", dim_style),
        ])
    };

    let help_text = vec![
        Line::from(""),
        section("Story"),
        Line::from(""),
        Line::from(vec![
            Span::styled("  → l n Space ", key_style),
            Span::styled("Next", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  ← h p ", key_style),
            Span::styled("Previous", desc_style),
            Span::styled("   Home g ", key_style),
            Span::styled("Restart", desc_style),
        ]),
        Line::from(""),
        section("Map"),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Click ", key_style),
            Span::styled("a marker to jump to its species", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  Click ", key_style),
            Span::styled("a numbered cluster to step through it", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  + - ", key_style),
            Span::styled("Zoom", desc_style),
            Span::styled("   w a s d ", key_style),
            Span::styled("Pan", desc_style),
            Span::styled("   0 ", key_style),
            Span::styled("Reset view", desc_style),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled("───────────────────────", dim_style)]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  t ", key_style),
            Span::styled("Theme", desc_style),
            Span::styled("   ? ", key_style),
            Span::styled("Help", desc_style),
            Span::styled("   Esc ", key_style),
            Span::styled("Close", desc_style),
            Span::styled("   q ", key_style),
            Span::styled("Quit", desc_style),
        ]),
        Line::from(""),
    ];

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Keyboard & Mouse ")
                .title_style(Style::default().fg(t.text_title).bold())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(t.border_dim))
                .style(Style::default().bg(t.background)),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(help, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Option<Rect> {
    if area.width < 20 || area.height < 10 {
        return None;
    }

    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let popup_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);

    Some(popup_area[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::Config;
    use crate::media::{MediaError, MediaResolver};
    use crate::tui::App;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use std::sync::Arc;

    struct NoMedia;

    impl MediaResolver for NoMedia {
        fn resolve(&self, reference: &str) -> Result<Vec<u8>, MediaError> {
            Err(MediaError::NotFound {
                path: reference.into(),
            })
        }
    }

    fn app(width: u16, height: u16) -> App {
        let catalog = Arc::new(Catalog::builtin().unwrap());
        let mut app = App::new(&Config::default(), catalog, Box::new(NoMedia));
        app.resize(width, height);
        app
    }

    fn draw(app: &App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(app.screen.width, app.screen.height)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn contents(buffer: &Buffer) -> String {
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_panes_split() {
        let p = panes(Rect::new(0, 0, 120, 40));
        assert_eq!(p.header.height, 3);
        assert_eq!(p.footer.height, 3);
        assert_eq!(p.map.height, 34);
        assert_eq!(p.map.width + p.story.width, 120);
        assert!(p.map.width > p.story.width);
    }

    #[test]
    fn test_first_record_hides_previous() {
        let app = app(140, 45);
        let screen = contents(&draw(&app));
        assert!(screen.contains("1 / 8"));
        assert!(screen.contains("Next ▶"));
        assert!(!screen.contains("◀ Previous"));
        assert!(screen.contains("Image unavailable"));
    }

    #[test]
    fn test_last_record_hides_next() {
        let mut app = app(140, 45);
        for _ in 0..10 {
            app.handle_action(crate::tui::Action::Next);
        }
        let screen = contents(&draw(&app));
        assert!(screen.contains("8 / 8"));
        assert!(screen.contains("◀ Previous"));
        assert!(!screen.contains("Next ▶"));
        assert!(screen.contains("Chinese Alligator"));
    }

    #[test]
    fn test_active_marker_drawn_where_viewport_projects_it() {
        let mut app = app(140, 45);
        app.handle_action(crate::tui::Action::Next);
        let buffer = draw(&app);
        let record = app.story.active();
        let (col, row) = app.viewport().project(&record.location).unwrap();
        assert_eq!(buffer[(col, row)].symbol(), record.icon.symbol());
    }

    #[test]
    fn test_status_replaces_key_hints() {
        let mut app = app(140, 45);
        app.status = Some("No species recorded at 0.0000°N 0.0000°E".into());
        let screen = contents(&draw(&app));
        assert!(screen.contains("No species recorded"));
        assert!(screen.contains("Dismiss"));
    }

    #[test]
    fn test_hover_replaces_key_hints() {
        let mut app = app(140, 45);
        let (col, row) = app.viewport().project(&app.story.active().location).unwrap();
        assert!(app.hover(col, row));
        let screen = contents(&draw(&app));
        assert!(screen.contains("Click to view: China's Endangered Wildlife"));
    }

    #[test]
    fn test_overview_draws_cluster_count() {
        let app = app(120, 40);
        let view = app.story.view();
        let viewport = app.viewport();
        let stacked = viewport
            .clusters(&view.markers)
            .into_iter()
            .find(|c| c.count() > 1)
            .unwrap();
        let buffer = draw(&app);
        let (col, row) = stacked.cell;
        assert_eq!(buffer[(col, row)].symbol(), stacked.count().to_string());
    }

    #[test]
    fn test_map_title_shows_zoom() {
        let mut app = app(140, 45);
        app.handle_action(crate::tui::Action::ZoomIn);
        let screen = contents(&draw(&app));
        assert!(screen.contains("zoom 5"));
    }

    #[test]
    fn test_help_overlay_renders() {
        let mut app = app(140, 45);
        app.toggle_help();
        let screen = contents(&draw(&app));
        assert!(screen.contains("Keyboard & Mouse"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = app(20, 8);
        app.toggle_help();
        draw(&app);
    }
}
