//! `storymap replay` command implementation.

use crate::catalog::Catalog;
use crate::config::Config;
use crate::media::{self, FsMediaResolver, MediaResolver};
use crate::story::{SelectionController, StoryEvent, StoryView};
use std::io::{self, Write};
use std::sync::Arc;

pub fn run(
    config: &Config,
    catalog: Arc<Catalog>,
    events: &[String],
    json: bool,
) -> anyhow::Result<()> {
    let resolver = FsMediaResolver::new(&config.media.dir);
    let stdout = io::stdout();
    write(&mut stdout.lock(), config, catalog, &resolver, events, json)
}

#[derive(serde::Serialize)]
struct Step {
    event: String,
    transition: &'static str,
    cursor: usize,
    render: bool,
}

fn write(
    out: &mut impl Write,
    config: &Config,
    catalog: Arc<Catalog>,
    resolver: &dyn MediaResolver,
    events: &[String],
    json: bool,
) -> anyhow::Result<()> {
    // Parse everything up front so a typo doesn't leave a half-applied replay.
    let events = events
        .iter()
        .map(|e| e.parse::<StoryEvent>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut story = SelectionController::with_tolerance(catalog, config.story.click_tolerance);
    let steps: Vec<Step> = events
        .into_iter()
        .map(|event| {
            let transition = story.apply(event);
            Step {
                event: event.to_string(),
                transition: transition.label(),
                cursor: story.current(),
                render: transition.needs_render(),
            }
        })
        .collect();

    let view = story.view();
    let media = media::probe(resolver, &view.active.media);

    if json {
        #[derive(serde::Serialize)]
        struct Output<'a> {
            steps: Vec<Step>,
            view: StoryView<'a>,
            media: media::MediaStatus,
        }

        let output = Output { steps, view, media };
        writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        return Ok(());
    }

    for step in &steps {
        writeln!(
            out,
            "{:<24} {:<10} -> {}",
            step.event, step.transition, step.cursor
        )?;
    }
    writeln!(out)?;
    super::show::print_view(out, &view, &media)
}
