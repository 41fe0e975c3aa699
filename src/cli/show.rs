//! `storymap show` command implementation.

use crate::catalog::{Catalog, GeoPoint};
use crate::config::Config;
use crate::media::{self, FsMediaResolver, MediaResolver, MediaStatus};
use crate::story::{SelectionController, StoryView};
use std::io::{self, Write};
use std::sync::Arc;

pub fn run(config: &Config, catalog: Arc<Catalog>, id: usize, json: bool) -> anyhow::Result<()> {
    let resolver = FsMediaResolver::new(&config.media.dir);
    let stdout = io::stdout();
    write(&mut stdout.lock(), config, catalog, &resolver, id, json)
}

fn write(
    out: &mut impl Write,
    config: &Config,
    catalog: Arc<Catalog>,
    resolver: &dyn MediaResolver,
    id: usize,
    json: bool,
) -> anyhow::Result<()> {
    let mut story = SelectionController::with_tolerance(catalog, config.story.click_tolerance);
    story.jump(id)?;
    let view = story.view();
    let media = media::probe(resolver, &view.active.media);

    if json {
        #[derive(serde::Serialize)]
        struct Output<'a> {
            view: StoryView<'a>,
            media: MediaStatus,
        }

        let output = Output { view, media };
        writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        return Ok(());
    }

    print_view(out, &view, &media)
}

pub(crate) fn print_view(
    out: &mut impl Write,
    view: &StoryView<'_>,
    media: &MediaStatus,
) -> anyhow::Result<()> {
    let record = view.active;
    writeln!(out, "{} [{}]", record.title, view.progress)?;
    if !record.subtitle.is_empty() {
        writeln!(out, "{}", record.subtitle)?;
    }
    writeln!(out, "  Location: {} (zoom {})", record.location, record.zoom)?;
    writeln!(out, "  Image: {}", media.display_message())?;
    writeln!(out)?;
    writeln!(out, "  {}", record.summary)?;
    writeln!(out)?;
    for (label, text) in [
        ("Habitat", &record.habitat),
        ("Population", &record.population_trend),
        ("Threats", &record.threats),
        ("About", &record.biography),
    ] {
        if !text.is_empty() {
            writeln!(out, "  {:<11} {}", format!("{}:", label), text)?;
        }
    }
    writeln!(out)?;
    writeln!(out, "  Markers:")?;
    for marker in &view.markers {
        writeln!(
            out,
            "  {} {} {:<28} {}",
            if marker.active { "▶" } else { " " },
            marker.icon.symbol(),
            marker.title,
            fmt_point(marker.location)
        )?;
    }
    Ok(())
}

fn fmt_point(p: GeoPoint) -> String {
    format!("({:.2}, {:.2})", p.lat, p.lng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogError;
    use crate::media::MediaError;

    struct NoMedia;

    impl MediaResolver for NoMedia {
        fn resolve(&self, reference: &str) -> Result<Vec<u8>, MediaError> {
            Err(MediaError::NotFound {
                path: reference.into(),
            })
        }
    }

    fn builtin() -> Arc<Catalog> {
        Arc::new(Catalog::builtin().unwrap())
    }

    #[test]
    fn test_show_text_with_missing_image() {
        let mut out = Vec::new();
        write(&mut out, &Config::default(), builtin(), &NoMedia, 1, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Giant Panda [2 / 8]"));
        assert!(text.contains("Image unavailable: giant-panda.jpg not found"));
        assert_eq!(text.matches('▶').count(), 1);
    }

    #[test]
    fn test_show_json() {
        let mut out = Vec::new();
        write(&mut out, &Config::default(), builtin(), &NoMedia, 4, true).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["view"]["active"]["id"], 4);
        assert_eq!(value["view"]["progress"]["position"], 5);
        assert_eq!(value["view"]["markers"][4]["active"], true);
        assert_eq!(value["media"]["status"], "unavailable");
    }

    #[test]
    fn test_show_unknown_id() {
        let mut out = Vec::new();
        let err = write(&mut out, &Config::default(), builtin(), &NoMedia, 99, false).unwrap_err();
        assert_eq!(
            err.downcast_ref::<CatalogError>(),
            Some(&CatalogError::OutOfRange { id: 99, len: 8 })
        );
        assert!(out.is_empty());
    }
}
