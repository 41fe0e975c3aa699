//! `storymap list` command implementation.

use crate::catalog::Catalog;
use std::io::{self, Write};

pub fn run(catalog: &Catalog, json: bool) -> anyhow::Result<()> {
    let stdout = io::stdout();
    write(&mut stdout.lock(), catalog, json)
}

fn write(out: &mut impl Write, catalog: &Catalog, json: bool) -> anyhow::Result<()> {
    if json {
        let records: Vec<_> = catalog.iter().collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&records)?)?;
        return Ok(());
    }

    for record in catalog.iter() {
        writeln!(
            out,
            "{:>2}  {} {:<28} {}",
            record.id,
            record.icon.symbol(),
            record.title,
            record.location
        )?;
    }

    Ok(())
}
