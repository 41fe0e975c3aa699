//! Storymap — an interactive story map of China's endangered wildlife
//!
//! This is the binary entry point. It parses CLI arguments and dispatches
//! to either the TUI or CLI commands.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use storymap::catalog::Catalog;
use storymap::cli::{self, Cli, Commands, Exit};
use storymap::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => Exit::Ok.into(),
        Err(err) => {
            eprintln!("Error: {err:#}");
            cli::exit_code_for_error(&err).into()
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Load configuration with proper precedence
    let config = Config::load(&args)?;

    // Log to a file, the TUI owns the screen
    let _guard = storymap::logging::init(&config.logging)?;

    let catalog = Arc::new(Catalog::builtin()?);

    match args.command {
        Some(Commands::List { json }) => cli::list::run(&catalog, json),
        Some(Commands::Show { id, json }) => cli::show::run(&config, catalog, id, json),
        Some(Commands::Replay { events, json }) => {
            cli::replay::run(&config, catalog, &events, json)
        }
        None => storymap::tui::run(config, catalog).await,
    }
}
