mod cli;
mod commands;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;
use gedcal_core::config::{OutputFormat, load_config};

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut settings = load_config(cli.config.as_deref())?;
    logging::init(cli.verbose, &settings.logging.level);
    tracing::debug!(?settings, "Configuration loaded");

    if cli.json {
        settings.output.format = OutputFormat::Json;
    }
    commands::run(cli.command, &settings)
}
