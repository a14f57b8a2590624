use anyhow::Context;
use clap::Parser;
use spindle::config::Config;
use spindle::{logging, ui};
use std::path::PathBuf;

/// Interactive review carousel for the terminal.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path to a config file (defaults to the platform config directory).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };

    tracing::info!(reviews = config.reviews.len(), "starting carousel");
    ui::runtime::run(config)?;
    Ok(())
}
