//! `agora` — drive the Agora social directory from the console.
//!
//! # Usage
//!
//! ```
//! agora demo
//! agora --format json run scenario.toml
//! agora --config agora.toml demo
//! ```

mod runner;
mod scenario;
mod settings;

use std::{io, path::PathBuf};

use agora_core::Directory;
use anyhow::Result;
use clap::{Parser, Subcommand};
use runner::{OutputFormat, Runner};
use scenario::Scenario;
use settings::Settings;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
  name = "agora",
  version,
  about = "Console driver for the Agora social directory"
)]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, value_name = "FILE", default_value = "agora.toml")]
  config: PathBuf,

  /// How events are written to stdout.
  #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
  format: OutputFormat,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Run the built-in demo scenario.
  Demo,
  /// Run a scenario loaded from a TOML file.
  Run {
    #[arg(value_name = "FILE")]
    scenario: PathBuf,
  },
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  // Logs go to stderr so stdout carries only the transcript.
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let settings = Settings::load(&cli.config)?;
  tracing::info!(
    per_user = settings.feed.per_user,
    total = settings.feed.total,
    "feed limits"
  );

  let scenario = match &cli.command {
    Command::Demo => Scenario::demo(),
    Command::Run { scenario } => Scenario::load(scenario)?,
  };

  let directory = Directory::with_limits(settings.feed);
  let mut runner = Runner::new(directory, io::stdout().lock(), cli.format);
  runner.run(&scenario.steps)?;

  tracing::info!(users = runner.directory().len(), "scenario finished");
  Ok(())
}
