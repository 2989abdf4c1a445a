//! Strictly Connect - terminal front-end
//!
//! Renders the board, reads moves from stdin and drives the random
//! opponent. All rules live in the `strictly_connect` engine.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod console;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{BoardArgs, Cli, Command};
use strictly_connect::{Config, RandomPolicy};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli.board)?;
    info!(side = config.side(), win_length = config.win_length(), "Starting");

    let policy = match cli.board.seed {
        Some(seed) => RandomPolicy::seeded(seed),
        None => RandomPolicy::new(),
    };

    match cli.command {
        Command::Play { delay_ms } => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            console::play(
                config,
                policy,
                std::time::Duration::from_millis(delay_ms),
                stdin.lock(),
                stdout.lock(),
            )
        }
        Command::Simulate { games } => {
            let tally = console::simulate(config, policy, games)?;
            println!("{}", tally);
            Ok(())
        }
    }
}

/// Builds the board config from the file (if any), then applies flag overrides.
fn resolve_config(args: &BoardArgs) -> Result<Config> {
    let base = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => Config::default(),
    };
    debug!(?base, "Base config");

    let side = args.size.unwrap_or(base.side());
    let win_length = args.win_length.unwrap_or(base.win_length());
    Config::new(side, win_length).context("board flags")
}
