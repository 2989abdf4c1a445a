//! Command-line interface for strictly_connect.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Connect - K-in-a-row on a square board
#[derive(Parser, Debug)]
#[command(name = "strictly_connect")]
#[command(about = "Play K-in-a-row against a random opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board options shared by every command
    #[command(flatten)]
    pub board: BoardArgs,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Board configuration flags. Flags override the config file.
#[derive(Args, Debug, Clone)]
pub struct BoardArgs {
    /// TOML file with `side` and `win_length`
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Board side length
    #[arg(long, global = true)]
    pub size: Option<usize>,

    /// Marks in a row needed to win
    #[arg(long, global = true)]
    pub win_length: Option<usize>,

    /// Seed for the random opponent (random if omitted)
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play as X against the random policy
    Play {
        /// Pause before the computer moves, in milliseconds
        #[arg(long, default_value = "500")]
        delay_ms: u64,
    },

    /// Pit the random policy against itself and tally the results
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,
    },
}
