//! Board size and win length.

use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Side length of the board the game was designed around.
pub const DEFAULT_SIDE: usize = 9;

/// Marks in a row needed to win on the default board.
pub const DEFAULT_WIN_LENGTH: usize = 5;

/// Validated game configuration.
///
/// Holds `1 <= win_length <= side` and a cell count that fits in
/// memory addressing. Every way of obtaining a `Config`,
/// deserialization included, goes through that check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ConfigFile", into = "ConfigFile")]
pub struct Config {
    side: usize,
    win_length: usize,
}

/// Unvalidated on-disk form of [`Config`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default = "default_side")]
    side: usize,
    #[serde(default = "default_win_length")]
    win_length: usize,
}

fn default_side() -> usize {
    DEFAULT_SIDE
}

fn default_win_length() -> usize {
    DEFAULT_WIN_LENGTH
}

impl Config {
    /// Creates a configuration for an `side`x`side` board needing
    /// `win_length` marks in a row.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfiguration`] if either value is
    /// zero, `win_length > side`, or `side * side` cells cannot be allocated.
    #[instrument]
    pub fn new(side: usize, win_length: usize) -> Result<Self, ConfigError> {
        let addressable = side
            .checked_mul(side)
            .is_some_and(|cells| cells <= isize::MAX as usize);
        if side == 0 || win_length == 0 || win_length > side || !addressable {
            return Err(ConfigError::InvalidConfiguration { side, win_length });
        }
        Ok(Self { side, win_length })
    }

    /// Board side length.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Marks in a row needed to win.
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Number of cells on the board.
    pub fn cell_count(&self) -> usize {
        self.side * self.side
    }

    /// Parses a configuration from TOML text.
    ///
    /// Missing keys fall back to the 9x9, five-in-a-row defaults.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        // A bad side/win_length pair surfaces as InvalidConfiguration, not Parse.
        let raw: ConfigFile =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Self::try_from(raw)
    }

    /// Loads a configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Read(e.to_string()))?;

        let config = Self::from_toml_str(&content)?;
        info!(side = config.side, win_length = config.win_length, "Config loaded");
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            side: DEFAULT_SIDE,
            win_length: DEFAULT_WIN_LENGTH,
        }
    }
}

impl TryFrom<ConfigFile> for Config {
    type Error = ConfigError;

    fn try_from(raw: ConfigFile) -> Result<Self, Self::Error> {
        Self::new(raw.side, raw.win_length)
    }
}

impl From<Config> for ConfigFile {
    fn from(config: Config) -> Self {
        Self {
            side: config.side,
            win_length: config.win_length,
        }
    }
}
