//! Command-line configuration

use crate::game::Mark;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Invalid glyph settings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("glyph for player {player} must not be empty")]
    EmptyGlyph { player: &'static str },

    #[error("both players use the glyph {glyph:?}")]
    DuplicateGlyph { glyph: String },
}

/// Time-travel tic-tac-toe in the terminal
#[derive(Debug, Clone, Parser)]
#[command(name = "tictactoe-tty", version, about)]
pub struct Cli {
    /// Glyph shown for player one
    #[arg(long, default_value = "😠")]
    pub x_glyph: String,

    /// Glyph shown for player two
    #[arg(long, default_value = "😄")]
    pub o_glyph: String,

    /// File that receives log output (filter with RUST_LOG)
    #[arg(long, default_value = "tictactoe-tty.log")]
    pub log_file: PathBuf,

    /// Delay between steps while replaying history
    #[arg(long, default_value_t = 1000)]
    pub replay_interval_ms: u64,
}

/// Validated settings used by the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub x_glyph: String,
    pub o_glyph: String,
    pub replay_interval: Duration,
}

impl Config {
    pub fn new(x_glyph: &str, o_glyph: &str, replay_interval: Duration) -> Result<Self, ConfigError> {
        let x_glyph = x_glyph.trim();
        let o_glyph = o_glyph.trim();
        if x_glyph.is_empty() {
            return Err(ConfigError::EmptyGlyph { player: "one" });
        }
        if o_glyph.is_empty() {
            return Err(ConfigError::EmptyGlyph { player: "two" });
        }
        if x_glyph == o_glyph {
            return Err(ConfigError::DuplicateGlyph {
                glyph: x_glyph.to_string(),
            });
        }

        Ok(Config {
            x_glyph: x_glyph.to_string(),
            o_glyph: o_glyph.to_string(),
            replay_interval,
        })
    }

    /// Display text for a mark; empty cells are blank
    pub fn glyph(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x_glyph,
            Mark::O => &self.o_glyph,
            Mark::Empty => "",
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            x_glyph: "😠".to_string(),
            o_glyph: "😄".to_string(),
            replay_interval: Duration::from_secs(1),
        }
    }
}

impl TryFrom<&Cli> for Config {
    type Error = ConfigError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        Config::new(
            &cli.x_glyph,
            &cli.o_glyph,
            Duration::from_millis(cli.replay_interval_ms),
        )
    }
}
