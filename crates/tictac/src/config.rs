//! Player preferences loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tictac_core::{Difficulty, GameMode, Mark};
use tracing::{debug, info, instrument};

/// File read when no `--config` is given. Optional.
pub const DEFAULT_CONFIG_PATH: &str = "tictac.toml";

/// Who the human plays against.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PlayMode {
    /// Two people at one terminal.
    #[default]
    Human,
    /// Against the computer.
    Computer,
}

/// Game preferences.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Config {
    /// Human vs human or human vs computer.
    #[serde(default)]
    mode: PlayMode,

    /// Computer strength.
    #[serde(default)]
    difficulty: Difficulty,

    /// The mark the computer plays.
    #[serde(default = "default_computer_mark")]
    computer_mark: Mark,

    /// Pause before each computer move, in milliseconds.
    #[serde(default = "default_think_delay_ms")]
    think_delay_ms: u64,

    /// Fixed RNG seed for reproducible easy and medium play.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_computer_mark() -> Mark {
    Mark::O
}

fn default_think_delay_ms() -> u64 {
    400
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: PlayMode::default(),
            difficulty: Difficulty::default(),
            computer_mark: default_computer_mark(),
            think_delay_ms: default_think_delay_ms(),
            seed: None,
        }
    }
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Mode override.
    pub mode: Option<PlayMode>,
    /// Difficulty override.
    pub difficulty: Option<Difficulty>,
    /// Computer mark override.
    pub computer_mark: Option<Mark>,
    /// Delay override in milliseconds.
    pub think_delay_ms: Option<u64>,
    /// Seed override.
    pub seed: Option<u64>,
}

impl Config {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = ?config.mode, difficulty = %config.difficulty, "Config loaded");
        Ok(config)
    }

    /// Loads `explicit` if given, otherwise [`DEFAULT_CONFIG_PATH`] if it
    /// exists, otherwise the defaults.
    ///
    /// An explicitly named file that is missing is an error.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_PATH);
                if fallback.exists() {
                    Self::from_file(fallback)
                } else {
                    debug!("No config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(mode) = overrides.mode {
            self.mode = mode;
        }
        if let Some(difficulty) = overrides.difficulty {
            self.difficulty = difficulty;
        }
        if let Some(mark) = overrides.computer_mark {
            self.computer_mark = mark;
        }
        if let Some(ms) = overrides.think_delay_ms {
            self.think_delay_ms = ms;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        self
    }

    /// The session mode these preferences describe.
    pub fn game_mode(&self) -> GameMode {
        match self.mode {
            PlayMode::Human => GameMode::HumanVsHuman,
            PlayMode::Computer => GameMode::HumanVsComputer {
                difficulty: self.difficulty,
                computer_mark: self.computer_mark,
            },
        }
    }

    /// Pause before each computer move.
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }

    /// Seeded generator if a seed is set, otherwise one seeded from the OS.
    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
