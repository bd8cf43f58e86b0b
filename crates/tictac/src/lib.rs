//! Terminal front end for the tictac engine.
//!
//! The binary wires these pieces together:
//!
//! - [`config`]: TOML preferences merged with command-line overrides
//! - [`terminal`]: interactive play on stdin/stdout
//! - [`analyze`]: evaluate a single board
//! - [`tournament`]: computer-vs-computer series

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analyze;
pub mod cli;
pub mod config;
pub mod terminal;
pub mod tournament;

pub use analyze::{Analysis, analyze};
pub use cli::{Cli, Command};
pub use config::{Config, ConfigError, DEFAULT_CONFIG_PATH, Overrides, PlayMode};
pub use terminal::{Input, Terminal, status_line};
pub use tournament::{Tally, play_out, run_tournament};
