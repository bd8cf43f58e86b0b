//! Command-line interface for tictac.

use crate::config::{Overrides, PlayMode};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictac_core::{Difficulty, Mark};

/// Tic-tac-toe against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Tic-tac-toe with easy, medium and unbeatable computer opponents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictac.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Opponent: another human or the computer
        #[arg(long, value_enum)]
        mode: Option<PlayMode>,

        /// Computer strength (easy, medium, hard)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Mark the computer plays (X moves first)
        #[arg(long)]
        computer_mark: Option<Mark>,

        /// Pause before each computer move, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// RNG seed for reproducible computer play
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Evaluate a board and show the computer's reply
    Analyze {
        /// Nine cells in row-major order, e.g. XX__O____
        #[arg(short, long)]
        board: String,

        /// Computer strength used for the suggestion
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Mark to suggest a move for (defaults to the side to move)
        #[arg(long)]
        computer_mark: Option<Mark>,

        /// RNG seed for easy and medium suggestions
        #[arg(long)]
        seed: Option<u64>,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Let two computer players play each other
    Tournament {
        /// Strength of the X player
        #[arg(long)]
        x: Difficulty,

        /// Strength of the O player
        #[arg(long)]
        o: Difficulty,

        /// Number of games
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// RNG seed for reproducible results
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Command {
    /// Config overrides carried by this command.
    pub fn overrides(&self) -> Overrides {
        match self {
            Command::Play {
                mode,
                difficulty,
                computer_mark,
                delay_ms,
                seed,
            } => Overrides {
                mode: *mode,
                difficulty: *difficulty,
                computer_mark: *computer_mark,
                think_delay_ms: *delay_ms,
                seed: *seed,
            },
            Command::Analyze {
                difficulty, seed, ..
            } => Overrides {
                difficulty: *difficulty,
                seed: *seed,
                ..Overrides::default()
            },
            Command::Tournament { seed, .. } => Overrides {
                seed: *seed,
                ..Overrides::default()
            },
        }
    }
}
