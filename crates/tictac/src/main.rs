//! tictac - tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tictac::{Cli, Command, Config, Terminal, analyze, run_tournament};
use tictac_core::{Board, Game};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(&cli.command.overrides());

    match cli.command {
        Command::Play { .. } => run_play(&config),
        Command::Analyze {
            board,
            computer_mark,
            json,
            ..
        } => run_analyze(&config, &board, computer_mark, json),
        Command::Tournament { x, o, games, .. } => run_series(&config, x, o, games),
    }
}

/// Interactive game on stdin/stdout.
#[instrument(skip(config))]
fn run_play(config: &Config) -> Result<()> {
    info!(mode = ?config.game_mode(), "Starting game");
    let mut game = Game::new(config.game_mode());
    let mut rng = config.rng();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut terminal = Terminal::new(stdin.lock(), stdout.lock(), config.think_delay());
    terminal.run(&mut game, &mut rng)?;
    Ok(())
}

/// Prints the outcome of a board and the computer's reply.
#[instrument(skip(config))]
fn run_analyze(
    config: &Config,
    board: &str,
    computer_mark: Option<tictac_core::Mark>,
    json: bool,
) -> Result<()> {
    let board: Board = board.parse().context("Invalid --board")?;
    let mark = computer_mark.unwrap_or_else(|| board.to_move());
    let mut rng = config.rng();

    let analysis = analyze(&board, *config.difficulty(), mark, &mut rng)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!("{}\n", board);
        print!("{}", analysis);
    }
    Ok(())
}

/// Runs a computer-vs-computer series and prints the tally.
#[instrument(skip(config))]
fn run_series(
    config: &Config,
    x: tictac_core::Difficulty,
    o: tictac_core::Difficulty,
    games: u32,
) -> Result<()> {
    let mut rng = config.rng();
    let tally = run_tournament(x, o, games, &mut rng)?;
    println!("X ({}) vs O ({}): {}", x, o, tally);
    Ok(())
}
