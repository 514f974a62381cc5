//! Tictac - two minimax opponents playing tic-tac-toe to completion.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tictac::{Cli, GameState, GameStatus, Player, Position, search};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Diagnostics go to stderr so the board output stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(status) => exit_code(status),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Plays one full game of self-play and returns the final status.
fn run(cli: &Cli) -> Result<GameStatus> {
    let mut game = GameState::new();
    print!("{}", game.board());

    while game.status() == GameStatus::InProgress {
        let mover = game.to_move();
        // The search returns None when no continuation beats its seed
        // bound, which happens when the last forced move only draws; the
        // first open square is the move in that case.
        let pos = search::best_move(&mut game)
            .or_else(|| Position::valid_moves(game.board()).first().copied())
            .context("no open squares to play")?;
        debug!(player = %mover, row = pos.row(), col = pos.col(), "placing mark");
        game.place(pos)?;

        if cli.verbose() {
            print!("{}", game.board());
        }
    }

    print!("{}", game.board());
    println!("GAME OVER\n");

    let status = game.status();
    match status {
        GameStatus::Won(Player::X) => println!("Player X wins!\n"),
        GameStatus::Won(Player::O) => println!("Player O wins!\n"),
        GameStatus::Draw => println!("It is a tie!\n"),
        GameStatus::InProgress => unreachable!("loop exits only on a finished game"),
    }

    info!(moves = game.history().len(), ?status, "game finished");
    Ok(status)
}

/// Three-way result convention: 0 for a tie, 1 when X wins, 2 when O wins.
fn exit_code(status: GameStatus) -> ExitCode {
    match status {
        GameStatus::Won(Player::X) => ExitCode::from(1),
        GameStatus::Won(Player::O) => ExitCode::from(2),
        _ => ExitCode::SUCCESS,
    }
}
