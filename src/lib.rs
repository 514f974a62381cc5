//! Tic-tac-toe played to completion between two minimax opponents.
//!
//! The crate splits into a board-state core and a search engine on top of
//! it:
//!
//! - **Board state**: [`Board`], [`Position`], and [`GameState`] hold the
//!   3x3 grid, the turn counter, and the player to move; [`rules`] answers
//!   terminal-condition queries.
//! - **Search engine**: [`search::minimax`] evaluates a position and
//!   [`search::best_move`] picks the move for the player to move,
//!   exploring hypothetical moves in place and undoing each before
//!   returning.
//!
//! The driver binary loops the two until a win or a draw, printing the
//! board as it goes.
//!
//! # Example
//!
//! ```
//! use tictac::{GameState, GameStatus, Position, search};
//!
//! let mut game = GameState::new();
//! let opening = search::best_move(&mut game).expect("open board");
//! assert_eq!(opening, Position::TopLeft);
//! game.place(opening)?;
//! assert_eq!(game.status(), GameStatus::InProgress);
//! # Ok::<(), tictac::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod game;
mod position;
pub mod rules;
pub mod search;
mod types;

pub use cli::Cli;
pub use game::{GameState, GameStatus, MoveError};
pub use position::Position;
pub use types::{Board, Player, Square};
