//! Game state and turn discipline for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player, Square};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a winner.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {:?} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Complete game state: board, turn counter, and player to move.
///
/// The turn counter tracks how many squares have been filled (0-9). It is
/// incremented once per placed move and never reset during a game; the
/// search engine reads it for its tie check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    to_move: Player,
    turn: u8,
    status: GameStatus,
    /// Move history (positions played), serializable for replay.
    history: Vec<Position>,
}

impl GameState {
    /// Creates a new game with an empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            turn: 0,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for the search engine's apply/undo exploration.
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the number of squares filled so far.
    pub fn turn(&self) -> u8 {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// True once some row, column, or diagonal holds three identical marks.
    pub fn is_terminal(&self) -> bool {
        rules::winner(&self.board).is_some()
    }

    /// True once every square has been filled.
    pub fn is_full(&self) -> bool {
        self.turn >= 9
    }

    /// Places the current player's mark at the given position.
    ///
    /// Advances the turn counter, updates the game status, and flips the
    /// player to move.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the game has already ended and
    /// [`MoveError::SquareOccupied`] if the square is taken.
    #[instrument(skip(self), fields(player = %self.to_move, turn = self.turn))]
    pub fn place(&mut self, pos: Position) -> Result<(), MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        self.board.set(pos, Square::Occupied(self.to_move));
        self.history.push(pos);
        self.turn += 1;

        if let Some(winner) = rules::winner(&self.board) {
            self.status = GameStatus::Won(winner);
        } else if self.is_full() {
            self.status = GameStatus::Draw;
        }

        self.to_move = self.to_move.opponent();
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
