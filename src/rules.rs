//! Win detection and line scoring for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player, Square};

/// Score reported when X owns a completed line; negated for O.
pub const WIN_SCORE: i32 = 10;

/// The eight winning lines, scanned row then column per index, then the
/// two diagonals. The first completed line found is the one reported.
const LINES: [[Position; 3]; 8] = [
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise. An all-empty line never matches.
pub fn winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Square::Occupied(player) => Some(player),
                Square::Empty => None,
            };
        }
    }

    None
}

/// Scores the board for the search engine.
///
/// Returns `+WIN_SCORE` if X has completed a line, `-WIN_SCORE` if O has,
/// and 0 otherwise.
pub fn score(board: &Board) -> i32 {
    match winner(board) {
        Some(Player::X) => WIN_SCORE,
        Some(Player::O) => -WIN_SCORE,
        None => 0,
    }
}
