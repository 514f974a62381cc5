//! Golden tests for the board's grid rendering.

use tictac::{Board, GameState, Position};

#[test]
fn test_empty_board_grid() {
    let expected = concat!(
        "    |   1   |   2   |   3   |   \n",
        "----|-------|-------|-------|\n",
        "1   |       |       |       |   \n",
        "----|-------|-------|-------|\n",
        "2   |       |       |       |   \n",
        "----|-------|-------|-------|\n",
        "3   |       |       |       |   \n",
        "----|-------|-------|-------|\n",
    );
    assert_eq!(Board::new().to_string(), expected);
}

#[test]
fn test_marked_board_grid() {
    let mut game = GameState::new();
    game.place(Position::Center).unwrap(); // X
    game.place(Position::TopLeft).unwrap(); // O

    let expected = concat!(
        "    |   1   |   2   |   3   |   \n",
        "----|-------|-------|-------|\n",
        "1   |   O   |       |       |   \n",
        "----|-------|-------|-------|\n",
        "2   |       |   X   |       |   \n",
        "----|-------|-------|-------|\n",
        "3   |       |       |       |   \n",
        "----|-------|-------|-------|\n",
    );
    assert_eq!(game.board().to_string(), expected);
}
