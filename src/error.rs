//! Error types.
//!
//! All of these describe caller input or state violations. None of them leave
//! the engine in a modified state.

use crate::core::{Cell, Player, Winner};
use crate::rules::MoveMode;

/// Errors returned by a rejected move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("origin {cell} does not hold a piece of {player}")]
    WrongOriginOwner { cell: Cell, player: Player },

    #[error("origin or destination not supplied")]
    MissingCell,

    #[error("cell {cell} is not on the board")]
    OutOfBounds { cell: Cell },

    #[error("destination {cell} does not hold an opponent piece")]
    InvalidDestination { cell: Cell },

    #[error("destination {destination} is not orthogonally adjacent to origin {origin}")]
    NotAdjacent { origin: Cell, destination: Cell },

    #[error("{expected:?} move required this turn")]
    ModeMismatch { expected: MoveMode },

    #[error("game is over: {winner}")]
    GameOver { winner: Winner },
}

/// Errors from invalid board dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board must have at least one row and one column (got {rows}x{cols})")]
    EmptyBoard { rows: usize, cols: usize },

    #[error("board of {rows}x{cols} exceeds the addressable size")]
    TooLarge { rows: usize, cols: usize },

    #[error("initial layout needs an even column count (got {cols})")]
    OddColumns { cols: usize },
}

/// Errors from restoring a saved game whose parts disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("configured {rows}x{cols} board but the saved board is {board_rows}x{board_cols}")]
    DimensionMismatch {
        rows: usize,
        cols: usize,
        board_rows: usize,
        board_cols: usize,
    },

    #[error("result {winner} does not match deciding turn {decided_turn:?}")]
    InconsistentResult {
        winner: Winner,
        decided_turn: Option<Player>,
    },

    #[error("{winner} is recorded as winner but has no corridor on the board")]
    MissingCorridor { winner: Player },

    #[error("frozen game has {turn} to move instead of {decided}")]
    FrozenTurn { turn: Player, decided: Player },
}

/// Errors from building a board out of rows or text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board has no cells")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown symbol {symbol:?} at row {row}, column {col}")]
    UnknownSymbol { symbol: char, row: usize, col: usize },

    #[error("board of {rows}x{cols} exceeds the addressable size")]
    TooLarge { rows: usize, cols: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_messages() {
        let err = MoveError::WrongOriginOwner {
            cell: Cell::new(0, 1),
            player: Player::Player1,
        };
        assert_eq!(err.to_string(), "origin (0, 1) does not hold a piece of Player 1");

        let err = MoveError::NotAdjacent {
            origin: Cell::new(0, 0),
            destination: Cell::new(1, 1),
        };
        assert_eq!(
            err.to_string(),
            "destination (1, 1) is not orthogonally adjacent to origin (0, 0)"
        );

        let err = MoveError::ModeMismatch {
            expected: MoveMode::Removal,
        };
        assert_eq!(err.to_string(), "Removal move required this turn");
    }

    #[test]
    fn test_board_error_messages() {
        let err = BoardError::Ragged {
            row: 2,
            expected: 4,
            found: 3,
        };
        assert_eq!(err.to_string(), "row 2 has 3 cells, expected 4");
    }
}
