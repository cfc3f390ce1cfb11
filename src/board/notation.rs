//! Text form of a board.
//!
//! One line per row, one symbol per cell: `1` for Player 1, `2` for
//! Player 2, `.` for an empty cell. Whitespace inside a line and blank lines
//! are ignored, so boards can be written as indented literals:
//!
//! ```
//! use talpa::board::BoardState;
//! use talpa::core::{Cell, CellState};
//!
//! let board: BoardState = "
//!     1 2 .
//!     . 1 2
//! ".parse().unwrap();
//!
//! assert_eq!(board.get(Cell::new(0, 2)), CellState::Empty);
//! assert_eq!(board.to_string(), "12.\n.12");
//! ```

use std::fmt;
use std::str::FromStr;

use super::BoardState;
use crate::core::CellState;
use crate::error::BoardError;

impl CellState {
    /// Notation symbol for this state.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Player1 => '1',
            CellState::Player2 => '2',
        }
    }

    /// Parse a notation symbol.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(CellState::Empty),
            '1' => Some(CellState::Player1),
            '2' => Some(CellState::Player2),
            _ => None,
        }
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.to_rows().iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for state in row {
                write!(f, "{}", state.symbol())?;
            }
        }
        Ok(())
    }
}

impl FromStr for BoardState {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();

        for line in s.lines() {
            let row = rows.len();
            let parsed = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .enumerate()
                .map(|(col, symbol)| {
                    CellState::from_symbol(symbol)
                        .ok_or(BoardError::UnknownSymbol { symbol, row, col })
                })
                .collect::<Result<Vec<_>, _>>()?;

            if !parsed.is_empty() {
                rows.push(parsed);
            }
        }

        BoardState::try_from(rows)
    }
}
