//! Grid coordinates.
//!
//! A `Cell` is a plain `(row, col)` value. Coordinates are signed so the
//! neighbours of an edge cell can be represented and then rejected by
//! `BoardState::is_on_board`.

use serde::{Deserialize, Serialize};

/// Orthogonal grid coordinate.
///
/// Two cells are equal iff both coordinates match.
///
/// ```
/// use talpa::core::Cell;
///
/// let cell = Cell::new(2, 3);
/// assert_eq!(cell.neighbors()[0], Cell::new(1, 3));
/// assert!(cell.is_adjacent(Cell::new(2, 4)));
/// assert!(!cell.is_adjacent(Cell::new(3, 4)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    /// Create a new cell.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The 4 orthogonal neighbours in the fixed order up, down, left, right.
    ///
    /// Neighbours may lie off the board.
    #[must_use]
    pub const fn neighbors(self) -> [Cell; 4] {
        [
            Cell::new(self.row - 1, self.col),
            Cell::new(self.row + 1, self.col),
            Cell::new(self.row, self.col - 1),
            Cell::new(self.row, self.col + 1),
        ]
    }

    /// Check if `other` is one of the 4 orthogonal neighbours.
    #[must_use]
    pub fn is_adjacent(self, other: Cell) -> bool {
        self.neighbors().contains(&other)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
