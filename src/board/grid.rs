//! Board state: a fixed-size grid of cell occupants.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::config::{validate_dimensions, MAX_DIMENSION};
use crate::core::{Cell, CellState, Player, PlayerMap};
use crate::error::{BoardError, ConfigError};

/// `rows x cols` grid of `CellState`.
///
/// Dimensions never change after construction, never exceed
/// `MAX_DIMENSION`, and every cell always holds exactly one state. Cells are stored row-major in an `im::Vector`, so
/// cloning a board for a snapshot is O(1).
///
/// Serialises as a list of rows.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<CellState>>", into = "Vec<Vec<CellState>>")]
pub struct BoardState {
    rows: usize,
    cols: usize,
    cells: Vector<CellState>,
}

impl BoardState {
    /// Create an all-empty board.
    ///
    /// Used to seed arbitrary positions; games start from [`initialize`].
    ///
    /// [`initialize`]: BoardState::initialize
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "Board must have at least one cell");
        assert!(
            rows <= MAX_DIMENSION && cols <= MAX_DIMENSION,
            "Board dimensions must not exceed {MAX_DIMENSION}"
        );

        Self {
            rows,
            cols,
            cells: std::iter::repeat(CellState::Empty)
                .take(rows * cols)
                .collect(),
        }
    }

    /// Create a board with the starting layout.
    ///
    /// Columns are filled in pairs: even rows get `(Player1, Player2)`, odd
    /// rows `(Player2, Player1)`. The board starts with no empty cell.
    ///
    /// ```
    /// use talpa::board::BoardState;
    /// use talpa::core::{Cell, CellState};
    ///
    /// let board = BoardState::initialize(2, 4).unwrap();
    /// assert_eq!(board.get(Cell::new(0, 0)), CellState::Player1);
    /// assert_eq!(board.get(Cell::new(1, 0)), CellState::Player2);
    /// assert_eq!(board.count(CellState::Empty), 0);
    /// ```
    pub fn initialize(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        validate_dimensions(rows, cols)?;

        let mut cells = Vector::new();
        for row in 0..rows {
            let pair = if row % 2 == 0 {
                [CellState::Player1, CellState::Player2]
            } else {
                [CellState::Player2, CellState::Player1]
            };
            for _ in 0..cols / 2 {
                cells.extend(pair);
            }
        }

        Ok(Self { rows, cols, cells })
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check if a cell lies inside the board.
    #[must_use]
    pub fn is_on_board(&self, cell: Cell) -> bool {
        self.offset(cell).is_some()
    }

    /// Get a cell's state, or `None` if it is off the board.
    #[must_use]
    pub fn try_get(&self, cell: Cell) -> Option<CellState> {
        self.offset(cell).map(|i| self.cells[i])
    }

    /// Get a cell's state.
    ///
    /// # Panics
    ///
    /// Panics if the cell is off the board. Check with [`is_on_board`] first.
    ///
    /// [`is_on_board`]: BoardState::is_on_board
    #[must_use]
    pub fn get(&self, cell: Cell) -> CellState {
        match self.try_get(cell) {
            Some(state) => state,
            None => panic!("{cell} is outside the {}x{} board", self.rows, self.cols),
        }
    }

    /// Set a cell's state.
    ///
    /// # Panics
    ///
    /// Panics if the cell is off the board.
    pub fn set(&mut self, cell: Cell, state: CellState) {
        match self.offset(cell) {
            Some(i) => {
                self.cells.set(i, state);
            }
            None => panic!("{cell} is outside the {}x{} board", self.rows, self.cols),
        }
    }

    /// Iterate over all cells row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, CellState)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &state)| (Cell::new(coord(i / cols), coord(i % cols)), state))
    }

    /// Iterate over the cells holding `player`'s pieces.
    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = Cell> + '_ {
        let piece = player.piece();
        self.cells()
            .filter(move |&(_, state)| state == piece)
            .map(|(cell, _)| cell)
    }

    /// Count the cells holding `state`.
    #[must_use]
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    /// Number of pieces each player has on the board.
    #[must_use]
    pub fn piece_counts(&self) -> PlayerMap<usize> {
        PlayerMap::new(|player| self.count(player.piece()))
    }

    /// Copy the board out as a list of rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<CellState>> {
        (0..self.rows)
            .map(|r| {
                self.cells
                    .iter()
                    .skip(r * self.cols)
                    .take(self.cols)
                    .copied()
                    .collect()
            })
            .collect()
    }

    fn offset(&self, cell: Cell) -> Option<usize> {
        let row = usize::try_from(cell.row).ok()?;
        let col = usize::try_from(cell.col).ok()?;
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }
}

/// Convert a row or column index to a coordinate.
///
/// Lossless for any index on a board, since dimensions are capped at
/// `MAX_DIMENSION`.
pub(crate) fn coord(index: usize) -> i32 {
    debug_assert!(index <= MAX_DIMENSION);
    index as i32
}

impl TryFrom<Vec<Vec<CellState>>> for BoardState {
    type Error = BoardError;

    fn try_from(rows: Vec<Vec<CellState>>) -> Result<Self, Self::Error> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(BoardError::Empty);
        }
        if rows.len() > MAX_DIMENSION || cols > MAX_DIMENSION {
            return Err(BoardError::TooLarge {
                rows: rows.len(),
                cols,
            });
        }

        let mut cells = Vector::new();
        for (row, contents) in rows.iter().enumerate() {
            if contents.len() != cols {
                return Err(BoardError::Ragged {
                    row,
                    expected: cols,
                    found: contents.len(),
                });
            }
            cells.extend(contents.iter().copied());
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }
}

impl From<BoardState> for Vec<Vec<CellState>> {
    fn from(board: BoardState) -> Self {
        board.to_rows()
    }
}
