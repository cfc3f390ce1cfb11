//! Win detection: corridors of empty cells.
//!
//! Player 1 wins with a 4-connected chain of empty cells from row 0 to the
//! last row, Player 2 with one from column 0 to the last column. Players dig
//! the corridor by emptying cells; their own pieces never form it.
//!
//! ## Tie-break
//!
//! If both corridors exist after a move, the axis checked first wins. With
//! Player 1 to move, Player 2's axis is checked first; with Player 2 to move,
//! Player 1's axis is. The result is therefore fixed by the turn.
//!
//! ## Search
//!
//! Each start cell on the starting edge runs a depth-first search visiting
//! neighbours in the order up, down, left, right. The search stops at the
//! first eligible neighbour on the target edge and reports the chain of cells
//! it is standing on as the path.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::board::grid::coord;
use crate::board::BoardState;
use crate::core::{Cell, CellState, Player, Winner};

/// The two spanning directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Row 0 to the last row. Owned by Player 1.
    TopToBottom,
    /// Column 0 to the last column. Owned by Player 2.
    LeftToRight,
}

impl Axis {
    /// The axis a player wins along.
    #[must_use]
    pub const fn of(player: Player) -> Self {
        match player {
            Player::Player1 => Axis::TopToBottom,
            Player::Player2 => Axis::LeftToRight,
        }
    }

    /// The player owning this axis.
    #[must_use]
    pub const fn owner(self) -> Player {
        match self {
            Axis::TopToBottom => Player::Player1,
            Axis::LeftToRight => Player::Player2,
        }
    }

    /// Axes in the order they are checked when `turn` is to move.
    #[must_use]
    pub const fn priority(turn: Player) -> [Axis; 2] {
        match turn {
            Player::Player1 => [Axis::LeftToRight, Axis::TopToBottom],
            Player::Player2 => [Axis::TopToBottom, Axis::LeftToRight],
        }
    }

    /// Cells of the starting edge, in index order.
    fn start_cells(self, board: &BoardState) -> impl Iterator<Item = Cell> {
        let (len, horizontal) = match self {
            Axis::TopToBottom => (board.cols(), true),
            Axis::LeftToRight => (board.rows(), false),
        };
        (0..coord(len)).map(move |i| {
            if horizontal {
                Cell::new(0, i)
            } else {
                Cell::new(i, 0)
            }
        })
    }

    fn is_target(self, board: &BoardState, cell: Cell) -> bool {
        match self {
            Axis::TopToBottom => cell.row == coord(board.rows()) - 1,
            Axis::LeftToRight => cell.col == coord(board.cols()) - 1,
        }
    }
}

/// Ordered chain of empty cells from the starting edge to the target edge.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Path(Vec<Cell>);

impl Path {
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<Cell> {
        self.0.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<Cell> {
        self.0.last().copied()
    }

    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.0.contains(&cell)
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.0.iter().copied()
    }
}

impl From<Path> for Vec<Cell> {
    fn from(path: Path) -> Self {
        path.0
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A completed corridor and the player it belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corridor {
    pub winner: Player,
    pub path: Path,
}

/// Evaluate the board after a move made while `turn` was to move.
#[must_use]
pub fn evaluate(board: &BoardState, turn: Player) -> Winner {
    find_corridor(board, turn).map_or(Winner::None, |c| c.winner.as_winner())
}

/// Find the deciding corridor, checking axes in the tie-break order for `turn`.
#[must_use]
pub fn find_corridor(board: &BoardState, turn: Player) -> Option<Corridor> {
    Axis::priority(turn).into_iter().find_map(|axis| {
        corridor_along(board, axis).map(|path| Corridor {
            winner: axis.owner(),
            path,
        })
    })
}

/// Search for a corridor along one axis.
#[must_use]
pub fn corridor_along(board: &BoardState, axis: Axis) -> Option<Path> {
    // A cell whose search failed cannot reach the target edge under any later
    // prefix of the same search: every later prefix keeps the cells that
    // blocked it. Explored cells therefore stay excluded after backtracking.
    let mut explored = FxHashSet::default();

    let path = axis
        .start_cells(board)
        .filter(|&start| board.get(start).is_empty())
        .find_map(|start| {
            if explored.insert(start) {
                search_from(board, axis, start, &mut explored)
            } else {
                None
            }
        });

    trace!(?axis, found = path.is_some(), len = path.as_ref().map_or(0, Path::len), "corridor search");
    path
}

/// Depth-first search from one start cell with an explicit frame stack.
///
/// `path[i]` is the cell at depth `i` and `cursors[i]` the index of the next
/// neighbour of `path[i]` to try.
fn search_from(
    board: &BoardState,
    axis: Axis,
    start: Cell,
    explored: &mut FxHashSet<Cell>,
) -> Option<Path> {
    let mut path = vec![start];
    let mut cursors = vec![0usize];

    while let Some(&current) = path.last() {
        let depth = path.len() - 1;
        let Some(&next) = current.neighbors().get(cursors[depth]) else {
            // backtrack
            path.pop();
            cursors.pop();
            continue;
        };
        cursors[depth] += 1;

        if explored.contains(&next) || board.try_get(next) != Some(CellState::Empty) {
            continue;
        }
        if axis.is_target(board, next) {
            path.push(next);
            return Some(Path(path));
        }

        explored.insert(next);
        path.push(next);
        cursors.push(0);
    }

    None
}
