//! Conversions between engine values and plain Python values.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Cell, CellState, Player, Winner};
use crate::error::{ConfigError, MoveError};
use crate::rules::MoveMode;

/// Legal move mode, exposed as `talpa.MoveMode`.
#[pyclass(name = "MoveMode", eq, eq_int)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum PyMoveMode {
    Capture,
    Removal,
}

impl From<MoveMode> for PyMoveMode {
    fn from(mode: MoveMode) -> Self {
        match mode {
            MoveMode::Capture => PyMoveMode::Capture,
            MoveMode::Removal => PyMoveMode::Removal,
        }
    }
}

pub(crate) fn cell_from_tuple((row, col): (i32, i32)) -> Cell {
    Cell::new(row, col)
}

pub(crate) fn cell_to_tuple(cell: Cell) -> (i32, i32) {
    (cell.row, cell.col)
}

/// 0 = empty, 1 = Player 1, 2 = Player 2.
pub(crate) fn cell_state_code(state: CellState) -> i8 {
    match state {
        CellState::Empty => 0,
        CellState::Player1 => 1,
        CellState::Player2 => 2,
    }
}

pub(crate) fn player_code(player: Player) -> u8 {
    player.index() as u8 + 1
}

/// 0 = undecided, 1 / 2 = winning player, 3 = draw.
pub(crate) fn winner_code(winner: Winner) -> u8 {
    match winner {
        Winner::None => 0,
        Winner::Player1 => 1,
        Winner::Player2 => 2,
        Winner::Draw => 3,
    }
}

pub(crate) fn move_err(err: MoveError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub(crate) fn config_err(err: ConfigError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
