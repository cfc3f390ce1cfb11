//! Game session bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{GameConfig, Player, TurnPolicy};
use crate::game::Game;

use super::py_core::{
    cell_from_tuple, cell_state_code, cell_to_tuple, config_err, move_err, player_code,
    winner_code, PyMoveMode,
};

/// Python wrapper for a game session.
///
/// Cells are `(row, col)` tuples. Players and results are small integers:
/// 1 and 2 for the players, 0 for "undecided".
#[pyclass(name = "Game")]
pub struct PyGame {
    inner: Game,
}

#[pymethods]
impl PyGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - rows, cols: board dimensions (cols must be even)
    /// - first_player: 1 or 2
    /// - freeze_on_win: keep the turn with the winner and reject later moves
    #[new]
    #[pyo3(signature = (rows = 8, cols = 8, first_player = 1, freeze_on_win = false))]
    fn new(rows: usize, cols: usize, first_player: u8, freeze_on_win: bool) -> PyResult<Self> {
        let first = match first_player {
            1 => Player::Player1,
            2 => Player::Player2,
            other => {
                return Err(PyValueError::new_err(format!(
                    "first_player must be 1 or 2, got {other}"
                )))
            }
        };
        let policy = if freeze_on_win {
            TurnPolicy::FreezeOnWin
        } else {
            TurnPolicy::Alternate
        };
        let config = GameConfig::new(rows, cols)
            .with_first_player(first)
            .with_turn_policy(policy);

        let inner = Game::with_config(config).map_err(config_err)?;
        Ok(Self { inner })
    }

    #[getter]
    fn rows(&self) -> usize {
        self.inner.board().rows()
    }

    #[getter]
    fn cols(&self) -> usize {
        self.inner.board().cols()
    }

    /// Player to move (1 or 2).
    #[getter]
    fn turn(&self) -> u8 {
        player_code(self.inner.turn())
    }

    /// First decided result: 0 while undecided, otherwise the winner.
    #[getter]
    fn winner(&self) -> u8 {
        winner_code(self.inner.winner())
    }

    #[getter]
    fn move_count(&self) -> u32 {
        self.inner.move_count()
    }

    /// Copy of the board as a `rows x cols` int8 array.
    fn board<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<i8>>> {
        let board = self.inner.board();
        let flat: Vec<i8> = board.cells().map(|(_, state)| cell_state_code(state)).collect();

        PyArray1::from_vec_bound(py, flat)
            .reshape([board.rows(), board.cols()])
            .map_err(|e| PyValueError::new_err(format!("{}", e)))
    }

    /// Check if the player to move must capture this turn.
    fn player_can_capture(&self) -> bool {
        self.inner.player_can_capture()
    }

    fn mode(&self) -> PyMoveMode {
        self.inner.mode().into()
    }

    fn is_over(&self) -> bool {
        self.inner.is_over()
    }

    /// Play a move.
    ///
    /// In capture mode both cells are required, in removal mode only the
    /// origin. Returns the result after the move. Raises `ValueError` on an
    /// illegal move, leaving the game unchanged.
    #[pyo3(signature = (origin, destination = None))]
    fn play(&mut self, origin: (i32, i32), destination: Option<(i32, i32)>) -> PyResult<u8> {
        self.inner
            .play(Some(cell_from_tuple(origin)), destination.map(cell_from_tuple))
            .map(winner_code)
            .map_err(move_err)
    }

    /// Pieces the piece on `cell` could capture.
    fn capture_targets(&self, cell: (i32, i32)) -> Vec<(i32, i32)> {
        self.inner
            .capture_targets(cell_from_tuple(cell))
            .into_iter()
            .map(cell_to_tuple)
            .collect()
    }

    /// Legal moves as `(origin, destination)` pairs; destination is None for
    /// removals.
    fn legal_moves(&self) -> Vec<((i32, i32), Option<(i32, i32)>)> {
        self.inner
            .legal_moves()
            .into_iter()
            .map(|m| (cell_to_tuple(m.origin()), m.destination().map(cell_to_tuple)))
            .collect()
    }

    /// The deciding corridor as a list of cells, or None while undecided.
    fn winning_path(&self) -> Option<Vec<(i32, i32)>> {
        self.inner
            .winning_path()
            .map(|path| path.iter().map(cell_to_tuple).collect())
    }

    fn __str__(&self) -> String {
        self.inner.board().to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "Game(rows={}, cols={}, turn={}, winner={})",
            self.rows(),
            self.cols(),
            self.turn(),
            self.winner()
        )
    }
}
