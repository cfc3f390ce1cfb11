//! Python bindings for the Talpa engine.
//!
//! # Quick Start
//!
//! ```python
//! import talpa
//!
//! game = talpa.Game(8, 8)
//! if game.player_can_capture():
//!     winner = game.play((0, 0), (0, 1))
//! else:
//!     winner = game.play((0, 0))
//!
//! board = game.board()          # numpy int8, 0 empty / 1 / 2
//! path = game.winning_path()    # [(row, col), ...] or None
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;

use py_core::PyMoveMode;
use py_game::PyGame;

/// talpa: the corridor-digging board game.
#[pymodule]
fn talpa(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGame>()?;
    m.add_class::<PyMoveMode>()?;

    m.add("EMPTY", 0)?;
    m.add("PLAYER_1", 1)?;
    m.add("PLAYER_2", 2)?;

    Ok(())
}
