//! # talpa
//!
//! Rules engine for Talpa, a two-player board game played by digging.
//!
//! Every cell starts occupied. On each turn the player to move either
//! captures an orthogonally adjacent opposing piece or, when no capture
//! exists, removes one of their own pieces. Emptied cells form corridors:
//! Player 1 wins with an empty 4-connected chain from top to bottom,
//! Player 2 with one from left to right.
//!
//! ## Design Principles
//!
//! 1. **One mutable owner**: `Game` holds the only `GameState`. Rule
//!    functions in `rules` are pure over a `BoardState` and a player.
//!
//! 2. **Fail fast, change nothing**: a rejected move reports the first
//!    violated rule as a `MoveError` and leaves board and turn untouched.
//!
//! 3. **Cheap snapshots**: board cells live in an `im` persistent vector,
//!    so `Game::snapshot` is O(1).
//!
//! ## Modules
//!
//! - `core`: cells, players, occupants, results, configuration
//! - `board`: the grid and its text notation
//! - `rules`: capture availability, move validation, corridor search
//! - `game`: the game session
//! - `error`: error types
//!
//! ## Example
//!
//! ```
//! use talpa::{Cell, Game, Winner};
//!
//! let mut game = Game::new(8, 8).unwrap();
//! let result = if game.player_can_capture() {
//!     game.play(Some(Cell::new(0, 0)), Some(Cell::new(0, 1)))
//! } else {
//!     game.play(Some(Cell::new(0, 0)), None)
//! };
//! assert_eq!(result, Ok(Winner::None));
//! ```

pub mod board;
pub mod core;
pub mod error;
pub mod game;
pub mod rules;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    Cell, CellState, GameConfig, Player, PlayerMap, TurnPolicy, Winner, DEFAULT_SIZE,
};

pub use crate::board::BoardState;

pub use crate::rules::{
    apply_move, evaluate, find_corridor, legal_moves, player_can_capture, validate_move, Axis,
    Corridor, MoveMode, MoveRequest, Path,
};

pub use crate::game::{Game, GameState};

pub use crate::error::{BoardError, ConfigError, MoveError, StateError};
