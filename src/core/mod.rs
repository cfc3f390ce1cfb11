//! Core value types: cells, players, cell occupants, results, configuration.
//!
//! Everything here is a small value type; the mutable state lives in
//! `board::BoardState` and `game::Game`.

pub mod cell;
pub mod config;
pub mod player;

pub use cell::Cell;
pub use config::{GameConfig, TurnPolicy, DEFAULT_SIZE, MAX_DIMENSION};
pub use player::{CellState, Player, PlayerMap, Winner};
