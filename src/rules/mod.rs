//! Game rules.
//!
//! - `capture`: which pieces can capture, and whether the player can at all
//! - `moves`: move requests, move modes, legal move enumeration
//! - `engine`: validation and application of a single move
//! - `win`: corridor detection and path reconstruction
//!
//! Everything here is a pure function of a `BoardState` and the acting
//! player; turn bookkeeping lives in `game::Game`.

pub mod capture;
pub mod engine;
pub mod moves;
pub mod win;

pub use capture::{can_capture, capture_targets, capturing_pieces, player_can_capture};
pub use engine::{apply_move, resolve_request, validate_move};
pub use moves::{legal_moves, MoveMode, MoveRequest};
pub use win::{corridor_along, evaluate, find_corridor, Axis, Corridor, Path};
