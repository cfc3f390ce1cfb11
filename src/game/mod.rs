//! Game sessions.

pub mod session;

pub use session::{Game, GameState};
