//! Game configuration types.
//!
//! Callers configure a game at startup by providing a `GameConfig`:
//! - Board dimensions
//! - Which player moves first
//! - What happens to the turn once a corridor decides the game

use serde::{Deserialize, Serialize};

use super::Player;
use crate::error::ConfigError;

/// Default board height and width.
pub const DEFAULT_SIZE: usize = 8;

/// Largest accepted row or column count. Cell coordinates are `i32`.
pub const MAX_DIMENSION: usize = i32::MAX as usize;

/// Turn handling after a move that decides the game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPolicy {
    /// The turn advances after every accepted move, including the winning one.
    /// Moves are still accepted after a win; callers stop on a decided result.
    #[default]
    Alternate,
    /// The turn stays with the player who completed the corridor and further
    /// moves are rejected with `MoveError::GameOver`.
    FreezeOnWin,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of rows (>= 1).
    pub rows: usize,

    /// Number of columns (even, >= 2).
    pub cols: usize,

    /// Player to move first.
    pub first_player: Player,

    /// Turn handling once the game is decided.
    pub turn_policy: TurnPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_SIZE,
            cols: DEFAULT_SIZE,
            first_player: Player::Player1,
            turn_policy: TurnPolicy::Alternate,
        }
    }
}

impl GameConfig {
    /// Create a configuration for a `rows x cols` board.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Set the first player.
    #[must_use]
    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    /// Set the turn policy.
    #[must_use]
    pub fn with_turn_policy(mut self, policy: TurnPolicy) -> Self {
        self.turn_policy = policy;
        self
    }

    /// Check the dimensions accepted by the initial layout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_dimensions(self.rows, self.cols)
    }
}

/// Reject empty boards, boards too large to address and odd widths.
///
/// The initial layout fills columns in pairs; an odd width would leave the
/// last column empty at game start.
pub(crate) fn validate_dimensions(rows: usize, cols: usize) -> Result<(), ConfigError> {
    if rows == 0 || cols == 0 {
        return Err(ConfigError::EmptyBoard { rows, cols });
    }
    if rows > MAX_DIMENSION || cols > MAX_DIMENSION {
        return Err(ConfigError::TooLarge { rows, cols });
    }
    if cols % 2 != 0 {
        return Err(ConfigError::OddColumns { cols });
    }
    Ok(())
}
