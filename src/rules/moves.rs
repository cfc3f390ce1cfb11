//! Move requests and move modes.
//!
//! A turn is played in exactly one of two modes:
//! - **Capture**: some piece of the acting player can capture; the move names
//!   the capturing piece and the captured one.
//! - **Removal**: no capture exists; the move names one of the player's own
//!   pieces, which leaves the board.

use serde::{Deserialize, Serialize};

use super::capture::{capture_targets, player_can_capture};
use crate::board::BoardState;
use crate::core::{Cell, Player};

/// Which kind of move is legal this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveMode {
    Capture,
    Removal,
}

impl MoveMode {
    /// The legal mode for `player` on `board`.
    #[must_use]
    pub fn for_player(board: &BoardState, player: Player) -> Self {
        if player_can_capture(board, player) {
            MoveMode::Capture
        } else {
            MoveMode::Removal
        }
    }
}

/// A single move.
///
/// ```
/// use talpa::core::Cell;
/// use talpa::rules::{MoveMode, MoveRequest};
///
/// let capture = MoveRequest::capture(Cell::new(0, 0), Cell::new(0, 1));
/// assert_eq!(capture.mode(), MoveMode::Capture);
/// assert_eq!(capture.origin(), Cell::new(0, 0));
///
/// let removal = MoveRequest::removal(Cell::new(2, 2));
/// assert_eq!(removal.destination(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveRequest {
    /// Move the piece on `origin` onto the opposing piece on `destination`.
    Capture { origin: Cell, destination: Cell },
    /// Take the piece on `origin` off the board.
    Removal { origin: Cell },
}

impl MoveRequest {
    #[must_use]
    pub const fn capture(origin: Cell, destination: Cell) -> Self {
        MoveRequest::Capture {
            origin,
            destination,
        }
    }

    #[must_use]
    pub const fn removal(origin: Cell) -> Self {
        MoveRequest::Removal { origin }
    }

    #[must_use]
    pub const fn mode(&self) -> MoveMode {
        match self {
            MoveRequest::Capture { .. } => MoveMode::Capture,
            MoveRequest::Removal { .. } => MoveMode::Removal,
        }
    }

    #[must_use]
    pub const fn origin(&self) -> Cell {
        match *self {
            MoveRequest::Capture { origin, .. } | MoveRequest::Removal { origin } => origin,
        }
    }

    #[must_use]
    pub const fn destination(&self) -> Option<Cell> {
        match *self {
            MoveRequest::Capture { destination, .. } => Some(destination),
            MoveRequest::Removal { .. } => None,
        }
    }
}

impl std::fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveRequest::Capture {
                origin,
                destination,
            } => write!(f, "{origin} x {destination}"),
            MoveRequest::Removal { origin } => write!(f, "remove {origin}"),
        }
    }
}

/// Enumerate every legal move for `player`.
///
/// Captures are listed by origin in row-major order, then by target in the
/// order up, down, left, right. In removal mode every own piece is a move.
#[must_use]
pub fn legal_moves(board: &BoardState, player: Player) -> Vec<MoveRequest> {
    match MoveMode::for_player(board, player) {
        MoveMode::Capture => board
            .pieces_of(player)
            .flat_map(|origin| {
                capture_targets(board, origin)
                    .into_iter()
                    .map(move |destination| MoveRequest::capture(origin, destination))
            })
            .collect(),
        MoveMode::Removal => board.pieces_of(player).map(MoveRequest::removal).collect(),
    }
}
