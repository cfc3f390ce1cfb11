//! Move validation and application.
//!
//! Validation is fail-fast: the first violated rule is reported and the board
//! is only touched once every rule has passed.
//!
//! Order of checks:
//! 1. The origin holds the acting player's piece (before mode dispatch)
//! 2. The request matches the legal mode for this turn
//! 3. Capture: both cells on the board, destination holds an opponent piece,
//!    destination orthogonally adjacent to origin.
//!    Removal: origin on the board.

use super::capture::player_can_capture;
use super::moves::{MoveMode, MoveRequest};
use super::win;
use crate::board::BoardState;
use crate::core::{Cell, CellState, Player, Winner};
use crate::error::MoveError;

/// Check a move without applying it.
///
/// Returns the mode the move was played in.
pub fn validate_move(
    board: &BoardState,
    player: Player,
    request: &MoveRequest,
) -> Result<MoveMode, MoveError> {
    let origin = request.origin();
    if board.try_get(origin) != Some(player.piece()) {
        return Err(MoveError::WrongOriginOwner {
            cell: origin,
            player,
        });
    }

    let mode = MoveMode::for_player(board, player);
    if request.mode() != mode {
        return Err(MoveError::ModeMismatch { expected: mode });
    }

    match *request {
        MoveRequest::Capture {
            origin,
            destination,
        } => {
            if let Some(cell) = [origin, destination]
                .into_iter()
                .find(|&c| !board.is_on_board(c))
            {
                return Err(MoveError::OutOfBounds { cell });
            }
            if board.get(destination) != player.opponent().piece() {
                return Err(MoveError::InvalidDestination { cell: destination });
            }
            if !origin.is_adjacent(destination) {
                return Err(MoveError::NotAdjacent {
                    origin,
                    destination,
                });
            }
        }
        MoveRequest::Removal { origin } => {
            if !board.is_on_board(origin) {
                return Err(MoveError::OutOfBounds { cell: origin });
            }
        }
    }

    Ok(mode)
}

/// Validate and apply a move, then evaluate the resulting board.
///
/// The board is evaluated with `player` still to move, which fixes the
/// tie-break when both corridors open at once. The caller advances the turn.
pub fn apply_move(
    board: &mut BoardState,
    player: Player,
    request: &MoveRequest,
) -> Result<Winner, MoveError> {
    validate_move(board, player, request)?;

    match *request {
        MoveRequest::Capture {
            origin,
            destination,
        } => {
            let piece = board.get(origin);
            board.set(destination, piece);
            board.set(origin, CellState::Empty);
        }
        MoveRequest::Removal { origin } => {
            board.set(origin, CellState::Empty);
        }
    }

    Ok(win::evaluate(board, player))
}

/// Build a request from loosely supplied cells, as a pointer-driven front end
/// would collect them.
///
/// A missing origin is reported first since ownership cannot be checked
/// without one. In removal mode the destination is ignored.
pub fn resolve_request(
    board: &BoardState,
    player: Player,
    origin: Option<Cell>,
    destination: Option<Cell>,
) -> Result<MoveRequest, MoveError> {
    let origin = origin.ok_or(MoveError::MissingCell)?;
    if board.try_get(origin) != Some(player.piece()) {
        return Err(MoveError::WrongOriginOwner {
            cell: origin,
            player,
        });
    }

    if player_can_capture(board, player) {
        let destination = destination.ok_or(MoveError::MissingCell)?;
        Ok(MoveRequest::capture(origin, destination))
    } else {
        Ok(MoveRequest::removal(origin))
    }
}
