//! Capture availability.
//!
//! A piece can capture when an orthogonal neighbour holds an opposing piece.
//! Whether the acting player can capture anywhere decides which move mode is
//! legal this turn; it is recomputed on demand rather than stored.

use smallvec::SmallVec;

use crate::board::BoardState;
use crate::core::{Cell, Player};

/// Opposing neighbours of `cell`, in the order up, down, left, right.
///
/// Empty for an empty cell, and for a cell whose neighbours are all empty,
/// off the board or of the same owner.
#[must_use]
pub fn capture_targets(board: &BoardState, cell: Cell) -> SmallVec<[Cell; 4]> {
    let Some(own) = board.try_get(cell) else {
        return SmallVec::new();
    };
    if own.is_empty() {
        return SmallVec::new();
    }

    cell.neighbors()
        .into_iter()
        .filter(|&n| matches!(board.try_get(n), Some(s) if !s.is_empty() && s != own))
        .collect()
}

/// Check if the piece on `cell` has an opposing orthogonal neighbour.
#[must_use]
pub fn can_capture(board: &BoardState, cell: Cell) -> bool {
    !capture_targets(board, cell).is_empty()
}

/// Check if any of `player`'s pieces can capture.
#[must_use]
pub fn player_can_capture(board: &BoardState, player: Player) -> bool {
    board.pieces_of(player).any(|cell| can_capture(board, cell))
}

/// Cells holding `player`'s pieces that can capture.
pub fn capturing_pieces(board: &BoardState, player: Player) -> impl Iterator<Item = Cell> + '_ {
    board
        .pieces_of(player)
        .filter(move |&cell| can_capture(board, cell))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> BoardState {
        text.parse().unwrap()
    }

    #[test]
    fn test_initial_layout_everyone_can_capture() {
        let b = BoardState::initialize(4, 4).unwrap();
        assert!(player_can_capture(&b, Player::Player1));
        assert!(player_can_capture(&b, Player::Player2));
        assert!(can_capture(&b, Cell::new(0, 0)));
    }

    #[test]
    fn test_targets_in_neighbor_order() {
        let b = board(
            "
            .2.
            212
            .2.
            ",
        );
        let targets = capture_targets(&b, Cell::new(1, 1));
        assert_eq!(
            targets.as_slice(),
            &[Cell::new(0, 1), Cell::new(2, 1), Cell::new(1, 0), Cell::new(1, 2)]
        );
    }

    #[test]
    fn test_empty_and_same_owner_neighbors_do_not_count() {
        let b = board(
            "
            11.
            1..
            ...
            ",
        );
        assert!(!can_capture(&b, Cell::new(0, 0)));
        assert!(!player_can_capture(&b, Player::Player1));
    }

    #[test]
    fn test_diagonal_opponent_does_not_count() {
        let b = board(
            "
            1.
            .2
            ",
        );
        assert!(!player_can_capture(&b, Player::Player1));
        assert!(!player_can_capture(&b, Player::Player2));
    }

    #[test]
    fn test_empty_cell_cannot_capture() {
        let b = board(
            "
            .2
            ..
            ",
        );
        assert!(!can_capture(&b, Cell::new(0, 0)));
        assert!(capture_targets(&b, Cell::new(0, 0)).is_empty());
    }

    #[test]
    fn test_off_board_cell_has_no_targets() {
        let b = BoardState::initialize(2, 2).unwrap();
        assert!(capture_targets(&b, Cell::new(-1, 0)).is_empty());
    }

    #[test]
    fn test_capturing_pieces() {
        let b = board(
            "
            12..
            ....
            1...
            ",
        );
        let pieces: Vec<_> = capturing_pieces(&b, Player::Player1).collect();
        assert_eq!(pieces, vec![Cell::new(0, 0)]);
    }

    #[test]
    fn test_no_pieces_no_capture() {
        let b = board("..\n.2");
        assert!(!player_can_capture(&b, Player::Player1));
    }
}
