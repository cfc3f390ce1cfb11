//! Move validation and application through the public game API.
//!
//! These tests cover the initial layout, mode selection, the order in which
//! rejected moves are reported, and the board effects of accepted moves.

use talpa::{BoardState, Cell, CellState, Game, MoveError, MoveMode, MoveRequest, Player, Winner};

fn seeded(text: &str, turn: Player) -> Game {
    Game::from_board(text.parse::<BoardState>().unwrap(), turn)
}

// =============================================================================
// Initial layout
// =============================================================================

/// Test that a new board is fully occupied in a checkerboard pattern.
#[test]
fn test_initial_layout() {
    let game = Game::new(4, 6).unwrap();

    assert_eq!(
        game.board().to_string(),
        "121212\n212121\n121212\n212121"
    );
    assert_eq!(game.turn(), Player::Player1);
    assert_eq!(game.winner(), Winner::None);
}

/// Test that both players start with the same number of pieces.
#[test]
fn test_initial_piece_counts() {
    let game = Game::new(8, 8).unwrap();
    let counts = game.board().piece_counts();

    assert_eq!(counts[Player::Player1], 32);
    assert_eq!(counts[Player::Player2], 32);
    assert_eq!(game.board().count(CellState::Empty), 0);
}

/// Test that the opening position always allows a capture.
#[test]
fn test_opening_is_capture_mode() {
    let game = Game::new(2, 2).unwrap();
    assert!(game.player_can_capture());
    assert_eq!(game.mode(), MoveMode::Capture);
}

// =============================================================================
// Accepted moves
// =============================================================================

/// Test that a capture moves the piece and empties exactly one cell.
#[test]
fn test_capture_effects() {
    let mut game = Game::new(4, 4).unwrap();
    let before = game.board().piece_counts();

    game.play(Some(Cell::new(1, 1)), Some(Cell::new(1, 2)))
        .unwrap();

    let board = game.board();
    assert_eq!(board.get(Cell::new(1, 1)), CellState::Empty);
    assert_eq!(board.get(Cell::new(1, 2)), CellState::Player1);
    assert_eq!(board.count(CellState::Empty), 1);

    let after = board.piece_counts();
    assert_eq!(after[Player::Player1], before[Player::Player1]);
    assert_eq!(after[Player::Player2], before[Player::Player2] - 1);
}

/// Test that a removal empties the origin and nothing else.
#[test]
fn test_removal_effects() {
    let mut game = seeded(
        "
        1.2
        .22
        ",
        Player::Player1,
    );
    assert_eq!(game.mode(), MoveMode::Removal);

    let result = game.play(Some(Cell::new(0, 0)), None).unwrap();

    assert_eq!(result, Winner::Player1);
    assert_eq!(game.board().to_string(), "..2\n.22");
}

/// Test that a stray destination is ignored in removal mode.
#[test]
fn test_removal_ignores_destination() {
    let mut game = seeded(
        "
        1.22
        ....
        1111
        ",
        Player::Player1,
    );
    assert!(!game.player_can_capture());

    game.play(Some(Cell::new(0, 0)), Some(Cell::new(0, 2)))
        .unwrap();

    assert_eq!(game.board().get(Cell::new(0, 0)), CellState::Empty);
    assert_eq!(game.board().get(Cell::new(0, 2)), CellState::Player2);
}

/// Test that the mode is decided by any capture on the board, not by the
/// chosen piece.
#[test]
fn test_capture_required_anywhere() {
    let mut game = seeded(
        "
        1..
        ..1
        ..2
        ",
        Player::Player1,
    );
    assert_eq!(game.mode(), MoveMode::Capture);

    // (0, 0) has nothing to capture but removal is still refused.
    assert_eq!(
        game.apply(MoveRequest::removal(Cell::new(0, 0))),
        Err(MoveError::ModeMismatch {
            expected: MoveMode::Capture
        })
    );
    assert_eq!(
        game.play(Some(Cell::new(0, 0)), None),
        Err(MoveError::MissingCell)
    );
}

// =============================================================================
// Rejected moves
// =============================================================================

/// Test that ownership is checked before bounds.
#[test]
fn test_wrong_owner_before_bounds() {
    let mut game = Game::new(4, 4).unwrap();

    let err = game
        .play(Some(Cell::new(-1, -1)), Some(Cell::new(9, 9)))
        .unwrap_err();

    assert_eq!(
        err,
        MoveError::WrongOriginOwner {
            cell: Cell::new(-1, -1),
            player: Player::Player1
        }
    );
}

/// Test that an opponent's piece cannot be moved.
#[test]
fn test_opponent_origin_rejected() {
    let mut game = Game::new(4, 4).unwrap();
    assert!(matches!(
        game.play(Some(Cell::new(0, 1)), Some(Cell::new(0, 0))),
        Err(MoveError::WrongOriginOwner { .. })
    ));
}

/// Test that missing cells are reported by the loose entry point.
#[test]
fn test_missing_cells() {
    let mut game = Game::new(4, 4).unwrap();

    assert_eq!(game.play(None, None), Err(MoveError::MissingCell));
    assert_eq!(
        game.play(Some(Cell::new(0, 0)), None),
        Err(MoveError::MissingCell)
    );
}

/// Test that a capture cannot target the board edge.
#[test]
fn test_destination_off_board() {
    let mut game = Game::new(4, 4).unwrap();
    assert_eq!(
        game.play(Some(Cell::new(0, 0)), Some(Cell::new(0, -1))),
        Err(MoveError::OutOfBounds {
            cell: Cell::new(0, -1)
        })
    );
}

/// Test that a capture cannot land on an own piece, even diagonally.
#[test]
fn test_destination_own_piece() {
    let mut game = Game::new(4, 4).unwrap();
    assert_eq!(
        game.play(Some(Cell::new(0, 0)), Some(Cell::new(1, 1))),
        Err(MoveError::InvalidDestination {
            cell: Cell::new(1, 1)
        })
    );
}

/// Test that a capture cannot land on an empty cell.
#[test]
fn test_destination_empty() {
    let mut game = Game::new(4, 4).unwrap();
    game.play(Some(Cell::new(0, 0)), Some(Cell::new(0, 1)))
        .unwrap();

    assert_eq!(
        game.play(Some(Cell::new(1, 0)), Some(Cell::new(0, 0))),
        Err(MoveError::InvalidDestination {
            cell: Cell::new(0, 0)
        })
    );
}

/// Test that a capture must be orthogonally adjacent.
#[test]
fn test_destination_not_adjacent() {
    let mut game = Game::new(4, 4).unwrap();
    assert_eq!(
        game.play(Some(Cell::new(0, 0)), Some(Cell::new(0, 3))),
        Err(MoveError::NotAdjacent {
            origin: Cell::new(0, 0),
            destination: Cell::new(0, 3)
        })
    );
}

/// Test that no rejected move changes board, turn, or move count.
#[test]
fn test_rejections_leave_state_unchanged() {
    let mut game = Game::new(4, 4).unwrap();
    let before = game.state().clone();

    let attempts = [
        (None, None),
        (Some(Cell::new(0, 1)), Some(Cell::new(0, 0))),
        (Some(Cell::new(0, 0)), Some(Cell::new(-1, 0))),
        (Some(Cell::new(0, 0)), Some(Cell::new(1, 1))),
        (Some(Cell::new(0, 0)), Some(Cell::new(2, 1))),
    ];
    for (origin, destination) in attempts {
        assert!(game.play(origin, destination).is_err());
        assert_eq!(game.state(), &before);
    }
}

/// Test that error messages name the offending cells.
#[test]
fn test_error_messages() {
    let err = MoveError::NotAdjacent {
        origin: Cell::new(0, 0),
        destination: Cell::new(2, 0),
    };
    assert_eq!(
        err.to_string(),
        "destination (2, 0) is not orthogonally adjacent to origin (0, 0)"
    );

    let err = MoveError::ModeMismatch {
        expected: MoveMode::Removal,
    };
    assert_eq!(err.to_string(), "Removal move required this turn");
}
