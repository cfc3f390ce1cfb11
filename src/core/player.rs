//! Players, cell occupants and game results.
//!
//! ## Player
//!
//! The two sides. Player 1 digs top to bottom, Player 2 left to right.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by a fixed array, indexed by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Whose turn it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Player1,
    Player2,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::Player1, Player::Player2];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    /// The cell state holding this player's piece.
    #[must_use]
    pub const fn piece(self) -> CellState {
        match self {
            Player::Player1 => CellState::Player1,
            Player::Player2 => CellState::Player2,
        }
    }

    /// The result reported when this player completes a corridor.
    #[must_use]
    pub const fn as_winner(self) -> Winner {
        match self {
            Player::Player1 => Winner::Player1,
            Player::Player2 => Winner::Player2,
        }
    }

    /// 0-based index (Player 1 = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::Player1 => 0,
            Player::Player2 => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Player1 => write!(f, "Player 1"),
            Player::Player2 => write!(f, "Player 2"),
        }
    }
}

/// Occupant of one board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Empty,
    Player1,
    Player2,
}

impl CellState {
    /// The player owning the piece, or `None` for an empty cell.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            CellState::Empty => None,
            CellState::Player1 => Some(Player::Player1),
            CellState::Player2 => Some(Player::Player2),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, CellState::Empty)
    }
}

impl From<Player> for CellState {
    fn from(player: Player) -> Self {
        player.piece()
    }
}

/// Result of evaluating the board after a move.
///
/// `None` means the game continues. `Draw` is part of the result space
/// consumed by front ends, but no rule of the engine produces it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    #[default]
    None,
    Player1,
    Player2,
    Draw,
}

impl Winner {
    /// The winning player, if there is one.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Winner::Player1 => Some(Player::Player1),
            Winner::Player2 => Some(Player::Player2),
            Winner::None | Winner::Draw => None,
        }
    }

    /// Check if the game has been decided.
    #[must_use]
    pub const fn is_decided(self) -> bool {
        !matches!(self, Winner::None)
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(self, player: Player) -> bool {
        self.player() == Some(player)
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Winner::None => write!(f, "undecided"),
            Winner::Player1 => write!(f, "Player 1 wins"),
            Winner::Player2 => write!(f, "Player 2 wins"),
            Winner::Draw => write!(f, "draw"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use talpa::core::{Player, PlayerMap};
///
/// let mut pieces: PlayerMap<usize> = PlayerMap::with_value(0);
/// pieces[Player::Player2] += 3;
/// assert_eq!(pieces[Player::Player1], 0);
/// assert_eq!(pieces[Player::Player2], 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::Player1), factory(Player::Player2)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Iterate over (Player, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::Player1.opponent(), Player::Player2);
        assert_eq!(Player::Player2.opponent(), Player::Player1);
    }

    #[test]
    fn test_piece_and_owner_agree() {
        for player in Player::ALL {
            assert_eq!(player.piece().owner(), Some(player));
        }
        assert_eq!(CellState::Empty.owner(), None);
        assert!(CellState::default().is_empty());
    }

    #[test]
    fn test_winner_player() {
        assert_eq!(Winner::Player1.player(), Some(Player::Player1));
        assert_eq!(Winner::Player2.player(), Some(Player::Player2));
        assert_eq!(Winner::None.player(), None);
        assert_eq!(Winner::Draw.player(), None);

        assert!(!Winner::None.is_decided());
        assert!(Winner::Draw.is_decided());
        assert!(Player::Player2.as_winner().is_winner(Player::Player2));
        assert!(!Winner::Draw.is_winner(Player::Player1));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Player::Player1), "Player 1");
        assert_eq!(format!("{}", Winner::Player2), "Player 2 wins");
    }

    #[test]
    fn test_player_map_new() {
        let map = PlayerMap::new(|p| p.index() * 10);
        assert_eq!(map[Player::Player1], 0);
        assert_eq!(map[Player::Player2], 10);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Player::Player1, &0), (Player::Player2, &10)]);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<i32> = PlayerMap::default();
        map[Player::Player1] = 4;
        map[Player::Player2] -= 1;
        assert_eq!(map[Player::Player1], 4);
        assert_eq!(map[Player::Player2], -1);
    }

    #[test]
    fn test_enum_serialization() {
        let json = serde_json::to_string(&Winner::Player2).unwrap();
        let winner: Winner = serde_json::from_str(&json).unwrap();
        assert_eq!(winner, Winner::Player2);

        let json = serde_json::to_string(&CellState::Empty).unwrap();
        let state: CellState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, CellState::Empty);
    }
}
