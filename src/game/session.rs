//! Game session: one board, one turn, one result.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info, instrument};

use crate::board::BoardState;
use crate::core::{Cell, GameConfig, Player, TurnPolicy, Winner};
use crate::error::{ConfigError, MoveError, StateError};
use crate::rules::{self, Axis, Corridor, MoveMode, MoveRequest, Path};

/// Everything that changes during a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Current board.
    pub board: BoardState,

    /// Player to move.
    pub turn: Player,

    /// First decided result, `Winner::None` while the game continues.
    pub winner: Winner,

    /// Player who was to move when the game was decided.
    pub decided_turn: Option<Player>,

    /// Number of accepted moves.
    pub move_count: u32,
}

impl GameState {
    /// Create a state for a fresh or seeded board.
    #[must_use]
    pub fn new(board: BoardState, turn: Player) -> Self {
        Self {
            board,
            turn,
            winner: Winner::None,
            decided_turn: None,
            move_count: 0,
        }
    }
}

/// A game session.
///
/// Owns the only mutable `GameState` of a game. Every operation of a front end
/// goes through this handle.
///
/// ```
/// use talpa::core::{Cell, Player, Winner};
/// use talpa::game::Game;
///
/// let mut game = Game::new(4, 4).unwrap();
/// assert_eq!(game.turn(), Player::Player1);
/// assert!(game.player_can_capture());
///
/// let result = game.play(Some(Cell::new(0, 0)), Some(Cell::new(0, 1))).unwrap();
/// assert_eq!(result, Winner::None);
/// assert_eq!(game.turn(), Player::Player2);
/// ```
///
/// Deserializing checks that configuration, board and result agree; see
/// `StateError`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "GameRecord")]
pub struct Game {
    config: GameConfig,
    state: GameState,
}

/// Saved form of a `Game`, before its parts are checked against each other.
#[derive(Deserialize)]
struct GameRecord {
    config: GameConfig,
    state: GameState,
}

impl TryFrom<GameRecord> for Game {
    type Error = StateError;

    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        let GameRecord { config, state } = record;

        let (board_rows, board_cols) = (state.board.rows(), state.board.cols());
        if (board_rows, board_cols) != (config.rows, config.cols) {
            return Err(StateError::DimensionMismatch {
                rows: config.rows,
                cols: config.cols,
                board_rows,
                board_cols,
            });
        }

        match (state.winner.player(), state.decided_turn) {
            (None, None) if state.winner == Winner::None => {}
            (Some(winner), Some(decided)) => {
                if rules::corridor_along(&state.board, Axis::of(winner)).is_none() {
                    return Err(StateError::MissingCorridor { winner });
                }
                if config.turn_policy == TurnPolicy::FreezeOnWin && state.turn != decided {
                    return Err(StateError::FrozenTurn {
                        turn: state.turn,
                        decided,
                    });
                }
            }
            _ => {
                return Err(StateError::InconsistentResult {
                    winner: state.winner,
                    decided_turn: state.decided_turn,
                })
            }
        }

        Ok(Self { config, state })
    }
}

impl Game {
    /// Start a game on a `rows x cols` board with default settings.
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        Self::with_config(GameConfig::new(rows, cols))
    }

    /// Start a game from a configuration.
    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = BoardState::initialize(config.rows, config.cols)?;
        let state = GameState::new(board, config.first_player);

        debug!(rows = config.rows, cols = config.cols, first = %config.first_player, "new game");
        Ok(Self { config, state })
    }

    /// Resume play on a seeded board.
    ///
    /// The board is taken as-is: no layout rules apply and a corridor already
    /// present is only reported once a move is made.
    #[must_use]
    pub fn from_board(board: BoardState, turn: Player) -> Self {
        let config = GameConfig::new(board.rows(), board.cols()).with_first_player(turn);
        Self {
            config,
            state: GameState::new(board, turn),
        }
    }

    /// Set the turn policy.
    #[must_use]
    pub fn with_turn_policy(mut self, policy: TurnPolicy) -> Self {
        self.config.turn_policy = policy;
        self
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Read-only view of the board.
    #[must_use]
    pub fn board(&self) -> &BoardState {
        &self.state.board
    }

    /// Independent copy of the board. O(1).
    #[must_use]
    pub fn snapshot(&self) -> BoardState {
        self.state.board.clone()
    }

    #[must_use]
    pub fn turn(&self) -> Player {
        self.state.turn
    }

    /// First decided result, `Winner::None` while undecided.
    #[must_use]
    pub fn winner(&self) -> Winner {
        self.state.winner
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.winner.is_decided()
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.state.move_count
    }

    /// Check if the player to move has a capture available.
    ///
    /// Front ends use this to expect origin + destination (capture) or an
    /// origin alone (removal).
    #[must_use]
    pub fn player_can_capture(&self) -> bool {
        rules::player_can_capture(&self.state.board, self.state.turn)
    }

    /// The legal move mode for the player to move.
    #[must_use]
    pub fn mode(&self) -> MoveMode {
        MoveMode::for_player(&self.state.board, self.state.turn)
    }

    /// Every legal move for the player to move.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<MoveRequest> {
        rules::legal_moves(&self.state.board, self.state.turn)
    }

    /// Cells the piece on `cell` could capture.
    #[must_use]
    pub fn capture_targets(&self, cell: Cell) -> SmallVec<[Cell; 4]> {
        rules::capture_targets(&self.state.board, cell)
    }

    /// Play a move from loosely supplied cells.
    ///
    /// The destination is required in capture mode and ignored in removal
    /// mode. Returns the result of evaluating the board after the move.
    #[instrument(level = "debug", skip(self))]
    pub fn play(
        &mut self,
        origin: Option<Cell>,
        destination: Option<Cell>,
    ) -> Result<Winner, MoveError> {
        self.ensure_open()?;
        let request =
            rules::resolve_request(&self.state.board, self.state.turn, origin, destination)?;
        self.commit(&request)
    }

    /// Play a move.
    ///
    /// The request must match the legal mode for this turn.
    #[instrument(level = "debug", skip(self))]
    pub fn apply(&mut self, request: MoveRequest) -> Result<Winner, MoveError> {
        self.ensure_open()?;
        self.commit(&request)
    }

    /// The corridor that decides the game on the current board.
    ///
    /// Once decided, only the winner's axis is searched: cells never refill,
    /// so the winner's corridor survives later moves even when they open the
    /// other axis too. Before that, both axes are searched in tie-break order
    /// for the current turn.
    #[must_use]
    pub fn corridor(&self) -> Option<Corridor> {
        match self.state.winner.player() {
            Some(winner) => rules::corridor_along(&self.state.board, Axis::of(winner))
                .map(|path| Corridor { winner, path }),
            None => rules::find_corridor(&self.state.board, self.state.turn),
        }
    }

    /// Cells of the deciding corridor, in order from the starting edge.
    #[must_use]
    pub fn winning_path(&self) -> Option<Path> {
        self.corridor().map(|c| c.path)
    }

    fn ensure_open(&self) -> Result<(), MoveError> {
        match self.config.turn_policy {
            TurnPolicy::FreezeOnWin if self.is_over() => Err(MoveError::GameOver {
                winner: self.state.winner,
            }),
            _ => Ok(()),
        }
    }

    fn commit(&mut self, request: &MoveRequest) -> Result<Winner, MoveError> {
        let player = self.state.turn;
        let result = rules::apply_move(&mut self.state.board, player, request)?;
        self.state.move_count += 1;

        debug!(%player, %request, ?result, "move applied");

        if result.is_decided() && !self.is_over() {
            info!(%player, winner = %result, moves = self.state.move_count, "corridor completed");
            self.state.winner = result;
            self.state.decided_turn = Some(player);
        }

        let freeze = self.config.turn_policy == TurnPolicy::FreezeOnWin && self.is_over();
        if !freeze {
            self.state.turn = player.opponent();
        }

        Ok(result)
    }
}
