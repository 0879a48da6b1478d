use crate::config::BoardConfig;
use crate::error::ConfigError;

use super::board::DropError;
use super::player::Player;
use super::state::{GameState, Phase};

/// Why a `play` call was refused. These are ordinary outcomes a caller
/// branches on, not errors: a rejected call leaves the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RejectReason {
    #[error("column is out of range")]
    InvalidColumn,

    #[error("column is full")]
    ColumnFull,

    #[error("game is already over")]
    GameOver,
}

impl From<DropError> for RejectReason {
    fn from(err: DropError) -> Self {
        match err {
            DropError::InvalidColumn => RejectReason::InvalidColumn,
            DropError::ColumnFull => RejectReason::ColumnFull,
        }
    }
}

/// What a successful placement led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The placed piece completed a four-in-a-row; the game is over.
    Win,
    /// The placed piece filled the board with no alignment; the game is over.
    Tie,
    /// The game goes on; it is `next_player`'s turn.
    Continue { next_player: Player },
}

/// Result of a `play` call: everything a frontend needs to render the move
/// (or report why nothing happened) without re-deriving game logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    Placed {
        row: usize,
        column: usize,
        player: Player,
        outcome: Outcome,
    },
    Rejected(RejectReason),
}

/// The sole authority on legal moves, board mutation, and outcome detection.
///
/// Owns a single [`GameState`] and mediates all mutation through [`play`]
/// and [`reset`]. One engine instance runs one game at a time; independent
/// games need independent instances.
///
/// [`play`]: GameEngine::play
/// [`reset`]: GameEngine::reset
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: BoardConfig,
    state: GameState,
}

impl GameEngine {
    /// Create an engine for a fresh game with the given board dimensions.
    ///
    /// Zero width or height is a configuration error, reported here rather
    /// than discovered mid-game.
    pub fn new(config: BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(GameEngine {
            config,
            state: GameState::initial(config.width, config.height),
        })
    }

    /// Engine with the standard 7x6 board.
    pub fn with_defaults() -> Self {
        GameEngine::new(BoardConfig::default()).expect("default board dimensions are valid")
    }

    /// Drop a piece for the current player into `column`.
    ///
    /// Rejected calls (`GameOver`, `InvalidColumn`, `ColumnFull`) are
    /// side-effect-free. On placement, the phase moves to `Won` or `Tied`
    /// when the game ends; otherwise the turn passes to the other player.
    pub fn play(&mut self, column: usize) -> MoveResult {
        if self.state.is_terminal() {
            return MoveResult::Rejected(RejectReason::GameOver);
        }

        let player = self.state.current_player();
        let row = match self.state.board_mut().drop_piece(column, player) {
            Ok(row) => row,
            Err(err) => return MoveResult::Rejected(err.into()),
        };

        // Win first; the tie check only runs once a win is ruled out.
        let outcome = if self.state.board().check_win(row, column) {
            self.state.set_phase(Phase::Won(player));
            Outcome::Win
        } else if self.state.board().is_full() {
            self.state.set_phase(Phase::Tied);
            Outcome::Tie
        } else {
            self.state.switch_player();
            Outcome::Continue {
                next_player: self.state.current_player(),
            }
        };

        MoveResult::Placed {
            row,
            column,
            player,
            outcome,
        }
    }

    /// Discard the current game and start a fresh one; idempotent.
    pub fn reset(&mut self) {
        self.state = GameState::initial(self.config.width, self.config.height);
    }

    /// Read-only snapshot of the current game for rendering.
    pub fn inspect(&self) -> &GameState {
        &self.state
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}
