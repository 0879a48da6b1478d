use super::board::Board;
use super::player::Player;

/// Lifecycle phase of a game.
///
/// `InProgress` is the sole initial state. Once the phase leaves
/// `InProgress` it is terminal: no further moves are accepted until the
/// engine is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    Won(Player),
    Tied,
}

/// Complete state of one game: the grid, whose turn it is, and the phase.
///
/// Exclusively owned by a [`GameEngine`](super::GameEngine); all mutation
/// goes through the engine's `play` and `reset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    phase: Phase,
}

impl GameState {
    /// Fresh state: empty board, Player 1 to move.
    pub(crate) fn initial(width: usize, height: usize) -> Self {
        GameState {
            board: Board::new(width, height),
            current_player: Player::One,
            phase: Phase::InProgress,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get lifecycle phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.phase != Phase::InProgress
    }

    /// Get list of legal columns (not full); empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..self.board.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub(crate) fn switch_player(&mut self) {
        self.current_player = self.current_player.other();
    }
}
