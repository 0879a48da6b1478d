//! Core Connect Four game logic: board representation, player types, and the
//! engine state machine that mediates every move.

mod board;
mod engine;
mod player;
mod state;

pub use board::{Board, Cell, DropError};
pub use engine::{GameEngine, MoveResult, Outcome, RejectReason};
pub use player::Player;
pub use state::{GameState, Phase};
