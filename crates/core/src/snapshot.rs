//! Read-only game view handed to rendering and the snapshot recorder.

use serde::Serialize;

use crate::board::Board;
use crate::types::Block;

/// Read-only view handed to the presentation layer after each state change.
///
/// `board` already has the falling piece stamped on it while a game is being
/// played.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    pub board: Board,
    pub score: u32,
    pub upcoming: Option<Block>,
    pub playing: bool,
    pub paused: bool,
}

impl GameSnapshot {
    /// True when play ended on a spawn collision.
    ///
    /// Game over keeps the upcoming block, while stopping clears it, so the
    /// two idle states can be told apart without an extra flag.
    pub fn is_game_over(&self) -> bool {
        !self.playing && self.upcoming.is_some()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: Board::new(),
            score: 0,
            upcoming: None,
            playing: false,
            paused: false,
        }
    }
}
