//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the falling-block rules and all game state. It has no
//! dependency on terminals, clocks or threads:
//!
//! - **Deterministic**: the same seed produces the same blocks
//! - **Single owner**: every mutation goes through `&mut Game`, so ticks and key
//!   events can never interleave mid-transition
//! - **Total**: illegal moves are ignored, the unwinnable position ends play;
//!   nothing here returns an error
//!
//! # Module Structure
//!
//! - [`pieces`]: the fixed block catalog and the 90° rotation operator
//! - [`board`]: 10x20 grid with collision testing, stamping and row clearing
//! - [`board_state`]: state machine over the board and the falling piece
//! - [`game_state`]: the game controller (score, upcoming block, tick speed)
//! - [`keys`]: held-key set used to ignore key auto-repeat
//! - [`rng`]: uniform block selection
//! - [`snapshot`]: read-only view for rendering
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::{Game, TickOutcome};
//! use tui_blockfall_core::types::{Key, TickSpeed};
//!
//! let mut game = Game::with_seed(12345);
//! game.start();
//!
//! game.key_down(Key::Left);
//! game.key_up(Key::Left);
//! assert_eq!(game.tick(), TickOutcome::Descended);
//! assert_eq!(game.tick_speed(), Some(TickSpeed::Normal));
//! assert_eq!(game.snapshot().board.height(), 20);
//! ```

pub mod board;
pub mod board_state;
pub mod game_state;
pub mod keys;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use tui_blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Row};
pub use board_state::{ActivePiece, BoardAction, BoardState};
pub use game_state::{Game, TickOutcome};
pub use keys::HeldKeys;
pub use pieces::{rotate, shape_of, Shape};
pub use rng::{BlockSequence, BlockSource, RandomBlocks};
pub use snapshot::GameSnapshot;
