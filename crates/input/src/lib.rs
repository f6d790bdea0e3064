//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into directional key edges and control intents,
//! and synthesizes key releases for terminals that never report them.

pub mod handler;
pub mod map;

pub use tui_blockfall_types as types;

pub use handler::ReleaseTracker;
pub use map::{map_key_code, map_key_event, should_quit, InputEvent, KeyState};
