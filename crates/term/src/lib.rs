//! Terminal "game renderer" module.
//!
//! Renders a [`core::GameSnapshot`] into a framebuffer and flushes changed
//! cells to the terminal with `crossterm`. No widget library involved.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{block_color, GameView, Layout, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
