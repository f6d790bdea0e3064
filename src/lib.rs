//! TUI Blockfall (workspace facade crate).
//!
//! Re-exports the member crates under `tui_blockfall::{core,engine,input,term,types}`
//! and hosts the binary's log setup and snapshot recorder.

pub mod logging;
pub mod record;

pub use tui_blockfall_core as core;
pub use tui_blockfall_engine as engine;
pub use tui_blockfall_input as input;
pub use tui_blockfall_term as term;
pub use tui_blockfall_types as types;
