//! Timing layer for the game controller
//!
//! The core crate never reads a clock. This crate pairs a [`core::Game`] with
//! an [`IntervalTimer`] whose period follows the game's tick speed, and reads
//! period overrides from the environment.
//!
//! ```
//! use std::time::Duration;
//! use tui_blockfall_engine::{EngineConfig, Session};
//!
//! let config = EngineConfig { seed: Some(7), ..EngineConfig::default() };
//! let mut session = Session::from_config(&config);
//! session.start();
//!
//! let ran = session.advance(Duration::from_millis(1_600));
//! assert_eq!(ran.len(), 2);
//! assert_eq!(session.game().active().row, 2);
//! ```

pub mod config;
pub mod session;
pub mod timer;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use config::{EngineConfig, TickPeriods};
pub use session::Session;
pub use timer::IntervalTimer;
