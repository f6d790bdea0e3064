//! Log setup for the terminal binary.
//!
//! The game owns the terminal, so log lines never go to stdout or stderr.
//! With `BLOCKFALL_LOG_PATH` unset no subscriber is installed and every
//! `tracing` macro in the workspace is a no-op.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::{info, Level};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// File that receives log lines (appended); `None` disables logging
    pub path: Option<PathBuf>,
    pub level: Level,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: None,
            level: Level::INFO,
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path = lookup("BLOCKFALL_LOG_PATH")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);
        let level = lookup("BLOCKFALL_LOG_LEVEL")
            .and_then(|s| s.trim().parse::<Level>().ok())
            .unwrap_or(Level::INFO);
        Self { path, level }
    }
}

/// Install the global subscriber. Returns `false` when logging is disabled.
pub fn init(config: &LogConfig) -> Result<bool> {
    let Some(path) = &config.path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(LevelFilter::from_level(config.level))
        .try_init()
        .context("installing log subscriber")?;

    info!(level = %config.level, path = %path.display(), "logging initialized");
    Ok(true)
}
