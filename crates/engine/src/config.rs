//! Engine configuration read from environment variables.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `BLOCKFALL_TICK_NORMAL_MS` | 800 |
//! | `BLOCKFALL_TICK_SLIDING_MS` | 100 |
//! | `BLOCKFALL_TICK_FAST_MS` | 50 |
//! | `BLOCKFALL_SEED` | random |
//! | `BLOCKFALL_KEY_RELEASE_MS` | 700 |
//!
//! Missing, empty, zero or unparseable values fall back to the default.

use std::time::Duration;

use crate::types::{TickSpeed, KEY_RELEASE_TIMEOUT_MS};

/// Timer period for each tick speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickPeriods {
    pub normal: Duration,
    pub sliding: Duration,
    pub fast: Duration,
}

impl TickPeriods {
    /// Period for a tick speed; `None` (stopped) maps to `None`
    pub fn period(&self, speed: Option<TickSpeed>) -> Option<Duration> {
        speed.map(|s| match s {
            TickSpeed::Normal => self.normal,
            TickSpeed::Sliding => self.sliding,
            TickSpeed::Fast => self.fast,
        })
    }
}

impl Default for TickPeriods {
    fn default() -> Self {
        let ms = |s: TickSpeed| Duration::from_millis(s.default_period_ms() as u64);
        Self {
            normal: ms(TickSpeed::Normal),
            sliding: ms(TickSpeed::Sliding),
            fast: ms(TickSpeed::Fast),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub periods: TickPeriods,
    /// Block selection seed; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Quiet time before a key counts as released when the terminal does
    /// not report releases
    pub key_release: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            periods: TickPeriods::default(),
            seed: None,
            key_release: Duration::from_millis(KEY_RELEASE_TIMEOUT_MS),
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from any name → value lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = TickPeriods::default();
        let period = |name: &str, default: Duration| {
            lookup(name)
                .and_then(|s| s.trim().parse::<u64>().ok())
                .filter(|&v| v > 0)
                .map(Duration::from_millis)
                .unwrap_or(default)
        };

        let periods = TickPeriods {
            normal: period("BLOCKFALL_TICK_NORMAL_MS", defaults.normal),
            sliding: period("BLOCKFALL_TICK_SLIDING_MS", defaults.sliding),
            fast: period("BLOCKFALL_TICK_FAST_MS", defaults.fast),
        };

        let seed = lookup("BLOCKFALL_SEED").and_then(|s| s.trim().parse().ok());
        let key_release = period(
            "BLOCKFALL_KEY_RELEASE_MS",
            Duration::from_millis(KEY_RELEASE_TIMEOUT_MS),
        );

        Self {
            periods,
            seed,
            key_release,
        }
    }
}
