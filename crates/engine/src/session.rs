//! Session: the game controller wired to its interval timer.
//!
//! A `Session` is the single owner of all mutable game state. Every entry
//! point takes `&mut self`, so a tick and a key event can never run at the
//! same time; callers that want to drive it from several threads must hand it
//! to one thread (or wrap it in a mutex) and dispatch sequentially.

use std::time::Duration;

use tracing::{debug, trace};

use crate::config::{EngineConfig, TickPeriods};
use crate::core::{BlockSource, Game, GameSnapshot, RandomBlocks, TickOutcome};
use crate::timer::IntervalTimer;
use crate::types::{Intent, Key};

#[derive(Debug, Clone)]
pub struct Session<S = RandomBlocks> {
    game: Game<S>,
    timer: IntervalTimer,
    periods: TickPeriods,
}

impl Session<RandomBlocks> {
    /// Build an idle session from configuration
    pub fn from_config(config: &EngineConfig) -> Self {
        let blocks = match config.seed {
            Some(seed) => RandomBlocks::new(seed),
            None => RandomBlocks::from_entropy(),
        };
        Self::new(Game::new(blocks), config.periods)
    }
}

impl<S: BlockSource> Session<S> {
    pub fn new(game: Game<S>, periods: TickPeriods) -> Self {
        let timer = IntervalTimer::new(periods.period(game.tick_speed()));
        Self {
            game,
            timer,
            periods,
        }
    }

    pub fn game(&self) -> &Game<S> {
        &self.game
    }

    pub fn timer(&self) -> &IntervalTimer {
        &self.timer
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    /// Feed elapsed wall time and run every tick that came due.
    ///
    /// Returns the outcomes of the ticks that ran, in order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<TickOutcome> {
        self.timer.advance(elapsed);

        let mut outcomes = Vec::new();
        while self.timer.fire() {
            // The timer keeps running after `stop`; only its effect is dropped.
            if self.game.is_playing() {
                let outcome = self.game.tick();
                trace!(?outcome, "tick");
                outcomes.push(outcome);
            }
            self.sync_timer();
        }
        outcomes
    }

    /// Time until the next tick is due, `None` while the timer is stopped
    pub fn until_next_tick(&self) -> Option<Duration> {
        self.timer.until_next()
    }

    pub fn start(&mut self) {
        self.game.start();
        self.sync_timer();
    }

    pub fn toggle_pause(&mut self) {
        self.game.toggle_pause();
        self.sync_timer();
    }

    pub fn stop(&mut self) {
        self.game.stop();
        self.sync_timer();
    }

    pub fn handle(&mut self, intent: Intent) {
        self.game.handle(intent);
        self.sync_timer();
    }

    pub fn key_down(&mut self, key: Key) -> bool {
        let changed = self.game.key_down(key);
        self.sync_timer();
        changed
    }

    pub fn key_up(&mut self, key: Key) -> bool {
        let changed = self.game.key_up(key);
        self.sync_timer();
        changed
    }

    fn sync_timer(&mut self) {
        let speed = self.game.tick_speed();
        let period = self.periods.period(speed);
        if period != self.timer.period() {
            debug!(
                speed = speed.map_or("stopped", |s| s.as_str()),
                ?period,
                "tick period changed"
            );
        }
        self.timer.set_period(period);
    }
}
