//! Synthetic key release for terminals without release events.
//!
//! Most terminals only report presses (plus auto-repeat presses while a key is
//! held). Without a release, a tapped down key would leave the game in fast
//! drop forever. [`ReleaseTracker`] remembers when each held key was last seen
//! and reports it released once it goes quiet for longer than the timeout.
//!
//! The timeout must exceed the OS auto-repeat delay, otherwise the first
//! repeat of a held key arrives after the synthetic release and counts as a
//! new press.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;

use crate::types::{Key, KEY_RELEASE_TIMEOUT_MS};

#[derive(Debug, Clone)]
pub struct ReleaseTracker {
    held: ArrayVec<(Key, Instant), 4>,
    timeout: Duration,
}

impl ReleaseTracker {
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_millis(KEY_RELEASE_TIMEOUT_MS))
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            held: ArrayVec::new(),
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Record a press or auto-repeat of `key` at `now`
    pub fn press(&mut self, key: Key, now: Instant) {
        match self.held.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = now,
            None => {
                let _ = self.held.try_push((key, now));
            }
        }
    }

    /// Forget `key` after a real release event
    pub fn release(&mut self, key: Key) {
        self.held.retain(|(k, _)| *k != key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.iter().any(|(k, _)| *k == key)
    }

    /// Remove and return every key quiet for longer than the timeout
    pub fn expired(&mut self, now: Instant) -> ArrayVec<Key, 4> {
        let timeout = self.timeout;
        let mut released = ArrayVec::new();
        self.held.retain(|(key, seen)| {
            if now.saturating_duration_since(*seen) > timeout {
                released.push(*key);
                false
            } else {
                true
            }
        });
        released
    }

    /// Earliest time a held key could expire
    pub fn next_deadline(&self) -> Option<Instant> {
        self.held.iter().map(|(_, seen)| *seen + self.timeout).min()
    }
}

impl Default for ReleaseTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_released_after_timeout() {
        let t0 = Instant::now();
        let mut tracker = ReleaseTracker::new();
        tracker.press(Key::Down, t0);

        assert!(tracker.expired(t0 + Duration::from_millis(700)).is_empty());
        let released = tracker.expired(t0 + Duration::from_millis(701));
        assert_eq!(released.as_slice(), &[Key::Down]);
        assert!(!tracker.is_held(Key::Down));
    }

    #[test]
    fn test_repeat_refreshes_deadline() {
        let t0 = Instant::now();
        let mut tracker = ReleaseTracker::with_timeout(Duration::from_millis(50));
        tracker.press(Key::Left, t0);
        tracker.press(Key::Left, t0 + Duration::from_millis(40));

        assert!(tracker.expired(t0 + Duration::from_millis(80)).is_empty());
        assert_eq!(
            tracker.next_deadline(),
            Some(t0 + Duration::from_millis(90))
        );
    }

    #[test]
    fn test_held_key_survives_auto_repeat_delay() {
        let t0 = Instant::now();
        let mut tracker = ReleaseTracker::new();
        tracker.press(Key::Left, t0);

        // First repeat after a 500 ms delay, then every 33 ms.
        let mut released = 0;
        for step in 0..45u64 {
            let now = t0 + Duration::from_millis(500 + step * 33);
            released += tracker.expired(now).len();
            tracker.press(Key::Left, now);
        }
        assert_eq!(released, 0);
        assert!(tracker.is_held(Key::Left));
    }

    #[test]
    fn test_real_release_is_not_reported_again() {
        let t0 = Instant::now();
        let mut tracker = ReleaseTracker::new();
        tracker.press(Key::Up, t0);
        tracker.press(Key::Right, t0);
        tracker.release(Key::Up);

        let released = tracker.expired(t0 + Duration::from_secs(1));
        assert_eq!(released.as_slice(), &[Key::Right]);
        assert_eq!(tracker.next_deadline(), None);
    }
}
