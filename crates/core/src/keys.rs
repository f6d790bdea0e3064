//! Held-key tracking used to tell first presses from auto-repeat.

use arrayvec::ArrayVec;

use crate::types::Key;

/// Set of directional keys currently held down.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeldKeys {
    keys: ArrayVec<Key, 4>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down. Returns `false` if the key was already held
    /// (an auto-repeat event).
    pub fn press(&mut self, key: Key) -> bool {
        if self.keys.contains(&key) {
            return false;
        }
        // Four distinct keys fit exactly; a full set already contains `key`.
        let _ = self.keys.try_push(key);
        true
    }

    /// Record a key-up. Returns `false` if the key was not held.
    pub fn release(&mut self, key: Key) -> bool {
        match self.keys.iter().position(|&k| k == key) {
            Some(idx) => {
                self.keys.swap_remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat_press_is_rejected_until_release() {
        let mut held = HeldKeys::new();
        assert!(held.press(Key::Left));
        assert!(!held.press(Key::Left));
        assert!(held.is_held(Key::Left));

        assert!(held.release(Key::Left));
        assert!(!held.release(Key::Left));
        assert!(held.press(Key::Left));
    }

    #[test]
    fn test_all_keys_can_be_held_together() {
        let mut held = HeldKeys::new();
        for key in [Key::Up, Key::Down, Key::Left, Key::Right] {
            assert!(held.press(key));
        }
        assert!(!held.press(Key::Down));

        assert!(held.release(Key::Up));
        assert!(!held.is_held(Key::Up));
        assert!(held.is_held(Key::Down));
    }
}
