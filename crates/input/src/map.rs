//! Key mapping from terminal events to game input.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::Key;

/// Edge of a directional key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Down,
    Up,
}

/// A terminal key event translated for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(Key, KeyState),
    /// Enter: start when idle, stop when playing. Resolved by the caller.
    StartStop,
    TogglePause,
    Quit,
}

/// Map a directional key code (arrows, hjkl, wasd).
pub fn map_key_code(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => Some(Key::Left),
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => Some(Key::Right),
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => Some(Key::Down),
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => Some(Key::Up),
        _ => None,
    }
}

/// Map a keyboard event.
///
/// Press and auto-repeat both become [`KeyState::Down`]; the game ignores the
/// repeats itself. Control keys only react to the initial press.
pub fn map_key_event(event: KeyEvent) -> Option<InputEvent> {
    if should_quit(event) {
        return (event.kind == KeyEventKind::Press).then_some(InputEvent::Quit);
    }

    if let Some(key) = map_key_code(event.code) {
        let state = match event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => KeyState::Down,
            KeyEventKind::Release => KeyState::Up,
        };
        return Some(InputEvent::Key(key, state));
    }

    if event.kind != KeyEventKind::Press {
        return None;
    }

    match event.code {
        KeyCode::Enter => Some(InputEvent::StartStop),
        KeyCode::Char('p' | 'P') => Some(InputEvent::TogglePause),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
