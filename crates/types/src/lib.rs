//! Core types module - shared data structures and constants
//!
//! This crate defines the vocabulary shared by the game core, the timer driver,
//! the input mapping and the terminal view. All types are plain data.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn position**: row 0, column 3
//!
//! # Tick Periods
//!
//! | Mode | Period | Description |
//! |------|--------|-------------|
//! | `Normal` | 800ms | Regular automatic descent |
//! | `Sliding` | 100ms | One grace tick before a grounded piece locks |
//! | `Fast` | 50ms | Soft drop while the down key is held |
//! | stopped | none | Game over, the timer does not fire |
//!
//! # Examples
//!
//! ```
//! use tui_blockfall_types::{Block, TickSpeed, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(Block::from_str("t"), Some(Block::T));
//! assert_eq!(Block::ALL.len(), 7);
//! assert_eq!(TickSpeed::Sliding.default_period_ms(), 100);
//! assert_eq!((BOARD_WIDTH, BOARD_HEIGHT), (10, 20));
//! ```

use serde::Serialize;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: usize = 20;

/// Row offset at which every new piece appears
pub const SPAWN_ROW: i32 = 0;

/// Column offset at which every new piece appears
pub const SPAWN_COLUMN: i32 = 3;

/// Points awarded for each cleared row
pub const ROW_CLEAR_POINTS: u32 = 100;

/// Side length of the frame every block shape fits in
pub const SHAPE_FRAME: usize = 4;

/// Quiet time after which a key is treated as released on terminals that
/// never report key release. Longer than the usual OS auto-repeat delay
/// (250-600 ms) so a held key is not released before its first repeat.
pub const KEY_RELEASE_TIMEOUT_MS: u64 = 700;

/// The seven block identifiers of the fixed catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Block {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl Block {
    /// Every block in catalog order.
    pub const ALL: [Block; 7] = [
        Block::I,
        Block::J,
        Block::L,
        Block::O,
        Block::S,
        Block::T,
        Block::Z,
    ];

    /// Parse block from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_types::Block;
    ///
    /// assert_eq!(Block::from_str("i"), Some(Block::I));
    /// assert_eq!(Block::from_str("Z"), Some(Block::Z));
    /// assert_eq!(Block::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(Block::I),
            "j" => Some(Block::J),
            "l" => Some(Block::L),
            "o" => Some(Block::O),
            "s" => Some(Block::S),
            "t" => Some(Block::T),
            "z" => Some(Block::Z),
            _ => None,
        }
    }

    /// Uppercase single-letter name
    pub fn as_str(&self) -> &'static str {
        match self {
            Block::I => "I",
            Block::J => "J",
            Block::L => "L",
            Block::O => "O",
            Block::S => "S",
            Block::T => "T",
            Block::Z => "Z",
        }
    }
}

/// A cell on the game board
///
/// - `None`: empty cell
/// - `Some(Block)`: cell filled by a committed block
pub type Cell = Option<Block>;

/// Cadence category driving automatic descent.
///
/// The stopped state (game over) is represented as `Option::<TickSpeed>::None`
/// wherever a tick speed is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TickSpeed {
    /// Regular gravity
    Normal,
    /// Grace tick before a grounded piece is committed
    Sliding,
    /// Soft drop while the down key is held
    Fast,
}

impl TickSpeed {
    pub fn default_period_ms(&self) -> u32 {
        match self {
            TickSpeed::Normal => 800,
            TickSpeed::Sliding => 100,
            TickSpeed::Fast => 50,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TickSpeed::Normal => "normal",
            TickSpeed::Sliding => "sliding",
            TickSpeed::Fast => "fast",
        }
    }
}

/// The four directional keys the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Rotate clockwise
    Up,
    /// Fast drop while held
    Down,
    Left,
    Right,
}

/// Zero-argument control intents issued by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Start,
    TogglePause,
    Stop,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_period_defaults() {
        assert_eq!(TickSpeed::Normal.default_period_ms(), 800);
        assert_eq!(TickSpeed::Sliding.default_period_ms(), 100);
        assert_eq!(TickSpeed::Fast.default_period_ms(), 50);
    }

    #[test]
    fn tick_speed_names() {
        assert_eq!(TickSpeed::Sliding.as_str(), "sliding");
        assert!(KEY_RELEASE_TIMEOUT_MS > 600);
    }

    #[test]
    fn block_names_round_trip_through_from_str() {
        for block in Block::ALL {
            assert_eq!(Block::from_str(block.as_str()), Some(block));
        }
    }

    #[test]
    fn spawn_position_fits_on_the_board() {
        assert!(SPAWN_COLUMN >= 0 && (SPAWN_COLUMN as usize) + SHAPE_FRAME <= BOARD_WIDTH);
        assert_eq!(SPAWN_ROW, 0);
    }
}
