//! Board module - the grid of committed cells
//!
//! The board is a list of rows, each exactly `BOARD_WIDTH` cells wide.
//! Coordinates are `(row, col)`: row 0 is the top, col 0 the left edge.
//!
//! The board only tracks committed blocks. The falling piece is laid on top
//! of a copy when rendering (see [`Board::with_shape`]).
//!
//! Height is normally `BOARD_HEIGHT`. [`Board::clear_full_rows`] returns a
//! shorter board on purpose so the caller decides where padding goes;
//! [`Board::pad_to_height`] restores the full height by prepending empty rows.

use serde::Serialize;

use crate::pieces::Shape;
use crate::types::{Block, Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// One board row.
pub type Row = [Cell; BOARD_WIDTH];

const EMPTY_ROW: Row = [None; BOARD_WIDTH];

/// Grid of committed cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Board {
    rows: Vec<Row>,
}

impl Board {
    /// Create a full-height empty board
    pub fn new() -> Self {
        Self::empty(BOARD_HEIGHT)
    }

    /// Create an empty board with `height` rows
    pub fn empty(height: usize) -> Self {
        Self {
            rows: vec![EMPTY_ROW; height],
        }
    }

    /// Build a board from explicit rows (top row first)
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn width(&self) -> usize {
        BOARD_WIDTH
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Get cell at (row, col); `None` when out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|(r, c)| self.rows[r][c])
    }

    /// Set cell at (row, col); returns false when out of bounds
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match self.index(row, col) {
            Some((r, c)) => {
                self.rows[r][c] = cell;
                true
            }
            None => false,
        }
    }

    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<(usize, usize)> {
        if row < 0 || col < 0 || row as usize >= self.height() || col as usize >= BOARD_WIDTH {
            return None;
        }
        Some((row as usize, col as usize))
    }

    /// Check if (row, col) is inside the board and empty
    pub fn is_free(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.rows
            .get(row)
            .is_some_and(|cells| cells.iter().all(|cell| cell.is_some()))
    }

    /// Test whether `shape` placed at (row, col) leaves the board or overlaps
    /// a filled cell.
    ///
    /// All-empty shape rows are skipped before offsets are applied.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_core::{shape_of, Board};
    /// use tui_blockfall_core::types::Block;
    ///
    /// let board = Board::new();
    /// let bar = shape_of(Block::I);
    /// assert!(!board.has_collision(0, 6, &bar));
    /// assert!(board.has_collision(0, 7, &bar));
    /// assert!(board.has_collision(20, 0, &bar));
    /// ```
    pub fn has_collision(&self, row: i32, col: i32, shape: &Shape) -> bool {
        shape
            .occupied_cells()
            .any(|(dr, dc)| !self.is_free(row + dr, col + dc))
    }

    /// Write `block` into every cell covered by `shape` at (row, col).
    ///
    /// Cells that would fall outside the board are dropped. Only call this on
    /// a copy; the board owned by the state machine is replaced, never edited.
    pub fn stamp_shape(&mut self, row: i32, col: i32, block: Block, shape: &Shape) {
        for (dr, dc) in shape.occupied_cells() {
            self.set(row + dr, col + dc, Some(block));
        }
    }

    /// Copy of this board with `shape` stamped onto it
    pub fn with_shape(&self, row: i32, col: i32, block: Block, shape: &Shape) -> Board {
        let mut out = self.clone();
        out.stamp_shape(row, col, block, shape);
        out
    }

    /// Remove every full row, scanning bottom to top.
    ///
    /// Returns the shorter board and the number of rows removed. Remaining
    /// rows keep their relative order; no padding is added.
    pub fn clear_full_rows(mut self) -> (Board, usize) {
        let before = self.rows.len();
        for row in (0..before).rev() {
            if self.is_row_full(row) {
                self.rows.remove(row);
            }
        }
        let cleared = before - self.rows.len();
        (self, cleared)
    }

    /// Prepend empty rows until the board is `height` rows tall
    pub fn pad_to_height(mut self, height: usize) -> Board {
        let missing = height.saturating_sub(self.rows.len());
        if missing > 0 {
            self.rows.splice(0..0, std::iter::repeat(EMPTY_ROW).take(missing));
        }
        self
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.is_some())
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::shape_of;

    fn full_row(block: Block) -> Row {
        [Some(block); BOARD_WIDTH]
    }

    #[test]
    fn test_empty_board_dimensions() {
        let board = Board::new();
        assert_eq!(board.height(), BOARD_HEIGHT);
        assert!(board.rows().iter().all(|row| row.len() == BOARD_WIDTH));
        assert_eq!(board.filled_count(), 0);

        assert_eq!(Board::empty(3).height(), 3);
    }

    #[test]
    fn test_get_and_set_bounds() {
        let mut board = Board::new();
        assert!(board.set(19, 9, Some(Block::T)));
        assert_eq!(board.get(19, 9), Some(Some(Block::T)));

        assert!(!board.set(-1, 0, Some(Block::T)));
        assert!(!board.set(0, 10, Some(Block::T)));
        assert!(!board.set(20, 0, Some(Block::T)));
        assert_eq!(board.get(0, -1), None);
    }

    #[test]
    fn test_collision_uses_compacted_rows() {
        // The I shape's occupied row is its third frame row, but it lands on
        // the row offset itself.
        let mut board = Board::new();
        board.set(1, 4, Some(Block::O));
        let bar = shape_of(Block::I);

        assert!(!board.has_collision(0, 3, &bar));
        assert!(board.has_collision(1, 3, &bar));
        assert!(!board.has_collision(19, 0, &bar));
    }

    #[test]
    fn test_collision_rejects_negative_rows() {
        let board = Board::new();
        assert!(board.has_collision(-1, 0, &shape_of(Block::O)));
    }

    #[test]
    fn test_stamp_matches_collision_footprint() {
        let t = shape_of(Block::T);
        let board = Board::new().with_shape(5, 2, Block::T, &t);

        assert_eq!(board.filled_count(), 4);
        assert_eq!(board.get(5, 2), Some(Some(Block::T)));
        assert_eq!(board.get(5, 3), Some(Some(Block::T)));
        assert_eq!(board.get(5, 4), Some(Some(Block::T)));
        assert_eq!(board.get(6, 3), Some(Some(Block::T)));
        assert!(board.has_collision(5, 2, &t));
    }

    #[test]
    fn test_clear_full_rows_keeps_order() {
        let mut rows = vec![EMPTY_ROW; BOARD_HEIGHT];
        rows[17] = full_row(Block::I);
        rows[18][0] = Some(Block::J);
        rows[19] = full_row(Block::Z);
        rows[16][5] = Some(Block::S);
        let board = Board::from_rows(rows);

        let (cleared_board, cleared) = board.clone().clear_full_rows();
        assert_eq!(cleared, 2);
        assert_eq!(cleared_board.height(), BOARD_HEIGHT - 2);
        assert_eq!(cleared_board.rows()[16][5], Some(Block::S));
        assert_eq!(cleared_board.rows()[17][0], Some(Block::J));

        let padded = cleared_board.pad_to_height(BOARD_HEIGHT);
        assert_eq!(padded.height(), BOARD_HEIGHT);
        assert_eq!(padded.get(18, 5), Some(Some(Block::S)));
        assert_eq!(padded.get(19, 0), Some(Some(Block::J)));
        assert_eq!(padded.filled_count(), 2);
    }

    #[test]
    fn test_pad_to_height_never_shrinks() {
        let board = Board::empty(BOARD_HEIGHT + 2).pad_to_height(BOARD_HEIGHT);
        assert_eq!(board.height(), BOARD_HEIGHT + 2);
    }
}
