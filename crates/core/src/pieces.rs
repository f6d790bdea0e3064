//! Pieces module - block shapes and the rotation operator
//!
//! Every block is an occupancy matrix of booleans stored in a fixed 4x4 frame
//! with an explicit `rows x cols` extent. Shapes are `Copy`, so rotating or
//! handing one to the renderer never allocates.
//!
//! Rows that contain no occupied cell are padding left over from the frame
//! (or from rotation). Collision and stamping skip them, so the first occupied
//! row of a shape is always the one placed at the piece's row offset.

use crate::types::{Block, SHAPE_FRAME};

/// Boolean occupancy matrix of a block in one orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; SHAPE_FRAME]; SHAPE_FRAME],
}

impl Shape {
    /// Build a shape from a literal matrix where non-zero entries are occupied.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_core::Shape;
    ///
    /// let bar = Shape::from_matrix([[1, 1, 1]]);
    /// assert_eq!((bar.rows(), bar.cols()), (1, 3));
    /// assert!(bar.get(0, 2));
    /// ```
    pub const fn from_matrix<const R: usize, const C: usize>(matrix: [[u8; C]; R]) -> Self {
        assert!(R <= SHAPE_FRAME && C <= SHAPE_FRAME, "shape exceeds frame");

        let mut cells = [[false; SHAPE_FRAME]; SHAPE_FRAME];
        let mut r = 0;
        while r < R {
            let mut c = 0;
            while c < C {
                cells[r][c] = matrix[r][c] != 0;
                c += 1;
            }
            r += 1;
        }

        Self {
            rows: R as u8,
            cols: C as u8,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Occupancy at (row, col); false outside the extent.
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols() && self.cells[row][col]
    }

    /// One row of the matrix, limited to the shape's column extent.
    pub fn row(&self, row: usize) -> &[bool] {
        &self.cells[row][..self.cols()]
    }

    /// Rows holding at least one occupied cell, in top-to-bottom order.
    pub fn occupied_rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        (0..self.rows())
            .map(move |r| self.row(r))
            .filter(|row| row.iter().any(|&set| set))
    }

    /// Offsets `(row, col)` of occupied cells with padding rows skipped.
    ///
    /// Row offsets index the occupied rows consecutively, which is how the
    /// shape is laid onto the board.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.occupied_rows().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &set)| set)
                .map(move |(c, _)| (r as i32, c as i32))
        })
    }

    /// Number of occupied cells.
    pub fn count(&self) -> usize {
        self.occupied_cells().count()
    }

    /// Rotate 90° clockwise.
    ///
    /// `rotated[c][rows - 1 - r] = shape[r][c]`; the result has the transposed
    /// extent. No collision or wall-kick handling happens here.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_core::Shape;
    ///
    /// let bar = Shape::from_matrix([[1, 1, 1]]);
    /// let upright = bar.rotate_cw();
    /// assert_eq!((upright.rows(), upright.cols()), (3, 1));
    /// assert_eq!(upright.rotate_cw().rotate_cw().rotate_cw(), bar);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        let rows = self.rows();
        let cols = self.cols();
        let mut cells = [[false; SHAPE_FRAME]; SHAPE_FRAME];

        for (r, row) in self.cells.iter().enumerate().take(rows) {
            for (c, &set) in row.iter().enumerate().take(cols) {
                cells[c][rows - 1 - r] = set;
            }
        }

        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

/// Rotate a shape 90° clockwise (see [`Shape::rotate_cw`]).
pub fn rotate(shape: &Shape) -> Shape {
    shape.rotate_cw()
}

const I_SHAPE: Shape = Shape::from_matrix([
    [0, 0, 0, 0],
    [0, 0, 0, 0],
    [1, 1, 1, 1],
    [0, 0, 0, 0],
]);

const J_SHAPE: Shape = Shape::from_matrix([
    [0, 0, 0],
    [1, 0, 0],
    [1, 1, 1],
]);

const L_SHAPE: Shape = Shape::from_matrix([
    [0, 0, 0],
    [0, 0, 1],
    [1, 1, 1],
]);

const O_SHAPE: Shape = Shape::from_matrix([
    [1, 1],
    [1, 1],
]);

const S_SHAPE: Shape = Shape::from_matrix([
    [0, 0, 0],
    [0, 1, 1],
    [1, 1, 0],
]);

const T_SHAPE: Shape = Shape::from_matrix([
    [0, 0, 0],
    [1, 1, 1],
    [0, 1, 0],
]);

const Z_SHAPE: Shape = Shape::from_matrix([
    [0, 0, 0],
    [1, 1, 0],
    [0, 1, 1],
]);

/// Spawn-orientation shape of a block.
pub fn shape_of(block: Block) -> Shape {
    match block {
        Block::I => I_SHAPE,
        Block::J => J_SHAPE,
        Block::L => L_SHAPE,
        Block::O => O_SHAPE,
        Block::S => S_SHAPE,
        Block::T => T_SHAPE,
        Block::Z => Z_SHAPE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_block_has_four_cells() {
        for block in Block::ALL {
            assert_eq!(shape_of(block).count(), 4, "{:?}", block);
        }
    }

    #[test]
    fn occupied_cells_skip_padding_rows() {
        let cells: Vec<_> = shape_of(Block::I).occupied_cells().collect();
        assert_eq!(cells, vec![(0, 0), (0, 1), (0, 2), (0, 3)]);

        let cells: Vec<_> = shape_of(Block::T).occupied_cells().collect();
        assert_eq!(cells, vec![(0, 0), (0, 1), (0, 2), (1, 1)]);
    }

    #[test]
    fn rotate_transposes_rectangular_extent() {
        let shape = Shape::from_matrix([[1, 0, 0], [1, 1, 1]]);
        let rotated = shape.rotate_cw();

        assert_eq!((rotated.rows(), rotated.cols()), (3, 2));
        assert_eq!(rotated.row(0), &[true, true]);
        assert_eq!(rotated.row(1), &[true, false]);
        assert_eq!(rotated.row(2), &[true, false]);
    }

    #[test]
    fn four_rotations_restore_every_block() {
        for block in Block::ALL {
            let shape = shape_of(block);
            let back = rotate(&rotate(&rotate(&rotate(&shape))));
            assert_eq!(back, shape, "{:?}", block);
        }
    }

    #[test]
    fn rotating_o_keeps_its_occupancy() {
        assert_eq!(rotate(&shape_of(Block::O)), shape_of(Block::O));
    }
}
