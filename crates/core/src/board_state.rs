//! Board state machine - the committed board plus the falling piece
//!
//! State changes only through [`BoardState::apply`], which consumes the
//! current state and an action and returns the next state. The action set is
//! closed, so the `match` in `apply` is exhaustive by construction.

use tracing::trace;

use crate::board::Board;
use crate::pieces::{shape_of, Shape};
use crate::rng::BlockSource;
use crate::types::{Block, BOARD_HEIGHT, SPAWN_COLUMN, SPAWN_ROW};

/// Position and orientation of the falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub block: Block,
    /// Current occupancy, rotated as many times as the player asked
    pub shape: Shape,
    pub row: i32,
    pub col: i32,
}

impl ActivePiece {
    /// Create a piece at the spawn position in its catalog orientation
    pub fn spawn(block: Block) -> Self {
        Self {
            block,
            shape: shape_of(block),
            row: SPAWN_ROW,
            col: SPAWN_COLUMN,
        }
    }
}

/// Actions accepted by the board state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardAction {
    /// Fresh empty board and a random first piece
    Start,
    /// Move the piece down one row. Not collision checked; the caller tests first.
    Descend,
    /// Rotate and/or shift the piece, rejected as a whole if the target collides.
    /// `left` wins over `right` when both are set.
    Move { rotate: bool, left: bool, right: bool },
    /// Replace the board and spawn `block`
    Commit { board: Board, block: Block },
}

impl BoardAction {
    pub fn rotate() -> Self {
        BoardAction::Move {
            rotate: true,
            left: false,
            right: false,
        }
    }

    pub fn left() -> Self {
        BoardAction::Move {
            rotate: false,
            left: true,
            right: false,
        }
    }

    pub fn right() -> Self {
        BoardAction::Move {
            rotate: false,
            left: false,
            right: true,
        }
    }
}

/// Committed board and the falling piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    board: Board,
    active: ActivePiece,
}

impl BoardState {
    /// Empty board with an `I` piece parked at spawn; `Start` replaces both.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            active: ActivePiece::spawn(Block::I),
        }
    }

    /// Build a state from parts (board is used as given)
    pub fn from_parts(board: Board, active: ActivePiece) -> Self {
        Self { board, active }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    /// True when the piece can move down one row without colliding
    pub fn can_descend(&self) -> bool {
        let a = &self.active;
        !self.board.has_collision(a.row + 1, a.col, &a.shape)
    }

    /// Copy of the board with the falling piece stamped on it
    pub fn rendered(&self) -> Board {
        let a = &self.active;
        self.board.with_shape(a.row, a.col, a.block, &a.shape)
    }

    /// Apply one action and return the resulting state.
    pub fn apply(self, action: BoardAction, blocks: &mut impl BlockSource) -> BoardState {
        match action {
            BoardAction::Start => BoardState {
                board: Board::new(),
                active: ActivePiece::spawn(blocks.next_block()),
            },
            BoardAction::Descend => {
                let mut next = self;
                next.active.row += 1;
                next
            }
            BoardAction::Move {
                rotate,
                left,
                right,
            } => self.apply_move(rotate, left, right),
            BoardAction::Commit { board, block } => BoardState {
                board: board.pad_to_height(BOARD_HEIGHT),
                active: ActivePiece::spawn(block),
            },
        }
    }

    fn apply_move(mut self, rotate: bool, left: bool, right: bool) -> BoardState {
        let candidate_shape = if rotate {
            self.active.shape.rotate_cw()
        } else {
            self.active.shape
        };
        let offset = if left {
            -1
        } else if right {
            1
        } else {
            0
        };

        // Feasibility is tested with the shape the piece has now, not the
        // rotated one. Gameplay depends on this, including rotations that
        // end up overlapping cells the old shape did not cover.
        let a = &self.active;
        if self.board.has_collision(a.row, a.col + offset, &a.shape) {
            trace!(rotate, offset, row = a.row, col = a.col, "move rejected");
            return self;
        }

        self.active.col += offset;
        self.active.shape = candidate_shape;
        self
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::BlockSequence;

    fn started(block: Block) -> BoardState {
        BoardState::new().apply(BoardAction::Start, &mut BlockSequence::new([block]))
    }

    #[test]
    fn test_start_spawns_at_fixed_position() {
        let state = started(Block::T);
        assert_eq!(state.active().block, Block::T);
        assert_eq!(state.active().shape, shape_of(Block::T));
        assert_eq!((state.active().row, state.active().col), (SPAWN_ROW, SPAWN_COLUMN));
        assert_eq!(*state.board(), Board::new());
    }

    #[test]
    fn test_descend_is_unconditional() {
        let mut blocks = BlockSequence::new([Block::O]);
        let mut state = started(Block::O);
        for _ in 0..25 {
            state = state.apply(BoardAction::Descend, &mut blocks);
        }
        assert_eq!(state.active().row, 25);
    }

    #[test]
    fn test_move_left_until_wall() {
        let mut blocks = BlockSequence::new([Block::O]);
        let mut state = started(Block::O);

        state = state.apply(BoardAction::left(), &mut blocks);
        assert_eq!(state.active().col, 2);
        assert_eq!(state.active().shape, shape_of(Block::O));

        for _ in 0..10 {
            state = state.apply(BoardAction::left(), &mut blocks);
        }
        assert_eq!(state.active().col, 0);
    }

    #[test]
    fn test_left_wins_over_right() {
        let mut blocks = BlockSequence::new([Block::O]);
        let state = started(Block::O).apply(
            BoardAction::Move {
                rotate: false,
                left: true,
                right: true,
            },
            &mut blocks,
        );
        assert_eq!(state.active().col, SPAWN_COLUMN - 1);
    }

    #[test]
    fn test_rotate_replaces_shape() {
        let mut blocks = BlockSequence::new([Block::T]);
        let state = started(Block::T).apply(BoardAction::rotate(), &mut blocks);
        assert_eq!(state.active().shape, shape_of(Block::T).rotate_cw());
        assert_eq!(state.active().col, SPAWN_COLUMN);
    }

    #[test]
    fn test_rotation_checked_against_current_shape() {
        // A horizontal I at the bottom rotates into a vertical I that would
        // poke below the floor; the check uses the horizontal shape, so the
        // rotation goes through.
        let mut blocks = BlockSequence::new([Block::I]);
        let mut state = started(Block::I);
        for _ in 0..19 {
            state = state.apply(BoardAction::Descend, &mut blocks);
        }
        assert!(!state.board().has_collision(19, SPAWN_COLUMN, &state.active().shape));

        let rotated = state.apply(BoardAction::rotate(), &mut blocks);
        assert_eq!(rotated.active().shape, shape_of(Block::I).rotate_cw());
        assert!(rotated
            .board()
            .has_collision(rotated.active().row, rotated.active().col, &rotated.active().shape));
    }

    #[test]
    fn test_blocked_move_changes_nothing() {
        let mut board = Board::new();
        board.set(0, 2, Some(Block::Z));
        let state = BoardState::from_parts(board, ActivePiece::spawn(Block::O));
        let before = state.clone();

        let mut blocks = BlockSequence::new([Block::O]);
        let after = state.apply(
            BoardAction::Move {
                rotate: true,
                left: true,
                right: false,
            },
            &mut blocks,
        );
        assert_eq!(after, before);
    }

    #[test]
    fn test_commit_replaces_board_and_pads() {
        let mut blocks = BlockSequence::new([Block::I]);
        let mut short = Board::empty(BOARD_HEIGHT - 1);
        short.set(18, 0, Some(Block::L));

        let state = started(Block::I).apply(
            BoardAction::Commit {
                board: short,
                block: Block::S,
            },
            &mut blocks,
        );
        assert_eq!(state.board().height(), BOARD_HEIGHT);
        assert_eq!(state.board().get(19, 0), Some(Some(Block::L)));
        assert_eq!(*state.active(), ActivePiece::spawn(Block::S));
    }

    #[test]
    fn test_rendered_board_leaves_stored_board_untouched() {
        let state = started(Block::O);
        let rendered = state.rendered();
        assert_eq!(rendered.filled_count(), 4);
        assert_eq!(state.board().filled_count(), 0);
    }
}
