//! Rendering committed pieces through the facade crate
//!
//! Places committed blocks on a board, renders the snapshot and checks each
//! filled cell shows up in the framebuffer in its block color.

use tui_blockfall::core::{shape_of, ActivePiece, Board, BlockSequence, BoardState, Game};
use tui_blockfall::term::{block_color, FrameBuffer, GameView, Layout, Viewport};
use tui_blockfall::types::{Block, BOARD_HEIGHT, BOARD_WIDTH};

const VIEWPORT: Viewport = Viewport {
    width: 80,
    height: 24,
};

fn committed_board() -> Board {
    Board::new()
        .with_shape(18, 4, Block::O, &shape_of(Block::O))
        .with_shape(15, 3, Block::I, &shape_of(Block::I))
        .with_shape(12, 2, Block::T, &shape_of(Block::T))
}

fn cell_at(fb: &FrameBuffer, layout: Layout, row: usize, col: usize) -> (char, char) {
    let (x, y) = layout.cell_origin(row, col);
    let ch = |x| fb.get(x, y).map(|c| c.ch).unwrap_or('?');
    (ch(x), ch(x + 1))
}

#[test]
fn test_committed_cells_are_visible() {
    let board = committed_board();
    let mut game = Game::new(BlockSequence::new([Block::Z]));
    game.start();
    game.set_board_state(BoardState::from_parts(
        board.clone(),
        ActivePiece::spawn(Block::Z),
    ));

    let fb = GameView.render(&game.snapshot(), VIEWPORT);
    let layout = Layout::for_viewport(VIEWPORT);

    for row in 0..BOARD_HEIGHT {
        for col in 0..BOARD_WIDTH {
            let drawn = cell_at(&fb, layout, row, col);
            match board.rows()[row][col] {
                Some(block) => {
                    assert_eq!(drawn, ('█', '█'), "cell ({}, {})", row, col);
                    let (x, y) = layout.cell_origin(row, col);
                    assert_eq!(fb.get(x, y).map(|c| c.style.fg), Some(block_color(block)));
                }
                None if row < 2 && (3..6).contains(&col) => {}
                None => assert_eq!(drawn, (' ', '·'), "cell ({}, {})", row, col),
            }
        }
    }

    // Falling Z stamped at spawn: top row cols 3..=4, second row cols 4..=5.
    assert_eq!(cell_at(&fb, layout, 0, 3), ('█', '█'));
    assert_eq!(cell_at(&fb, layout, 1, 5), ('█', '█'));
    assert_eq!(cell_at(&fb, layout, 0, 5), (' ', '·'));
}

#[test]
fn test_stopped_game_hides_falling_piece() {
    let mut game = Game::new(BlockSequence::new([Block::Z]));
    game.start();
    game.stop();

    let fb = GameView.render(&game.snapshot(), VIEWPORT);
    let layout = Layout::for_viewport(VIEWPORT);
    assert_eq!(cell_at(&fb, layout, 0, 3), (' ', '·'));
}
