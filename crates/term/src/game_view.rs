//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! Pure (no I/O), so layout can be unit-tested. Each board cell is drawn two
//! columns wide to compensate for the usual glyph aspect ratio.

use crate::core::{shape_of, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Block, BOARD_HEIGHT, BOARD_WIDTH};

const CELL_W: u16 = 2;
const PANEL_GAP: u16 = 2;
const PANEL_W: u16 = 16;

const PLAYFIELD_BG: Rgb = Rgb::new(24, 24, 32);
const BORDER: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
const LABEL: CellStyle = CellStyle::fg(Rgb::new(230, 230, 230)).bold();
const VALUE: CellStyle = CellStyle::fg(Rgb::new(190, 190, 190));
const HINT: CellStyle = CellStyle::fg(Rgb::new(120, 120, 130));
const OVERLAY: CellStyle = CellStyle::fg(Rgb::new(255, 255, 255)).bold();

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Screen position of the board frame for a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub frame_x: u16,
    pub frame_y: u16,
    pub panel_x: u16,
}

impl Layout {
    pub const FRAME_W: u16 = BOARD_WIDTH as u16 * CELL_W + 2;
    pub const FRAME_H: u16 = BOARD_HEIGHT as u16 + 2;

    /// Center board plus side panel in the viewport
    pub fn for_viewport(viewport: Viewport) -> Self {
        let total_w = Self::FRAME_W + PANEL_GAP + PANEL_W;
        let frame_x = viewport.width.saturating_sub(total_w) / 2;
        let frame_y = viewport.height.saturating_sub(Self::FRAME_H) / 2;
        Self {
            frame_x,
            frame_y,
            panel_x: frame_x + Self::FRAME_W + PANEL_GAP,
        }
    }

    /// Top-left screen position of board cell (row, col)
    pub fn cell_origin(&self, row: usize, col: usize) -> (u16, u16) {
        (
            self.frame_x + 1 + col as u16 * CELL_W,
            self.frame_y + 1 + row as u16,
        )
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);
        let layout = Layout::for_viewport(viewport);

        self.draw_board(fb, snap, layout);
        self.draw_panel(fb, snap, layout);

        if snap.paused {
            self.draw_overlay(fb, layout, "PAUSED");
        } else if snap.is_game_over() {
            self.draw_overlay(fb, layout, "GAME OVER");
        }
    }

    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_board(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: Layout) {
        let (x, y) = (layout.frame_x, layout.frame_y);
        let (w, h) = (Layout::FRAME_W, Layout::FRAME_H);

        fb.put_char(x, y, '┌', BORDER);
        fb.put_char(x + w - 1, y, '┐', BORDER);
        fb.put_char(x, y + h - 1, '└', BORDER);
        fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', BORDER);
            fb.put_char(x + dx, y + h - 1, '─', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', BORDER);
            fb.put_char(x + w - 1, y + dy, '│', BORDER);
        }

        let empty = CellStyle::fg(Rgb::new(70, 70, 80)).on(PLAYFIELD_BG);
        for (r, row) in snap.board.rows().iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let (px, py) = layout.cell_origin(r, c);
                match cell {
                    Some(block) => {
                        let style = CellStyle::fg(block_color(*block)).on(PLAYFIELD_BG);
                        fb.fill_rect(px, py, CELL_W, 1, '█', style);
                    }
                    None => {
                        fb.put_char(px, py, ' ', empty);
                        fb.put_char(px + 1, py, '·', empty);
                    }
                }
            }
        }
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: Layout) {
        let x = layout.panel_x;
        let mut y = layout.frame_y;

        fb.put_str(x, y, "SCORE", LABEL);
        fb.put_str(x, y + 1, &snap.score.to_string(), VALUE);
        y += 3;

        fb.put_str(x, y, "NEXT", LABEL);
        y += 1;
        if let Some(block) = snap.upcoming {
            let style = CellStyle::fg(block_color(block));
            for (r, c) in shape_of(block).occupied_cells() {
                let px = x + c as u16 * CELL_W;
                fb.fill_rect(px, y + r as u16, CELL_W, 1, '█', style);
            }
        } else {
            fb.put_str(x, y, "-", VALUE);
        }
        y += 5;

        let status = if snap.paused {
            "PAUSED"
        } else if snap.playing {
            "PLAYING"
        } else if snap.is_game_over() {
            "GAME OVER"
        } else {
            "READY"
        };
        fb.put_str(x, y, status, LABEL);
        y += 2;

        let hints: &[&str] = if snap.playing {
            &["arrows: move", "up: rotate", "p: pause", "enter: stop", "q: quit"]
        } else {
            &["enter: start", "q: quit"]
        };
        for (i, hint) in hints.iter().enumerate() {
            fb.put_str(x, y + i as u16, hint, HINT);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, layout: Layout, text: &str) {
        let text_w = text.chars().count() as u16;
        let x = layout.frame_x + Layout::FRAME_W.saturating_sub(text_w) / 2;
        let y = layout.frame_y + Layout::FRAME_H / 2;
        fb.put_str(x, y, text, OVERLAY.on(PLAYFIELD_BG));
    }
}

pub fn block_color(block: Block) -> Rgb {
    match block {
        Block::I => Rgb::new(80, 227, 230),
        Block::J => Rgb::new(36, 95, 223),
        Block::L => Rgb::new(223, 173, 36),
        Block::O => Rgb::new(223, 217, 36),
        Block::S => Rgb::new(48, 211, 56),
        Block::T => Rgb::new(132, 61, 198),
        Block::Z => Rgb::new(227, 78, 78),
    }
}
