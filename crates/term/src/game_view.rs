//! GameView: maps the engine's grid into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested. Empty cells draw as the
//! background, falling cells in red, locked cells in yellow.

use crate::core::Board;
use crate::fb::{CellStyle, FrameBuffer, Glyph, Rgb};
use crate::types::Cell;

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

/// Shell state the view overlays on top of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayStatus {
    #[default]
    Playing,
    Paused,
    GameOver,
}

const BOARD_BG: Rgb = Rgb::new(0, 0, 0);
const FALLING_FG: Rgb = Rgb::new(220, 60, 60);
const LOCKED_FG: Rgb = Rgb::new(240, 220, 80);

const HELP: [&str; 6] = [
    "←/→  move",
    "↓    drop",
    "↑    rotate",
    "p    pause",
    "r    restart",
    "q    quit",
];

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Framebuffer size needed for the board plus its border
    pub fn frame_size(&self, board: &Board) -> (u16, u16) {
        (
            board.width() as u16 * self.cell_w + 2,
            board.height() as u16 * self.cell_h + 2,
        )
    }

    pub fn render(&self, board: &Board, status: PlayStatus, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(board, status, viewport, &mut fb);
        fb
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// The board frame is centered; a help panel is drawn to its right when
    /// there is room.
    pub fn render_into(
        &self,
        board: &Board,
        status: PlayStatus,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Glyph::default());

        let (frame_w, frame_h) = self.frame_size(board);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        for (y, row) in board.rows().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                let glyph = match cell {
                    Cell::Empty => CellStyle::new(Rgb::new(70, 70, 80), BOARD_BG).glyph(' '),
                    Cell::Falling => CellStyle::new(FALLING_FG, BOARD_BG).bold().glyph('█'),
                    Cell::Locked => CellStyle::new(LOCKED_FG, BOARD_BG).glyph('█'),
                };
                let px = start_x + 1 + x as u16 * self.cell_w;
                let py = start_y + 1 + y as u16 * self.cell_h;
                fb.fill_rect(px, py, self.cell_w, self.cell_h, glyph);
            }
        }

        let overlay = match status {
            PlayStatus::Playing => None,
            PlayStatus::Paused => Some("PAUSED"),
            PlayStatus::GameOver => Some("GAME OVER"),
        };
        if let Some(text) = overlay {
            let w = text.chars().count() as u16;
            let x = start_x + frame_w.saturating_sub(w) / 2;
            let style = CellStyle::new(Rgb::new(255, 255, 255), BOARD_BG).bold();
            fb.put_str(x, start_y + frame_h / 2, text, style);
        }

        self.draw_help(fb, viewport, start_x + frame_w + 2, start_y);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let style = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let right = x + w - 1;
        let bottom = y + h - 1;

        fb.put(x, y, style.glyph('┌'));
        fb.put(right, y, style.glyph('┐'));
        fb.put(x, bottom, style.glyph('└'));
        fb.put(right, bottom, style.glyph('┘'));
        for cx in x + 1..right {
            fb.put(cx, y, style.glyph('─'));
            fb.put(cx, bottom, style.glyph('─'));
        }
        for cy in y + 1..bottom {
            fb.put(x, cy, style.glyph('│'));
            fb.put(right, cy, style.glyph('│'));
        }
    }

    fn draw_help(&self, fb: &mut FrameBuffer, viewport: Viewport, x: u16, y: u16) {
        let longest = HELP.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16;
        if x.saturating_add(longest) > viewport.width {
            return;
        }
        let style = CellStyle::new(Rgb::new(160, 160, 170), Rgb::new(0, 0, 0));
        for (i, line) in HELP.iter().enumerate() {
            fb.put_str(x, y + i as u16, line, style);
        }
    }
}
