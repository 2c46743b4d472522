//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Feedback, GameSnapshot, Piece};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Mode, MAX_SHAPE_DIM};

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

/// Front-end state that is not part of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    /// Board cursor as `(row, col)`
    pub cursor: (usize, usize),
    pub mode: Mode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const BG: Rgb = Rgb::new(20, 10, 20);
const BOARD_BG: Rgb = Rgb::new(45, 20, 40);

const TITLE: CellStyle = CellStyle::new(Rgb::new(255, 105, 180), BG).bold();
const LABEL: CellStyle = CellStyle::new(Rgb::new(240, 220, 230), BG).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(230, 200, 215), BG);
const BORDER: CellStyle = CellStyle::new(Rgb::new(255, 182, 213), BG);
const EMPTY: CellStyle = CellStyle::new(Rgb::new(110, 70, 100), BOARD_BG).dim();
const FILLED: CellStyle = CellStyle::new(Rgb::new(255, 105, 180), BOARD_BG);
const GHOST_OK: CellStyle = CellStyle::new(Rgb::new(255, 182, 213), BOARD_BG).bold();
const GHOST_BAD: CellStyle = CellStyle::new(Rgb::new(220, 60, 60), BOARD_BG);
const CURSOR: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), BOARD_BG).bold();
const PIECE: CellStyle = CellStyle::new(Rgb::new(255, 105, 180), BG);
const PIECE_SELECTED: CellStyle = CellStyle::new(Rgb::new(255, 240, 250), BG).bold();
const PIECE_UPCOMING: CellStyle = CellStyle::new(Rgb::new(160, 110, 140), BG).dim();
const OVERLAY: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(120, 20, 70)).bold();

/// Columns taken by one hand slot (shape area plus gap)
const SLOT_W: u16 = (MAX_SHAPE_DIM as u16) * 2 + 2;

/// A lightweight terminal renderer for the puzzle.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Rows needed to draw `snap` in `mode`
    pub fn content_height(&self, snap: &GameSnapshot, mode: Mode) -> u16 {
        let board_h = snap.board.size() as u16 + 2;
        let tray_h = 2 + MAX_SHAPE_DIM as u16;
        let next_h = if mode.shows_next_hand() { tray_h } else { 0 };
        2 + board_h + 1 + tray_h + next_h
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        view: ViewState,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let n = snap.board.size() as u16;
        let frame_w = n * self.cell_w + 2;
        let frame_h = n + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let top = match self.anchor_y {
            AnchorY::Center => {
                viewport
                    .height
                    .saturating_sub(self.content_height(snap, view.mode))
                    / 2
            }
            AnchorY::Top => 0,
        };

        // Title line.
        let title_x = start_x.saturating_add(frame_w.saturating_sub(10) / 2);
        fb.put_str(title_x, top, "PINK BLAST", TITLE);

        let board_y = top + 2;
        self.draw_border(fb, start_x, board_y, frame_w, frame_h, BORDER);
        self.draw_board(fb, snap, view, start_x + 1, board_y + 1);

        self.draw_side_panel(fb, snap, view.mode, viewport, start_x + frame_w + 2, board_y);

        let tray_y = board_y + frame_h + 1;
        fb.put_str(start_x, tray_y, "HAND", LABEL);
        self.draw_tray(fb, &snap.hand, snap.selected, start_x, tray_y + 1, false);

        if view.mode.shows_next_hand() {
            let next_y = tray_y + 2 + MAX_SHAPE_DIM as u16;
            fb.put_str(start_x, next_y, "NEXT", LABEL);
            self.draw_tray(fb, &snap.next_hand, None, start_x, next_y + 1, true);
        }

        if snap.game_over {
            self.draw_overlay(fb, start_x, board_y, frame_w, frame_h);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, view: ViewState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, view, viewport, &mut fb);
        fb
    }

    /// Terminal cell of the top-left corner of board cell `(row, col)`
    pub fn cell_origin(
        &self,
        snap: &GameSnapshot,
        mode: Mode,
        viewport: Viewport,
        row: usize,
        col: usize,
    ) -> (u16, u16) {
        let n = snap.board.size() as u16;
        let frame_w = n * self.cell_w + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let top = match self.anchor_y {
            AnchorY::Center => viewport
                .height
                .saturating_sub(self.content_height(snap, mode))
                / 2,
            AnchorY::Top => 0,
        };
        (start_x + 1 + col as u16 * self.cell_w, top + 3 + row as u16)
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        fb.put_char(x, y, '╭', style);
        fb.put_char(x + w - 1, y, '╮', style);
        fb.put_char(x, y + h - 1, '╰', style);
        fb.put_char(x + w - 1, y + h - 1, '╯', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_board(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        view: ViewState,
        x0: u16,
        y0: u16,
    ) {
        let board = &snap.board;
        for (r, row) in board.rows().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let (ch, style) = if cell.is_filled() {
                    ('█', FILLED)
                } else {
                    ('·', EMPTY)
                };
                self.fill_cell(fb, x0, y0, r, c, ch, style);
            }
        }

        let (row, col) = view.cursor;
        let mut anchor_covered = false;
        if let Some(piece) = snap.selected_piece().filter(|_| !snap.game_over) {
            let style = if board.can_place(&piece.shape, row, col) {
                GHOST_OK
            } else {
                GHOST_BAD
            };
            for (i, j) in piece.shape.filled_cells() {
                let (r, c) = (row + i, col + j);
                if r < board.size() && c < board.size() {
                    self.fill_cell(fb, x0, y0, r, c, '▓', style);
                    anchor_covered |= i == 0 && j == 0;
                }
            }
        }

        if !anchor_covered && row < board.size() && col < board.size() {
            let px = x0 + col as u16 * self.cell_w;
            let py = y0 + row as u16;
            fb.put_char(px, py, '[', CURSOR);
            if self.cell_w > 1 {
                fb.put_char(px + self.cell_w - 1, py, ']', CURSOR);
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        x0: u16,
        y0: u16,
        row: usize,
        col: usize,
        ch: char,
        style: CellStyle,
    ) {
        let px = x0 + col as u16 * self.cell_w;
        let py = y0 + row as u16;
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }

    /// One row of hand slots, numbered from 1
    fn draw_tray(
        &self,
        fb: &mut FrameBuffer,
        pieces: &[Piece],
        selected: Option<usize>,
        x0: u16,
        y0: u16,
        upcoming: bool,
    ) {
        for (slot, piece) in pieces.iter().enumerate() {
            let sx = x0 + slot as u16 * SLOT_W;
            let is_selected = selected == Some(slot);
            let style = if upcoming {
                PIECE_UPCOMING
            } else if is_selected {
                PIECE_SELECTED
            } else {
                PIECE
            };

            for (i, j) in piece.shape.filled_cells() {
                fb.fill_rect(sx + j as u16 * 2, y0 + i as u16, 2, 1, '█', style);
            }

            if !upcoming {
                let label_y = y0 + MAX_SHAPE_DIM as u16;
                let label = if is_selected { LABEL } else { VALUE };
                if is_selected {
                    fb.put_char(sx, label_y, '▲', label);
                }
                fb.put_u32(sx + 1, label_y, slot as u32 + 1, label);
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        mode: Mode,
        viewport: Viewport,
        panel_x: u16,
        top: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let mut y = top;
        fb.put_str(panel_x, y, "SCORE", LABEL);
        y += 1;
        fb.put_u32(panel_x, y, snap.score, VALUE);
        y += 2;

        fb.put_str(panel_x, y, "BEST", LABEL);
        y += 1;
        fb.put_u32(panel_x, y, snap.high_score, VALUE);
        y += 2;

        fb.put_str(panel_x, y, "MODE", LABEL);
        y += 1;
        fb.put_str(panel_x, y, mode.as_str(), VALUE);
        y += 2;

        match snap.feedback {
            Some(Feedback::PerfectClear) => {
                fb.put_str(panel_x, y, "PERFECT CLEAR!", TITLE);
            }
            Some(Feedback::Points(points)) => {
                let x = fb.put_str(panel_x, y, "+", TITLE);
                fb.put_u32(x, y, points, TITLE);
            }
            None => {}
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let mid_y = y.saturating_add(h / 2);
        for (dy, text) in [(0u16, " GAME OVER "), (1, " R to retry ")] {
            let text_w = text.chars().count() as u16;
            let tx = x.saturating_add(w.saturating_sub(text_w) / 2);
            fb.put_str(tx, mid_y.saturating_sub(1) + dy, text, OVERLAY);
        }
    }
}
