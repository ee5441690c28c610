//! GameView: maps a `core::Session` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, left to right: hold panel, bordered playfield, info panel (score,
//! lines, fall interval, next pieces). Side panels are skipped when the
//! viewport is too narrow for them.

use crate::core::{Piece, Session, Shape};
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{Color, GRID_HEIGHT, GRID_WIDTH, MAX_SHAPE_DIM};

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const FIELD_BG: Color = Color::new(0, 0, 0);
const PANEL_BG: Color = Color::new(0, 0, 0);
const BLOCK: char = '█';

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the bordered playfield in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            GRID_WIDTH as u16 * self.cell_w + 2,
            GRID_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Render the session into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport and fully overwritten.
    pub fn render_into(&self, session: &Session, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::new(Color::GRAY, PANEL_BG);
        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            CellStyle::new(Color::WHITE, FIELD_BG),
        );
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Locked cells.
        for (y, row) in session.grid().rows().iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Some(color) => {
                        self.draw_block(fb, start_x, start_y, x as i8, y as i8, *color, false)
                    }
                    None => self.draw_empty_cell(fb, start_x, start_y, x as u16, y as u16),
                }
            }
        }

        let current = session.current();
        if !session.is_game_over() {
            // Ghost piece.
            let ghost_dy = session.ghost_y() - current.y();
            if ghost_dy > 0 {
                let ghost = CellStyle::new(current.color(), FIELD_BG).dim();
                for (x, y) in current.cells() {
                    self.put_board_cell(fb, start_x, start_y, x, y + ghost_dy, '░', ghost);
                }
            }
        }

        // Falling piece (cells above the top edge are not drawn).
        for (x, y) in current.cells() {
            self.draw_block(fb, start_x, start_y, x, y, current.color(), true);
        }

        self.draw_hold_panel(fb, session, start_x, start_y);
        self.draw_info_panel(fb, session, viewport, start_x + frame_w + 2, start_y);

        if session.is_game_over() {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        } else if session.paused() {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, session: &Session, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = CellStyle::new(Color::new(70, 70, 70), FIELD_BG).dim();
        let px = start_x + 1 + x * self.cell_w;
        let py = start_y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(px, py, '·', style);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: i8,
        y: i8,
        color: Color,
        bold: bool,
    ) {
        let mut style = CellStyle::new(color, FIELD_BG);
        style.bold = bold;
        self.put_board_cell(fb, start_x, start_y, x, y, BLOCK, style);
    }

    /// Fill one grid cell, ignoring coordinates outside the playfield.
    #[allow(clippy::too_many_arguments)]
    fn put_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: i8,
        y: i8,
        ch: char,
        style: CellStyle,
    ) {
        if x < 0 || x as usize >= GRID_WIDTH || y < 0 || y as usize >= GRID_HEIGHT {
            return;
        }
        let px = start_x + 1 + x as u16 * self.cell_w;
        let py = start_y + 1 + y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    /// Draw a shape matrix with its top-left corner at terminal position (x, y).
    fn draw_shape(&self, fb: &mut FrameBuffer, x: u16, y: u16, shape: &Shape, color: Color) {
        let style = CellStyle::new(color, PANEL_BG);
        for (dx, dy) in shape.filled() {
            fb.fill_rect(
                x + dx as u16 * self.cell_w,
                y + dy as u16 * self.cell_h,
                self.cell_w,
                self.cell_h,
                BLOCK,
                style,
            );
        }
    }

    fn draw_hold_panel(&self, fb: &mut FrameBuffer, session: &Session, start_x: u16, start_y: u16) {
        let panel_w = MAX_SHAPE_DIM as u16 * self.cell_w + 2;
        if start_x < panel_w {
            return;
        }
        let x = start_x - panel_w;

        let label = label_style(session.can_hold());
        fb.put_str(x, start_y, "HOLD", label);
        if let Some(piece) = session.held() {
            self.draw_shape(fb, x, start_y + 2, piece.shape(), piece.color());
        }
    }

    fn draw_info_panel(
        &self,
        fb: &mut FrameBuffer,
        session: &Session,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = label_style(true);
        let value = CellStyle::new(Color::new(200, 200, 200), PANEL_BG);

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, session.score(), value);
        y += 3;

        fb.put_str(panel_x, y, "LINES", label);
        fb.put_u32(panel_x, y + 1, session.lines(), value);
        y += 3;

        fb.put_str(panel_x, y, "SPEED", label);
        fb.put_u32(panel_x, y + 1, session.fall_interval_ms(), value);
        let digits = digit_count(session.fall_interval_ms());
        fb.put_str(panel_x + digits + 1, y + 1, "ms", value.dim());
        y += 3;

        fb.put_str(panel_x, y, "NEXT", label);
        y += 2;
        for piece in session.queue() {
            if y >= viewport.height {
                break;
            }
            self.draw_next_entry(fb, panel_x, y, piece);
            y += piece.shape().height() as u16 * self.cell_h + 1;
        }
    }

    fn draw_next_entry(&self, fb: &mut FrameBuffer, x: u16, y: u16, piece: &Piece) {
        self.draw_shape(fb, x, y, piece.shape(), piece.color());
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Color::WHITE, Color::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

fn label_style(active: bool) -> CellStyle {
    let style = CellStyle::new(Color::new(220, 220, 220), PANEL_BG).bold();
    if active {
        style
    } else {
        style.dim()
    }
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
