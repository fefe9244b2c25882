//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, SegmentKind, SegmentSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Direction, GameState, GridVector};

const PLAYFIELD_BG: Rgb = Rgb::new(20, 24, 28);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Screen-space placement of the board frame for one render.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal renderer for the snake board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares a cell in most terminal fonts.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render a snapshot into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let cols = snap.board.cols().min(u16::MAX as u32) as u16;
        let rows = snap.board.rows().min(u16::MAX as u32) as u16;
        let w = cols.saturating_mul(self.cell_w).saturating_add(2);
        let h = rows.saturating_mul(self.cell_h).saturating_add(2);
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        };

        self.draw_border(fb, frame);

        for y in 0..rows {
            for x in 0..cols {
                let dot = CellStyle::new(Rgb::new(70, 76, 84), PLAYFIELD_BG).dim();
                self.fill_cell(fb, frame, x, y, '·', dot);
            }
        }

        self.draw_food(fb, frame, snap);

        // Tail first so the head wins if a dead snake overlaps itself.
        for seg in snap.segments.iter().rev() {
            self.draw_segment(fb, frame, snap, seg);
        }

        self.draw_side_panel(fb, viewport, frame, snap);

        match snap.state {
            GameState::Idle => {
                self.draw_overlay(fb, frame, &["SNAKE", "ENTER / SPACE to start"]);
            }
            GameState::GameOver => {
                let mut score_line = [0u8; 24];
                let score = format_score(&mut score_line, snap.score);
                self.draw_overlay(fb, frame, &["GAME OVER", score, "ENTER / SPACE to restart"]);
            }
            GameState::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Terminal position of the top-left character of board cell `(x, y)`.
    fn cell_origin(&self, frame: Frame, x: u16, y: u16) -> (u16, u16) {
        (
            frame.x.saturating_add(1).saturating_add(x.saturating_mul(self.cell_w)),
            frame.y.saturating_add(1).saturating_add(y.saturating_mul(self.cell_h)),
        )
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, ch: char, style: CellStyle) {
        let (px, py) = self.cell_origin(frame, x, y);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    /// Board cell for `pos`, or `None` if it lies off the board.
    fn on_board(snap: &GameSnapshot, pos: GridVector) -> Option<(u16, u16)> {
        snap.board
            .contains(pos)
            .then(|| (pos.x as u16, pos.y as u16))
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame) {
        let Frame { x, y, w, h } = frame;
        if w < 2 || h < 2 {
            return;
        }
        let style = CellStyle::new(Rgb::new(160, 170, 180), PANEL_BG);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
        fb.put_char(x, y, '╭', style);
        fb.put_char(x + w - 1, y, '╮', style);
        fb.put_char(x, y + h - 1, '╰', style);
        fb.put_char(x + w - 1, y + h - 1, '╯', style);
    }

    fn draw_food(&self, fb: &mut FrameBuffer, frame: Frame, snap: &GameSnapshot) {
        let Some((x, y)) = Self::on_board(snap, snap.food.cell) else {
            return;
        };
        let style = CellStyle::new(Rgb::new(235, 70, 70), PLAYFIELD_BG).bold();
        self.fill_cell(fb, frame, x, y, ' ', style);
        let (px, py) = self.cell_origin(frame, x, y);
        fb.put_char(px, py, '●', style);
    }

    fn draw_segment(&self, fb: &mut FrameBuffer, frame: Frame, snap: &GameSnapshot, seg: &SegmentSnapshot) {
        let Some((x, y)) = Self::on_board(snap, seg.cell) else {
            return;
        };
        let green = if snap.state == GameState::GameOver {
            Rgb::new(90, 120, 90)
        } else {
            Rgb::new(90, 210, 110)
        };

        match seg.kind {
            SegmentKind::Head => {
                let style = CellStyle::new(Rgb::new(10, 30, 10), green).bold();
                self.fill_cell(fb, frame, x, y, ' ', style);
                let (px, py) = self.cell_origin(frame, x, y);
                fb.put_char(px, py, head_glyph(seg.facing), style);
            }
            SegmentKind::Body => {
                self.fill_cell(fb, frame, x, y, '█', CellStyle::new(green, PLAYFIELD_BG));
            }
            SegmentKind::Tail => {
                self.fill_cell(fb, frame, x, y, '▓', CellStyle::new(green, PLAYFIELD_BG));
            }
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, viewport: Viewport, frame: Frame, snap: &GameSnapshot) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 8 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let rows: [(&str, u32); 3] = [
            ("SCORE", snap.score),
            ("BEST", snap.best_score),
            ("LENGTH", snap.snake_len() as u32),
        ];
        let mut y = frame.y;
        for (name, v) in rows {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), v, value);
            y = y.saturating_add(3);
        }

        if snap.run_id > 0 {
            let dim = value.dim();
            fb.put_str(panel_x, y, "RUN", dim);
            fb.put_u32(panel_x + 4, y, snap.run_id, dim);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, frame: Frame, lines: &[&str]) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        let top = (frame.y + frame.h / 2).saturating_sub(lines.len() as u16 / 2);
        for (i, line) in lines.iter().enumerate() {
            let text_w = line.chars().count() as u16;
            let x = frame.x + frame.w.saturating_sub(text_w) / 2;
            fb.put_str(x, top + i as u16, line, style);
        }
    }
}

/// Arrow pointing the way the head faces.
fn head_glyph(facing: GridVector) -> char {
    match Direction::from_vector(facing) {
        Some(Direction::Up) => '▲',
        Some(Direction::Down) => '▼',
        Some(Direction::Left) => '◀',
        Some(Direction::Right) | None => '▶',
    }
}

/// "SCORE: n" into a stack buffer.
fn format_score(buf: &mut [u8; 24], score: u32) -> &str {
    use std::io::Write;

    let mut cursor = std::io::Cursor::new(&mut buf[..]);
    // Cannot overflow: "SCORE: " plus at most 10 digits.
    let _ = write!(cursor, "SCORE: {}", score);
    let len = cursor.position() as usize;
    std::str::from_utf8(&buf[..len]).unwrap_or("SCORE")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_glyph_follows_facing() {
        assert_eq!(head_glyph(GridVector::UP), '▲');
        assert_eq!(head_glyph(GridVector::DOWN), '▼');
        assert_eq!(head_glyph(GridVector::LEFT), '◀');
        assert_eq!(head_glyph(GridVector::RIGHT), '▶');
        assert_eq!(head_glyph(GridVector::ZERO), '▶');
    }

    #[test]
    fn score_line_formats_without_heap() {
        let mut buf = [0u8; 24];
        assert_eq!(format_score(&mut buf, 0), "SCORE: 0");
        let mut buf = [0u8; 24];
        assert_eq!(format_score(&mut buf, u32::MAX), "SCORE: 4294967295");
    }
}
