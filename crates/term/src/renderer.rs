//! TerminalRenderer: presents `GameView` frames on a real terminal.
//!
//! From one frame to the next only a few cells change: the falling piece, its
//! ghost, a digit of the score. Each row is compared with the row presented
//! last time and only the span between the first and last differing column
//! is rewritten. A [`Pen`] remembers the colors and attributes already sent,
//! so runs of equally styled cells cost one glyph each.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
        SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::types::Color;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Frame currently on screen; `None` forces a full repaint.
    shown: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    /// Undo [`TerminalRenderer::enter`].
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(ResetColor)?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Repaint everything on the next `present` (after a resize).
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Put `frame` on screen. Returns the number of rows written.
    ///
    /// The presented frame is kept for the next comparison and `frame` gets
    /// the previous one back, ready to be drawn over by `GameView::render_into`.
    pub fn present(&mut self, frame: &mut FrameBuffer) -> Result<usize> {
        self.buf.clear();
        let rows = encode_frame(self.shown.as_ref(), frame, &mut self.buf)?;
        if rows > 0 {
            self.flush()?;
        }

        match self.shown.as_mut() {
            Some(shown) => std::mem::swap(shown, frame),
            None => {
                let blank = FrameBuffer::new(frame.width(), frame.height());
                self.shown = Some(std::mem::replace(frame, blank));
            }
        }
        Ok(rows)
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode the commands that turn `shown` into `next`.
///
/// Without a previous frame, or when the size changed, the screen is cleared
/// and every row is written. Returns the number of rows touched.
pub fn encode_frame(
    shown: Option<&FrameBuffer>,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> Result<usize> {
    let prev = shown.filter(|prev| prev.width() == next.width() && prev.height() == next.height());
    if prev.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut pen = Pen::default();
    let mut rows = 0;
    for y in 0..next.height() {
        let row = next.row(y);
        let span = match prev {
            Some(prev) => changed_span(prev.row(y), row),
            None if row.is_empty() => None,
            None => Some((0, row.len())),
        };
        let (start, end) = match span {
            Some(span) => span,
            None => continue,
        };

        out.queue(cursor::MoveTo(start as u16, y))?;
        for cell in &row[start..end] {
            pen.apply(out, cell.style)?;
            out.queue(Print(cell.ch))?;
        }
        rows += 1;
    }

    if rows > 0 {
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(ResetColor)?;
    }
    Ok(rows)
}

/// Half-open column range covering every cell that differs between two rows.
fn changed_span(prev: &[Cell], next: &[Cell]) -> Option<(usize, usize)> {
    let differs = |(a, b): (&Cell, &Cell)| a != b;
    let first = prev.iter().zip(next).position(differs)?;
    let last = prev.iter().zip(next).rposition(differs)?;
    Some((first, last + 1))
}

/// Terminal style state as last sent, so unchanged parts are not re-sent.
#[derive(Debug, Default)]
struct Pen {
    fg: Option<Color>,
    bg: Option<Color>,
    bold: bool,
    dim: bool,
}

impl Pen {
    fn apply(&mut self, out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
        if style.bold != self.bold || style.dim != self.dim {
            // SGR reset drops colors as well.
            out.queue(SetAttribute(Attribute::Reset))?;
            self.fg = None;
            self.bg = None;
            if style.bold {
                out.queue(SetAttribute(Attribute::Bold))?;
            }
            if style.dim {
                out.queue(SetAttribute(Attribute::Dim))?;
            }
            self.bold = style.bold;
            self.dim = style.dim;
        }
        if self.fg != Some(style.fg) {
            out.queue(SetForegroundColor(to_term_color(style.fg)))?;
            self.fg = Some(style.fg);
        }
        if self.bg != Some(style.bg) {
            out.queue(SetBackgroundColor(to_term_color(style.bg)))?;
            self.bg = Some(style.bg);
        }
        Ok(())
    }
}

fn to_term_color(color: Color) -> TermColor {
    TermColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}
