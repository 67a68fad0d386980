//! Puts rendered Hangman screens on the real terminal.
//!
//! During a round a guess touches only a few cells: one key's fill, the
//! revealed letters, the lives counter and a gallows part. The renderer keeps
//! the frame it last showed and writes just the runs of cells that differ.
//! The screen is repainted whole on the first frame, after
//! [`TerminalRenderer::invalidate`] and whenever the viewport size changes.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// What the terminal currently displays, if known.
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
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Take over the terminal for the game: raw keys, alternate screen, no
    /// cursor, and mouse reports for clicks on the on-screen keyboard.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(EnableMouseCapture)?;
        self.flush_buf()
    }

    /// Hand the terminal back in the state [`enter`](Self::enter) found it.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(DisableMouseCapture)?;
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        self.shown = None;
        Ok(())
    }

    /// Forget what is on screen so the next frame is painted whole.
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Show `fb`, then hand back the previously shown frame in its place.
    ///
    /// The main loop renders into one `FrameBuffer` every tick; swapping
    /// keeps two frames alive without cloning either.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        let shown = self
            .shown
            .take()
            .filter(|s| s.width() == fb.width() && s.height() == fb.height());

        self.buf.clear();
        match &shown {
            Some(prev) => encode_diff_into(prev, fb, &mut self.buf)?,
            None => encode_full_into(fb, &mut self.buf)?,
        }
        if !self.buf.is_empty() {
            self.flush_buf()?;
        }

        let mut back = shown.unwrap_or_else(|| FrameBuffer::new(fb.width(), fb.height()));
        std::mem::swap(&mut back, fb);
        self.shown = Some(back);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a whole-screen repaint of `fb` into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    paint_runs(fb, ChangedRuns::whole(fb), out)
}

/// Encode only the cells of `next` that differ from `prev`.
///
/// Writes nothing at all when the frames are equal.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    paint_runs(next, ChangedRuns::between(prev, next), out)
}

fn paint_runs(fb: &FrameBuffer, runs: ChangedRuns<'_>, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = Pen::default();
    for run in runs {
        out.queue(cursor::MoveTo(run.x, run.y))?;
        for x in run.x..run.x + run.len {
            pen.paint(out, fb.get(x, run.y).unwrap_or_default())?;
        }
    }
    if pen.used() {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

/// Remembers the last style sent so a run of same-styled cells (the header
/// text, a key's fill) costs one set of escape codes.
#[derive(Default)]
struct Pen {
    current: Option<CellStyle>,
}

impl Pen {
    fn used(&self) -> bool {
        self.current.is_some()
    }

    fn paint(&mut self, out: &mut Vec<u8>, cell: Cell) -> Result<()> {
        let style = cell.style;
        let prev = self.current.replace(style);

        // SGR reset also clears colours, so both are resent after it.
        let attrs = prev.map_or(true, |p| p.bold != style.bold || p.dim != style.dim);
        if attrs {
            out.queue(SetAttribute(Attribute::Reset))?;
            if style.bold {
                out.queue(SetAttribute(Attribute::Bold))?;
            }
            if style.dim {
                out.queue(SetAttribute(Attribute::Dim))?;
            }
        }
        if attrs || prev.map_or(true, |p| p.fg != style.fg) {
            out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        }
        if attrs || prev.map_or(true, |p| p.bg != style.bg) {
            out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        }
        out.queue(Print(cell.ch))?;
        Ok(())
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Horizontal span of cells to rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Run {
    x: u16,
    y: u16,
    len: u16,
}

/// Runs where `next` differs from `prev`, row by row, left to right.
/// With `whole_rows` set every row is yielded as one run.
struct ChangedRuns<'a> {
    prev: &'a FrameBuffer,
    next: &'a FrameBuffer,
    whole_rows: bool,
    x: u16,
    y: u16,
}

impl<'a> ChangedRuns<'a> {
    fn whole(fb: &'a FrameBuffer) -> Self {
        Self {
            prev: fb,
            next: fb,
            whole_rows: true,
            x: 0,
            y: 0,
        }
    }

    fn between(prev: &'a FrameBuffer, next: &'a FrameBuffer) -> Self {
        Self {
            prev,
            next,
            whole_rows: prev.width() != next.width() || prev.height() != next.height(),
            x: 0,
            y: 0,
        }
    }

    fn same(&self, x: u16, y: u16) -> bool {
        self.prev.get(x, y) == self.next.get(x, y)
    }
}

impl Iterator for ChangedRuns<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let w = self.next.width();
        while self.y < self.next.height() {
            let y = self.y;
            if self.whole_rows {
                self.y += 1;
                if w > 0 {
                    return Some(Run { x: 0, y, len: w });
                }
                continue;
            }

            while self.x < w && self.same(self.x, y) {
                self.x += 1;
            }
            if self.x < w {
                let start = self.x;
                while self.x < w && !self.same(self.x, y) {
                    self.x += 1;
                }
                return Some(Run {
                    x: start,
                    y,
                    len: self.x - start,
                });
            }
            self.x = 0;
            self.y += 1;
        }
        None
    }
}
