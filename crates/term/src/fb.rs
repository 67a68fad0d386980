//! Framebuffer and style types for terminal rendering.
//!
//! Besides cell access this carries the handful of 2D primitives the game
//! screens are drawn with: vertical gradients, lines, rounded boxes and
//! centered text.

use crate::types::Rect;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend, `t` in [0, 1] (0 = self, 1 = other).
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Draw a character keeping the background already in the cell.
    pub fn put_char_over(&mut self, x: u16, y: u16, ch: char, fg: Rgb, bold: bool) {
        if let Some(i) = self.idx(x, y) {
            let bg = self.cells[i].style.bg;
            self.cells[i] = Cell {
                ch,
                style: CellStyle {
                    fg,
                    bg,
                    bold,
                    dim: false,
                },
            };
        }
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
    }

    /// Text over the existing background.
    pub fn put_str_over(&mut self, x: u16, y: u16, s: &str, fg: Rgb, bold: bool) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char_over(cx, y, ch, fg, bold);
            cx += 1;
        }
    }

    /// Text horizontally centered on row `y`, over the existing background.
    /// Returns the starting column.
    pub fn put_str_centered(&mut self, y: u16, s: &str, fg: Rgb, bold: bool) -> u16 {
        let x = self.width.saturating_sub(measure_text(s)) / 2;
        self.put_str_over(x, y, s, fg, bold);
        x
    }

    pub fn put_u32(&mut self, x: u16, y: u16, v: u32, fg: Rgb, bold: bool) {
        let mut digits = [0u8; 10];
        let mut n = v;
        let mut len = 0;
        loop {
            digits[len] = b'0' + (n % 10) as u8;
            len += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        for (i, d) in digits[..len].iter().rev().enumerate() {
            self.put_char_over(x.saturating_add(i as u16), y, *d as char, fg, bold);
        }
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }

    /// Fill the whole buffer with a top-to-bottom background gradient.
    pub fn fill_gradient_v(&mut self, top: Rgb, bottom: Rgb) {
        let span = self.height.saturating_sub(1).max(1) as f32;
        for y in 0..self.height {
            let bg = top.lerp(bottom, y as f32 / span);
            let style = CellStyle::new(bg, bg);
            self.fill_rect(0, y, self.width, 1, ' ', style);
        }
    }

    pub fn hline(&mut self, x: u16, y: u16, len: u16, ch: char, fg: Rgb) {
        for dx in 0..len {
            self.put_char_over(x.saturating_add(dx), y, ch, fg, false);
        }
    }

    pub fn vline(&mut self, x: u16, y: u16, len: u16, ch: char, fg: Rgb) {
        for dy in 0..len {
            self.put_char_over(x, y.saturating_add(dy), ch, fg, false);
        }
    }

    /// Box with rounded corners, interior filled with `fill`.
    pub fn rounded_rect(&mut self, r: Rect, border: Rgb, fill: Rgb) {
        if r.w < 2 || r.h < 2 {
            return;
        }
        let style = CellStyle::new(border, fill);
        self.fill_rect(r.x, r.y, r.w, r.h, ' ', style);

        let right = r.x + r.w - 1;
        let bottom = r.y + r.h - 1;
        self.put_char(r.x, r.y, '╭', style);
        self.put_char(right, r.y, '╮', style);
        self.put_char(r.x, bottom, '╰', style);
        self.put_char(right, bottom, '╯', style);
        for x in r.x + 1..right {
            self.put_char(x, r.y, '─', style);
            self.put_char(x, bottom, '─', style);
        }
        for y in r.y + 1..bottom {
            self.put_char(r.x, y, '│', style);
            self.put_char(right, y, '│', style);
        }
    }

    /// Row `y` as a string (for tests and debugging).
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }
}

/// Width of `s` in terminal columns (one per char).
pub fn measure_text(s: &str) -> u16 {
    s.chars().count().min(u16::MAX as usize) as u16
}
