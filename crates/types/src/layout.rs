//! Screen geometry shared by the renderer and the input hit test.
//!
//! Coordinates are terminal cells: `x` is the column, `y` the row, origin at
//! the top-left corner.

use crate::{Letter, ALPHABET_LEN};

/// A terminal cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    /// Point-in-rectangle test (right and bottom edges exclusive).
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x
            && p.y >= self.y
            && (p.x as u32) < self.x as u32 + self.w as u32
            && (p.y as u32) < self.y as u32 + self.h as u32
    }
}

/// Key width in cells (border + padded letter).
pub const KEY_W: u16 = 5;
/// Key height in cells.
pub const KEY_H: u16 = 3;
/// Gap between keys.
pub const KEY_GAP: u16 = 1;
/// Keys per row.
pub const KEY_COLS: u16 = 13;
/// Rows of keys.
pub const KEY_ROWS: u16 = 2;

/// Total keyboard width in cells.
pub const KEYBOARD_W: u16 = KEY_COLS * KEY_W + (KEY_COLS - 1) * KEY_GAP;
/// Total keyboard height in cells.
pub const KEYBOARD_H: u16 = KEY_ROWS * KEY_H + (KEY_ROWS - 1) * KEY_GAP;

/// Bottom margin below the keyboard.
const BOTTOM_MARGIN: u16 = 1;

/// Placement of the 26 virtual keys (2 rows x 13 columns) for a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardLayout {
    origin: Point,
}

impl KeyboardLayout {
    /// Center the keyboard horizontally and pin it to the bottom of the viewport.
    pub fn for_viewport(width: u16, height: u16) -> Self {
        let x = width.saturating_sub(KEYBOARD_W) / 2;
        let y = height.saturating_sub(KEYBOARD_H + BOTTOM_MARGIN);
        Self {
            origin: Point::new(x, y),
        }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Bounding rectangle of the whole keyboard.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.origin.x, self.origin.y, KEYBOARD_W, KEYBOARD_H)
    }

    pub fn key_rect(&self, letter: Letter) -> Rect {
        let i = letter.index() as u16;
        let row = i / KEY_COLS;
        let col = i % KEY_COLS;
        Rect::new(
            self.origin.x + col * (KEY_W + KEY_GAP),
            self.origin.y + row * (KEY_H + KEY_GAP),
            KEY_W,
            KEY_H,
        )
    }

    /// Letter whose key contains `p`, if any. Gaps between keys hit nothing.
    pub fn hit_test(&self, p: Point) -> Option<Letter> {
        if !self.bounds().contains(p) {
            return None;
        }
        let dx = p.x - self.origin.x;
        let dy = p.y - self.origin.y;
        if dx % (KEY_W + KEY_GAP) >= KEY_W || dy % (KEY_H + KEY_GAP) >= KEY_H {
            return None;
        }
        let col = dx / (KEY_W + KEY_GAP);
        let row = dy / (KEY_H + KEY_GAP);
        let index = (row * KEY_COLS + col) as usize;
        if index < ALPHABET_LEN {
            Letter::from_index(index)
        } else {
            None
        }
    }
}
