//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, KeySnapshot};
use crate::fb::{measure_text, FrameBuffer, Rgb};
use crate::types::{GuessState, KeyboardLayout, Letter, Phase, Rect, HIDDEN};

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

    /// Keyboard placement for this viewport; the input hit test uses the same one.
    pub fn keyboard(&self) -> KeyboardLayout {
        KeyboardLayout::for_viewport(self.width, self.height)
    }
}

/// Colors used by every screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg_top: Rgb,
    pub bg_bottom: Rgb,
    pub accent: Rgb,
    pub hint: Rgb,
    pub text: Rgb,
    pub muted: Rgb,
    pub good: Rgb,
    pub bad: Rgb,
    pub gold: Rgb,
    pub key_normal: Rgb,
    pub key_hover: Rgb,
    pub key_correct: Rgb,
    pub key_wrong: Rgb,
    pub key_border: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            bg_top: Rgb::new(20, 25, 40),
            bg_bottom: Rgb::new(40, 45, 70),
            accent: Rgb::new(100, 200, 255),
            hint: Rgb::new(255, 200, 100),
            text: Rgb::new(245, 245, 245),
            muted: Rgb::new(130, 130, 130),
            good: Rgb::new(0, 228, 48),
            bad: Rgb::new(230, 41, 55),
            gold: Rgb::new(255, 203, 0),
            key_normal: Rgb::new(60, 70, 90),
            key_hover: Rgb::new(80, 90, 120),
            key_correct: Rgb::new(60, 200, 100),
            key_wrong: Rgb::new(200, 60, 60),
            key_border: Rgb::new(10, 10, 15),
        }
    }
}

/// Top-left corner of the gallows drawing.
const GALLOWS_X: u16 = 4;
const GALLOWS_Y: u16 = 4;
/// Columns covered by the gallows and the figure.
const GALLOWS_W: u16 = 10;

/// Word and hint stay right of this column so the gallows never covers them.
const TEXT_LEFT: u16 = GALLOWS_X + GALLOWS_W + 1;

/// Rows used by the PLAYING header and word area.
const HEADER_Y: u16 = 1;
const MASK_Y: u16 = 5;
const HINT_Y: u16 = 8;

/// Lives below this are drawn in the warning color.
const LOW_LIVES: u8 = 3;

/// A lightweight terminal renderer for the Hangman game.
#[derive(Debug, Clone, Default)]
pub struct GameView {
    palette: Palette,
}

impl GameView {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill_gradient_v(self.palette.bg_top, self.palette.bg_bottom);

        match snap.phase {
            Phase::Menu => self.draw_menu(fb),
            Phase::Playing => self.draw_playing(fb, snap, viewport.keyboard()),
            Phase::GameOver => self.draw_game_over(fb, snap),
            Phase::Victory => self.draw_victory(fb, snap),
            Phase::GameComplete => self.draw_game_complete(fb),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_menu(&self, fb: &mut FrameBuffer) {
        let p = &self.palette;
        let title = "ULTIMATE HANGMAN";
        let y = fb.height() / 3;

        let w = measure_text(title) + 6;
        let x = fb.width().saturating_sub(w) / 2;
        fb.rounded_rect(
            Rect::new(x, y.saturating_sub(1), w, 3),
            p.accent,
            p.bg_top,
        );
        fb.put_str_centered(y, title, p.accent, true);
        fb.put_str_centered(y + 4, "Press ENTER to start", p.text, false);
        fb.put_str_centered(y + 6, "Esc to quit", p.muted, false);
    }

    fn draw_playing(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, keyboard: KeyboardLayout) {
        let p = &self.palette;

        // LEVEL n / N, tier name below it.
        fb.put_str_over(2, HEADER_Y, "LEVEL ", p.accent, true);
        let mut x = 2 + measure_text("LEVEL ");
        x += put_number(fb, x, HEADER_Y, snap.level_number() as u32, p.accent);
        fb.put_str_over(x, HEADER_Y, " / ", p.accent, true);
        x += measure_text(" / ");
        put_number(fb, x, HEADER_Y, snap.tier_count as u32, p.accent);
        fb.put_str_over(2, HEADER_Y + 1, &snap.tier_name, p.muted, false);

        // LIVES: n, right-aligned.
        let lives_color = if snap.lives < LOW_LIVES { p.bad } else { p.good };
        let lives_w = measure_text("LIVES: ") + digit_count(snap.lives as u32);
        let lx = fb.width().saturating_sub(lives_w + 2);
        fb.put_str_over(lx, HEADER_Y, "LIVES: ", lives_color, true);
        put_number(fb, lx + measure_text("LIVES: "), HEADER_Y, snap.lives as u32, lives_color);

        self.draw_mask(fb, snap);

        let hint_w = measure_text("HINT: ") + measure_text(&snap.hint);
        let hx = text_x(fb, hint_w);
        fb.put_str_over(hx, HINT_Y, "HINT: ", p.hint, true);
        fb.put_str_over(hx + measure_text("HINT: "), HINT_Y, &snap.hint, p.hint, false);

        self.draw_gallows(fb, GALLOWS_X, GALLOWS_Y, snap.mistakes());

        for key in &snap.keys {
            self.draw_key(fb, keyboard.key_rect(key.letter), key);
        }
    }

    /// Reveal mask with a space between letters, centered.
    fn draw_mask(&self, fb: &mut FrameBuffer, snap: &GameSnapshot) {
        let n = snap.mask.len() as u16;
        if n == 0 {
            return;
        }
        let x0 = text_x(fb, n * 2 - 1);
        for (i, slot) in snap.mask.iter().enumerate() {
            let ch = slot.map_or(HIDDEN, Letter::as_char);
            fb.put_char_over(x0 + i as u16 * 2, MASK_Y, ch, self.palette.text, true);
        }
    }

    fn draw_key(&self, fb: &mut FrameBuffer, rect: Rect, key: &KeySnapshot) {
        let p = &self.palette;
        let fill = match key.state {
            GuessState::Correct => p.key_correct,
            GuessState::Wrong => p.key_wrong,
            GuessState::Unused if key.hover => p.key_hover,
            GuessState::Unused => p.key_normal,
        };
        let border = if key.hover && key.state == GuessState::Unused {
            p.accent
        } else {
            p.key_border
        };
        fb.rounded_rect(rect, border, fill);
        fb.put_char_over(
            rect.x + rect.w / 2,
            rect.y + rect.h / 2,
            key.letter.as_char(),
            p.text,
            true,
        );
    }

    /// Gallows frame plus one body part per mistake:
    /// head, body, left arm, right arm, left leg, right leg.
    fn draw_gallows(&self, fb: &mut FrameBuffer, x: u16, y: u16, mistakes: u8) {
        let frame = self.palette.accent;
        let man = self.palette.text;

        fb.hline(x, y + 7, 5, '─', frame);
        fb.put_char_over(x + 2, y + 7, '┴', frame, false);
        fb.vline(x + 2, y + 1, 6, '│', frame);
        fb.put_char_over(x + 2, y, '┌', frame, false);
        fb.hline(x + 3, y, 5, '─', frame);
        fb.put_char_over(x + 8, y, '┐', frame, false);
        fb.put_char_over(x + 8, y + 1, '│', frame, false);

        let parts: [(u16, u16, char); 6] = [
            (x + 8, y + 2, 'O'),
            (x + 8, y + 3, '│'),
            (x + 7, y + 3, '/'),
            (x + 9, y + 3, '\\'),
            (x + 7, y + 5, '/'),
            (x + 9, y + 5, '\\'),
        ];
        for &(px, py, ch) in parts.iter().take(mistakes as usize) {
            fb.put_char_over(px, py, ch, man, true);
        }
        // The body spans two rows.
        if mistakes >= 2 {
            fb.put_char_over(x + 8, y + 4, '│', man, true);
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, snap: &GameSnapshot) {
        let p = &self.palette;
        let y = fb.height() / 3;
        self.draw_gallows(fb, GALLOWS_X, GALLOWS_Y, snap.mistakes());
        fb.put_str_centered(y, "LEVEL FAILED", p.bad, true);
        self.draw_word_line(fb, y + 2, "The word was: ", &snap.word);
        fb.put_str_centered(y + 5, "Press ENTER to retry", p.muted, false);
    }

    fn draw_victory(&self, fb: &mut FrameBuffer, snap: &GameSnapshot) {
        let p = &self.palette;
        let y = fb.height() / 3;
        self.draw_gallows(fb, GALLOWS_X, GALLOWS_Y, 0);
        fb.put_str_centered(y, "LEVEL COMPLETE", p.good, true);
        self.draw_word_line(fb, y + 2, "Word: ", &snap.word);
        fb.put_str_centered(y + 5, "Press ENTER for next level", p.text, false);
    }

    fn draw_game_complete(&self, fb: &mut FrameBuffer) {
        let p = &self.palette;
        let y = fb.height() / 3;
        fb.put_str_centered(y, "CHAMPION!", p.gold, true);
        fb.put_str_centered(y + 2, "You beat all levels!", p.text, false);
        fb.put_str_centered(y + 5, "Press ENTER to play again", p.muted, false);
    }

    fn draw_word_line(&self, fb: &mut FrameBuffer, y: u16, label: &str, word: &str) {
        let w = measure_text(label) + measure_text(word);
        let x = fb.width().saturating_sub(w) / 2;
        fb.put_str_over(x, y, label, self.palette.text, false);
        fb.put_str_over(x + measure_text(label), y, word, self.palette.hint, true);
    }
}

/// Centered start column for text `w` wide, kept clear of the gallows.
fn text_x(fb: &FrameBuffer, w: u16) -> u16 {
    (fb.width().saturating_sub(w) / 2).max(TEXT_LEFT)
}

fn digit_count(mut v: u32) -> u16 {
    let mut n = 1;
    while v >= 10 {
        v /= 10;
        n += 1;
    }
    n
}

/// Bold number at (x, y); returns its width.
fn put_number(fb: &mut FrameBuffer, x: u16, y: u16, v: u32, fg: Rgb) -> u16 {
    fb.put_u32(x, y, v, fg, true);
    digit_count(v)
}
