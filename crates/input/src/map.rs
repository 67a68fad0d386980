//! Mapping from terminal events to game input.

use crate::types::{InputEvent, Letter, Point};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Map one terminal event to game input.
///
/// Key releases and auto-repeat are dropped so each physical press counts once.
pub fn map_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(*key),
        Event::Mouse(mouse) => handle_mouse_event(*mouse),
        _ => None,
    }
}

/// Map keyboard input to game input.
pub fn handle_key_event(key: KeyEvent) -> Option<InputEvent> {
    if should_quit(key) {
        return Some(InputEvent::Quit);
    }
    match key.code {
        KeyCode::Enter => Some(InputEvent::Confirm),
        KeyCode::Char(ch) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            Letter::from_char(ch).map(InputEvent::Letter)
        }
        _ => None,
    }
}

/// Map mouse input to game input.
pub fn handle_mouse_event(mouse: MouseEvent) -> Option<InputEvent> {
    let at = Point::new(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::MousePressed(at)),
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(InputEvent::MouseMoved(at)),
        _ => None,
    }
}

/// Check if key should quit the game.
///
/// Every letter is a guess, so only Esc and Ctrl+C quit.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}
