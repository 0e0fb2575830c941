//! Pure key classification for the widget.
//!
//! Hosts deliver keys either as DOM-style names (`"ArrowRight"`) or as
//! crossterm key events. Both map onto [`KeyAction`]; anything outside the
//! handled set maps to `KeyAction::NoOp` and must be left to the host.

use crate::math::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Map a DOM-style key name to an action.
pub fn action_for_key_name(key: &str) -> KeyAction {
    match key {
        "ArrowRight" | "ArrowUp" => KeyAction::Increment,
        "ArrowLeft" | "ArrowDown" => KeyAction::Decrement,
        "Home" => KeyAction::ToMin,
        "End" => KeyAction::ToMax,
        _ => KeyAction::NoOp,
    }
}

/// Map a terminal key event to an action. Release events are ignored.
pub fn action_for_key_event(key: KeyEvent) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::NoOp;
    }
    match key.code {
        KeyCode::Right | KeyCode::Up => KeyAction::Increment,
        KeyCode::Left | KeyCode::Down => KeyAction::Decrement,
        KeyCode::Home => KeyAction::ToMin,
        KeyCode::End => KeyAction::ToMax,
        _ => KeyAction::NoOp,
    }
}
