//! Keyboard input handling

use game_core::InputEvent;

/// Map a `KeyboardEvent.key` value to a game input
pub fn key_to_input(key: &str) -> Option<InputEvent> {
    match key {
        "Escape" | "Esc" => Some(InputEvent::Quit),
        " " | "Spacebar" | "ArrowUp" | "Up" => Some(InputEvent::Tap),
        _ => None,
    }
}
