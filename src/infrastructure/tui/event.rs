use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::interface_adapter::controller::otp_controller::InputEvent;

/// Translate a crossterm event into an optional widget `InputEvent`.
///
/// Returns `None` for everything the widget does not consume: modified
/// character keys (Ctrl/Alt chords belong to the surrounding application),
/// unrelated key codes, mouse and resize events. Paste requires the
/// terminal's bracketed-paste mode to be enabled by the host application;
/// focus/blur require focus-change reporting.
pub fn translate_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Paste(text) => Some(InputEvent::Paste(text.clone())),
        Event::FocusGained => Some(InputEvent::Focus),
        Event::FocusLost => Some(InputEvent::Blur),
        _ => None,
    }
}

fn translate_key(key: &KeyEvent) -> Option<InputEvent> {
    match key.code {
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL)
                || key.modifiers.contains(KeyModifiers::ALT)
            {
                return None; // Don't consume modified chars
            }
            Some(InputEvent::Insert(ch))
        }
        KeyCode::Left => Some(InputEvent::ArrowLeft),
        KeyCode::Right => Some(InputEvent::ArrowRight),
        KeyCode::Backspace | KeyCode::Delete => Some(InputEvent::Delete),
        _ => None,
    }
}

// =============================================================================
// Tests
// =============================================================================
