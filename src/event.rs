//! Some code around handling events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{app::App, collection::Data};

/// Events sent to the main thread.
#[derive(Debug)]
pub enum DiskmonEvent {
    KeyInput(KeyEvent),
    Update(Box<Data>),
    Terminate,
}

/// What the main loop should do after handling a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Nothing,
    ModeChanged,
    Reset,
    Quit,
}

/// Handle a [`KeyEvent`].
pub fn handle_key_event(event: KeyEvent, app: &mut App) -> KeyOutcome {
    if event.modifiers.is_empty() || event.modifiers == KeyModifiers::SHIFT {
        match event.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyOutcome::Quit,
            KeyCode::Char('i') | KeyCode::Char('I') => {
                app.toggle_unit_mode();
                KeyOutcome::ModeChanged
            }
            _ => KeyOutcome::Nothing,
        }
    } else if let KeyModifiers::CONTROL = event.modifiers {
        match event.code {
            KeyCode::Char('c') => KeyOutcome::Quit,
            KeyCode::Char('r') => {
                app.reset();
                KeyOutcome::Reset
            }
            _ => KeyOutcome::Nothing,
        }
    } else {
        KeyOutcome::Nothing
    }
}
