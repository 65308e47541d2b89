//! Key event mapping — translates crossterm KeyEvents to KeyActions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mintmind_types::{CursorMove, Direction, EditEvent};

/// What the editor loop should do in response to a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward an edit event to the session.
    Edit(EditEvent),
    /// Save the document (Ctrl+S).
    Save,
    /// Save, compile and run the document (F1).
    Run,
    /// Show the help screen (F3).
    Help,
    /// Leave the editor (Esc / Ctrl+C).
    Quit,
    /// No action — ignore this key event.
    Noop,
}

/// Map a crossterm `KeyEvent` to a `KeyAction`.
pub fn map_key(event: KeyEvent) -> KeyAction {
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);

    match event.code {
        // Ctrl key combos
        KeyCode::Char('c') if ctrl => KeyAction::Quit,
        KeyCode::Char('s') if ctrl => KeyAction::Save,
        KeyCode::Char('n') if ctrl => KeyAction::Edit(EditEvent::CycleSuggestion(Direction::Down)),
        KeyCode::Char('p') if ctrl => KeyAction::Edit(EditEvent::CycleSuggestion(Direction::Up)),
        KeyCode::Char('h') if ctrl => KeyAction::Edit(EditEvent::Backspace),
        KeyCode::Char(_) if ctrl => KeyAction::Noop,

        // Basic character input; the buffer holds single bytes
        KeyCode::Char(c) if c.is_ascii() => KeyAction::Edit(EditEvent::InsertChar(c as u8)),

        // Navigation keys
        KeyCode::Left => KeyAction::Edit(EditEvent::MoveCursor(CursorMove::Left)),
        KeyCode::Right => KeyAction::Edit(EditEvent::MoveCursor(CursorMove::Right)),
        KeyCode::Up => KeyAction::Edit(EditEvent::MoveCursor(CursorMove::Up)),
        KeyCode::Down => KeyAction::Edit(EditEvent::MoveCursor(CursorMove::Down)),

        // Editing keys
        KeyCode::Backspace => KeyAction::Edit(EditEvent::Backspace),
        KeyCode::Tab => KeyAction::Edit(EditEvent::RequestSuggestions),
        KeyCode::Enter => KeyAction::Edit(EditEvent::AcceptSuggestion),
        KeyCode::F(2) => KeyAction::Edit(EditEvent::NewLine),

        // Host commands
        KeyCode::F(1) => KeyAction::Run,
        KeyCode::F(3) => KeyAction::Help,
        KeyCode::Esc => KeyAction::Quit,

        // Everything else
        _ => KeyAction::Noop,
    }
}
