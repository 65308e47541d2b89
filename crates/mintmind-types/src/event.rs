//! Discrete edit events delivered by the input layer to the editor core.

/// Direction for cycling through the suggestion list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards index 0, wrapping to the last candidate.
    Up,
    /// Towards the last candidate, wrapping to index 0.
    Down,
}

/// A single-step cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Left,
    Right,
    Up,
    Down,
}

/// Edit events the core consumes, one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditEvent {
    /// Insert a byte at the cursor.
    InsertChar(u8),
    /// Delete the byte before the cursor.
    Backspace,
    /// Split the current line at the cursor.
    NewLine,
    /// Move the cursor (or the selection, while suggestions are shown).
    MoveCursor(CursorMove),
    /// Completion key: suggest when idle, apply when suggestions are shown.
    RequestSuggestions,
    /// Accept key: apply the selection if there is one, else start a new line.
    AcceptSuggestion,
    /// Move the suggestion selection.
    CycleSuggestion(Direction),
}
