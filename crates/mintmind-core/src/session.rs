//! Editor session: one document plus its suggestion state, driven by edit
//! events.

use crate::buffer::{Limits, TextBuffer};
use crate::suggest::SuggestionEngine;
use crate::trie::Trie;
use crate::word;
use mintmind_types::{CursorMove, Direction, EditEvent};
use tracing::trace;

/// Owns the text buffer and the suggestion engine and routes every
/// [`EditEvent`] through the trigger rules:
///
/// - typing a letter, `#` or `_` refreshes suggestions; any other printable
///   byte clears them
/// - backspace and new line clear them
/// - the completion key suggests when idle and applies when candidates exist
/// - accept applies a selection if there is one, otherwise starts a new line
/// - vertical moves cycle the selection while candidates are shown
#[derive(Debug, Clone)]
pub struct EditorSession {
    buffer: TextBuffer,
    suggestions: SuggestionEngine,
}

impl EditorSession {
    pub fn new(trie: Trie, limits: Limits, max_suggestions: usize) -> Self {
        Self::with_buffer(TextBuffer::new(limits), trie, max_suggestions)
    }

    /// Start a session on an existing document.
    pub fn with_buffer(buffer: TextBuffer, trie: Trie, max_suggestions: usize) -> Self {
        Self {
            buffer,
            suggestions: SuggestionEngine::new(trie, max_suggestions),
        }
    }

    /// Apply one edit event. Rejected edits leave the document unchanged.
    pub fn handle(&mut self, event: EditEvent) {
        trace!(?event, "edit event");
        match event {
            EditEvent::InsertChar(byte) => self.insert_char(byte),
            EditEvent::Backspace => {
                self.buffer.delete_char();
                self.suggestions.clear();
            }
            EditEvent::NewLine => self.new_line(),
            EditEvent::MoveCursor(movement) => self.move_cursor(movement),
            EditEvent::RequestSuggestions => {
                if !self.suggestions.is_active() {
                    self.suggestions.refresh(&self.buffer);
                } else if !self.suggestions.candidates().is_empty() {
                    self.suggestions.apply(&mut self.buffer);
                }
            }
            EditEvent::AcceptSuggestion => {
                if self.suggestions.selected().is_some() {
                    self.suggestions.apply(&mut self.buffer);
                } else {
                    self.new_line();
                }
            }
            EditEvent::CycleSuggestion(direction) => {
                self.suggestions.move_selection(direction);
            }
        }
    }

    fn insert_char(&mut self, byte: u8) {
        // Only printable ASCII reaches the document.
        if !(b' '..=b'~').contains(&byte) {
            return;
        }
        self.buffer.insert_char(byte);
        if word::is_word_trigger(byte) {
            self.suggestions.refresh(&self.buffer);
        } else {
            self.suggestions.clear();
        }
    }

    fn new_line(&mut self) {
        self.buffer.split_line();
        self.suggestions.clear();
    }

    fn move_cursor(&mut self, movement: CursorMove) {
        let cycling = !self.suggestions.candidates().is_empty();
        match movement {
            CursorMove::Left => {
                self.buffer.move_left();
            }
            CursorMove::Right => {
                self.buffer.move_right();
            }
            CursorMove::Up if cycling => {
                self.suggestions.move_selection(Direction::Up);
            }
            CursorMove::Down if cycling => {
                self.suggestions.move_selection(Direction::Down);
            }
            CursorMove::Up => {
                self.buffer.move_up();
            }
            CursorMove::Down => {
                self.buffer.move_down();
            }
        }
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn suggestions(&self) -> &SuggestionEngine {
        &self.suggestions
    }
}
