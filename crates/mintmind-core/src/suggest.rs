//! Suggestion engine: computes, cycles and applies completions for the word
//! before the cursor.

use crate::buffer::TextBuffer;
use crate::trie::Trie;
use crate::word;
use mintmind_types::Direction;
use std::borrow::Cow;
use tracing::debug;

/// Default cap on the number of candidates shown at once.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 15;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum State {
    #[default]
    Idle,
    Active {
        candidates: Vec<Vec<u8>>,
        /// Always `Some` when `candidates` is non-empty.
        selected: Option<usize>,
    },
}

/// Completion state for one editing session.
///
/// Idle shows nothing. Active holds the candidate list for the word that was
/// under the cursor at the last [`refresh`](Self::refresh), possibly empty.
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    trie: Trie,
    max_suggestions: usize,
    state: State,
}

impl SuggestionEngine {
    pub fn new(trie: Trie, max_suggestions: usize) -> Self {
        Self {
            trie,
            max_suggestions,
            state: State::Idle,
        }
    }

    /// Recompute candidates for the word ending at the buffer's cursor.
    ///
    /// An unknown prefix leaves the engine Idle. Otherwise the engine becomes
    /// Active with up to `max_suggestions` tokens that strictly extend the
    /// word, the first one selected. Returns the number of candidates.
    pub fn refresh(&mut self, buffer: &TextBuffer) -> usize {
        let column = buffer.cursor().column;
        let prefix = word::word_before(buffer.current_line().as_bytes(), column);

        let Some(node) = self.trie.find_prefix(prefix) else {
            debug!(prefix = %String::from_utf8_lossy(prefix), "no completions for prefix");
            self.state = State::Idle;
            return 0;
        };

        // The typed word itself is never offered back.
        let candidates: Vec<Vec<u8>> = node
            .completions(prefix)
            .filter(|candidate| candidate.len() > prefix.len())
            .take(self.max_suggestions)
            .collect();
        let count = candidates.len();
        debug!(prefix = %String::from_utf8_lossy(prefix), count, "suggestions refreshed");

        self.state = State::Active {
            selected: if count > 0 { Some(0) } else { None },
            candidates,
        };
        count
    }

    /// Move the selection one step with wraparound. No-op when Idle or when
    /// there are no candidates.
    pub fn move_selection(&mut self, direction: Direction) -> bool {
        let State::Active {
            candidates,
            selected: Some(index),
        } = &mut self.state
        else {
            return false;
        };
        let last = candidates.len() - 1;
        *index = match direction {
            Direction::Up if *index == 0 => last,
            Direction::Up => *index - 1,
            Direction::Down if *index >= last => 0,
            Direction::Down => *index + 1,
        };
        true
    }

    /// Replace the word before the cursor with the selected candidate.
    ///
    /// The word span is recomputed from the buffer's current cursor. If the
    /// result would overflow the line, the buffer is left untouched. The
    /// engine returns to Idle either way. Returns whether the buffer changed.
    pub fn apply(&mut self, buffer: &mut TextBuffer) -> bool {
        let state = std::mem::take(&mut self.state);
        let State::Active {
            candidates,
            selected: Some(index),
        } = state
        else {
            return false;
        };
        let Some(candidate) = candidates.get(index) else {
            return false;
        };

        let column = buffer.cursor().column;
        let start = word::word_start(buffer.current_line().as_bytes(), column);
        let applied = buffer.replace_before_cursor(start, candidate);
        debug!(
            candidate = %String::from_utf8_lossy(candidate),
            applied,
            "suggestion applied"
        );
        applied
    }

    /// Drop any candidates and go Idle.
    pub fn clear(&mut self) {
        self.state = State::Idle;
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, State::Active { .. })
    }

    /// Current candidates; empty when Idle.
    pub fn candidates(&self) -> &[Vec<u8>] {
        match &self.state {
            State::Active { candidates, .. } => candidates,
            State::Idle => &[],
        }
    }

    /// Display text of candidate `index`.
    pub fn candidate_text(&self, index: usize) -> Option<Cow<'_, str>> {
        self.candidates()
            .get(index)
            .map(|c| String::from_utf8_lossy(c))
    }

    /// Index of the selected candidate, if any.
    pub fn selected(&self) -> Option<usize> {
        match &self.state {
            State::Active { selected, .. } => *selected,
            State::Idle => None,
        }
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn max_suggestions(&self) -> usize {
        self.max_suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Limits;

    fn engine(tokens: &[&str]) -> SuggestionEngine {
        SuggestionEngine::new(Trie::from_tokens(tokens), DEFAULT_MAX_SUGGESTIONS)
    }

    fn typed(text: &str, limits: Limits) -> TextBuffer {
        let mut buf = TextBuffer::new(limits);
        for b in text.bytes() {
            buf.insert_char(b);
        }
        buf
    }

    fn names(engine: &SuggestionEngine) -> Vec<String> {
        (0..engine.candidates().len())
            .map(|i| engine.candidate_text(i).unwrap().into_owned())
            .collect()
    }

    #[test]
    fn starts_idle() {
        let e = engine(&["printf"]);
        assert!(!e.is_active());
        assert!(e.candidates().is_empty());
        assert_eq!(e.selected(), None);
    }

    #[test]
    fn refresh_lists_extensions_and_selects_first() {
        let mut e = engine(&["printf", "print", "pow", "int"]);
        let buf = typed("pr", Limits::default());
        assert_eq!(e.refresh(&buf), 2);
        assert!(e.is_active());
        assert_eq!(names(&e), vec!["print", "printf"]);
        assert_eq!(e.selected(), Some(0));
    }

    #[test]
    fn refresh_with_unknown_prefix_goes_idle() {
        let mut e = engine(&["printf"]);
        e.refresh(&typed("p", Limits::default()));
        assert!(e.is_active());
        assert_eq!(e.refresh(&typed("xyz", Limits::default())), 0);
        assert!(!e.is_active());
        assert_eq!(e.selected(), None);
    }

    #[test]
    fn exact_match_is_not_offered() {
        let mut e = engine(&["#if", "#ifdef", "#ifndef"]);
        e.refresh(&typed("#if", Limits::default()));
        assert_eq!(names(&e), vec!["#ifdef", "#ifndef"]);
    }

    #[test]
    fn exact_match_without_extensions_is_active_but_empty() {
        let mut e = engine(&["void"]);
        assert_eq!(e.refresh(&typed("void", Limits::default())), 0);
        assert!(e.is_active());
        assert_eq!(e.selected(), None);
        assert!(!e.move_selection(Direction::Down));
    }

    #[test]
    fn empty_word_lists_from_root() {
        let mut e = engine(&["b", "a", "c"]);
        e.refresh(&typed("x ", Limits::default()));
        assert_eq!(names(&e), vec!["a", "b", "c"]);
    }

    #[test]
    fn refresh_caps_candidates() {
        let tokens: Vec<String> = (0..20).map(|i| format!("item{i:02}")).collect();
        let refs: Vec<&str> = tokens.iter().map(String::as_str).collect();
        let mut e = engine(&refs);
        assert_eq!(e.refresh(&typed("it", Limits::default())), 15);
        assert_eq!(e.candidates().len(), 15);
    }

    #[test]
    fn selection_wraps_around() {
        let mut e = engine(&["ca", "cb", "cc"]);
        e.refresh(&typed("c", Limits::default()));
        assert_eq!(e.selected(), Some(0));
        assert!(e.move_selection(Direction::Up));
        assert_eq!(e.selected(), Some(2));
        assert!(e.move_selection(Direction::Down));
        assert_eq!(e.selected(), Some(0));
        e.move_selection(Direction::Down);
        e.move_selection(Direction::Down);
        assert_eq!(e.selected(), Some(2));
    }

    #[test]
    fn move_selection_when_idle_is_noop() {
        let mut e = engine(&["ca"]);
        assert!(!e.move_selection(Direction::Down));
        assert_eq!(e.selected(), None);
    }

    #[test]
    fn apply_replaces_partial_word() {
        let mut e = engine(&["printf"]);
        let mut buf = typed("pri", Limits::default());
        e.refresh(&buf);
        assert!(e.apply(&mut buf));
        assert_eq!(buf.current_line().as_bytes(), b"printf");
        assert_eq!(buf.cursor().column, 6);
        assert!(!e.is_active());
    }

    #[test]
    fn apply_uses_selected_candidate() {
        let mut e = engine(&["malloc", "main", "math.h"]);
        let mut buf = typed("int ma", Limits::default());
        e.refresh(&buf);
        e.move_selection(Direction::Down);
        assert!(e.apply(&mut buf));
        assert_eq!(buf.current_line().as_bytes(), b"int malloc");
    }

    #[test]
    fn apply_revalidates_word_at_current_cursor() {
        let mut e = engine(&["struct"]);
        let mut buf = typed("str x", Limits::default());
        buf.move_left();
        buf.move_left();
        e.refresh(&buf);
        assert_eq!(names(&e), vec!["struct"]);
        // Cursor moved after refresh: the word is now "s".
        buf.move_left();
        buf.move_left();
        assert!(e.apply(&mut buf));
        assert_eq!(buf.current_line().as_bytes(), b"structtr x");
        assert_eq!(buf.cursor().column, 6);
    }

    #[test]
    fn apply_respects_line_capacity() {
        let limits = Limits {
            line_capacity: 5,
            max_lines: 10,
        };
        let mut e = engine(&["abcdef"]);
        let mut buf = typed("x abc", limits);
        e.refresh(&buf);
        assert!(!e.apply(&mut buf));
        assert_eq!(buf.current_line().as_bytes(), b"x abc");
        assert_eq!(buf.cursor().column, 5);
        assert!(!e.is_active());
    }

    #[test]
    fn apply_when_idle_is_noop() {
        let mut e = engine(&["printf"]);
        let mut buf = typed("pri", Limits::default());
        assert!(!e.apply(&mut buf));
        assert_eq!(buf.current_line().as_bytes(), b"pri");
    }

    #[test]
    fn clear_discards_candidates() {
        let mut e = engine(&["printf"]);
        e.refresh(&typed("p", Limits::default()));
        e.clear();
        assert!(!e.is_active());
        assert!(e.candidates().is_empty());
    }
}
