//! Autocomplete engine and bounded text buffer for MintMind.
//!
//! The pieces, leaves first: a byte [`Trie`] holding the vocabulary, the
//! line-oriented [`TextBuffer`], the [`word`] locator, and the
//! [`SuggestionEngine`] that ties them together. [`EditorSession`] owns one of
//! each and applies the trigger rules to incoming [`EditEvent`]s.
//!
//! [`EditEvent`]: mintmind_types::EditEvent

mod buffer;
mod session;
mod suggest;
mod trie;
pub mod vocabulary;
pub mod word;

pub use buffer::{Cursor, Limits, Line, TextBuffer};
pub use session::EditorSession;
pub use suggest::{DEFAULT_MAX_SUGGESTIONS, SuggestionEngine};
pub use trie::{Completions, Trie, TrieNode};
