//! Locating the word under the cursor.
//!
//! A word is a run of bytes not containing a separator (space, tab,
//! newline). Punctuation is part of the word, so `if(` or `#include` are
//! single words here.

/// True for the bytes that end a word.
pub fn is_separator(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n')
}

/// True for bytes that start or extend an identifier-like word and so
/// trigger suggestions when typed.
pub fn is_word_trigger(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'#' || byte == b'_'
}

/// Scan back from `column` to the first column of the word ending there.
/// Returns `column` itself when the preceding byte is a separator.
pub fn word_start(text: &[u8], column: usize) -> usize {
    let mut start = column.min(text.len());
    while start > 0 && !is_separator(text[start - 1]) {
        start -= 1;
    }
    start
}

/// The word ending at `column`, i.e. `text[word_start..column]`.
pub fn word_before(text: &[u8], column: usize) -> &[u8] {
    let end = column.min(text.len());
    &text[word_start(text, end)..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_at_end_of_line() {
        let text = b"int foo_bar";
        assert_eq!(word_start(text, 11), 4);
        assert_eq!(word_before(text, 11), b"foo_bar");
    }

    #[test]
    fn word_at_start_of_line() {
        assert_eq!(word_start(b"printf", 3), 0);
        assert_eq!(word_before(b"printf", 3), b"pri");
    }

    #[test]
    fn cursor_after_separator_gives_empty_word() {
        assert_eq!(word_start(b"int ", 4), 4);
        assert_eq!(word_before(b"int ", 4), b"");
        assert_eq!(word_before(b"", 0), b"");
    }

    #[test]
    fn tabs_and_newlines_separate() {
        assert_eq!(word_before(b"\treturn", 7), b"return");
        assert_eq!(word_before(b"a\nb", 3), b"b");
    }

    #[test]
    fn punctuation_belongs_to_the_word() {
        assert_eq!(word_before(b"x=ma", 4), b"x=ma");
        assert_eq!(word_before(b"  #inc", 6), b"#inc");
    }

    #[test]
    fn mid_word_cursor_only_takes_prefix() {
        assert_eq!(word_before(b"int counter", 7), b"cou");
    }

    #[test]
    fn column_past_end_is_clamped() {
        assert_eq!(word_before(b"abc", 10), b"abc");
    }

    #[test]
    fn triggers() {
        assert!(is_word_trigger(b'a'));
        assert!(is_word_trigger(b'Z'));
        assert!(is_word_trigger(b'#'));
        assert!(is_word_trigger(b'_'));
        assert!(!is_word_trigger(b'1'));
        assert!(!is_word_trigger(b'('));
        assert!(!is_word_trigger(b' '));
    }
}
