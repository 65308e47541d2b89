//! Bounded multi-line text buffer with cursor management.

use std::borrow::Cow;
use std::io::{self, Write};
use tracing::debug;

/// Default maximum number of bytes a single line may hold.
pub const DEFAULT_LINE_CAPACITY: usize = 511;

/// Default maximum number of lines in a document.
pub const DEFAULT_MAX_LINES: usize = 99;

/// Capacity limits for a [`TextBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub line_capacity: usize,
    pub max_lines: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            line_capacity: DEFAULT_LINE_CAPACITY,
            max_lines: DEFAULT_MAX_LINES,
        }
    }
}

/// One line of the document. Its length is always the number of content
/// bytes; there is no terminator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    text: Vec<u8>,
}

impl Line {
    pub fn as_bytes(&self) -> &[u8] {
        &self.text
    }

    /// Lossy UTF-8 view for display.
    pub fn as_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.text)
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Cursor position: line index and byte column within that line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub line: usize,
    pub column: usize,
}

/// The document: a bounded sequence of bounded lines plus a cursor.
///
/// Invariants: there is always at least one line, `cursor.line` indexes an
/// existing line, and `cursor.column <= line.len()`. Every mutation that would
/// exceed a limit is rejected before anything changes and reports `false`.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    lines: Vec<Line>,
    cursor: Cursor,
    limits: Limits,
}

impl TextBuffer {
    pub fn new(limits: Limits) -> Self {
        Self {
            lines: vec![Line::default()],
            cursor: Cursor::default(),
            limits,
        }
    }

    /// Build a buffer from existing source text, one line per `\n`.
    /// Over-long lines are truncated and lines past `max_lines` dropped.
    /// The cursor starts at the beginning of the document.
    pub fn from_source(source: &[u8], limits: Limits) -> Self {
        // A trailing newline terminates the last line rather than opening a new one.
        let body = source.strip_suffix(b"\n").unwrap_or(source);
        let lines: Vec<Line> = body
            .split(|&b| b == b'\n')
            .take(limits.max_lines.max(1))
            .map(|raw| {
                let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
                let end = raw.len().min(limits.line_capacity);
                Line {
                    text: raw[..end].to_vec(),
                }
            })
            .collect();
        Self {
            lines,
            cursor: Cursor::default(),
            limits,
        }
    }

    /// Insert a byte at the cursor. Rejected when the line is full.
    pub fn insert_char(&mut self, byte: u8) -> bool {
        let limit = self.limits.line_capacity;
        let Cursor { line, column } = self.cursor;
        let text = &mut self.lines[line].text;
        if text.len() >= limit {
            debug!(line, limit, "insert rejected: line full");
            return false;
        }
        text.insert(column, byte);
        self.cursor.column += 1;
        true
    }

    /// Delete the byte before the cursor (backspace). No-op at column 0.
    pub fn delete_char(&mut self) -> bool {
        let Cursor { line, column } = self.cursor;
        if column == 0 {
            return false;
        }
        self.lines[line].text.remove(column - 1);
        self.cursor.column -= 1;
        true
    }

    /// Split the current line at the cursor. The tail moves to a new line
    /// below and the cursor to its start. Rejected when the document is full.
    pub fn split_line(&mut self) -> bool {
        if self.lines.len() >= self.limits.max_lines {
            debug!(max_lines = self.limits.max_lines, "new line rejected: document full");
            return false;
        }
        let Cursor { line, column } = self.cursor;
        let tail = self.lines[line].text.split_off(column);
        self.lines.insert(line + 1, Line { text: tail });
        self.cursor = Cursor {
            line: line + 1,
            column: 0,
        };
        true
    }

    /// Replace `[start, cursor)` on the current line with `replacement`,
    /// leaving the cursor just after it. Rejected, with nothing changed, if
    /// the line would exceed its capacity or `start` is past the cursor.
    pub fn replace_before_cursor(&mut self, start: usize, replacement: &[u8]) -> bool {
        let Cursor { line, column } = self.cursor;
        if start > column {
            return false;
        }
        let text = &mut self.lines[line].text;
        let new_len = text.len() - (column - start) + replacement.len();
        if new_len > self.limits.line_capacity {
            debug!(
                line,
                new_len,
                limit = self.limits.line_capacity,
                "replacement rejected: line would overflow"
            );
            return false;
        }
        text.splice(start..column, replacement.iter().copied());
        self.cursor.column = start + replacement.len();
        true
    }

    /// Move cursor one position left.
    pub fn move_left(&mut self) -> bool {
        if self.cursor.column > 0 {
            self.cursor.column -= 1;
            true
        } else {
            false
        }
    }

    /// Move cursor one position right.
    pub fn move_right(&mut self) -> bool {
        if self.cursor.column < self.current_line().len() {
            self.cursor.column += 1;
            true
        } else {
            false
        }
    }

    /// Move to the previous line, clamping the column to its length.
    pub fn move_up(&mut self) -> bool {
        if self.cursor.line == 0 {
            return false;
        }
        self.cursor.line -= 1;
        self.clamp_column();
        true
    }

    /// Move to the next line, clamping the column to its length.
    pub fn move_down(&mut self) -> bool {
        if self.cursor.line + 1 >= self.lines.len() {
            return false;
        }
        self.cursor.line += 1;
        self.clamp_column();
        true
    }

    fn clamp_column(&mut self) {
        let len = self.current_line().len();
        if self.cursor.column > len {
            self.cursor.column = len;
        }
    }

    /// Write every line followed by `\n`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in &self.lines {
            out.write_all(&line.text)?;
            out.write_all(b"\n")?;
        }
        Ok(())
    }

    /// The document as source text, every line `\n`-terminated.
    pub fn to_source(&self) -> String {
        let mut out = Vec::new();
        for line in &self.lines {
            out.extend_from_slice(&line.text);
            out.push(b'\n');
        }
        String::from_utf8_lossy(&out).into_owned()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn current_line(&self) -> &Line {
        &self.lines[self.cursor.line]
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new(Limits::default())
    }
}
