//! Full-screen rendering of the document, suggestion list and status lines.

use crate::highlight::CHighlighter;
use crossterm::{
    cursor, queue,
    style::{Attribute, Color, Print, SetAttribute, SetForegroundColor},
    terminal::{self, ClearType},
};
use mintmind_core::EditorSession;
use std::io::{self, Write};
use std::ops::Range;

/// Lines shown above and below the current line.
const CONTEXT_LINES: usize = 5;

/// Column where line text starts, after the current-line marker.
const TEXT_COLUMN: u16 = 2;

/// First screen row used for document lines.
const DOCUMENT_ROW: u16 = 2;

const KEY_HELP: &str = "F1:Save/Run  F2:NewLine  F3:Help  ^S:Save  TAB:Suggestions  ESC:Exit";

const HELP_LINES: &[&str] = &[
    "Arrow Keys: Navigate (Up/Down cycle suggestions while shown)",
    "Enter:      Accept suggestion / New Line",
    "TAB:        Suggest / Accept suggestion",
    "Ctrl+N/P:   Next / previous suggestion",
    "F1:         Save & Run",
    "F2:         New Line",
    "Ctrl+S:     Save",
    "ESC:        Exit",
];

/// Range of document lines to display around `current`.
pub fn viewport(current: usize, total: usize) -> Range<usize> {
    let start = current.saturating_sub(CONTEXT_LINES);
    let end = (current + CONTEXT_LINES + 1).min(total);
    start..end
}

/// Paints an [`EditorSession`] onto a terminal-sized screen.
pub struct Screen {
    width: u16,
    height: u16,
    highlighter: Option<CHighlighter>,
    status: Option<String>,
}

impl Screen {
    pub fn new(width: u16, height: u16, highlighter: Option<CHighlighter>) -> Self {
        Self {
            width,
            height,
            highlighter,
            status: None,
        }
    }

    /// Update screen size (call on resize events).
    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Show a one-off message above the key help until cleared.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Redraw everything and leave the hardware cursor at the edit position.
    pub fn draw<W: Write>(&self, out: &mut W, session: &EditorSession) -> io::Result<()> {
        let buffer = session.buffer();
        let cursor = buffer.cursor();
        let total = buffer.line_count();

        queue!(
            out,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Green),
            SetAttribute(Attribute::Bold),
            Print(" MintMind C Editor "),
            cursor::MoveTo(20, 0),
            Print(format!("(Line {}/{})", cursor.line + 1, total)),
            SetAttribute(Attribute::Reset),
            cursor::MoveTo(0, 1),
            Print("================================"),
        )?;

        let visible = viewport(cursor.line, total);
        let text_width = usize::from(self.width.saturating_sub(TEXT_COLUMN)).max(1);
        // Keep the cursor on screen for lines wider than the terminal.
        let offset = (cursor.column + 1).saturating_sub(text_width);

        let highlighted = self.highlighter.as_ref().map(|h| {
            let sources: Vec<_> = buffer.lines().iter().map(|l| l.as_str()).collect();
            h.highlight_lines(sources.iter().map(|s| &**s))
        });

        let mut row = DOCUMENT_ROW;
        for index in visible.clone() {
            let line = &buffer.lines()[index];
            queue!(out, cursor::MoveTo(0, row))?;
            if index == cursor.line {
                queue!(
                    out,
                    SetAttribute(Attribute::Reverse),
                    Print(">"),
                    SetAttribute(Attribute::Reset)
                )?;
            }
            queue!(out, cursor::MoveTo(TEXT_COLUMN, row))?;

            let fits = line.len() <= text_width;
            match &highlighted {
                Some(styled) if fits && offset == 0 => queue!(out, Print(&styled[index]))?,
                _ => {
                    let text = line.as_str();
                    let shown: String = text.chars().skip(offset).take(text_width).collect();
                    queue!(out, Print(shown))?;
                }
            }
            row += 1;
        }

        self.draw_suggestions(out, session, row + 1)?;

        if let Some(status) = &self.status {
            queue!(
                out,
                cursor::MoveTo(0, self.height.saturating_sub(3)),
                SetForegroundColor(Color::Yellow),
                Print(self.fit(status)),
                SetAttribute(Attribute::Reset),
            )?;
        }

        queue!(
            out,
            cursor::MoveTo(0, self.height.saturating_sub(2)),
            Print(self.fit(KEY_HELP)),
            cursor::MoveTo(0, self.height.saturating_sub(1)),
            Print(self.fit(&format!("Line {}, Col {}", cursor.line + 1, cursor.column + 1))),
        )?;

        let screen_col = TEXT_COLUMN as usize + cursor.column - offset;
        let screen_row = DOCUMENT_ROW as usize + cursor.line - visible.start;
        queue!(
            out,
            cursor::MoveTo(screen_col as u16, screen_row as u16),
            cursor::Show
        )?;
        out.flush()
    }

    /// Cut `text` to the screen width so the bottom rows never wrap.
    fn fit(&self, text: &str) -> String {
        text.chars().take(usize::from(self.width)).collect()
    }

    fn draw_suggestions<W: Write>(
        &self,
        out: &mut W,
        session: &EditorSession,
        top: u16,
    ) -> io::Result<()> {
        let engine = session.suggestions();
        if !engine.is_active() || engine.candidates().is_empty() {
            return Ok(());
        }
        // Leave the status, key-help and position rows free.
        let bottom = self.height.saturating_sub(3);
        if top >= bottom {
            return Ok(());
        }

        queue!(out, cursor::MoveTo(0, top), Print("Suggestions:"))?;
        let mut row = top + 1;
        for index in 0..engine.candidates().len() {
            if row >= bottom {
                break;
            }
            let Some(text) = engine.candidate_text(index) else {
                break;
            };
            queue!(out, cursor::MoveTo(TEXT_COLUMN, row))?;
            if engine.selected() == Some(index) {
                queue!(
                    out,
                    SetAttribute(Attribute::Reverse),
                    Print(text),
                    SetAttribute(Attribute::Reset)
                )?;
            } else {
                queue!(out, Print(text))?;
            }
            row += 1;
        }
        Ok(())
    }

    /// Draw the key reference shown on F3.
    pub fn draw_help<W: Write>(&self, out: &mut W) -> io::Result<()> {
        queue!(
            out,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Green),
            Print("MintMind C Editor Help"),
            SetAttribute(Attribute::Reset),
            cursor::MoveTo(0, 1),
            Print("====================="),
        )?;
        let mut row = 3;
        for line in HELP_LINES {
            queue!(out, cursor::MoveTo(0, row), Print(line))?;
            row += 1;
        }
        queue!(
            out,
            cursor::MoveTo(0, row + 1),
            Print("Press any key to continue...")
        )?;
        out.flush()
    }
}
