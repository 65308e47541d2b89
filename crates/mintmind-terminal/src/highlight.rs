//! C syntax highlighting of the document via syntect.

use crossterm::style::{Attribute, Color, SetAttribute, SetForegroundColor};
use std::fmt::Write;
use syntect::easy::HighlightLines;
use syntect::highlighting::{FontStyle, Style, Theme, ThemeSet};
use syntect::parsing::SyntaxSet;

const FALLBACK_THEME: &str = "base16-ocean.dark";

/// Highlights document lines as C, producing strings with ANSI escapes.
pub struct CHighlighter {
    syntax_set: SyntaxSet,
    theme: Theme,
}

impl CHighlighter {
    /// Load the default syntaxes and the named theme, falling back to
    /// `base16-ocean.dark` when the name is unknown.
    pub fn new(theme_name: &str) -> Self {
        let mut themes = ThemeSet::load_defaults().themes;
        let theme = match themes.remove(theme_name) {
            Some(theme) => theme,
            None => {
                tracing::warn!("Unknown theme '{theme_name}', using {FALLBACK_THEME}");
                themes.remove(FALLBACK_THEME).unwrap_or_default()
            }
        };
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme,
        }
    }

    /// Highlight a whole document in order, so multi-line constructs such
    /// as block comments carry over between lines. One output per input.
    pub fn highlight_lines<'a, I>(&self, lines: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let syntax = self
            .syntax_set
            .find_syntax_by_extension("c")
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());
        let mut highlighter = HighlightLines::new(syntax, &self.theme);

        lines
            .into_iter()
            .map(|line| {
                // syntect expects lines with endings for proper state tracking
                let with_ending = format!("{line}\n");
                match highlighter.highlight_line(&with_ending, &self.syntax_set) {
                    Ok(ranges) => syntect_to_ansi(&ranges),
                    Err(_) => line.to_string(),
                }
            })
            .collect()
    }
}

impl Default for CHighlighter {
    fn default() -> Self {
        Self::new(FALLBACK_THEME)
    }
}

/// Convert syntect highlight ranges to ANSI escape sequences.
fn syntect_to_ansi(ranges: &[(Style, &str)]) -> String {
    let mut out = String::new();
    for (style, text) in ranges {
        let text = text.trim_end_matches('\n');
        if text.is_empty() {
            continue;
        }

        let fg = style.foreground;
        let _ = write!(
            out,
            "{}",
            SetForegroundColor(Color::Rgb {
                r: fg.r,
                g: fg.g,
                b: fg.b,
            })
        );
        if style.font_style.contains(FontStyle::BOLD) {
            let _ = write!(out, "{}", SetAttribute(Attribute::Bold));
        }
        if style.font_style.contains(FontStyle::ITALIC) {
            let _ = write!(out, "{}", SetAttribute(Attribute::Italic));
        }

        let _ = write!(out, "{text}{}", SetAttribute(Attribute::Reset));
    }
    out
}
