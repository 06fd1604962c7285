//! Message formatting pipeline.
//!
//! [`Formatter::format`] decorates a chat message with ANSI styling in one
//! pass over the message's segments:
//!
//! - prose segments are escape-protected, colored line by line (block
//!   construct + inline emphasis), then escape-restored;
//! - fence segments get colored delimiter lines and a syntax-highlighted
//!   body, substituted by segment identity rather than text search, so two
//!   blocks with identical code can never swap renderings.
//!
//! Stripping every ANSI code from the output yields the input byte-for-byte.

use std::fmt;

use crate::{
    ansi::{CODE, RESET},
    escape::EscapeGuard,
    extract::{self, Fence, Segment},
    highlight::Highlighter,
    line, theme,
};

/// A formatter for chat reply markdown.
pub struct Formatter {
    /// Code block highlighter, fixed to the resolved theme.
    highlighter: Highlighter,
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formatter")
            .field("highlighter", &"<syntect>")
            .finish()
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    /// Create a formatter with the default highlighting theme.
    #[must_use]
    pub fn new() -> Self {
        Self::with_theme(None)
    }

    /// Create a formatter with the named highlighting theme.
    ///
    /// Unknown theme names fall back to the default, see
    /// [`theme::resolve`].
    #[must_use]
    pub fn with_theme(name: Option<&str>) -> Self {
        Self {
            highlighter: Highlighter::new(theme::resolve(name)),
        }
    }

    /// Format a message for terminal display.
    ///
    /// Malformed or ambiguous markup never fails; it passes through
    /// uncolored. The output has the same line count as the input, and
    /// stripping all ANSI escapes reproduces the input exactly.
    #[must_use]
    pub fn format(&self, message: &str) -> String {
        let mut out = String::with_capacity(message.len() * 2);
        for segment in extract::segments(message) {
            match segment {
                Segment::Prose(prose) => push_prose(prose, &mut out),
                Segment::Fence(fence) => self.push_fence(&fence, &mut out),
            }
        }
        out
    }

    /// Color one code body, see [`Highlighter::highlight`].
    #[must_use]
    pub fn highlight(&self, code: &str, language: Option<&str>) -> String {
        self.highlighter.highlight(code, language)
    }

    /// Emit a fence segment: colored delimiter lines around the
    /// highlighted body.
    fn push_fence(&self, fence: &Fence<'_>, out: &mut String) {
        push_delimiter(fence.open, out);
        match fence.close {
            Some(close) => {
                out.push_str(&self.highlight(fence.body, fence.language));
                push_delimiter(close, out);
            }
            // Streaming replies routinely end mid-block; the member lines
            // stay raw until a closing delimiter arrives.
            None => out.push_str(fence.body),
        }
    }
}

/// Color a prose region line by line, with escape sequences protected for
/// the duration of the coloring passes.
fn push_prose(prose: &str, out: &mut String) {
    let (protected, guard) = EscapeGuard::protect(prose);

    let mut colored = String::with_capacity(protected.len());
    for full_line in protected.split_inclusive('\n') {
        let (content, terminator) = split_line_terminator(full_line);
        colored.push_str(&line::colorize(content));
        colored.push_str(terminator);
    }

    out.push_str(&guard.restore(&colored));
}

/// Emit a fence delimiter line wrapped in the code construct color.
fn push_delimiter(full_line: &str, out: &mut String) {
    let (content, terminator) = split_line_terminator(full_line);
    out.push_str(CODE);
    out.push_str(content);
    out.push_str(RESET);
    out.push_str(terminator);
}

/// Split a line into its content and its terminator (`\r\n`, `\n`, or
/// nothing at end of input).
fn split_line_terminator(line: &str) -> (&str, &str) {
    if let Some(content) = line.strip_suffix("\r\n") {
        (content, "\r\n")
    } else if let Some(content) = line.strip_suffix('\n') {
        (content, "\n")
    } else {
        (line, "")
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
