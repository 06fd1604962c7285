//! Syntax highlighting of extracted code bodies.
//!
//! Backed by `syntect` with `two_face`'s extended syntax set. Highlighting
//! only ever inserts zero-width ANSI styling: the visible characters and
//! line count of the input are preserved, which the formatter relies on for
//! its byte-for-byte round-trip guarantee.

use syntect::{
    easy::HighlightLines,
    highlighting::Theme,
    parsing::{SyntaxReference, SyntaxSet},
    util::{LinesWithEndings, as_24_bit_terminal_escaped},
};
use tracing::{debug, warn};
use two_face::syntax;

use crate::ansi::RESET;

/// Colors code bodies for a fixed theme.
pub struct Highlighter {
    /// Resolved syntax highlighting theme.
    theme: Theme,

    /// Syntax definitions, including the extended `two_face` set.
    syntaxes: SyntaxSet,
}

impl Highlighter {
    /// Create a highlighter for the given theme.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            syntaxes: syntax::extra_newlines(),
        }
    }

    /// Color one code body.
    ///
    /// A missing language highlights as plain text. An unknown language
    /// token, or a highlighting failure, degrades to the unstyled input —
    /// never partially-styled output, never a panic.
    #[must_use]
    pub fn highlight(&self, code: &str, language: Option<&str>) -> String {
        if code.is_empty() {
            return String::new();
        }

        let syntax = match language {
            Some(token) => match self.syntaxes.find_syntax_by_token(token) {
                Some(syntax) => syntax,
                None => {
                    debug!(token, "unknown language token, leaving code unstyled");
                    return code.to_owned();
                }
            },
            None => self.syntaxes.find_syntax_plain_text(),
        };

        match self.highlight_lines(code, syntax) {
            Ok(highlighted) => highlighted,
            Err(error) => {
                warn!(%error, "syntax highlighting failed, leaving code unstyled");
                code.to_owned()
            }
        }
    }

    /// Highlight line by line, building the full block or failing whole.
    fn highlight_lines(
        &self,
        code: &str,
        syntax: &SyntaxReference,
    ) -> Result<String, syntect::Error> {
        let mut highlighter = HighlightLines::new(syntax, &self.theme);

        let mut buf = String::with_capacity(code.len() * 2);
        for line in LinesWithEndings::from(code) {
            let ranges = highlighter.highlight_line(line, &self.syntaxes)?;
            buf.push_str(&as_24_bit_terminal_escaped(&ranges, false));
        }
        buf.push_str(RESET);

        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme;

    fn highlighter() -> Highlighter {
        Highlighter::new(theme::resolve(None))
    }

    #[test]
    fn test_content_preserved() {
        let code = "def hello_world():\n    print(\"Hello, World!\")\n";
        let highlighted = highlighter().highlight(code, Some("python"));

        let stripped: String = strip_ansi_escapes::strip_str(&highlighted);
        assert_eq!(stripped, code);
    }

    #[test]
    fn test_line_count_preserved() {
        let code = "fn main() {\n    let x = 1;\n    let y = 2;\n}\n";
        let highlighted = highlighter().highlight(code, Some("rust"));

        // Styling is zero-width: no newline is added or removed.
        assert_eq!(
            highlighted.matches('\n').count(),
            code.matches('\n').count()
        );
    }

    #[test]
    fn test_unknown_language_is_unstyled() {
        let code = "whatever\n";
        assert_eq!(highlighter().highlight(code, Some("not-a-language")), code);
    }

    #[test]
    fn test_missing_language_highlights_as_plain_text() {
        let code = "some text\n";
        let highlighted = highlighter().highlight(code, None);

        let stripped: String = strip_ansi_escapes::strip_str(&highlighted);
        assert_eq!(stripped, code);
    }

    #[test]
    fn test_empty_code() {
        assert_eq!(highlighter().highlight("", Some("rust")), "");
    }
}
