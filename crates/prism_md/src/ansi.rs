//! Shared ANSI SGR escape constants and visual width computation.
//!
//! Every markdown construct gets its own constant so tests can assert the
//! exact escape emitted for a construct, and so no two constructs share a
//! color by accident.

/// SGR: Bold on.
pub const BOLD_START: &str = "\x1b[1m";

/// SGR: Bold off.
pub const BOLD_END: &str = "\x1b[22m";

/// SGR: Italic on.
pub const ITALIC_START: &str = "\x1b[3m";

/// SGR: Italic off.
pub const ITALIC_END: &str = "\x1b[23m";

/// SGR: Strikethrough on.
pub const STRIKETHROUGH_START: &str = "\x1b[9m";

/// SGR: Strikethrough off.
pub const STRIKETHROUGH_END: &str = "\x1b[29m";

/// SGR: Heading foreground (cyan). Closed by [`RESET`].
pub const HEADING: &str = "\x1b[36m";

/// SGR: List item foreground (yellow). Closed by [`RESET`].
pub const LIST: &str = "\x1b[33m";

/// SGR: Blockquote foreground (green). Closed by [`RESET`].
pub const BLOCKQUOTE: &str = "\x1b[32m";

/// SGR: Code fence delimiter foreground (bright black). Closed by [`RESET`].
pub const CODE: &str = "\x1b[90m";

/// SGR: Full attribute reset.
pub const RESET: &str = "\x1b[0m";

/// Calculate the visual width of a string, ignoring ANSI escape sequences.
///
/// Uses Unicode width rules (UAX #11) so that wide characters such as CJK
/// ideographs and emoji are correctly counted as 2 columns. Control
/// characters and escape sequences contribute zero width.
#[must_use]
pub fn visual_width(s: &str) -> usize {
    use unicode_width::UnicodeWidthChar as _;

    let mut len = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if in_escape {
            if c.is_ascii_alphabetic() || c == '~' {
                in_escape = false;
            }
        } else if c == '\x1b' {
            in_escape = true;
        } else {
            len += c.width().unwrap_or(0);
        }
    }
    len
}

#[cfg(test)]
#[path = "ansi_tests.rs"]
mod tests;
