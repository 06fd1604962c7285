//! Per-line construct coloring.
//!
//! Each prose line is checked against the leading block constructs in a
//! fixed order (heading, unordered list, ordered list, blockquote); the
//! first match wraps the whole line — indentation, marker and content —
//! in one construct color closed by a reset. Inline emphasis is resolved
//! first, so the construct color encloses any inline ANSI codes.

use crate::{
    ansi::{BLOCKQUOTE, HEADING, LIST, RESET},
    inline,
};

/// Color one line (without its terminator).
pub(crate) fn colorize(line: &str) -> String {
    let styled = inline::colorize(line);
    let Some(color) = construct(line) else {
        return styled;
    };

    // An unterminated inline span already reset the line; a second trailing
    // reset would be dead bytes.
    if styled.ends_with(RESET) {
        format!("{color}{styled}")
    } else {
        format!("{color}{styled}{RESET}")
    }
}

/// The construct color for `line`, if any. At most one construct matches.
fn construct(line: &str) -> Option<&'static str> {
    if heading(line) {
        return Some(HEADING);
    }

    let rest = line.trim_start_matches([' ', '\t']);
    if unordered_item(rest) || ordered_item(rest) {
        return Some(LIST);
    }
    if blockquote(rest) {
        return Some(BLOCKQUOTE);
    }

    None
}

/// `#` through `######` at the very start of the line, followed by
/// whitespace. Headings allow no indentation.
fn heading(line: &str) -> bool {
    let rest = line.trim_start_matches('#');
    let hashes = line.len() - rest.len();
    (1..=6).contains(&hashes) && starts_with_whitespace(rest)
}

/// `-` followed by whitespace.
fn unordered_item(rest: &str) -> bool {
    rest.strip_prefix('-').is_some_and(starts_with_whitespace)
}

/// Digits, `.`, whitespace.
fn ordered_item(rest: &str) -> bool {
    let after_digits = rest.trim_start_matches(|c: char| c.is_ascii_digit());
    after_digits.len() < rest.len()
        && after_digits
            .strip_prefix('.')
            .is_some_and(starts_with_whitespace)
}

/// `>` followed by whitespace.
fn blockquote(rest: &str) -> bool {
    rest.strip_prefix('>').is_some_and(starts_with_whitespace)
}

fn starts_with_whitespace(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_whitespace)
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
