//! Inline emphasis and strikethrough coloring.
//!
//! A recursive-descent matcher walks marker runs (`*`, `_`, `~`) and builds
//! a small node tree; the renderer then emits the original markers wrapped
//! in ANSI enable/disable pairs. Because content is parsed before the
//! enclosing marker is wrapped, ANSI nesting always mirrors the textual
//! nesting: `~~***x***~~` puts the strikethrough codes outside,
//! `***~~x~~***` puts them inside.
//!
//! Marker runs are typed by exact length. A run of four or more identical
//! characters is literal text, which is also what gives every match its
//! adjacency guard: a valid run can never sit next to another identical
//! marker character.

use crate::ansi::{
    BOLD_END, BOLD_START, ITALIC_END, ITALIC_START, RESET, STRIKETHROUGH_END, STRIKETHROUGH_START,
};

/// Inline style resolved from a marker run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    /// `*` or `_`.
    Italic,

    /// `**` or `__`.
    Bold,

    /// `***` or `___`.
    BoldItalic,

    /// `~~`.
    Strikethrough,
}

impl Style {
    /// Style for a run of `len` copies of `marker`, or `None` when the run
    /// is literal text.
    const fn from_run(marker: u8, len: usize) -> Option<Self> {
        match (marker, len) {
            (b'~', 2) => Some(Self::Strikethrough),
            (b'*' | b'_', 1) => Some(Self::Italic),
            (b'*' | b'_', 2) => Some(Self::Bold),
            (b'*' | b'_', 3) => Some(Self::BoldItalic),
            _ => None,
        }
    }
}

/// One node of a parsed line.
#[derive(Debug, PartialEq, Eq)]
enum Node<'a> {
    /// Literal text, emitted unchanged.
    Text(&'a str),

    /// A styled span delimited by `marker` on both sides (or only the left
    /// side when unclosed).
    Span {
        marker: &'a str,
        style: Style,
        closed: bool,
        children: Vec<Node<'a>>,
    },
}

/// Color emphasis and strikethrough spans in one line.
///
/// The markers stay in the output; only zero-width ANSI codes are added.
/// When any span is left unterminated, a single trailing [`RESET`] closes
/// the line so no style leaks into subsequent output.
pub(crate) fn colorize(line: &str) -> String {
    let nodes = parse(line);

    let mut out = String::with_capacity(line.len());
    let mut unclosed = false;
    render(&nodes, &mut out, &mut unclosed);
    if unclosed {
        out.push_str(RESET);
    }
    out
}

/// Parse a line (or span content) into nodes.
fn parse(text: &str) -> Vec<Node<'_>> {
    let bytes = text.as_bytes();
    let mut nodes = Vec::new();
    let mut text_start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        // Marker characters are ASCII, so byte scanning never lands inside
        // a multi-byte character.
        let b = bytes[pos];
        if !matches!(b, b'*' | b'_' | b'~') {
            pos += 1;
            continue;
        }

        let run = run_len(bytes, pos);
        let Some(style) = Style::from_run(b, run) else {
            pos += run;
            continue;
        };

        if text_start < pos {
            nodes.push(Node::Text(&text[text_start..pos]));
        }

        let content_start = pos + run;
        match find_close(bytes, content_start, b, run) {
            Some(close_at) => {
                nodes.push(Node::Span {
                    marker: &text[pos..content_start],
                    style,
                    closed: true,
                    children: parse(&text[content_start..close_at]),
                });
                pos = close_at + run;
            }
            None => {
                nodes.push(Node::Span {
                    marker: &text[pos..content_start],
                    style,
                    closed: false,
                    children: parse(&text[content_start..]),
                });
                pos = text.len();
            }
        }
        text_start = pos;
    }

    if text_start < text.len() {
        nodes.push(Node::Text(&text[text_start..]));
    }

    nodes
}

/// Length of the run of identical bytes starting at `pos`.
fn run_len(bytes: &[u8], pos: usize) -> usize {
    let b = bytes[pos];
    bytes[pos..].iter().take_while(|&&x| x == b).count()
}

/// Find the start of the next run of exactly `len` copies of `marker` at or
/// after `from`. Runs of any other length are skipped whole, which is what
/// keeps a bold close from eating the edge of a bold-italic marker.
fn find_close(bytes: &[u8], from: usize, marker: u8, len: usize) -> Option<usize> {
    let mut pos = from;
    while pos < bytes.len() {
        if bytes[pos] == marker {
            let run = run_len(bytes, pos);
            if run == len {
                return Some(pos);
            }
            pos += run;
        } else {
            pos += 1;
        }
    }
    None
}

/// Emit nodes as text plus ANSI codes.
fn render(nodes: &[Node<'_>], out: &mut String, unclosed: &mut bool) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Span {
                marker,
                style,
                closed,
                children,
            } => {
                push_start(*style, out);
                out.push_str(marker);
                render(children, out, unclosed);
                if *closed {
                    out.push_str(marker);
                    push_end(*style, out);
                } else {
                    *unclosed = true;
                }
            }
        }
    }
}

/// Enable codes for `style`.
fn push_start(style: Style, out: &mut String) {
    match style {
        Style::Italic => out.push_str(ITALIC_START),
        Style::Bold => out.push_str(BOLD_START),
        Style::BoldItalic => {
            out.push_str(BOLD_START);
            out.push_str(ITALIC_START);
        }
        Style::Strikethrough => out.push_str(STRIKETHROUGH_START),
    }
}

/// Disable codes for `style`, in reverse order of the enables.
fn push_end(style: Style, out: &mut String) {
    match style {
        Style::Italic => out.push_str(ITALIC_END),
        Style::Bold => out.push_str(BOLD_END),
        Style::BoldItalic => {
            out.push_str(ITALIC_END);
            out.push_str(BOLD_END);
        }
        Style::Strikethrough => out.push_str(STRIKETHROUGH_END),
    }
}

#[cfg(test)]
#[path = "inline_tests.rs"]
mod tests;
