//! Fenced code block extraction.
//!
//! A single segmentation pass splits a message into prose regions and fenced
//! blocks, with the exact byte span of every block body. Both the public
//! token extraction and the formatter consume the same segments, so the
//! rendering side can never disagree with the extraction side about where a
//! block starts or ends — even when two blocks carry byte-identical code.

use std::ops::Range;

/// A fenced code block extracted from a message, in document order.
///
/// `code` preserves the interior of the block verbatim, including all
/// whitespace and the trailing newline before the closing delimiter. `span`
/// is the byte range of `code` within the original message; substitution is
/// driven by the span, never by searching for the code text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// Language tag from the opening delimiter, if present.
    pub language: Option<String>,

    /// Raw code body, byte-for-byte.
    pub code: String,

    /// Byte range of the body in the original message.
    pub span: Range<usize>,
}

/// One region of a message: either prose or a fenced block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    /// Text outside any fence, possibly spanning multiple lines.
    Prose(&'a str),

    /// A fenced block, closed or running to the end of the message.
    Fence(Fence<'a>),
}

/// A fenced block with its delimiter lines and raw body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Fence<'a> {
    /// Opening delimiter line, including its line terminator.
    pub(crate) open: &'a str,

    /// Raw body, including interior line terminators.
    pub(crate) body: &'a str,

    /// Closing delimiter line, or `None` when the fence never closes.
    pub(crate) close: Option<&'a str>,

    /// Language token from the opening delimiter.
    pub(crate) language: Option<&'a str>,

    /// Byte range of `body` in the original message.
    pub(crate) body_span: Range<usize>,
}

/// Extract every closed fenced block, in document order.
///
/// A fence that opens but never closes extracts no token; its lines belong
/// to the message tail and pass through formatting unmodified.
#[must_use]
pub fn code_blocks(message: &str) -> Vec<CodeBlock> {
    segments(message)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Fence(fence) if fence.close.is_some() => Some(CodeBlock {
                language: fence.language.map(str::to_owned),
                code: fence.body.to_owned(),
                span: fence.body_span,
            }),
            _ => None,
        })
        .collect()
}

/// Split a message into alternating prose and fence segments.
///
/// Segments are contiguous and cover the input exactly: concatenating
/// `open` + `body` + `close` and the prose slices in order reproduces the
/// message byte-for-byte.
pub(crate) fn segments(message: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut prose_start = 0;
    let mut cursor = 0;

    while cursor < message.len() {
        let end = line_end(message, cursor);
        let line = &message[cursor..end];
        let Some(language) = fence_open(line) else {
            cursor = end;
            continue;
        };

        if prose_start < cursor {
            segments.push(Segment::Prose(&message[prose_start..cursor]));
        }

        let body_start = end;
        let mut scan = body_start;
        let mut close = None;
        while scan < message.len() {
            let scan_end = line_end(message, scan);
            if fence_close(&message[scan..scan_end]) {
                close = Some((scan, scan_end));
                break;
            }
            scan = scan_end;
        }

        let (body_end, close_line, next) = match close {
            Some((at, after)) => (at, Some(&message[at..after]), after),
            None => (message.len(), None, message.len()),
        };

        segments.push(Segment::Fence(Fence {
            open: line,
            body: &message[body_start..body_end],
            close: close_line,
            language,
            body_span: body_start..body_end,
        }));

        cursor = next;
        prose_start = next;
    }

    if prose_start < message.len() {
        segments.push(Segment::Prose(&message[prose_start..]));
    }

    segments
}

/// Byte index one past the end of the line starting at `start`, including
/// the `\n` terminator when present.
fn line_end(text: &str, start: usize) -> usize {
    text[start..]
        .find('\n')
        .map_or(text.len(), |at| start + at + 1)
}

/// Parses `line` as an opening fence delimiter.
///
/// Returns `Some(language)` when the line, after trimming leading
/// whitespace, is three-or-more backticks followed by at most one token
/// containing neither whitespace nor backticks.
fn fence_open(line: &str) -> Option<Option<&str>> {
    let trimmed = line
        .trim_end_matches(['\n', '\r'])
        .trim_start_matches([' ', '\t']);
    let rest = trimmed.trim_start_matches('`');
    if trimmed.len() - rest.len() < 3 {
        return None;
    }

    let token = rest.trim();
    if token.is_empty() {
        Some(None)
    } else if token.chars().any(|c| c.is_whitespace() || c == '`') {
        None
    } else {
        Some(Some(token))
    }
}

/// Returns `true` when `line` is a closing fence delimiter: optional
/// whitespace around three-or-more backticks and nothing else.
fn fence_close(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= 3 && trimmed.bytes().all(|b| b == b'`')
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
