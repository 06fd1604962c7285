//! Markdown coloring and code block extraction for chat replies.
//!
//! The formatter decorates a markdown message with ANSI escape codes for
//! terminal display while keeping every original character in place:
//! stripping the escapes from the output yields the input, byte for byte.
//! Fenced code blocks are extracted as [`CodeBlock`] tokens and re-rendered
//! through syntax highlighting.

pub mod ansi;
pub mod escape;
pub mod extract;
pub mod format;
pub mod highlight;
pub mod theme;

mod inline;
mod line;

pub use escape::EscapeGuard;
pub use extract::{CodeBlock, code_blocks};
pub use format::Formatter;
