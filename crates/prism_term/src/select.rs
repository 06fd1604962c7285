//! Interactive code block selection prompt.
//!
//! Renders a numbered listing of the code blocks extracted from a reply,
//! each with its highlighted preview, then reads one selection from the
//! injected input channel. The prompt owns all retry behavior; the caller
//! only sees the selected block's raw code, or `None` when the user backs
//! out.

use std::{
    fmt::Write as _,
    io::{self, BufRead, Write},
};

use prism_md::{CodeBlock, Formatter, ansi};
use tracing::debug;

use crate::error::Result;

/// Rule width bounds for the separator drawn under each listing entry.
const MIN_RULE_WIDTH: usize = 12;
const MAX_RULE_WIDTH: usize = 60;

/// Numbered selection prompt over extracted code blocks.
///
/// Input and output channels are injected, so the retry and abort paths
/// can be driven from tests with in-memory buffers.
#[derive(Debug)]
pub struct BlockSelect<'a> {
    /// Highlighter for the listing previews.
    formatter: &'a Formatter,

    /// The extracted blocks, in document order.
    blocks: &'a [CodeBlock],
}

impl<'a> BlockSelect<'a> {
    /// Creates a prompt over `blocks`, using `formatter` for the previews.
    #[must_use]
    pub fn new(formatter: &'a Formatter, blocks: &'a [CodeBlock]) -> Self {
        Self { formatter, blocks }
    }

    /// Displays the listing and reads a 1-based selection.
    ///
    /// Retry behavior:
    ///
    /// - non-integer input re-prompts with an error message;
    /// - an out-of-range integer re-prompts after redisplaying the listing;
    /// - end of input, or an interrupted read, prints an abort notice and
    ///   returns `Ok(None)`.
    ///
    /// On success, returns the selected block's **raw** code — not the
    /// highlighted preview.
    ///
    /// # Errors
    ///
    /// Returns an error when writing to `output` fails, or when reading
    /// fails with anything other than an interrupt.
    pub fn prompt<R, W>(&self, input: &mut R, output: &mut W) -> Result<Option<String>>
    where
        R: BufRead,
        W: Write,
    {
        if self.blocks.is_empty() {
            writeln!(output, "No code blocks in this reply.")?;
            return Ok(None);
        }

        output.write_all(self.listing()?.as_bytes())?;

        loop {
            write!(output, "Select a code block [1-{}]: ", self.blocks.len())?;
            output.flush()?;

            let entry = match read_entry(input) {
                Ok(Some(entry)) => entry,
                Ok(None) => return abort(output),
                Err(error) if error.kind() == io::ErrorKind::Interrupted => {
                    return abort(output);
                }
                Err(error) => return Err(error.into()),
            };

            let entry = entry.trim();
            let Ok(number) = entry.parse::<usize>() else {
                writeln!(output, "Not a number: {entry:?}.")?;
                continue;
            };

            match number.checked_sub(1).and_then(|at| self.blocks.get(at)) {
                Some(block) => return Ok(Some(block.code.clone())),
                None => {
                    writeln!(output, "No block numbered {number}.")?;
                    output.write_all(self.listing()?.as_bytes())?;
                }
            }
        }
    }

    /// Builds the numbered listing: language tag, highlighted preview, and
    /// a rule sized to the widest preview line.
    fn listing(&self) -> std::result::Result<String, std::fmt::Error> {
        let mut buf = String::new();
        for (at, block) in self.blocks.iter().enumerate() {
            let language = block.language.as_deref();
            let highlighted = self.formatter.highlight(&block.code, language);

            let width = highlighted
                .lines()
                .map(ansi::visual_width)
                .max()
                .unwrap_or(0)
                .clamp(MIN_RULE_WIDTH, MAX_RULE_WIDTH);

            writeln!(buf, "[{}] {}", at + 1, language.unwrap_or("plain"))?;
            buf.push_str(&highlighted);
            if !block.code.is_empty() && !block.code.ends_with('\n') {
                buf.push('\n');
            }
            writeln!(buf, "{}", "─".repeat(width))?;
        }
        Ok(buf)
    }
}

/// Prints the abort notice and maps the interrupt to "no selection".
fn abort<W: Write>(output: &mut W) -> Result<Option<String>> {
    debug!("code block selection aborted");
    writeln!(output, "Aborted.")?;
    Ok(None)
}

/// Reads one line from `input`.
///
/// Unlike [`BufRead::read_line`], an interrupted read surfaces as an error
/// instead of being silently retried; the prompt maps it to an abort.
/// Returns `Ok(None)` at end of input.
fn read_entry<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut entry = Vec::new();
    loop {
        let (used, done) = {
            let available = input.fill_buf()?;
            if available.is_empty() {
                if entry.is_empty() {
                    return Ok(None);
                }
                (0, true)
            } else if let Some(at) = available.iter().position(|&b| b == b'\n') {
                entry.extend_from_slice(&available[..at]);
                (at + 1, true)
            } else {
                entry.extend_from_slice(available);
                (available.len(), false)
            }
        };
        input.consume(used);
        if done {
            break;
        }
    }

    Ok(Some(String::from_utf8_lossy(&entry).into_owned()))
}

#[cfg(test)]
#[path = "select_tests.rs"]
mod tests;
