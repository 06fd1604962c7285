use std::io::Cursor;

use prism_md::code_blocks;

use super::*;

fn fixture() -> (Formatter, Vec<CodeBlock>) {
    let formatter = Formatter::new();
    let message = "```python\nfirst()\n```\n\n```python\nsecond()\n```\n";
    (formatter, code_blocks(message))
}

fn prompt_with(input: &str, blocks: &[CodeBlock], formatter: &Formatter) -> (Option<String>, String) {
    let mut output = Vec::new();
    let selected = BlockSelect::new(formatter, blocks)
        .prompt(&mut Cursor::new(input), &mut output)
        .unwrap();
    (selected, String::from_utf8(output).unwrap())
}

#[test]
fn test_select_returns_raw_code() {
    let (formatter, blocks) = fixture();
    let (selected, output) = prompt_with("1\n", &blocks, &formatter);

    assert_eq!(selected.as_deref(), Some("first()\n"));
    // The listing shows highlighted previews, but the selection is raw.
    assert!(!selected.unwrap().contains('\x1b'));
    assert!(output.contains("[1] python"), "output: {output:?}");
    assert!(output.contains("[2] python"), "output: {output:?}");
}

#[test]
fn test_select_second_block() {
    let (formatter, blocks) = fixture();
    let (selected, _) = prompt_with("2\n", &blocks, &formatter);

    assert_eq!(selected.as_deref(), Some("second()\n"));
}

#[test]
fn test_duplicate_code_selects_by_position() {
    let formatter = Formatter::new();
    let message = "```\nsame\n```\n\n```\nsame\n```\n";
    let blocks = code_blocks(message);
    assert_eq!(blocks[0].code, blocks[1].code);

    let (selected, _) = prompt_with("1\n", &blocks, &formatter);
    assert_eq!(selected.as_deref(), Some(blocks[0].code.as_str()));
}

#[test]
fn test_non_integer_reprompts_without_listing() {
    let (formatter, blocks) = fixture();
    let (selected, output) = prompt_with("nope\n2\n", &blocks, &formatter);

    assert_eq!(selected.as_deref(), Some("second()\n"));
    assert!(output.contains("Not a number: \"nope\"."), "output: {output:?}");
    // The listing is shown once up front, not again for a parse error.
    assert_eq!(output.matches("[1] python").count(), 1, "output: {output:?}");
}

#[test]
fn test_out_of_range_redisplays_listing() {
    let (formatter, blocks) = fixture();
    let (selected, output) = prompt_with("9\n1\n", &blocks, &formatter);

    assert_eq!(selected.as_deref(), Some("first()\n"));
    assert!(output.contains("No block numbered 9."), "output: {output:?}");
    assert_eq!(output.matches("[1] python").count(), 2, "output: {output:?}");
}

#[test]
fn test_zero_is_out_of_range() {
    let (formatter, blocks) = fixture();
    let (selected, output) = prompt_with("0\n1\n", &blocks, &formatter);

    assert_eq!(selected.as_deref(), Some("first()\n"));
    assert!(output.contains("No block numbered 0."), "output: {output:?}");
}

#[test]
fn test_end_of_input_aborts() {
    let (formatter, blocks) = fixture();
    let (selected, output) = prompt_with("", &blocks, &formatter);

    assert_eq!(selected, None);
    assert!(output.contains("Aborted."), "output: {output:?}");
}

#[test]
fn test_interrupt_aborts_without_error() {
    struct Interrupting;

    impl io::Read for Interrupting {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::ErrorKind::Interrupted.into())
        }
    }

    impl BufRead for Interrupting {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            Err(io::ErrorKind::Interrupted.into())
        }

        fn consume(&mut self, _amount: usize) {}
    }

    let (formatter, blocks) = fixture();
    let mut output = Vec::new();
    let selected = BlockSelect::new(&formatter, &blocks)
        .prompt(&mut Interrupting, &mut output)
        .unwrap();

    assert_eq!(selected, None);
    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Aborted."), "output: {output:?}");
}

#[test]
fn test_no_blocks_short_circuits() {
    let formatter = Formatter::new();
    let mut output = Vec::new();
    let selected = BlockSelect::new(&formatter, &[])
        .prompt(&mut Cursor::new("1\n"), &mut output)
        .unwrap();

    assert_eq!(selected, None);
    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("No code blocks"), "output: {output:?}");
}

#[test]
fn test_selection_without_trailing_newline() {
    let (formatter, blocks) = fixture();
    let (selected, _) = prompt_with("2", &blocks, &formatter);

    assert_eq!(selected.as_deref(), Some("second()\n"));
}
