use super::*;

#[test]
fn test_visual_width_plain() {
    assert_eq!(visual_width("hello"), 5);
    assert_eq!(visual_width(""), 0);
}

#[test]
fn test_visual_width_ignores_escapes() {
    let styled = format!("{BOLD_START}**bold**{BOLD_END}");
    assert_eq!(visual_width(&styled), 8);

    let wrapped = format!("{HEADING}# Title{RESET}");
    assert_eq!(visual_width(&wrapped), 7);
}

#[test]
fn test_visual_width_wide_characters() {
    // CJK ideographs occupy two columns.
    assert_eq!(visual_width("日本語"), 6);
    assert_eq!(visual_width("a日b"), 4);
}

#[test]
fn test_construct_colors_are_distinct() {
    let constants = [HEADING, LIST, BLOCKQUOTE, CODE];
    for (i, a) in constants.iter().enumerate() {
        for b in &constants[i + 1..] {
            assert_ne!(a, b, "construct colors must not be shared");
        }
    }
}
