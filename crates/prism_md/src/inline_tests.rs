use super::*;

struct TestCase {
    input: &'static str,
    output: String,
}

fn run_test(name: &str, case: &TestCase) {
    let actual = colorize(case.input);
    assert_eq!(actual, case.output, "failed case: {name}");
}

#[test]
fn test_bold() {
    let cases = vec![
        ("asterisks", TestCase {
            input: "**bold text**",
            output: format!("{BOLD_START}**bold text**{BOLD_END}"),
        }),
        ("underscores", TestCase {
            input: "__bold text__",
            output: format!("{BOLD_START}__bold text__{BOLD_END}"),
        }),
        ("embedded", TestCase {
            input: "a **b** c",
            output: format!("a {BOLD_START}**b**{BOLD_END} c"),
        }),
        ("multiple", TestCase {
            input: "**one** and **two**",
            output: format!("{BOLD_START}**one**{BOLD_END} and {BOLD_START}**two**{BOLD_END}"),
        }),
    ];

    for (name, case) in cases {
        run_test(name, &case);
    }
}

#[test]
fn test_italic() {
    let cases = vec![
        ("asterisk", TestCase {
            input: "*italic*",
            output: format!("{ITALIC_START}*italic*{ITALIC_END}"),
        }),
        ("underscore", TestCase {
            input: "_italic_",
            output: format!("{ITALIC_START}_italic_{ITALIC_END}"),
        }),
    ];

    for (name, case) in cases {
        run_test(name, &case);
    }
}

#[test]
fn test_bold_italic() {
    let cases = vec![
        ("asterisks", TestCase {
            input: "***bold italic***",
            output: format!("{BOLD_START}{ITALIC_START}***bold italic***{ITALIC_END}{BOLD_END}"),
        }),
        ("underscores", TestCase {
            input: "___bold italic___",
            output: format!("{BOLD_START}{ITALIC_START}___bold italic___{ITALIC_END}{BOLD_END}"),
        }),
    ];

    for (name, case) in cases {
        run_test(name, &case);
    }
}

#[test]
fn test_strikethrough() {
    let cases = vec![("simple", TestCase {
        input: "~~gone~~",
        output: format!("{STRIKETHROUGH_START}~~gone~~{STRIKETHROUGH_END}"),
    })];

    for (name, case) in cases {
        run_test(name, &case);
    }
}

#[test]
fn test_nesting_mirrors_text() {
    // Strikethrough outside, bold-italic inside.
    let actual = colorize("~~***x***~~");
    assert_eq!(
        actual,
        format!(
            "{STRIKETHROUGH_START}~~{BOLD_START}{ITALIC_START}***x***{ITALIC_END}{BOLD_END}~~{STRIKETHROUGH_END}"
        )
    );

    // Bold-italic outside, strikethrough inside.
    let actual = colorize("***~~x~~***");
    assert_eq!(
        actual,
        format!(
            "{BOLD_START}{ITALIC_START}***{STRIKETHROUGH_START}~~x~~{STRIKETHROUGH_END}***{ITALIC_END}{BOLD_END}"
        )
    );
}

#[test]
fn test_italic_nested_in_bold() {
    let actual = colorize("**bold *it* bold**");
    assert_eq!(
        actual,
        format!("{BOLD_START}**bold {ITALIC_START}*it*{ITALIC_END} bold**{BOLD_END}")
    );
}

#[test]
fn test_four_or_more_markers_are_literal() {
    let cases = vec![
        ("four_stars", "****text****"),
        ("four_tildes", "~~~~"),
        ("three_tildes", "~~~text~~~"),
        ("five_underscores", "_____"),
    ];

    for (name, input) in cases {
        assert_eq!(colorize(input), input, "failed case: {name}");
    }
}

#[test]
fn test_unterminated_emits_single_reset() {
    let actual = colorize("~~text");
    assert_eq!(actual, format!("{STRIKETHROUGH_START}~~text{RESET}"));
    assert!(!actual.contains(STRIKETHROUGH_END));
    assert_eq!(actual.matches(RESET).count(), 1);
}

#[test]
fn test_unterminated_bold_after_closed_span() {
    let actual = colorize("**one** and **two");
    assert_eq!(
        actual,
        format!("{BOLD_START}**one**{BOLD_END} and {BOLD_START}**two{RESET}")
    );
}

#[test]
fn test_plain_text_passes_through() {
    let cases = vec![
        ("plain", "no markup here"),
        ("lone_tilde", "approx ~5 items"),
        ("empty", ""),
        ("unicode", "日本語のテキスト"),
    ];

    for (name, input) in cases {
        assert_eq!(colorize(input), input, "failed case: {name}");
    }
}

#[test]
fn test_markers_preserved_verbatim() {
    for input in ["**bold**", "*i*", "___bi___", "~~s~~", "**a *b* c**"] {
        let stripped: String = strip_ansi_escapes::strip_str(colorize(input));
        assert_eq!(stripped, input);
    }
}
