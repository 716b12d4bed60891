use pretty_assertions::assert_eq;
use rstest::rstest;
use runmark_engine::{ElementKind, MarkdownElement, parse};

#[test]
fn pure_text_line_is_a_marked_paragraph() {
    assert_eq!(
        parse("no syntax here"),
        vec![
            MarkdownElement::paragraph(),
            MarkdownElement::text("no syntax here"),
        ]
    );
}

#[test]
fn headers_extract_level_and_trimmed_text() {
    assert_eq!(
        parse("# A\n## B"),
        vec![
            MarkdownElement::header(1, "A"),
            MarkdownElement::header(2, "B"),
        ]
    );
}

#[rstest]
#[case("# one", 1, "one")]
#[case("## two", 2, "two")]
#[case("### three", 3, "three")]
#[case("#### four", 4, "four")]
#[case("##### five", 5, "five")]
#[case("###### six", 6, "six")]
#[case("#packed", 1, "packed")]
fn header_levels(#[case] input: &str, #[case] level: u8, #[case] text: &str) {
    assert_eq!(parse(input), vec![MarkdownElement::header(level, text)]);
}

#[rstest]
#[case("####### seven")]
#[case("#")]
#[case("##   ")]
fn non_headers_fall_through_to_paragraphs(#[case] input: &str) {
    let elements = parse(input);
    assert_eq!(elements[0], MarkdownElement::paragraph());
    assert_eq!(elements[1], MarkdownElement::text(input.trim()));
}

#[test]
fn inline_scan_mixes_text_and_bold() {
    assert_eq!(
        parse("x **b** y"),
        vec![
            MarkdownElement::paragraph(),
            MarkdownElement::text("x "),
            MarkdownElement::bold("b"),
            MarkdownElement::text(" y"),
        ]
    );
}

#[test]
fn ordered_items_keep_literal_numbers_without_renumbering() {
    assert_eq!(
        parse("5. five\n1. one"),
        vec![
            MarkdownElement::numbered_item(5, vec![MarkdownElement::text("five")]),
            MarkdownElement::numbered_item(1, vec![MarkdownElement::text("one")]),
        ]
    );
}

#[test]
fn unterminated_bold_degrades_to_literal_text() {
    assert_eq!(
        parse("**bold without close"),
        vec![
            MarkdownElement::paragraph(),
            MarkdownElement::text("**bold without close"),
        ]
    );
}

#[test]
fn link_grammar_success_and_failure() {
    assert_eq!(
        parse("[T](U)"),
        vec![MarkdownElement::paragraph(), MarkdownElement::link("T", "U")]
    );
    assert_eq!(
        parse("[T](U"),
        vec![
            MarkdownElement::paragraph(),
            MarkdownElement::text("[T](U"),
        ]
    );
}

#[rstest]
#[case("- item")]
#[case("* item")]
#[case("+ item")]
fn every_bullet_marker_produces_an_item(#[case] input: &str) {
    assert_eq!(
        parse(input),
        vec![MarkdownElement::bullet_item(vec![MarkdownElement::text(
            "item"
        )])]
    );
}

#[test]
fn bullet_content_is_inline_tokenized() {
    assert_eq!(
        parse("- see [d](e)"),
        vec![MarkdownElement::bullet_item(vec![
            MarkdownElement::text("see "),
            MarkdownElement::link("d", "e"),
        ])]
    );
}

#[test]
fn bullet_keeps_extra_spaces_after_the_marker() {
    assert_eq!(
        parse("-  padded"),
        vec![MarkdownElement::bullet_item(vec![MarkdownElement::text(
            " padded"
        )])]
    );
}

#[test]
fn overflowing_item_number_degrades_to_a_paragraph() {
    let elements = parse("184467440737095516160. big");
    assert_eq!(elements[0], MarkdownElement::paragraph());
    assert!(matches!(elements[1].kind, ElementKind::Text));
}

#[test]
fn fences_are_per_line_never_spanning() {
    assert_eq!(
        parse("```rust\nlet x = 1;\n```"),
        vec![
            MarkdownElement::code_block("rust"),
            MarkdownElement::paragraph(),
            MarkdownElement::text("let x = 1;"),
            MarkdownElement::code_block(""),
        ]
    );
}

#[test]
fn blank_lines_become_line_breaks() {
    assert_eq!(
        parse("a\n\nb"),
        vec![
            MarkdownElement::paragraph(),
            MarkdownElement::text("a"),
            MarkdownElement::line_break(),
            MarkdownElement::paragraph(),
            MarkdownElement::text("b"),
        ]
    );
}

#[rstest]
#[case("a\nb")]
#[case("a\r\nb")]
#[case("a\rb")]
fn every_newline_convention_splits_the_same(#[case] input: &str) {
    assert_eq!(
        parse(input),
        vec![
            MarkdownElement::paragraph(),
            MarkdownElement::text("a"),
            MarkdownElement::paragraph(),
            MarkdownElement::text("b"),
        ]
    );
}

#[test]
fn trailing_newline_yields_a_trailing_break() {
    assert_eq!(
        parse("a\n"),
        vec![
            MarkdownElement::paragraph(),
            MarkdownElement::text("a"),
            MarkdownElement::line_break(),
        ]
    );
}

#[test]
fn empty_input_is_a_single_line_break() {
    assert_eq!(parse(""), vec![MarkdownElement::line_break()]);
}

#[test]
fn whitespace_only_lines_are_breaks() {
    assert_eq!(parse("   \t  "), vec![MarkdownElement::line_break()]);
}

#[test]
fn leading_indentation_does_not_change_classification() {
    assert_eq!(parse("   # T"), vec![MarkdownElement::header(1, "T")]);
    assert_eq!(
        parse("\t- x"),
        vec![MarkdownElement::bullet_item(vec![MarkdownElement::text(
            "x"
        )])]
    );
}

#[test]
fn mixed_document_parses_in_order() {
    let doc = "# Notes\n\nIntro with *tone* and `code`.\n- first\n2. second\n```\ndone";
    assert_eq!(
        parse(doc),
        vec![
            MarkdownElement::header(1, "Notes"),
            MarkdownElement::line_break(),
            MarkdownElement::paragraph(),
            MarkdownElement::text("Intro with "),
            MarkdownElement::italic("tone"),
            MarkdownElement::text(" and "),
            MarkdownElement::code("code"),
            MarkdownElement::text("."),
            MarkdownElement::bullet_item(vec![MarkdownElement::text("first")]),
            MarkdownElement::numbered_item(2, vec![MarkdownElement::text("second")]),
            MarkdownElement::code_block(""),
            MarkdownElement::paragraph(),
            MarkdownElement::text("done"),
        ]
    );
}

#[test]
fn spans_slice_back_to_the_source() {
    let input = "  # T\nplain **b**";
    let elements = parse(input);

    let header_span = elements[0].span.unwrap();
    assert_eq!(header_span.slice(input), Some("# T"));

    let bold = elements
        .iter()
        .find(|e| matches!(e.kind, ElementKind::Bold))
        .unwrap();
    assert_eq!(bold.span.unwrap().slice(input), Some("**b**"));
}

#[rstest]
#[case("***")]
#[case("*_*_")]
#[case("[[[[")]
#[case("![")]
#[case("`")]
#[case("!!!![]()")]
#[case("\u{0}\u{1}\u{2}")]
#[case("****__``[]")]
#[case("1. ")]
#[case("- ")]
#[case("``````")]
fn pathological_inputs_still_parse(#[case] input: &str) {
    // Totality: no input may panic, whatever it degrades to.
    let _ = parse(input);
}

#[test]
fn very_long_marker_runs_terminate() {
    let input = "*".repeat(10_000);
    let elements = parse(&input);
    assert!(!elements.is_empty());
}
