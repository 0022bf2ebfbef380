//! Unit tests for the inline span transformer.

use crate::markdown::{domain::Span, inline::transform};
use rstest::rstest;

fn bold(text: &str) -> Span {
    Span::Bold(vec![Span::plain(text)])
}

fn italic(text: &str) -> Span {
    Span::Italic(vec![Span::plain(text)])
}

// ============================================================================
// Plain text
// ============================================================================

#[rstest]
#[case("hello world")]
#[case("  leading and trailing  ")]
#[case("numbers 1 < 2 and <b>tags</b> stay literal")]
#[case("unicode: naïve café ✓")]
fn line_without_markup_is_single_plain_span(#[case] line: &str) {
    assert_eq!(transform(line), vec![Span::plain(line)]);
}

#[test]
fn empty_line_yields_no_spans() {
    assert!(transform("").is_empty());
}

// ============================================================================
// Individual constructs
// ============================================================================

#[rstest]
#[case("`x`", vec![Span::CodeSpan("x".into())])]
#[case("use `Vec<T>` here", vec![
    Span::plain("use "),
    Span::CodeSpan("Vec<T>".into()),
    Span::plain(" here"),
])]
#[case("**strong**", vec![bold("strong")])]
#[case("a *soft* word", vec![Span::plain("a "), italic("soft"), Span::plain(" word")])]
#[case("see [docs](https://example.com/a)", vec![
    Span::plain("see "),
    Span::Link { text: "docs".into(), href: "https://example.com/a".into() },
])]
fn single_construct_is_recognised(#[case] line: &str, #[case] expected: Vec<Span>) {
    assert_eq!(transform(line), expected);
}

#[test]
fn every_match_in_a_line_is_replaced() {
    let spans = transform("`a` and `b` and `c`");

    assert_eq!(
        spans,
        vec![
            Span::CodeSpan("a".into()),
            Span::plain(" and "),
            Span::CodeSpan("b".into()),
            Span::plain(" and "),
            Span::CodeSpan("c".into()),
        ]
    );
}

#[test]
fn adjacent_constructs_produce_no_empty_plain_spans() {
    let spans = transform("**a**`b`");

    assert_eq!(spans, vec![bold("a"), Span::CodeSpan("b".into())]);
}

// ============================================================================
// Pass ordering and non-recursion
// ============================================================================

#[test]
fn markup_inside_code_span_stays_literal() {
    let spans = transform("`**not bold** [x](y)`");

    assert_eq!(spans, vec![Span::CodeSpan("**not bold** [x](y)".into())]);
}

#[test]
fn link_inside_bold_is_not_reparsed() {
    let spans = transform("**[text](url)**");

    assert_eq!(spans, vec![bold("[text](url)")]);
}

#[test]
fn bold_inside_link_text_is_captured_by_bold_pass_first() {
    // The bold pass runs before the link pass, so the link delimiters are
    // split across two plain segments and never match.
    let spans = transform("[**x**](u)");

    assert_eq!(spans, vec![Span::plain("["), bold("x"), Span::plain("](u)")]);
}

#[test]
fn code_span_breaks_an_enclosing_italic_run() {
    let spans = transform("*a `b` c*");

    assert_eq!(
        spans,
        vec![
            Span::plain("*a "),
            Span::CodeSpan("b".into()),
            Span::plain(" c*"),
        ]
    );
}

#[test]
fn triple_asterisks_resolve_bold_and_leave_outer_stars() {
    let spans = transform("***x***");

    assert_eq!(spans, vec![Span::plain("*"), bold("x"), Span::plain("*")]);
}

// ============================================================================
// Malformed markup
// ============================================================================

#[rstest]
#[case("unclosed `code")]
#[case("**half bold")]
#[case("lonely * star")]
#[case("[text](missing-close")]
#[case("[text] (space breaks it)")]
#[case("``")]
#[case("****")]
fn unbalanced_markup_is_plain_text(#[case] line: &str) {
    assert_eq!(transform(line), vec![Span::plain(line)]);
}

#[test]
fn transform_is_deterministic() {
    let line = "mix `code` **bold** *em* [l](h) tail";

    assert_eq!(transform(line), transform(line));
}
