//! Inline span transformer.
//!
//! Four substitution passes run in a fixed order: inline code, bold, italic,
//! link. Each pass scans left to right and replaces every non-overlapping
//! match, but only within text that no earlier pass has captured. A construct
//! produced by one pass is never reopened by a later one, so nested markup
//! such as `**[text](url)**` resolves to whichever delimiter is consumed
//! first and the rest stays literal.
//!
//! Unbalanced delimiters never fail; they simply remain plain text.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::{domain::Span, pattern::compile};

static CODE: LazyLock<Regex> = LazyLock::new(|| compile(r"`([^`]+)`"));
static BOLD: LazyLock<Regex> = LazyLock::new(|| compile(r"\*\*([^*]+)\*\*"));
static ITALIC: LazyLock<Regex> = LazyLock::new(|| compile(r"\*([^*]+)\*"));
static LINK: LazyLock<Regex> = LazyLock::new(|| compile(r"\[([^\]]+)\]\(([^)]+)\)"));

/// One substitution pass.
#[derive(Debug, Clone, Copy)]
enum Construct {
    Code,
    Bold,
    Italic,
    Link,
}

impl Construct {
    const ORDER: [Self; 4] = [Self::Code, Self::Bold, Self::Italic, Self::Link];

    fn pattern(self) -> &'static Regex {
        match self {
            Self::Code => LazyLock::force(&CODE),
            Self::Bold => LazyLock::force(&BOLD),
            Self::Italic => LazyLock::force(&ITALIC),
            Self::Link => LazyLock::force(&LINK),
        }
    }

    fn build(self, captures: &Captures<'_>) -> Option<Span> {
        let inner = captures.get(1)?.as_str().to_owned();
        let span = match self {
            Self::Code => Span::CodeSpan(inner),
            Self::Bold => Span::Bold(vec![Span::PlainText(inner)]),
            Self::Italic => Span::Italic(vec![Span::PlainText(inner)]),
            Self::Link => Span::Link {
                text: inner,
                href: captures.get(2)?.as_str().to_owned(),
            },
        };
        Some(span)
    }
}

/// Intermediate state between passes.
#[derive(Debug)]
enum Segment {
    /// Text still open to later passes.
    Raw(String),
    /// A construct captured by an earlier pass.
    Done(Span),
}

/// Converts one line of raw text into an ordered sequence of spans.
///
/// An empty line yields no spans. Text with no markup yields a single
/// [`Span::PlainText`] equal to the input.
///
/// # Examples
///
/// ```
/// use docent::markdown::{domain::Span, inline::transform};
///
/// let spans = transform("run `cargo test` **now**");
/// assert_eq!(
///     spans,
///     vec![
///         Span::plain("run "),
///         Span::CodeSpan("cargo test".into()),
///         Span::plain(" "),
///         Span::Bold(vec![Span::plain("now")]),
///     ]
/// );
/// ```
#[must_use]
pub fn transform(line: &str) -> Vec<Span> {
    if line.is_empty() {
        return Vec::new();
    }

    Construct::ORDER
        .into_iter()
        .fold(vec![Segment::Raw(line.to_owned())], apply)
        .into_iter()
        .map(|segment| match segment {
            Segment::Raw(text) => Span::PlainText(text),
            Segment::Done(span) => span,
        })
        .collect()
}

fn apply(segments: Vec<Segment>, construct: Construct) -> Vec<Segment> {
    let mut out = Vec::with_capacity(segments.len());
    for segment in segments {
        match segment {
            Segment::Raw(text) => split_raw(&text, construct, &mut out),
            done @ Segment::Done(_) => out.push(done),
        }
    }
    out
}

fn split_raw(text: &str, construct: Construct, out: &mut Vec<Segment>) {
    let mut cursor = 0;
    for captures in construct.pattern().captures_iter(text) {
        let Some(whole) = captures.get(0) else {
            continue;
        };
        let Some(span) = construct.build(&captures) else {
            continue;
        };
        push_raw(out, text.get(cursor..whole.start()));
        out.push(Segment::Done(span));
        cursor = whole.end();
    }
    push_raw(out, text.get(cursor..));
}

fn push_raw(out: &mut Vec<Segment>, piece: Option<&str>) {
    if let Some(text) = piece.filter(|candidate| !candidate.is_empty()) {
        out.push(Segment::Raw(text.to_owned()));
    }
}
