//! Inline span types.
//!
//! Spans form a typed tree that the rendering layer walks structurally. No
//! span carries markup intended for verbatim injection.

use serde::{Deserialize, Serialize};

/// URL schemes that must never be followed from rendered content.
const BLOCKED_SCHEMES: &[&str] = &["javascript", "vbscript", "data"];

/// An inline-formatted run of text within a block.
///
/// # Serialisation
///
/// Spans are serialised adjacently tagged:
///
/// ```json
/// { "kind": "plain_text", "value": "Hello" }
/// { "kind": "link", "value": { "text": "docs", "href": "https://example.com" } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Span {
    /// Literal text.
    PlainText(String),
    /// Text delimited by single backticks.
    CodeSpan(String),
    /// Text delimited by double asterisks.
    Bold(Vec<Span>),
    /// Text delimited by single asterisks.
    Italic(Vec<Span>),
    /// A `[text](href)` reference.
    Link {
        /// The visible link text.
        text: String,
        /// The link target, exactly as written.
        href: String,
    },
}

impl Span {
    /// Creates a plain text span.
    ///
    /// # Examples
    ///
    /// ```
    /// use docent::markdown::domain::Span;
    ///
    /// assert_eq!(Span::plain("hi"), Span::PlainText("hi".to_owned()));
    /// ```
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::PlainText(text.into())
    }

    /// Returns the visible text of this span, with all formatting removed.
    #[must_use]
    pub fn plain_text(&self) -> String {
        match self {
            Self::PlainText(text) | Self::CodeSpan(text) | Self::Link { text, .. } => text.clone(),
            Self::Bold(inner) | Self::Italic(inner) => spans_to_plain_text(inner),
        }
    }

    /// Returns the link target if this is a link whose target is safe to follow.
    ///
    /// Returns `None` for non-link spans and for links whose scheme is blocked.
    ///
    /// # Examples
    ///
    /// ```
    /// use docent::markdown::domain::Span;
    ///
    /// let safe = Span::Link { text: "a".into(), href: "https://example.com".into() };
    /// let unsafe_link = Span::Link { text: "b".into(), href: "javascript:alert(1)".into() };
    /// assert_eq!(safe.navigable_href(), Some("https://example.com"));
    /// assert_eq!(unsafe_link.navigable_href(), None);
    /// ```
    #[must_use]
    pub fn navigable_href(&self) -> Option<&str> {
        match self {
            Self::Link { href, .. } if is_navigable_href(href) => Some(href),
            _ => None,
        }
    }
}

/// Concatenates the visible text of a span sequence.
#[must_use]
pub fn spans_to_plain_text(spans: &[Span]) -> String {
    spans.iter().map(Span::plain_text).collect()
}

/// Returns `true` if `href` may be rendered as a navigable reference.
///
/// Script-capable schemes (`javascript:`, `vbscript:`, `data:`) are refused.
/// Leading whitespace and control characters are ignored, as are whitespace
/// and control characters embedded in the scheme, matching how browsers
/// normalise URLs before dispatch. Relative references are always navigable.
#[must_use]
pub fn is_navigable_href(href: &str) -> bool {
    let trimmed = href.trim_start_matches(|c: char| c.is_whitespace() || c.is_control());
    let Some((scheme, _)) = trimmed.split_once(':') else {
        return true;
    };
    if scheme.contains(['/', '?', '#']) {
        return true;
    }
    let normalised: String = scheme
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    !BLOCKED_SCHEMES.contains(&normalised.as_str())
}
