//! Block-level structure of rendered assistant content.

use serde::{Deserialize, Serialize};

use super::Span;

/// Heading depth. Only the three shallowest levels are recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum HeadingLevel {
    /// `# `
    H1,
    /// `## `
    H2,
    /// `### `
    H3,
}

impl HeadingLevel {
    /// Returns the numeric level (1 to 3).
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::H1 => 1,
            Self::H2 => 2,
            Self::H3 => 3,
        }
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level.value()
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = InvalidHeadingLevel;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::H1),
            2 => Ok(Self::H2),
            3 => Ok(Self::H3),
            other => Err(InvalidHeadingLevel(other)),
        }
    }
}

/// Error returned when a numeric heading level is outside `1..=3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("heading level {0} is outside 1..=3")]
pub struct InvalidHeadingLevel(pub u8);

/// A structural unit of rendered content.
///
/// Blocks are pure derived data: parsing identical text always yields an
/// identical block sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A heading line.
    Heading {
        /// Heading depth.
        level: HeadingLevel,
        /// Heading text with the `#` prefix stripped.
        text: String,
        /// Inline spans of `text`.
        spans: Vec<Span>,
    },
    /// A single non-blank line of prose.
    Paragraph {
        /// Inline spans of the line.
        spans: Vec<Span>,
    },
    /// A run of consecutive list items.
    List {
        /// Inline spans of each item, in source order.
        items: Vec<Vec<Span>>,
    },
    /// A fenced code block.
    CodeBlock {
        /// Language tag after the opening fence, if any.
        language: Option<String>,
        /// Raw lines between the fences.
        lines: Vec<String>,
    },
    /// A `> ` quoted line.
    Quote {
        /// Inline spans of the quoted text.
        spans: Vec<Span>,
    },
    /// Vertical space from a blank line.
    Spacer,
}

impl Block {
    /// Returns `true` for [`Block::Spacer`].
    #[must_use]
    pub const fn is_spacer(&self) -> bool {
        matches!(self, Self::Spacer)
    }
}
