//! Domain types for the markdown subsystem.
//!
//! Blocks and spans are plain immutable values, serialisable via serde so
//! that a rendering collaborator in another process can consume them.

mod block;
mod span;

pub use block::{Block, HeadingLevel, InvalidHeadingLevel};
pub use span::{Span, is_navigable_href, spans_to_plain_text};
