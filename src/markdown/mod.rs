//! Markdown block and inline span parsing for assistant messages.
//!
//! Assistant answers arrive as loosely formatted text. This module turns that
//! text into a typed tree so the rendering layer never has to trust raw
//! markup:
//!
//! - [`blocks::parse_blocks`] splits a message body into [`domain::Block`]s.
//! - [`inline::transform`] splits one line into [`domain::Span`]s.
//!
//! Both are pure and synchronous. The grammar is intentionally small: no
//! nested inline parsing, tables or footnotes.
//!
//! # Example
//!
//! ```
//! use docent::markdown::{blocks::parse_blocks, domain::Block};
//!
//! let blocks = parse_blocks("```python\nprint(1)\n```");
//! assert_eq!(
//!     blocks,
//!     vec![Block::CodeBlock {
//!         language: Some("python".into()),
//!         lines: vec!["print(1)".into()],
//!     }]
//! );
//! ```

pub mod blocks;
pub mod domain;
pub mod inline;
mod pattern;

#[cfg(test)]
mod tests;
