//! Markdown block parser.
//!
//! A single forward pass over the lines of a message, driven by a three-state
//! machine: normal text, an open list run, or an open code fence. Rules are
//! checked per line in this order:
//!
//! 1. A fence (leading whitespace, then three backticks) opens or closes a
//!    code block. Opening flushes any pending list and records the rest of
//!    the line as the language. Anything after the closing fence is ignored.
//! 2. Inside a code block every other line is kept verbatim.
//! 3. A list item (`-`, `*` or `+` followed by whitespace) joins the pending
//!    list run.
//! 4. Any other line first flushes a pending list, then becomes a heading
//!    (`### `, `## `, `# `, longest prefix first), a quote (`> `), a spacer
//!    (blank, only after the first block) or a paragraph.
//!
//! Consecutive paragraph lines are not merged. An unterminated fence is
//! flushed as a code block at end of input.

use std::mem;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::{
    domain::{Block, HeadingLevel, Span},
    inline::transform,
    pattern::compile,
};

const FENCE: &str = "```";

const HEADING_PREFIXES: [(&str, HeadingLevel); 3] = [
    ("### ", HeadingLevel::H3),
    ("## ", HeadingLevel::H2),
    ("# ", HeadingLevel::H1),
];

const QUOTE_PREFIX: &str = "> ";

static LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| compile(r"^\s*[-*+]\s"));

/// Parses a message body into an ordered sequence of blocks.
///
/// Parsing is deterministic and never fails; malformed markup degrades to
/// paragraphs or plain text.
///
/// # Examples
///
/// ```
/// use docent::markdown::{blocks::parse_blocks, domain::{Block, HeadingLevel}};
///
/// let blocks = parse_blocks("## Summary\n- one\n- two");
/// assert!(matches!(
///     blocks.first(),
///     Some(Block::Heading { level: HeadingLevel::H2, .. })
/// ));
/// assert!(matches!(blocks.get(1), Some(Block::List { items }) if items.len() == 2));
/// ```
#[must_use]
pub fn parse_blocks(text: &str) -> Vec<Block> {
    let mut parser = BlockParser::default();
    for line in text.split('\n') {
        parser.feed(line.strip_suffix('\r').unwrap_or(line));
    }
    parser.finish()
}

#[derive(Debug, Default)]
enum State {
    #[default]
    Normal,
    List(Vec<Vec<Span>>),
    Code {
        language: Option<String>,
        lines: Vec<String>,
    },
}

impl State {
    fn open_code(remainder: &str) -> Self {
        let language = remainder.trim();
        Self::Code {
            language: (!language.is_empty()).then(|| language.to_owned()),
            lines: Vec::new(),
        }
    }
}

#[derive(Debug, Default)]
struct BlockParser {
    blocks: Vec<Block>,
    state: State,
}

impl BlockParser {
    fn feed(&mut self, line: &str) {
        if let Some(remainder) = line.trim_start().strip_prefix(FENCE) {
            self.toggle_fence(remainder);
            return;
        }

        if let State::Code { lines, .. } = &mut self.state {
            lines.push(line.to_owned());
            return;
        }

        if let Some(item) = list_item(line) {
            self.push_list_item(item);
            return;
        }

        self.flush_list();
        self.push_line(line);
    }

    fn toggle_fence(&mut self, remainder: &str) {
        match mem::take(&mut self.state) {
            State::Code { language, lines } => {
                self.blocks.push(Block::CodeBlock { language, lines });
            }
            State::List(items) => {
                self.blocks.push(Block::List { items });
                self.state = State::open_code(remainder);
            }
            State::Normal => self.state = State::open_code(remainder),
        }
    }

    fn push_list_item(&mut self, item: &str) {
        let spans = transform(item);
        if let State::List(items) = &mut self.state {
            items.push(spans);
        } else {
            self.state = State::List(vec![spans]);
        }
    }

    fn flush_list(&mut self) {
        match mem::take(&mut self.state) {
            State::List(items) => self.blocks.push(Block::List { items }),
            other => self.state = other,
        }
    }

    fn push_line(&mut self, line: &str) {
        if let Some(block) = heading(line) {
            self.blocks.push(block);
        } else if let Some(quoted) = line.strip_prefix(QUOTE_PREFIX) {
            self.blocks.push(Block::Quote {
                spans: transform(quoted),
            });
        } else if line.trim().is_empty() {
            if !self.blocks.is_empty() {
                self.blocks.push(Block::Spacer);
            }
        } else {
            self.blocks.push(Block::Paragraph {
                spans: transform(line),
            });
        }
    }

    fn finish(mut self) -> Vec<Block> {
        match mem::take(&mut self.state) {
            State::Normal => {}
            State::List(items) => self.blocks.push(Block::List { items }),
            State::Code { language, lines } => {
                debug!(
                    lines = lines.len(),
                    "flushing unterminated code fence at end of input"
                );
                self.blocks.push(Block::CodeBlock { language, lines });
            }
        }
        self.blocks
    }
}

fn list_item(line: &str) -> Option<&str> {
    LIST_ITEM
        .find(line)
        .and_then(|marker| line.get(marker.end()..))
}

fn heading(line: &str) -> Option<Block> {
    HEADING_PREFIXES.iter().find_map(|&(prefix, level)| {
        line.strip_prefix(prefix).map(|text| Block::Heading {
            level,
            text: text.to_owned(),
            spans: transform(text),
        })
    })
}
