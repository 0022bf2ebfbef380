//! Hand-off from the message timeline to the display layer.
//!
//! Assistant content is parsed into markdown [`Block`]s; user content is
//! displayed verbatim. Tool calls travel with the message untouched.

use crate::{
    markdown::{blocks::parse_blocks, domain::Block},
    transcript::domain::{Message, Role, ToolInvocation},
};

/// The displayable body of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageBody {
    /// User text, shown as typed.
    Plain(String),
    /// Assistant text parsed into blocks.
    Markdown(Vec<Block>),
}

impl MessageBody {
    /// Returns the parsed blocks for a markdown body.
    #[must_use]
    pub fn blocks(&self) -> Option<&[Block]> {
        match self {
            Self::Markdown(blocks) => Some(blocks),
            Self::Plain(_) => None,
        }
    }
}

/// A message paired with its displayable body.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedMessage<'a> {
    message: &'a Message,
    body: MessageBody,
}

impl<'a> RenderedMessage<'a> {
    /// Returns the source message.
    #[must_use]
    pub const fn message(&self) -> &'a Message {
        self.message
    }

    /// Returns the displayable body.
    #[must_use]
    pub const fn body(&self) -> &MessageBody {
        &self.body
    }

    /// Returns the tool calls to show alongside the body.
    #[must_use]
    pub fn tool_calls(&self) -> &'a [ToolInvocation] {
        self.message.tool_calls()
    }
}

/// Prepares one message for display.
///
/// # Examples
///
/// ```
/// use docent::render::{MessageBody, render_transcript};
/// use docent::transcript::{domain::PersistedEvent, services::reconstruct};
///
/// let events = vec![
///     PersistedEvent::new("1", "s", r#"{"type":"human","content":"**hi**"}"#),
///     PersistedEvent::new("2", "s", r##"{"type":"ai","content":"# Answer"}"##),
/// ];
/// let messages = reconstruct(&events).expect("well-formed batch");
/// let rendered = render_transcript(&messages);
///
/// assert_eq!(rendered[0].body(), &MessageBody::Plain("**hi**".into()));
/// assert_eq!(rendered[1].body().blocks().map(<[_]>::len), Some(1));
/// ```
#[must_use]
pub fn render_message(message: &Message) -> RenderedMessage<'_> {
    let body = match message.role() {
        Role::Assistant => MessageBody::Markdown(parse_blocks(message.content())),
        Role::User => MessageBody::Plain(message.content().to_owned()),
    };
    RenderedMessage { message, body }
}

/// Prepares every message of a timeline for display, preserving order.
#[must_use]
pub fn render_transcript(messages: &[Message]) -> Vec<RenderedMessage<'_>> {
    messages.iter().map(render_message).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::domain::{HeadingLevel, Span};
    use crate::transcript::domain::{MessageId, ToolInvocation};
    use rstest::rstest;
    use serde_json::json;

    fn message(role: Role, content: &str, tool_calls: Vec<ToolInvocation>) -> Message {
        Message::new(
            MessageId::generate(),
            role,
            content.to_owned(),
            tool_calls,
            None,
        )
    }

    #[rstest]
    fn user_content_stays_plain() {
        let user = message(Role::User, "# not a heading", Vec::new());
        let rendered = render_message(&user);
        assert_eq!(
            rendered.body(),
            &MessageBody::Plain("# not a heading".to_owned())
        );
        assert!(rendered.body().blocks().is_none());
    }

    #[rstest]
    fn assistant_content_is_parsed() {
        let assistant = message(Role::Assistant, "## Summary\n- `a`", Vec::new());
        let rendered = render_message(&assistant);
        assert_eq!(
            rendered.body().blocks(),
            Some(
                [
                    Block::Heading {
                        level: HeadingLevel::H2,
                        text: "Summary".to_owned(),
                        spans: vec![Span::plain("Summary")],
                    },
                    Block::List {
                        items: vec![vec![Span::CodeSpan("a".to_owned())]],
                    },
                ]
                .as_slice()
            )
        );
    }

    #[rstest]
    fn tool_calls_pass_through() {
        let calls = vec![ToolInvocation::new("RAGRetriever", json!({"query": "x"}))];
        let assistant = message(Role::Assistant, "done", calls.clone());
        let rendered = render_message(&assistant);
        assert_eq!(rendered.tool_calls(), calls.as_slice());
        assert_eq!(rendered.message().id(), assistant.id());
    }

    #[rstest]
    fn transcript_order_is_preserved() {
        let messages = vec![
            message(Role::User, "q", Vec::new()),
            message(Role::Assistant, "a", Vec::new()),
        ];
        let ids: Vec<&MessageId> = render_transcript(&messages)
            .iter()
            .map(|rendered| rendered.message().id())
            .collect();
        let expected: Vec<&MessageId> = messages.iter().map(Message::id).collect();
        assert_eq!(ids, expected);
    }
}
