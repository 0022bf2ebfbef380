//! The conversation timeline aggregate.

use mockable::Clock;
use tracing::warn;

use super::{Message, MessageId, QueryReply, Role, ToolInvocation};
use crate::transcript::error::{DecodeError, TranscriptError};

/// Assistant text shown when a query could not be answered.
pub const DEFAULT_FAILURE_REPLY: &str =
    "Sorry, I encountered an error while processing your request. Please try again.";

/// An ordered conversation timeline owned by the caller.
///
/// A transcript starts from reconstructed history and grows as the user sends
/// queries and replies arrive. Appended messages get fresh identifiers and a
/// timestamp from the supplied clock.
///
/// # Examples
///
/// ```
/// use docent::transcript::domain::{QueryReply, Role, Transcript};
/// use mockable::DefaultClock;
///
/// let clock = DefaultClock;
/// let mut transcript = Transcript::new();
/// transcript.push_user("What is chapter 2 about?", &clock).expect("non-empty query");
/// transcript.record_reply(QueryReply::new("Recursion.", Vec::new()), &clock);
///
/// let roles: Vec<Role> = transcript.messages().iter().map(|m| m.role()).collect();
/// assert_eq!(roles, vec![Role::User, Role::Assistant]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    messages: Vec<Message>,
    failure_reply: String,
}

impl Transcript {
    /// Creates an empty transcript.
    #[must_use]
    pub fn new() -> Self {
        Self::from_messages(Vec::new())
    }

    /// Creates a transcript from already ordered messages.
    #[must_use]
    pub fn from_messages(messages: Vec<Message>) -> Self {
        Self {
            messages,
            failure_reply: DEFAULT_FAILURE_REPLY.to_owned(),
        }
    }

    /// Sets the assistant text used by [`Transcript::record_failure`].
    #[must_use]
    pub fn with_failure_reply(mut self, failure_reply: impl Into<String>) -> Self {
        self.failure_reply = failure_reply.into();
        self
    }

    /// Returns the messages in timeline order.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns the most recent message.
    #[must_use]
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Returns the number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if the transcript holds no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Removes every message.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Appends a user query.
    ///
    /// Surrounding whitespace is trimmed before the query is stored.
    ///
    /// # Errors
    ///
    /// Returns [`TranscriptError::EmptyQuery`] if the query is blank.
    pub fn push_user(
        &mut self,
        query: &str,
        clock: &impl Clock,
    ) -> Result<MessageId, TranscriptError> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(TranscriptError::EmptyQuery);
        }
        Ok(self.append(Role::User, trimmed.to_owned(), Vec::new(), clock))
    }

    /// Appends the assistant's reply to the latest query.
    pub fn record_reply(&mut self, reply: QueryReply, clock: &impl Clock) -> MessageId {
        let (answer, tool_calls) = reply.into_parts();
        self.append(Role::Assistant, answer, tool_calls, clock)
    }

    /// Appends the configured failure reply as an assistant message.
    pub fn record_failure(&mut self, clock: &impl Clock) -> MessageId {
        let content = self.failure_reply.clone();
        self.append(Role::Assistant, content, Vec::new(), clock)
    }

    /// Appends either the decoded reply or, if decoding failed, the failure
    /// reply.
    pub fn record_outcome(
        &mut self,
        outcome: Result<QueryReply, DecodeError>,
        clock: &impl Clock,
    ) -> MessageId {
        match outcome {
            Ok(reply) => self.record_reply(reply, clock),
            Err(error) => {
                warn!(%error, "query reply unusable; recording failure reply");
                self.record_failure(clock)
            }
        }
    }

    fn append(
        &mut self,
        role: Role,
        content: String,
        tool_calls: Vec<ToolInvocation>,
        clock: &impl Clock,
    ) -> MessageId {
        let id = MessageId::generate();
        self.messages.push(Message::new(
            id.clone(),
            role,
            content,
            tool_calls,
            Some(clock.utc()),
        ));
        id
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}
