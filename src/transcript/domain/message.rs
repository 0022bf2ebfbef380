//! The Message entity making up a conversation timeline.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{MessageId, Role, ToolInvocation};

/// One turn in the conversation timeline.
///
/// Messages are created only by history reconstruction or by appending to a
/// [`Transcript`](super::Transcript), and are immutable once produced.
///
/// # Invariants
///
/// - `tool_calls` preserves payload order and may be empty
/// - `sent_at` is `None` for reconstructed history and set for locally
///   appended turns
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    id: MessageId,
    role: Role,
    content: String,
    tool_calls: Vec<ToolInvocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sent_at: Option<DateTime<Utc>>,
}

impl Message {
    pub(crate) const fn new(
        id: MessageId,
        role: Role,
        content: String,
        tool_calls: Vec<ToolInvocation>,
        sent_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            role,
            content,
            tool_calls,
            sent_at,
        }
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> &MessageId {
        &self.id
    }

    /// Returns the message role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the message text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the tool invocations attached to this message.
    #[must_use]
    pub fn tool_calls(&self) -> &[ToolInvocation] {
        &self.tool_calls
    }

    /// Returns when the message was appended locally, if it was.
    #[must_use]
    pub const fn sent_at(&self) -> Option<DateTime<Utc>> {
        self.sent_at
    }

    /// Returns `true` if the assistant authored this message.
    #[must_use]
    pub const fn is_assistant(&self) -> bool {
        matches!(self.role, Role::Assistant)
    }
}
