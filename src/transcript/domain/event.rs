//! Persisted history events and their decoded payloads.

use serde::{Deserialize, Serialize};

use super::{EventId, SessionId, ToolInvocation};

/// One persisted record of a single conversation turn.
///
/// The payload is an encoded envelope that is not guaranteed to be
/// well-formed; it is decoded lazily during reconstruction.
///
/// # Serialisation
///
/// Both the camel-case form and the history endpoint's field names are
/// accepted:
///
/// ```json
/// { "id": "1", "sessionId": "s", "rawPayload": "{...}" }
/// { "_id": "1", "SessionId": "s", "History": "{...}" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedEvent {
    #[serde(rename = "id", alias = "_id")]
    id: EventId,
    #[serde(rename = "sessionId", alias = "SessionId")]
    session_id: SessionId,
    #[serde(rename = "rawPayload", alias = "History")]
    raw_payload: String,
}

impl PersistedEvent {
    /// Creates a persisted event.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        session_id: impl Into<String>,
        raw_payload: impl Into<String>,
    ) -> Self {
        Self {
            id: EventId::new(id),
            session_id: SessionId::new(session_id),
            raw_payload: raw_payload.into(),
        }
    }

    /// Returns the event identifier.
    #[must_use]
    pub const fn id(&self) -> &EventId {
        &self.id
    }

    /// Returns the session this event belongs to.
    #[must_use]
    pub const fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Returns the encoded payload.
    #[must_use]
    pub fn raw_payload(&self) -> &str {
        &self.raw_payload
    }
}

/// The decoded form of a [`PersistedEvent`] payload.
///
/// Produced only by [`EventPayload::decode`]; a payload either decodes fully
/// or yields a typed error, never a partial value.
#[derive(Debug, Clone, PartialEq)]
pub struct EventPayload {
    pub(crate) discriminant: String,
    pub(crate) content: String,
    pub(crate) tool_calls: Vec<ToolInvocation>,
}

impl EventPayload {
    /// Returns the role discriminant, such as `"human"` or `"ai"`.
    #[must_use]
    pub fn discriminant(&self) -> &str {
        &self.discriminant
    }

    /// Returns the message text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the tool invocations, in payload order.
    #[must_use]
    pub fn tool_calls(&self) -> &[ToolInvocation] {
        &self.tool_calls
    }
}
