//! Identifier newtypes for persisted events, sessions, and messages.
//!
//! Persisted identifiers are opaque strings issued by the history store. They
//! are wrapped to prevent accidental mixing of event, session, and message
//! identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of one persisted history event.
///
/// Event identifiers are totally ordered by plain lexicographic string
/// comparison. The history store issues monotonically increasing keys, so
/// this order is chronological order within a session.
///
/// # Examples
///
/// ```
/// use docent::transcript::domain::EventId;
///
/// assert!(EventId::new("65a0") < EventId::new("65a1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Creates an event identifier from its persisted form.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the identifier is empty.
    #[must_use]
    #[expect(
        clippy::missing_const_for_fn,
        reason = "String::is_empty is not const-stable"
    )]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a conversation thread.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Creates a session identifier from its persisted form.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a message in the timeline.
///
/// Reconstructed messages reuse their source event's identifier; messages
/// appended locally receive a fresh random identifier.
///
/// # Examples
///
/// ```
/// use docent::transcript::domain::{EventId, MessageId};
///
/// let from_event = MessageId::from(&EventId::new("42"));
/// assert_eq!(from_event.as_str(), "42");
/// assert_ne!(MessageId::generate(), MessageId::generate());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(String);

impl MessageId {
    /// Creates a new random message identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&EventId> for MessageId {
    fn from(id: &EventId) -> Self {
        Self(id.0.clone())
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
