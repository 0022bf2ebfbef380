//! History reconstruction.
//!
//! Turns an unordered batch of persisted events into an ordered timeline:
//!
//! 1. Partition events by session, remembering first-seen session order in an
//!    explicit list alongside the lookup map.
//! 2. Sort each session's events by id (lexicographic, which is chronological
//!    for the store's monotonic keys).
//! 3. Decode each payload. A payload that fails to decode is logged and
//!    dropped without affecting its siblings.
//! 4. Concatenate sessions in first-seen order.
//!
//! The output depends only on first-seen session order and id order within
//! a session, never on any other aspect of the input order.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::transcript::{
    config::TranscriptConfig,
    domain::{EventPayload, Message, MessageId, PersistedEvent, SessionId},
    error::{DecodeError, ReconstructionError},
};

/// Reconstructs an ordered timeline using the default configuration.
///
/// # Errors
///
/// Returns [`ReconstructionError`] if an event has an empty id or two events
/// in one session share an id. Malformed payloads are not errors; they are
/// skipped.
///
/// # Examples
///
/// ```
/// use docent::transcript::{domain::PersistedEvent, services::reconstruct};
///
/// let events = vec![
///     PersistedEvent::new("2", "s", r#"{"type":"ai","data":{"content":"Hello"}}"#),
///     PersistedEvent::new("1", "s", r#"{"type":"human","data":{"content":"Hi"}}"#),
/// ];
/// let messages = reconstruct(&events).expect("well-formed batch");
/// let ids: Vec<&str> = messages.iter().map(|m| m.id().as_str()).collect();
/// assert_eq!(ids, vec!["1", "2"]);
/// ```
pub fn reconstruct(events: &[PersistedEvent]) -> Result<Vec<Message>, ReconstructionError> {
    Reconstructor::default().reconstruct(events)
}

/// Configurable history reconstructor.
///
/// Stateless apart from its configuration; every call allocates its own
/// accumulators, so one instance may be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Reconstructor {
    config: TranscriptConfig,
}

impl Reconstructor {
    /// Creates a reconstructor with a custom configuration.
    #[must_use]
    pub const fn new(config: TranscriptConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &TranscriptConfig {
        &self.config
    }

    /// Reconstructs an ordered timeline from a batch of persisted events.
    ///
    /// # Errors
    ///
    /// Returns [`ReconstructionError::MissingEventId`] for an event with an
    /// empty id and [`ReconstructionError::DuplicateEventId`] when a session
    /// repeats an id.
    pub fn reconstruct(
        &self,
        events: &[PersistedEvent],
    ) -> Result<Vec<Message>, ReconstructionError> {
        let sessions = partition(events)?;
        let mut messages = Vec::with_capacity(events.len());
        let mut skipped = 0_usize;

        for session in &sessions {
            for event in &session.events {
                match self.decode(event) {
                    Ok(message) => messages.push(message),
                    Err(error) => {
                        skipped += 1;
                        warn!(
                            event_id = %event.id(),
                            session_id = %event.session_id(),
                            %error,
                            "skipping undecodable history event"
                        );
                    }
                }
            }
        }

        debug!(
            events = events.len(),
            sessions = sessions.len(),
            messages = messages.len(),
            skipped,
            "reconstructed conversation history"
        );
        Ok(messages)
    }

    fn decode(&self, event: &PersistedEvent) -> Result<Message, DecodeError> {
        let payload = EventPayload::decode(event.raw_payload())?;
        let role = self.config.role_for(payload.discriminant());
        Ok(Message::new(
            MessageId::from(event.id()),
            role,
            payload.content,
            payload.tool_calls,
            None,
        ))
    }
}

/// One session's events, sorted by id.
struct SessionEvents<'a> {
    events: Vec<&'a PersistedEvent>,
}

fn partition(events: &[PersistedEvent]) -> Result<Vec<SessionEvents<'_>>, ReconstructionError> {
    let mut order: Vec<&SessionId> = Vec::new();
    let mut groups: HashMap<&SessionId, Vec<&PersistedEvent>> = HashMap::new();

    for (position, event) in events.iter().enumerate() {
        if event.id().is_empty() {
            return Err(ReconstructionError::MissingEventId { position });
        }
        groups
            .entry(event.session_id())
            .or_insert_with(|| {
                order.push(event.session_id());
                Vec::new()
            })
            .push(event);
    }

    order
        .into_iter()
        .filter_map(|session_id| groups.remove(session_id))
        .map(sort_session)
        .collect()
}

fn sort_session(
    mut events: Vec<&PersistedEvent>,
) -> Result<SessionEvents<'_>, ReconstructionError> {
    events.sort_by(|a, b| a.id().cmp(b.id()));

    let duplicate = events.windows(2).find_map(|pair| match pair {
        [first, second] if first.id() == second.id() => Some(*second),
        _ => None,
    });
    if let Some(event) = duplicate {
        return Err(ReconstructionError::DuplicateEventId {
            session_id: event.session_id().clone(),
            event_id: event.id().clone(),
        });
    }

    Ok(SessionEvents { events })
}
