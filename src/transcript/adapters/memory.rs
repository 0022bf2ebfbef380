//! In-memory implementation of the `HistorySource` port.
//!
//! Holds a fixed batch of persisted events. Useful for tests and for
//! replaying a captured history response offline.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::transcript::{
    decoding::batch::decode_batch,
    domain::PersistedEvent,
    error::SourceError,
    ports::history::{HistorySource, SourceResult},
};

/// In-memory implementation of [`HistorySource`].
///
/// Thread-safe via internal [`RwLock`]. Events are returned in insertion
/// order, which need not be chronological.
///
/// # Example
///
/// ```
/// use docent::transcript::adapters::memory::InMemoryHistorySource;
/// use docent::transcript::domain::PersistedEvent;
///
/// let source = InMemoryHistorySource::with_events(vec![
///     PersistedEvent::new("1", "session-a", r#"{"type":"human","content":"hi"}"#),
/// ]);
/// assert_eq!(source.len(), 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryHistorySource {
    events: Arc<RwLock<Vec<PersistedEvent>>>,
}

impl InMemoryHistorySource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source holding the given events.
    #[must_use]
    pub fn with_events(events: Vec<PersistedEvent>) -> Self {
        Self {
            events: Arc::new(RwLock::new(events)),
        }
    }

    /// Creates a source from a captured history response body.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Decode`] if the body is not an array of event
    /// records.
    pub fn from_json(body: &str) -> Result<Self, SourceError> {
        decode_batch(body)
            .map(Self::with_events)
            .map_err(|err| SourceError::Decode(err.to_string()))
    }

    /// Appends an event to the stored batch.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Unavailable`] if the internal lock is poisoned.
    pub fn record(&self, event: PersistedEvent) -> SourceResult<()> {
        let mut guard = self
            .events
            .write()
            .map_err(|e| SourceError::unavailable(format!("lock poisoned: {e}")))?;
        guard.push(event);
        Ok(())
    }

    /// Returns the number of stored events.
    ///
    /// Returns `0` if the internal lock is poisoned, matching the fallback
    /// behaviour of an empty source.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.read().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Returns `true` if no events are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl HistorySource for InMemoryHistorySource {
    async fn fetch_events(&self) -> SourceResult<Vec<PersistedEvent>> {
        let guard = self
            .events
            .read()
            .map_err(|e| SourceError::unavailable(format!("lock poisoned: {e}")))?;
        Ok(guard.clone())
    }
}
