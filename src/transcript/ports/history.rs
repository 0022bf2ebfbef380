//! History source port.
//!
//! Abstracts the network collaborator that fetches a user's persisted
//! conversation events. Transport, authentication, and retry all live behind
//! this trait; the reconstruction core only ever sees the resolved batch.

use async_trait::async_trait;

use crate::transcript::{domain::PersistedEvent, error::SourceError};

/// Result type for history source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Port for fetching persisted conversation events.
///
/// # Implementation Notes
///
/// Implementations must return events exactly as stored. Ordering and
/// payload decoding are the reconstructor's job, so the batch may arrive in
/// any order and may contain malformed payloads.
#[async_trait]
pub trait HistorySource: Send + Sync {
    /// Fetches every persisted event visible to the caller.
    ///
    /// Returns an empty vector if no history exists.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the source is unreachable, the caller is
    /// not authorised, or the response is not a batch of events.
    async fn fetch_events(&self) -> SourceResult<Vec<PersistedEvent>>;
}
