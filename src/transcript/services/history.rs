//! History loading service.
//!
//! Fetches the persisted batch through a [`HistorySource`] and reconstructs
//! it into a [`Transcript`] ready for display and further appends.

use std::sync::Arc;

use tracing::{info, warn};

use super::reconstruct::Reconstructor;
use crate::transcript::{
    config::TranscriptConfig, domain::Transcript, error::HistoryError,
    ports::history::HistorySource,
};

/// Service for loading a user's conversation history.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use docent::transcript::adapters::memory::InMemoryHistorySource;
/// use docent::transcript::services::HistoryService;
///
/// let service = HistoryService::new(Arc::new(InMemoryHistorySource::new()));
/// assert!(service.config().human_discriminants.contains(&"human".to_owned()));
/// ```
#[derive(Debug, Clone)]
pub struct HistoryService<S> {
    source: Arc<S>,
    reconstructor: Reconstructor,
}

impl<S: HistorySource> HistoryService<S> {
    /// Creates a service with the default configuration.
    #[must_use]
    pub fn new(source: Arc<S>) -> Self {
        Self::with_config(source, TranscriptConfig::default())
    }

    /// Creates a service with a custom configuration.
    #[must_use]
    pub const fn with_config(source: Arc<S>, config: TranscriptConfig) -> Self {
        Self {
            source,
            reconstructor: Reconstructor::new(config),
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &TranscriptConfig {
        self.reconstructor.config()
    }

    /// Fetches and reconstructs the caller's conversation history.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::Source`] if the fetch fails and
    /// [`HistoryError::Reconstruction`] if the batch violates reconstruction
    /// preconditions. Individual malformed events are skipped, not reported.
    pub async fn load(&self) -> Result<Transcript, HistoryError> {
        let events = self
            .source
            .fetch_events()
            .await
            .inspect_err(|error| warn!(%error, "failed to fetch conversation history"))?;

        let messages = self
            .reconstructor
            .reconstruct(&events)
            .inspect_err(|error| warn!(%error, "history batch rejected"))?;

        info!(messages = messages.len(), "conversation history loaded");
        Ok(Transcript::from_messages(messages)
            .with_failure_reply(self.config().failure_reply.clone()))
    }
}
