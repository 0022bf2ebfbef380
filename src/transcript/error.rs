//! Error types for payload decoding, reconstruction, and history loading.
//!
//! Uses `thiserror` for typed variants that callers can inspect. Decode
//! errors are per-event and non-fatal; reconstruction errors signal inputs
//! that violate the batch's preconditions.

use thiserror::Error;

use super::domain::{EventId, SessionId};

/// Errors that can occur when decoding an encoded payload or reply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The payload is not valid JSON or lacks a required field.
    #[error("malformed payload: {0}")]
    MalformedJson(String),

    /// The content field has a shape other than text or content parts.
    #[error("unsupported content: expected text or content parts, found {0}")]
    InvalidContent(&'static str),

    /// A tool call has no tool name.
    #[error("tool call at index {index} has no tool name")]
    InvalidToolCall {
        /// Position of the tool call within its list.
        index: usize,
    },

    /// The server answered with an error instead of a reply.
    #[error("server reported an error: {0}")]
    ServerReported(String),
}

impl DecodeError {
    /// Creates a malformed payload error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedJson(message.into())
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        Self::malformed(err.to_string())
    }
}

/// Precondition violations that make a batch unusable for reconstruction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconstructionError {
    /// An event has an empty identifier.
    #[error("event at position {position} has no id")]
    MissingEventId {
        /// Position of the event in the input batch.
        position: usize,
    },

    /// Two events in one session share an identifier.
    #[error("duplicate event id {event_id} in session {session_id}")]
    DuplicateEventId {
        /// The session containing the duplicate.
        session_id: SessionId,
        /// The repeated identifier.
        event_id: EventId,
    },
}

/// Errors raised when appending to a transcript.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranscriptError {
    /// The user query is empty or whitespace-only.
    #[error("query text cannot be empty")]
    EmptyQuery,
}

/// Errors reported by a history source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The source could not be reached.
    #[error("history source unavailable: {0}")]
    Unavailable(String),

    /// The caller is not authorised to read history.
    #[error("not authorised to read history")]
    Unauthorized,

    /// The source returned a body that is not a batch of events.
    #[error("history batch could not be decoded: {0}")]
    Decode(String),
}

impl SourceError {
    /// Creates an unavailable error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }
}

/// Errors returned when loading a transcript through a history source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// The history source failed.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The fetched batch violates reconstruction preconditions.
    #[error(transparent)]
    Reconstruction(#[from] ReconstructionError),
}
