//! Decoding of the history endpoint's response body.
//!
//! The body is a JSON array of persisted events. Only the outer record shape
//! is validated here; each event's payload is decoded later, one event at a
//! time, so that a single malformed payload cannot reject the batch.

use crate::transcript::{domain::PersistedEvent, error::DecodeError};

/// Decodes a history response body into persisted events.
///
/// # Errors
///
/// Returns [`DecodeError::MalformedJson`] if the body is not an array of
/// event records.
///
/// # Examples
///
/// ```
/// use docent::transcript::decoding::batch::decode_batch;
///
/// let events = decode_batch(r#"[{"_id":"1","SessionId":"s","History":"{}"}]"#)
///     .expect("valid batch");
/// assert_eq!(events.len(), 1);
/// ```
pub fn decode_batch(body: &str) -> Result<Vec<PersistedEvent>, DecodeError> {
    serde_json::from_str(body).map_err(DecodeError::from)
}
