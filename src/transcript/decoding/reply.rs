//! Decoding of query-submission replies.
//!
//! # Reply format
//!
//! ```json
//! { "response": { "answer": "...", "tool_calls": [{ "tool": "...", "input": {...} }] } }
//! { "error": "model quota exceeded" }
//! ```

use serde::Deserialize;

use super::{RawToolCall, decode_tool_calls};
use crate::transcript::{domain::QueryReply, error::DecodeError};

#[derive(Debug, Deserialize)]
struct RawReplyEnvelope {
    #[serde(default)]
    response: Option<RawReply>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawReply {
    answer: String,
    #[serde(default)]
    tool_calls: Option<Vec<RawToolCall>>,
}

impl QueryReply {
    /// Decodes a reply body.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::ServerReported`] if the body carries an `error` and
    ///   no `response`
    /// - [`DecodeError::MalformedJson`] if the body is not JSON, lacks an
    ///   `answer`, or carries neither `response` nor `error`
    /// - [`DecodeError::InvalidToolCall`] if a tool call has no name
    ///
    /// # Examples
    ///
    /// ```
    /// use docent::transcript::domain::QueryReply;
    ///
    /// let reply = QueryReply::from_json(
    ///     r#"{"response":{"answer":"42","tool_calls":[{"tool":"RAGRetriever","input":"q"}]}}"#,
    /// )
    /// .expect("valid reply");
    /// assert_eq!(reply.answer(), "42");
    /// assert_eq!(reply.tool_calls().len(), 1);
    /// ```
    pub fn from_json(body: &str) -> Result<Self, DecodeError> {
        let envelope: RawReplyEnvelope = serde_json::from_str(body)?;
        match (envelope.response, envelope.error) {
            (Some(reply), _) => Ok(Self::new(
                reply.answer,
                decode_tool_calls(reply.tool_calls)?,
            )),
            (None, Some(message)) => Err(DecodeError::ServerReported(message)),
            (None, None) => Err(DecodeError::malformed(
                "reply carries neither a response nor an error",
            )),
        }
    }
}
