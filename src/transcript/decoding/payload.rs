//! Decoding of persisted history event envelopes.
//!
//! # Envelope format
//!
//! ```json
//! {
//!   "type": "human",
//!   "data": { "content": "What is chapter 2 about?", "tool_calls": [] }
//! }
//! ```
//!
//! When `data` is absent or `null`, `content` and `tool_calls` are read from
//! the top level instead. `type` is required. `content` may be a string,
//! absent, `null`, or an array of content parts; parts are strings or objects
//! whose `text` field is concatenated in order.

use serde::Deserialize;
use serde_json::Value;

use super::{RawToolCall, decode_tool_calls};
use crate::transcript::{domain::EventPayload, error::DecodeError};

#[derive(Debug, Deserialize)]
struct RawEnvelope {
    #[serde(rename = "type")]
    discriminant: String,
    #[serde(default)]
    data: Option<RawBody>,
    #[serde(flatten)]
    inline: RawBody,
}

#[derive(Debug, Default, Deserialize)]
struct RawBody {
    #[serde(default)]
    content: Value,
    #[serde(default)]
    tool_calls: Option<Vec<RawToolCall>>,
}

impl EventPayload {
    /// Decodes an encoded history payload.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::MalformedJson`] if the payload is not JSON, is not an
    ///   object, or has no `type` discriminant
    /// - [`DecodeError::InvalidContent`] if `content` has an unsupported shape
    /// - [`DecodeError::InvalidToolCall`] if a tool call has no name
    ///
    /// # Examples
    ///
    /// ```
    /// use docent::transcript::domain::EventPayload;
    ///
    /// let payload = EventPayload::decode(r#"{"type":"ai","data":{"content":"Hi"}}"#)
    ///     .expect("valid payload");
    /// assert_eq!(payload.discriminant(), "ai");
    /// assert_eq!(payload.content(), "Hi");
    /// assert!(payload.tool_calls().is_empty());
    /// ```
    pub fn decode(raw: &str) -> Result<Self, DecodeError> {
        let envelope: RawEnvelope = serde_json::from_str(raw)?;
        let body = envelope.data.unwrap_or(envelope.inline);

        Ok(Self {
            discriminant: envelope.discriminant,
            content: content_text(body.content)?,
            tool_calls: decode_tool_calls(body.tool_calls)?,
        })
    }
}

fn content_text(content: Value) -> Result<String, DecodeError> {
    match content {
        Value::Null => Ok(String::new()),
        Value::String(text) => Ok(text),
        Value::Array(parts) => parts.into_iter().map(part_text).collect(),
        other => Err(DecodeError::InvalidContent(json_kind(&other))),
    }
}

fn part_text(part: Value) -> Result<String, DecodeError> {
    match part {
        Value::String(text) => Ok(text),
        Value::Object(mut fields) => match fields.remove("text") {
            Some(Value::String(text)) => Ok(text),
            _ => Ok(String::new()),
        },
        other => Err(DecodeError::InvalidContent(json_kind(&other))),
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
