//! Strict decoding of encoded envelopes into domain values.
//!
//! Each wire shape is described by a private serde schema with explicit
//! optional fields. A validation step then converts the schema into a domain
//! value or a typed [`DecodeError`]; partially decoded values never escape.
//!
//! - [`payload`]: the persisted history event envelope
//! - [`reply`]: the query-submission reply body
//! - [`batch`]: the history endpoint's list of persisted events

pub mod batch;
pub mod payload;
pub mod reply;

use serde::Deserialize;
use serde_json::Value;

use super::{domain::ToolInvocation, error::DecodeError};

/// Wire form of one tool call.
///
/// Both the display shape (`tool`, `input`) and the chat-model shape
/// (`name`, `args`) are accepted.
#[derive(Debug, Deserialize)]
struct RawToolCall {
    #[serde(default, alias = "name")]
    tool: Option<String>,
    #[serde(default, alias = "args")]
    input: Value,
}

fn decode_tool_calls(raw: Option<Vec<RawToolCall>>) -> Result<Vec<ToolInvocation>, DecodeError> {
    raw.unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(index, call)| match call.tool {
            Some(name) if !name.is_empty() => Ok(ToolInvocation::new(name, call.input)),
            _ => Err(DecodeError::InvalidToolCall { index }),
        })
        .collect()
}
