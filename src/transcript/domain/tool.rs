//! Tool invocation records attached to assistant messages.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A record of an assistant-initiated auxiliary action.
///
/// The input is an arbitrary structured value passed through untouched for
/// display alongside the message.
///
/// # Examples
///
/// ```
/// use docent::transcript::domain::ToolInvocation;
/// use serde_json::json;
///
/// let call = ToolInvocation::new("RAGRetriever", json!({"query": "chapter 2"}));
/// assert_eq!(call.tool_name, "RAGRetriever");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolInvocation {
    /// The name of the invoked tool.
    #[serde(rename = "tool")]
    pub tool_name: String,
    /// The tool input.
    pub input: Value,
}

impl ToolInvocation {
    /// Creates a new tool invocation record.
    #[must_use]
    pub fn new(tool_name: impl Into<String>, input: Value) -> Self {
        Self {
            tool_name: tool_name.into(),
            input,
        }
    }
}
