//! The assistant's answer to a freshly submitted query.

use super::ToolInvocation;

/// A decoded reply from the query-submission collaborator.
///
/// Built with [`QueryReply::new`] or decoded from the wire with
/// [`QueryReply::from_json`].
#[derive(Debug, Clone, PartialEq)]
pub struct QueryReply {
    answer: String,
    tool_calls: Vec<ToolInvocation>,
}

impl QueryReply {
    /// Creates a reply from an answer and the tools used to produce it.
    #[must_use]
    pub fn new(answer: impl Into<String>, tool_calls: Vec<ToolInvocation>) -> Self {
        Self {
            answer: answer.into(),
            tool_calls,
        }
    }

    /// Returns the answer text.
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Returns the tool invocations, in reply order.
    #[must_use]
    pub fn tool_calls(&self) -> &[ToolInvocation] {
        &self.tool_calls
    }

    pub(crate) fn into_parts(self) -> (String, Vec<ToolInvocation>) {
        (self.answer, self.tool_calls)
    }
}
