//! Configuration for history reconstruction and transcript behaviour.

use serde::{Deserialize, Serialize};

use super::{
    domain::{DEFAULT_FAILURE_REPLY, Role},
    error::DecodeError,
};

/// Tunable behaviour of reconstruction and transcript appends.
///
/// Every field has a default, so a partial JSON document is a valid
/// configuration.
///
/// # Examples
///
/// ```
/// use docent::transcript::{config::TranscriptConfig, domain::Role};
///
/// let config = TranscriptConfig::from_json(r#"{"human_discriminants":["human","user"]}"#)
///     .expect("valid config");
/// assert_eq!(config.role_for("user"), Role::User);
/// assert_eq!(config.role_for("ai"), Role::Assistant);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptConfig {
    /// Discriminant values that mark a human-authored turn. Any other value
    /// is treated as an assistant turn.
    pub human_discriminants: Vec<String>,
    /// Assistant text appended when a query cannot be answered.
    pub failure_reply: String,
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            human_discriminants: vec!["human".to_owned()],
            failure_reply: DEFAULT_FAILURE_REPLY.to_owned(),
        }
    }
}

impl TranscriptConfig {
    /// Parses a configuration document, filling absent fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::MalformedJson`] if the document is not a JSON
    /// object of the expected shape.
    pub fn from_json(document: &str) -> Result<Self, DecodeError> {
        serde_json::from_str(document).map_err(DecodeError::from)
    }

    /// Maps a payload discriminant to a role.
    #[must_use]
    pub fn role_for(&self, discriminant: &str) -> Role {
        if self
            .human_discriminants
            .iter()
            .any(|human| human == discriminant)
        {
            Role::User
        } else {
            Role::Assistant
        }
    }
}
