//! Domain types for the transcript subsystem.
//!
//! This module contains pure domain types with no infrastructure dependencies.
//! Messages are immutable after construction.

mod event;
mod ids;
mod message;
mod reply;
mod role;
mod tool;
mod transcript;

pub use event::{EventPayload, PersistedEvent};
pub use ids::{EventId, MessageId, SessionId};
pub use message::Message;
pub use reply::QueryReply;
pub use role::Role;
pub use tool::ToolInvocation;
pub use transcript::{DEFAULT_FAILURE_REPLY, Transcript};
