//! Conversation history reconstruction and the message timeline.
//!
//! Persisted history arrives as an unordered batch of loosely structured
//! event records. This module decodes and validates each record, groups them
//! by session, orders them, and produces the [`domain::Message`] timeline the
//! display layer consumes.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure domain types ([`domain::Message`], [`domain::Role`], [`domain::Transcript`], etc.)
//! - **Decoding**: Strict wire schemas with typed decode errors
//! - **Ports**: Abstract trait interfaces ([`ports::history::HistorySource`])
//! - **Adapters**: Concrete implementations ([`adapters::memory::InMemoryHistorySource`])
//! - **Services**: Reconstruction and history loading
//!
//! # Example
//!
//! ```
//! use docent::transcript::domain::{PersistedEvent, Role};
//! use docent::transcript::services::reconstruct;
//!
//! let events = vec![
//!     PersistedEvent::new("b", "s2", r#"{"type":"ai","data":{"content":"later"}}"#),
//!     PersistedEvent::new("a", "s1", r#"{"type":"human","data":{"content":"first"}}"#),
//!     PersistedEvent::new("c", "s1", "not json"),
//! ];
//!
//! let messages = reconstruct(&events).expect("well-formed batch");
//! assert_eq!(messages.len(), 2);
//! assert_eq!(messages.first().map(|m| m.role()), Some(Role::Assistant));
//! ```

pub mod adapters;
pub mod config;
pub mod decoding;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
