//! Docent: transcript reconstruction and markdown rendering for a document
//! question-answering assistant.
//!
//! This crate turns persisted conversation records into an ordered message
//! timeline and converts assistant answers into a typed tree of blocks and
//! inline spans that a display layer can walk without trusting raw markup.
//!
//! # Architecture
//!
//! Docent follows hexagonal architecture principles:
//!
//! - **Domain**: Pure data types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`transcript`]: History reconstruction and the conversation timeline
//! - [`markdown`]: Block parsing and inline span transformation
//! - [`render`]: Pairs each message with its displayable body

pub mod markdown;
pub mod render;
pub mod transcript;
