//! Services for rebuilding and loading conversation history.
//!
//! - [`reconstruct()`]: pure batch-to-timeline reconstruction
//! - [`Reconstructor`]: the same, with a custom [`TranscriptConfig`](super::config::TranscriptConfig)
//! - [`HistoryService`]: fetch through a [`HistorySource`](super::ports::history::HistorySource), then reconstruct

pub mod history;
pub mod reconstruct;

pub use history::HistoryService;
pub use reconstruct::{Reconstructor, reconstruct};
