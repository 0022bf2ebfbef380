//! Unit tests for the transcript module.
//!
//! Tests are organised by layer: decoding, reconstruction, then the
//! transcript aggregate and its collaborators.

mod transcript_tests;
