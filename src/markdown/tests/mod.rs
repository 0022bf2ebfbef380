//! Unit tests for the markdown module.
//!
//! Tests are organised by component: inline spans first, then blocks.

mod inline_tests;
