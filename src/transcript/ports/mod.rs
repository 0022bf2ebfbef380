//! Port interfaces for the transcript subsystem.
//!
//! Ports define the boundary to collaborators that live outside this crate,
//! such as the authenticated history endpoint.

pub mod history;
