//! Adapter implementations for transcript ports.

pub mod memory;
