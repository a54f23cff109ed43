//! Shared utilities.
//!
//! - [`tracing`]: request span construction and span recording helpers

pub mod tracing;
