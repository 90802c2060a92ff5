//! CLI command implementations.

pub mod buffers;
pub mod common;
pub mod plan;
