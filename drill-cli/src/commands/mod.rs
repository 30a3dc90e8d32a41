//! CLI command implementations.

pub mod demo;
pub mod progress;
pub mod test;
pub mod topics;
