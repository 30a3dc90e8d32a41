//! # drill-types
//!
//! Shared value types for the drill exercise curriculum.
//!
//! This crate provides the types passed between the exercise library and
//! its command-line companion:
//! - [`Topic`] - The curriculum catalogue
//! - [`StudentStats`], [`TextStats`], [`LetterCounts`] - Exercise results
//! - [`HttpMethod`], [`StatusCategory`], [`StatusInfo`] - HTTP vocabulary
//! - [`TestTally`] - Pass/fail counts reported by the test runner
//! - [`DrillError`] - Error types

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod http;
mod records;
mod tally;
mod topic;

pub use error::DrillError;
pub use http::{HeaderCategories, HttpMethod, RestEndpoints, StatusCategory, StatusInfo, UrlParts};
pub use records::{Gradebook, LetterCounts, StudentStats, TextStats};
pub use tally::TestTally;
pub use topic::Topic;
