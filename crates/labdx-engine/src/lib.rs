//! labdx-engine
//!
//! Rule evaluation over a patient's lab panel: classify each reading
//! against its reference range, match the abnormal readings against the
//! pattern table, and roll the result up into an overall status.
//!
//! Everything here is a pure function of the panel and the two tables it
//! is given. The only side effects are `tracing` events.

pub mod analyzer;
pub mod classify;
pub mod matcher;
pub mod render;
pub mod status;

pub use analyzer::{Analyzer, analyze};
pub use matcher::{AbnormalitySet, LinearMatcher, PatternMatcher};
