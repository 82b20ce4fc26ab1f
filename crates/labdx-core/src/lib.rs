//! labdx-core
//!
//! Pure domain types for lab-value analysis. No table data and no rule
//! evaluation here: this is the shared vocabulary of the labdx system.

pub mod error;
pub mod models;
