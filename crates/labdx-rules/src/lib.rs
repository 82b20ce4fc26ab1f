//! labdx-rules
//!
//! The two static rule tables the engine evaluates against: per-parameter
//! reference ranges and ordered multi-parameter diagnostic patterns. Pure
//! data plus load-time validation; no evaluation logic.

pub mod defaults;
pub mod error;
pub mod patterns;
pub mod reference;

use std::sync::LazyLock;

pub use patterns::PatternTable;
pub use reference::ReferenceTable;

static REFERENCE: LazyLock<ReferenceTable> =
    LazyLock::new(|| ReferenceTable::from_trusted(defaults::reference_ranges()));

static PATTERNS: LazyLock<PatternTable> =
    LazyLock::new(|| PatternTable::from_trusted(defaults::patterns()));

/// The built-in reference table.
pub fn default_reference_table() -> &'static ReferenceTable {
    &REFERENCE
}

/// The built-in pattern table, consistent with [`default_reference_table`].
pub fn default_pattern_table() -> &'static PatternTable {
    &PATTERNS
}
