use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::reference::Direction;

/// Severity attached to a multi-parameter diagnostic rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PatternSeverity {
    Low,
    Medium,
    High,
}

impl PatternSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// One `parameter -> direction` requirement of a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatternCondition {
    pub parameter: String,
    pub direction: Direction,
}

impl PatternCondition {
    pub fn new(parameter: impl Into<String>, direction: Direction) -> Self {
        Self {
            parameter: parameter.into(),
            direction,
        }
    }
}

/// A rule that fires when every listed parameter deviates in the listed
/// direction. Other abnormal parameters do not prevent a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnosticPattern {
    pub conditions: Vec<PatternCondition>,
    pub diagnosis: String,
    pub severity: PatternSeverity,
    pub recommendation: String,
}

impl DiagnosticPattern {
    /// Parameter keys in the order the pattern lists them.
    pub fn parameter_keys(&self) -> Vec<String> {
        self.conditions.iter().map(|c| c.parameter.clone()).collect()
    }
}
