use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::pattern::PatternSeverity;
use super::result::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Confidence {
    /// Single-parameter fallback.
    Medium,
    /// Multi-parameter pattern match.
    High,
}

/// Severity carried by a finding. Pattern findings use the pattern's scale
/// (low/medium/high), fallback findings use the parameter's scale
/// (mild/medium/severe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FindingSeverity {
    Low,
    Mild,
    Medium,
    High,
    Severe,
}

impl FindingSeverity {
    /// `None` for [`Severity::Normal`], which never produces a finding.
    pub fn for_parameter(severity: Severity) -> Option<Self> {
        match severity {
            Severity::Normal => None,
            Severity::Mild => Some(Self::Mild),
            Severity::Medium => Some(Self::Medium),
            Severity::Severe => Some(Self::Severe),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Mild => "Mild",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Severe => "Severe",
        }
    }
}

impl From<PatternSeverity> for FindingSeverity {
    fn from(severity: PatternSeverity) -> Self {
        match severity {
            PatternSeverity::Low => Self::Low,
            PatternSeverity::Medium => Self::Medium,
            PatternSeverity::High => Self::High,
        }
    }
}

/// One diagnostic conclusion drawn from the abnormal parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnosticFinding {
    pub condition: String,
    pub confidence: Confidence,
    pub severity: FindingSeverity,
    pub recommendation: String,
    /// Keys of the abnormal parameters this finding is based on.
    pub related_tests: Vec<String>,
}
