use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::finding::DiagnosticFinding;
use super::result::{ParameterResult, RejectedValue};

/// Worst-case rollup across all abnormal parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum OverallStatus {
    Healthy,
    MildConcern,
    NeedsAttention,
    Critical,
}

impl OverallStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Healthy => "Healthy",
            Self::MildConcern => "Mild Concern",
            Self::NeedsAttention => "Needs Attention",
            Self::Critical => "Critical",
        }
    }
}

impl std::fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalysisReport {
    /// One entry per recognised parameter, in input order.
    pub test_results: Vec<ParameterResult>,
    /// The non-normal subset of `test_results`, in the same order.
    pub abnormalities: Vec<ParameterResult>,
    pub diagnostics: Vec<DiagnosticFinding>,
    /// Recognised parameters whose values were not finite numbers.
    #[serde(default)]
    pub rejected: Vec<RejectedValue>,
    pub overall_status: OverallStatus,
    pub generated_at: jiff::Timestamp,
}

impl AnalysisReport {
    pub fn is_healthy(&self) -> bool {
        self.overall_status == OverallStatus::Healthy
    }

    pub fn to_json(&self) -> Result<String, crate::error::CoreError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, crate::error::CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
