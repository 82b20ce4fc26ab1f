use labdx_core::models::{OverallStatus, ParameterResult, Severity};

/// Worst-case rollup. One severe reading makes the whole panel critical,
/// however many mild ones sit beside it.
pub fn overall_status(abnormalities: &[ParameterResult]) -> OverallStatus {
    if abnormalities.is_empty() {
        return OverallStatus::Healthy;
    }
    if abnormalities.iter().any(|a| a.severity == Severity::Severe) {
        return OverallStatus::Critical;
    }
    if abnormalities.iter().any(|a| a.severity == Severity::Medium) {
        return OverallStatus::NeedsAttention;
    }
    OverallStatus::MildConcern
}
