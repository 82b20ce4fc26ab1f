pub mod finding;
pub mod panel;
pub mod pattern;
pub mod reference;
pub mod report;
pub mod result;

pub use finding::{Confidence, DiagnosticFinding, FindingSeverity};
pub use panel::{LabPanel, LabValue};
pub use pattern::{DiagnosticPattern, PatternCondition, PatternSeverity};
pub use reference::{Direction, ReferenceRange};
pub use report::{AnalysisReport, OverallStatus};
pub use result::{ParameterResult, ParameterStatus, RejectedValue, RejectionReason, Severity};
