use std::collections::HashMap;

use labdx_core::models::{
    Confidence, DiagnosticFinding, DiagnosticPattern, Direction, FindingSeverity, ParameterResult,
};
use labdx_rules::PatternTable;

/// Lookup from parameter key to the direction it deviated in. Only abnormal
/// parameters are present, so a pattern can never match on a normal one.
#[derive(Debug, Clone, Default)]
pub struct AbnormalitySet<'a> {
    directions: HashMap<&'a str, Direction>,
}

impl<'a> AbnormalitySet<'a> {
    pub fn from_results(results: &'a [ParameterResult]) -> Self {
        let directions = results
            .iter()
            .filter_map(|r| r.status.direction().map(|d| (r.key.as_str(), d)))
            .collect();
        Self { directions }
    }

    pub fn direction(&self, key: &str) -> Option<Direction> {
        self.directions.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.directions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }
}

/// Decides whether a pattern applies to a set of abnormalities.
pub trait PatternMatcher: Send + Sync {
    fn matches(&self, pattern: &DiagnosticPattern, abnormalities: &AbnormalitySet<'_>) -> bool;
}

/// Checks each condition in turn, stopping at the first miss.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearMatcher;

impl PatternMatcher for LinearMatcher {
    fn matches(&self, pattern: &DiagnosticPattern, abnormalities: &AbnormalitySet<'_>) -> bool {
        pattern
            .conditions
            .iter()
            .all(|c| abnormalities.direction(&c.parameter) == Some(c.direction))
    }
}

/// Produce findings for `abnormalities`.
///
/// Every matching pattern is reported, in table order. Only when no
/// pattern matches at all does each abnormal parameter with a known
/// condition get its own medium-confidence finding.
pub fn diagnose<M: PatternMatcher + ?Sized>(
    matcher: &M,
    patterns: &PatternTable,
    abnormalities: &[ParameterResult],
) -> Vec<DiagnosticFinding> {
    let set = AbnormalitySet::from_results(abnormalities);

    let matched: Vec<DiagnosticFinding> = patterns
        .iter()
        .filter(|p| matcher.matches(p, &set))
        .map(|p| {
            tracing::debug!(diagnosis = %p.diagnosis, severity = p.severity.as_str(), "pattern matched");
            pattern_finding(p)
        })
        .collect();

    if matched.is_empty() {
        fallback_findings(abnormalities)
    } else {
        matched
    }
}

fn pattern_finding(pattern: &DiagnosticPattern) -> DiagnosticFinding {
    DiagnosticFinding {
        condition: pattern.diagnosis.clone(),
        confidence: Confidence::High,
        severity: pattern.severity.into(),
        recommendation: pattern.recommendation.clone(),
        related_tests: pattern.parameter_keys(),
    }
}

/// One finding per abnormal parameter that names a possible condition.
pub fn fallback_findings(abnormalities: &[ParameterResult]) -> Vec<DiagnosticFinding> {
    abnormalities
        .iter()
        .filter_map(|abn| {
            let condition = abn.possible_condition.as_ref()?;
            let severity = FindingSeverity::for_parameter(abn.severity)?;
            Some(DiagnosticFinding {
                condition: condition.clone(),
                confidence: Confidence::Medium,
                severity,
                recommendation: format!("Monitor {} levels, consult specialist", abn.name),
                related_tests: vec![abn.key.clone()],
            })
        })
        .collect()
}
