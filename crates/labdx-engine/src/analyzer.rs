use std::time::Instant;

use labdx_core::models::{AnalysisReport, LabPanel};
use labdx_rules::{PatternTable, ReferenceTable, default_pattern_table, default_reference_table};

use crate::classify::{Classification, classify};
use crate::matcher::{LinearMatcher, PatternMatcher, diagnose};
use crate::status::overall_status;

/// Evaluates lab panels against a reference table and a pattern table.
///
/// Holds only shared references to immutable tables, so one analyzer can
/// serve any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct Analyzer<'a, M = LinearMatcher> {
    reference: &'a ReferenceTable,
    patterns: &'a PatternTable,
    matcher: M,
}

impl<'a> Analyzer<'a, LinearMatcher> {
    pub fn new(reference: &'a ReferenceTable, patterns: &'a PatternTable) -> Self {
        Self {
            reference,
            patterns,
            matcher: LinearMatcher,
        }
    }
}

impl Analyzer<'static, LinearMatcher> {
    /// Analyzer over the built-in tables.
    pub fn builtin() -> Self {
        Self::new(default_reference_table(), default_pattern_table())
    }
}

impl<'a, M: PatternMatcher> Analyzer<'a, M> {
    /// Swap in a different pattern matching strategy.
    pub fn with_matcher<N: PatternMatcher>(self, matcher: N) -> Analyzer<'a, N> {
        Analyzer {
            reference: self.reference,
            patterns: self.patterns,
            matcher,
        }
    }

    pub fn reference(&self) -> &'a ReferenceTable {
        self.reference
    }

    pub fn patterns(&self) -> &'a PatternTable {
        self.patterns
    }

    /// Analyze `panel`, stamping the report with the current time.
    pub fn analyze(&self, panel: &LabPanel) -> AnalysisReport {
        self.analyze_at(panel, jiff::Timestamp::now())
    }

    /// Analyze `panel` with a caller-supplied generation timestamp. The
    /// result depends on nothing but the arguments and the tables.
    pub fn analyze_at(&self, panel: &LabPanel, generated_at: jiff::Timestamp) -> AnalysisReport {
        let start = Instant::now();

        let mut test_results = Vec::new();
        let mut rejected = Vec::new();
        for (key, raw) in panel.iter() {
            match classify(self.reference, key, raw) {
                Classification::Unknown => {
                    tracing::debug!(key, "skipping unrecognised parameter");
                }
                Classification::Rejected(value) => {
                    tracing::warn!(key, raw = %value.raw, reason = value.reason.as_str(), "rejected lab value");
                    rejected.push(value);
                }
                Classification::Classified(result) => {
                    if let Some(direction) = result.status.direction() {
                        tracing::debug!(
                            key,
                            direction = direction.as_str(),
                            deviation = result.deviation_percent,
                            "abnormal reading"
                        );
                    }
                    test_results.push(result);
                }
            }
        }

        let abnormalities: Vec<_> = test_results
            .iter()
            .filter(|r| r.is_abnormal())
            .cloned()
            .collect();

        let diagnostics = diagnose(&self.matcher, self.patterns, &abnormalities);
        let overall_status = overall_status(&abnormalities);

        tracing::info!(
            parameters = test_results.len(),
            abnormal = abnormalities.len(),
            findings = diagnostics.len(),
            rejected = rejected.len(),
            status = overall_status.label(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "lab panel analyzed"
        );

        AnalysisReport {
            test_results,
            abnormalities,
            diagnostics,
            rejected,
            overall_status,
            generated_at,
        }
    }
}

/// Analyze `panel` against the built-in tables.
pub fn analyze(panel: &LabPanel) -> AnalysisReport {
    Analyzer::builtin().analyze(panel)
}
