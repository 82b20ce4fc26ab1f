use std::collections::HashSet;
use std::path::Path;

use labdx_core::models::DiagnosticPattern;

use crate::error::RulesError;
use crate::reference::ReferenceTable;

/// Ordered multi-parameter diagnostic rules.
///
/// Table order is reporting order. Every parameter a pattern names must
/// exist in the reference table the pattern table was validated against.
#[derive(Debug, Clone)]
pub struct PatternTable {
    patterns: Vec<DiagnosticPattern>,
}

impl PatternTable {
    pub fn new(
        patterns: Vec<DiagnosticPattern>,
        reference: &ReferenceTable,
    ) -> Result<Self, RulesError> {
        for pattern in &patterns {
            validate_pattern(pattern, reference)?;
        }
        Ok(Self { patterns })
    }

    /// Skip validation for the built-in data, which the test suite checks.
    pub(crate) fn from_trusted(patterns: Vec<DiagnosticPattern>) -> Self {
        Self { patterns }
    }

    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Parse a JSON array of patterns.
    pub fn from_json(
        name: &str,
        json: &str,
        reference: &ReferenceTable,
    ) -> Result<Self, RulesError> {
        let patterns: Vec<DiagnosticPattern> =
            serde_json::from_str(json).map_err(|source| RulesError::Parse {
                name: name.to_string(),
                source,
            })?;
        Self::new(patterns, reference)
    }

    pub fn load(path: &Path, reference: &ReferenceTable) -> Result<Self, RulesError> {
        let json = std::fs::read_to_string(path).map_err(|source| RulesError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_json(&path.display().to_string(), &json, reference)?;
        tracing::info!(path = %path.display(), patterns = table.len(), "pattern table loaded");
        Ok(table)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticPattern> {
        self.patterns.iter()
    }

    pub fn patterns(&self) -> &[DiagnosticPattern] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

fn validate_pattern(
    pattern: &DiagnosticPattern,
    reference: &ReferenceTable,
) -> Result<(), RulesError> {
    if pattern.diagnosis.trim().is_empty() {
        return Err(RulesError::EmptyField { field: "diagnosis" });
    }
    if pattern.conditions.is_empty() {
        return Err(RulesError::EmptyPattern(pattern.diagnosis.clone()));
    }

    let mut seen = HashSet::new();
    for condition in &pattern.conditions {
        if !seen.insert(condition.parameter.as_str()) {
            return Err(RulesError::DuplicateCondition {
                diagnosis: pattern.diagnosis.clone(),
                key: condition.parameter.clone(),
            });
        }
        if !reference.contains_key(&condition.parameter) {
            return Err(RulesError::UnknownParameter {
                diagnosis: pattern.diagnosis.clone(),
                key: condition.parameter.clone(),
            });
        }
    }
    Ok(())
}
