use std::collections::HashSet;
use std::path::Path;

use labdx_core::models::ReferenceRange;

use crate::error::RulesError;

/// Normal ranges for every parameter the engine recognises.
///
/// Built once and never mutated. Construction validates every entry, so
/// holders of a `ReferenceTable` can rely on unique keys and on
/// `0 < min <= max`.
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    ranges: Vec<ReferenceRange>,
}

impl ReferenceTable {
    pub fn new(ranges: Vec<ReferenceRange>) -> Result<Self, RulesError> {
        let mut seen = HashSet::new();
        for range in &ranges {
            validate_range(range)?;
            if !seen.insert(range.key.as_str()) {
                return Err(RulesError::DuplicateParameter(range.key.clone()));
            }
        }
        Ok(Self { ranges })
    }

    /// Skip validation for the built-in data, which the test suite checks.
    pub(crate) fn from_trusted(ranges: Vec<ReferenceRange>) -> Self {
        Self { ranges }
    }

    /// Parse a JSON array of reference ranges.
    pub fn from_json(name: &str, json: &str) -> Result<Self, RulesError> {
        let ranges: Vec<ReferenceRange> =
            serde_json::from_str(json).map_err(|source| RulesError::Parse {
                name: name.to_string(),
                source,
            })?;
        Self::new(ranges)
    }

    pub fn load(path: &Path) -> Result<Self, RulesError> {
        let json = std::fs::read_to_string(path).map_err(|source| RulesError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_json(&path.display().to_string(), &json)?;
        tracing::info!(path = %path.display(), ranges = table.len(), "reference table loaded");
        Ok(table)
    }

    pub fn get(&self, key: &str) -> Option<&ReferenceRange> {
        self.ranges.iter().find(|r| r.key == key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReferenceRange> {
        self.ranges.iter()
    }

    pub fn ranges(&self) -> &[ReferenceRange] {
        &self.ranges
    }

    /// Distinct categories in table order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for range in &self.ranges {
            if !categories.contains(&range.category.as_str()) {
                categories.push(&range.category);
            }
        }
        categories
    }

    /// Case-insensitive category filter.
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a ReferenceRange> {
        self.ranges
            .iter()
            .filter(move |r| r.category.eq_ignore_ascii_case(category))
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

fn validate_range(range: &ReferenceRange) -> Result<(), RulesError> {
    if range.key.trim().is_empty() {
        return Err(RulesError::EmptyField { field: "key" });
    }
    if range.name.trim().is_empty() {
        return Err(RulesError::EmptyField { field: "name" });
    }
    if !range.min.is_finite() || !range.max.is_finite() || range.min > range.max {
        return Err(RulesError::InvalidBounds {
            key: range.key.clone(),
            min: range.min,
            max: range.max,
        });
    }
    // Deviation is measured relative to the violated bound, or to `max`
    // when `min` is zero.
    if range.min < 0.0 || range.max <= 0.0 {
        return Err(RulesError::InvalidThreshold {
            key: range.key.clone(),
            min: range.min,
            max: range.max,
        });
    }
    Ok(())
}
