use labdx_core::models::{
    Direction, LabValue, ParameterResult, ParameterStatus, ReferenceRange, RejectedValue, Severity,
};
use labdx_rules::ReferenceTable;

/// Outcome of looking up and classifying one panel entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    /// The key has no reference range. Dropped from the report.
    Unknown,
    /// The key is known but its value is not a finite number.
    Rejected(RejectedValue),
    Classified(ParameterResult),
}

/// Classify a raw panel entry against `table`.
pub fn classify(table: &ReferenceTable, key: &str, raw: &LabValue) -> Classification {
    let Some(range) = table.get(key) else {
        return Classification::Unknown;
    };

    match raw.parse() {
        Ok(value) => Classification::Classified(classify_parameter(range, value)),
        Err(reason) => Classification::Rejected(RejectedValue {
            key: key.to_string(),
            raw: raw.to_string(),
            reason,
        }),
    }
}

/// Classify a finite reading against its reference range.
pub fn classify_parameter(range: &ReferenceRange, value: f64) -> ParameterResult {
    let direction = if value < range.min {
        Some(Direction::Low)
    } else if value > range.max {
        Some(Direction::High)
    } else {
        None
    };

    let (status, severity, possible_condition, deviation) = match direction {
        None => (ParameterStatus::Normal, Severity::Normal, None, 0.0),
        Some(direction) => {
            let deviation = range_deviation(range, value, direction);
            (
                ParameterStatus::from(direction),
                severity_for(deviation),
                range.condition_for(direction).map(str::to_string),
                round_one_decimal(deviation),
            )
        }
    };

    ParameterResult {
        key: range.key.clone(),
        name: range.name.clone(),
        value,
        normal_range: range.normal_range(),
        unit: range.unit.clone(),
        category: range.category.clone(),
        status,
        severity,
        possible_condition,
        deviation_percent: deviation,
    }
}

/// Distance past `threshold` as a percentage of `threshold`, saturating at
/// `f64::MAX`.
pub fn deviation_percent(value: f64, threshold: f64, direction: Direction) -> f64 {
    scaled_deviation(value, threshold, threshold, direction)
}

/// A reading below a zero minimum is measured against the range's maximum.
fn range_deviation(range: &ReferenceRange, value: f64, direction: Direction) -> f64 {
    let threshold = range.threshold(direction);
    let scale = if threshold > 0.0 { threshold } else { range.max };
    scaled_deviation(value, threshold, scale, direction)
}

fn scaled_deviation(value: f64, threshold: f64, scale: f64, direction: Direction) -> f64 {
    let distance = match direction {
        Direction::Low => threshold - value,
        Direction::High => value - threshold,
    };
    (distance / scale * 100.0).min(f64::MAX)
}

/// Map an unrounded deviation percentage to a severity band.
pub fn severity_for(deviation: f64) -> Severity {
    if deviation < 10.0 {
        Severity::Mild
    } else if deviation < 30.0 {
        Severity::Medium
    } else {
        Severity::Severe
    }
}

fn round_one_decimal(value: f64) -> f64 {
    let scaled = value * 10.0;
    // Past 2^53 there is no fractional part left to round.
    if scaled.is_finite() {
        scaled.round() / 10.0
    } else {
        value
    }
}
