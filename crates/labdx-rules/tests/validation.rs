use labdx_core::models::{DiagnosticPattern, Direction, PatternCondition, PatternSeverity, ReferenceRange};
use labdx_rules::error::RulesError;
use labdx_rules::{PatternTable, ReferenceTable};

fn range(key: &str, min: f64, max: f64) -> ReferenceRange {
    ReferenceRange {
        key: key.to_string(),
        name: key.to_uppercase(),
        min,
        max,
        unit: "U/L".to_string(),
        category: "Test".to_string(),
        low_condition: Some(format!("low {key}")),
        high_condition: Some(format!("high {key}")),
    }
}

fn pattern(diagnosis: &str, conditions: &[(&str, Direction)]) -> DiagnosticPattern {
    DiagnosticPattern {
        conditions: conditions
            .iter()
            .map(|(k, d)| PatternCondition::new(*k, *d))
            .collect(),
        diagnosis: diagnosis.to_string(),
        severity: PatternSeverity::Medium,
        recommendation: "Recheck".to_string(),
    }
}

fn reference() -> ReferenceTable {
    ReferenceTable::new(vec![range("a", 1.0, 2.0), range("b", 10.0, 20.0)]).unwrap()
}

#[test]
fn min_equal_to_max_is_allowed() {
    assert!(ReferenceTable::new(vec![range("a", 5.0, 5.0)]).is_ok());
}

#[test]
fn min_above_max_is_rejected() {
    let err = ReferenceTable::new(vec![range("a", 5.0, 4.0)]).unwrap_err();
    assert!(matches!(err, RulesError::InvalidBounds { ref key, .. } if key == "a"));
}

#[test]
fn non_finite_bounds_are_rejected() {
    let err = ReferenceTable::new(vec![range("a", 1.0, f64::INFINITY)]).unwrap_err();
    assert!(matches!(err, RulesError::InvalidBounds { .. }));
}

#[test]
fn zero_minimum_is_accepted() {
    let table = ReferenceTable::new(vec![range("crp", 0.0, 10.0)]).unwrap();
    assert_eq!(table.get("crp").unwrap().min, 0.0);
}

#[test]
fn negative_minimum_is_rejected() {
    let err = ReferenceTable::new(vec![range("a", -1.0, 4.0)]).unwrap_err();
    assert!(matches!(err, RulesError::InvalidThreshold { ref key, .. } if key == "a"));
}

#[test]
fn zero_width_range_at_zero_is_rejected() {
    let err = ReferenceTable::new(vec![range("a", 0.0, 0.0)]).unwrap_err();
    assert!(matches!(err, RulesError::InvalidThreshold { .. }));
}

#[test]
fn duplicate_keys_are_rejected() {
    let err = ReferenceTable::new(vec![range("a", 1.0, 2.0), range("a", 3.0, 4.0)]).unwrap_err();
    assert!(matches!(err, RulesError::DuplicateParameter(ref k) if k == "a"));
}

#[test]
fn blank_key_is_rejected() {
    let err = ReferenceTable::new(vec![range("  ", 1.0, 2.0)]).unwrap_err();
    assert!(matches!(err, RulesError::EmptyField { field: "key" }));
}

#[test]
fn pattern_with_unknown_parameter_is_rejected() {
    let err = PatternTable::new(vec![pattern("X", &[("a", Direction::Low), ("zzz", Direction::High)])], &reference())
        .unwrap_err();
    assert_eq!(err.to_string(), "pattern 'X' refers to unknown parameter 'zzz'");
}

#[test]
fn pattern_without_conditions_is_rejected() {
    let err = PatternTable::new(vec![pattern("X", &[])], &reference()).unwrap_err();
    assert!(matches!(err, RulesError::EmptyPattern(ref d) if d == "X"));
}

#[test]
fn pattern_repeating_a_parameter_is_rejected() {
    let err = PatternTable::new(
        vec![pattern("X", &[("a", Direction::Low), ("a", Direction::High)])],
        &reference(),
    )
    .unwrap_err();
    assert!(matches!(err, RulesError::DuplicateCondition { .. }));
}

#[test]
fn pattern_without_diagnosis_is_rejected() {
    let err = PatternTable::new(vec![pattern("", &[("a", Direction::Low)])], &reference()).unwrap_err();
    assert!(matches!(err, RulesError::EmptyField { field: "diagnosis" }));
}

#[test]
fn valid_patterns_keep_their_order() {
    let table = PatternTable::new(
        vec![
            pattern("second-listed-first", &[("b", Direction::High)]),
            pattern("both", &[("a", Direction::Low), ("b", Direction::Low)]),
        ],
        &reference(),
    )
    .unwrap();
    let names: Vec<&str> = table.iter().map(|p| p.diagnosis.as_str()).collect();
    assert_eq!(names, vec!["second-listed-first", "both"]);
}
