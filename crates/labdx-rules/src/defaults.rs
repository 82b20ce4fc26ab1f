//! Built-in reference ranges and diagnostic patterns for common adult
//! lab panels.

use labdx_core::models::{
    DiagnosticPattern, Direction, PatternCondition, PatternSeverity, ReferenceRange,
};

pub fn reference_ranges() -> Vec<ReferenceRange> {
    vec![
        range(
            "hemoglobin",
            "Hemoglobin",
            (12.0, 15.5),
            "g/dL",
            "CBC",
            (Some("Anemia"), Some("Polycythemia")),
        ),
        range(
            "wbc",
            "White Blood Cells (WBC)",
            (4.0, 11.0),
            "10³/µL",
            "CBC",
            (Some("Leukopenia (Weak Immunity)"), Some("Infection/Inflammation")),
        ),
        range(
            "platelets",
            "Platelets",
            (150.0, 450.0),
            "10³/µL",
            "CBC",
            (Some("Thrombocytopenia (Bleeding Risk)"), Some("Thrombocytosis")),
        ),
        range(
            "rbc",
            "Red Blood Cells (RBC)",
            (4.5, 5.5),
            "10⁶/µL",
            "CBC",
            (Some("Anemia"), Some("Polycythemia")),
        ),
        range(
            "glucose",
            "Blood Glucose (Fasting)",
            (70.0, 99.0),
            "mg/dL",
            "Metabolic",
            (Some("Hypoglycemia"), Some("Diabetes/Prediabetes")),
        ),
        range(
            "creatinine",
            "Creatinine",
            (0.6, 1.2),
            "mg/dL",
            "Kidney Function",
            (Some("Muscle Loss"), Some("Kidney Dysfunction")),
        ),
        range(
            "alt",
            "ALT (Liver Enzyme)",
            (7.0, 56.0),
            "U/L",
            "Liver Function",
            (Some("Vitamin B6 Deficiency"), Some("Liver Damage")),
        ),
        range(
            "ast",
            "AST (Liver Enzyme)",
            (10.0, 40.0),
            "U/L",
            "Liver Function",
            (Some("Vitamin B6 Deficiency"), Some("Liver/Heart Damage")),
        ),
        // Low bilirubin has no clinical significance.
        range(
            "bilirubin",
            "Bilirubin",
            (0.1, 1.2),
            "mg/dL",
            "Liver Function",
            (None, Some("Jaundice/Liver Issue")),
        ),
        range(
            "cholesterol",
            "Total Cholesterol",
            (125.0, 200.0),
            "mg/dL",
            "Lipid Panel",
            (Some("Malnutrition"), Some("Heart Disease Risk")),
        ),
    ]
}

pub fn patterns() -> Vec<DiagnosticPattern> {
    use Direction::{High, Low};

    vec![
        pattern(
            &[("hemoglobin", Low), ("rbc", Low)],
            "Iron Deficiency Anemia",
            PatternSeverity::Medium,
            "Check iron levels, consider iron supplements",
        ),
        pattern(
            &[("wbc", High), ("platelets", High)],
            "Acute Infection",
            PatternSeverity::High,
            "Check CRP levels, consult for antibiotics",
        ),
        pattern(
            &[("glucose", High)],
            "Possible Diabetes/Prediabetes",
            PatternSeverity::High,
            "HbA1c test, lifestyle modification, endocrinologist consultation",
        ),
        pattern(
            &[("creatinine", High)],
            "Kidney Dysfunction",
            PatternSeverity::High,
            "Nephrology consultation, check GFR",
        ),
        pattern(
            &[("alt", High), ("ast", High)],
            "Liver Damage/Hepatitis",
            PatternSeverity::High,
            "Hepatology consultation, viral hepatitis screening",
        ),
        pattern(
            &[("cholesterol", High)],
            "Cardiovascular Risk",
            PatternSeverity::Medium,
            "Lipid profile, diet modification, statin consideration",
        ),
    ]
}

fn range(
    key: &str,
    name: &str,
    (min, max): (f64, f64),
    unit: &str,
    category: &str,
    (low, high): (Option<&str>, Option<&str>),
) -> ReferenceRange {
    ReferenceRange {
        key: key.to_string(),
        name: name.to_string(),
        min,
        max,
        unit: unit.to_string(),
        category: category.to_string(),
        low_condition: low.map(str::to_string),
        high_condition: high.map(str::to_string),
    }
}

fn pattern(
    conditions: &[(&str, Direction)],
    diagnosis: &str,
    severity: PatternSeverity,
    recommendation: &str,
) -> DiagnosticPattern {
    DiagnosticPattern {
        conditions: conditions
            .iter()
            .map(|(key, direction)| PatternCondition::new(*key, *direction))
            .collect(),
        diagnosis: diagnosis.to_string(),
        severity,
        recommendation: recommendation.to_string(),
    }
}
