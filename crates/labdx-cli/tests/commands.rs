use std::ffi::OsString;

use clap::Parser;
use labdx_cli::cli::Cli;
use labdx_cli::commands;
use labdx_cli::config::OutputFormat;
use labdx_cli::tables::Tables;

const THYROID_RANGES: &str = r#"[
    {"key": "tsh", "name": "TSH", "min": 0.4, "max": 4.0, "unit": "mIU/L",
     "category": "Thyroid", "low_condition": "Hyperthyroidism", "high_condition": "Hypothyroidism"}
]"#;

#[test]
fn analyze_to_json() {
    let output = commands::analyze(
        r#"{"hemoglobin": 9.0, "rbc": 3.8}"#,
        &Tables::builtin(),
        OutputFormat::Json,
        false,
    )
    .unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["overall_status"], "needs_attention");
    assert_eq!(json["diagnostics"][0]["condition"], "Iron Deficiency Anemia");
    assert!(output.ends_with('\n'));
}

#[test]
fn analyze_to_text() {
    let output =
        commands::analyze(r#"{"glucose": 150}"#, &Tables::builtin(), OutputFormat::Text, false)
            .unwrap();
    assert!(output.starts_with("## Lab Analysis: Critical"));
}

#[test]
fn analyze_rejects_non_object_input() {
    let err = commands::analyze("[1]", &Tables::builtin(), OutputFormat::Json, false).unwrap_err();
    assert!(err.to_string().contains("lab values must be a JSON object"));
}

#[test]
fn ranges_grouped_by_category() {
    let output = commands::ranges(&Tables::builtin(), None);
    assert!(output.starts_with(
        "### CBC\n- Hemoglobin (hemoglobin): 12 - 15.5 g/dL; low: Anemia, high: Polycythemia\n"
    ));
    assert!(output.contains(
        "### Lipid Panel\n- Total Cholesterol (cholesterol): 125 - 200 mg/dL; \
         low: Malnutrition, high: Heart Disease Risk\n"
    ));
}

#[test]
fn ranges_omit_missing_conditions() {
    let output = commands::ranges(&Tables::builtin(), Some("Liver Function"));
    assert!(output.contains("- Bilirubin (bilirubin): 0.1 - 1.2 mg/dL; high: Jaundice/Liver Issue\n"));
}

#[test]
fn ranges_filtered_by_category() {
    let output = commands::ranges(&Tables::builtin(), Some("metabolic"));
    assert_eq!(
        output,
        "### Metabolic\n- Blood Glucose (Fasting) (glucose): 70 - 99 mg/dL; \
         low: Hypoglycemia, high: Diabetes/Prediabetes\n\n"
    );
}

#[test]
fn custom_reference_table_with_builtin_patterns_fails() {
    let dir = tempfile::tempdir().unwrap();
    let ranges = dir.path().join("ranges.json");
    std::fs::write(&ranges, THYROID_RANGES).unwrap();

    let err = Tables::load(Some(&ranges), None).unwrap_err();
    assert!(format!("{err:#}").contains("built-in patterns do not fit"));
}

#[test]
fn run_analyze_with_custom_tables() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("ranges.json"), THYROID_RANGES).unwrap();
    std::fs::write(dir.path().join("patterns.json"), "[]").unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"config_version": 1, "reference_table": "ranges.json",
            "pattern_table": "patterns.json", "default_format": "json"}"#,
    )
    .unwrap();
    let input = dir.path().join("panel.json");
    std::fs::write(&input, r#"{"tsh": 9.0, "glucose": 150}"#).unwrap();

    let cli = Cli::try_parse_from([
        OsString::from("labdx"),
        OsString::from("--config"),
        dir.path().join("config.json").into_os_string(),
        OsString::from("analyze"),
        input.into_os_string(),
    ])
    .unwrap();
    let output = labdx_cli::run(cli).unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["test_results"].as_array().unwrap().len(), 1);
    assert_eq!(json["diagnostics"][0]["condition"], "Hypothyroidism");
    assert_eq!(json["diagnostics"][0]["confidence"], "medium");
}

#[test]
fn run_init_config_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let existing = dir.path().join("existing.json");
    std::fs::write(&existing, r#"{"config_version": 1, "default_format": "text"}"#).unwrap();
    let target = dir.path().join("out").join("config.json");

    let cli = Cli::try_parse_from([
        OsString::from("labdx"),
        OsString::from("--config"),
        existing.into_os_string(),
        OsString::from("init-config"),
        target.clone().into_os_string(),
    ])
    .unwrap();
    let output = labdx_cli::run(cli).unwrap();
    assert!(output.starts_with("wrote "));

    let written = labdx_cli::config::load_config(&target).unwrap();
    assert_eq!(written.default_format, OutputFormat::Text);
}

#[test]
fn init_config_pins_relative_table_paths() {
    let dir = tempfile::tempdir().unwrap();
    let existing = dir.path().join("existing.json");
    std::fs::write(&existing, r#"{"config_version": 1}"#).unwrap();
    let target = dir.path().join("cfgdir").join("config.json");

    let cli = Cli::try_parse_from([
        OsString::from("labdx"),
        OsString::from("--config"),
        existing.into_os_string(),
        OsString::from("--reference-table"),
        OsString::from("ranges.json"),
        OsString::from("init-config"),
        target.clone().into_os_string(),
    ])
    .unwrap();
    labdx_cli::run(cli).unwrap();

    let expected = std::env::current_dir().unwrap().join("ranges.json");
    let written = labdx_cli::config::load_config(&target).unwrap();
    assert_eq!(written.reference_table, Some(expected));
    assert_eq!(written.pattern_table, None);
}
