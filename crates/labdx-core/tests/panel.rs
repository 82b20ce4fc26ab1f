use labdx_core::models::{LabPanel, LabValue, RejectionReason};

#[test]
fn json_object_keeps_document_order() {
    let panel = LabPanel::from_json(r#"{"rbc": 3.8, "hemoglobin": 9.0, "alt": "70"}"#).unwrap();
    let keys: Vec<&str> = panel.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["rbc", "hemoglobin", "alt"]);
}

#[test]
fn integers_and_numeric_strings_are_accepted() {
    let panel = LabPanel::from_json(r#"{"glucose": 150, "alt": " 42.5 "}"#).unwrap();
    assert_eq!(panel.get("glucose").unwrap().parse(), Ok(150.0));
    assert_eq!(panel.get("alt").unwrap().parse(), Ok(42.5));
}

#[test]
fn non_numeric_text_is_rejected() {
    let value = LabValue::from("twelve");
    assert_eq!(value.parse(), Err(RejectionReason::NotANumber));

    let empty = LabValue::from("");
    assert_eq!(empty.parse(), Err(RejectionReason::NotANumber));
}

#[test]
fn nan_and_infinity_are_rejected() {
    assert_eq!(LabValue::from(f64::NAN).parse(), Err(RejectionReason::NotFinite));
    assert_eq!(LabValue::from("inf").parse(), Err(RejectionReason::NotFinite));
    assert_eq!(LabValue::from("NaN").parse(), Err(RejectionReason::NotFinite));
}

#[test]
fn null_and_booleans_are_kept_for_rejection() {
    let panel =
        LabPanel::from_json(r#"{"glucose": null, "hemoglobin": 9, "alt": true}"#).unwrap();
    assert_eq!(panel.len(), 3);

    let glucose = panel.get("glucose").unwrap();
    assert_eq!(glucose, &LabValue::Other(serde_json::Value::Null));
    assert_eq!(glucose.parse(), Err(RejectionReason::NotANumber));
    assert_eq!(glucose.to_string(), "null");

    assert_eq!(panel.get("hemoglobin").unwrap().parse(), Ok(9.0));
    assert_eq!(panel.get("alt").unwrap().parse(), Err(RejectionReason::NotANumber));
    assert_eq!(panel.get("alt").unwrap().to_string(), "true");
}

#[test]
fn reinserting_a_key_replaces_in_place() {
    let mut panel = LabPanel::new();
    panel.insert("wbc", 5.0);
    panel.insert("platelets", 200.0);
    panel.insert("wbc", 12.0);

    assert_eq!(panel.len(), 2);
    let entries: Vec<(&str, &LabValue)> = panel.iter().collect();
    assert_eq!(entries[0], ("wbc", &LabValue::Number(12.0)));
    assert_eq!(entries[1].0, "platelets");
}

#[test]
fn serializes_back_to_an_ordered_object() {
    let panel: LabPanel = [("ast", 50.0), ("alt", 70.0)].into_iter().collect();
    let json = serde_json::to_string(&panel).unwrap();
    assert_eq!(json, r#"{"ast":50.0,"alt":70.0}"#);
}

#[test]
fn non_object_input_is_an_error() {
    assert!(LabPanel::from_json("[1, 2, 3]").is_err());
}
