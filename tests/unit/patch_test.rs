// Partial update payloads: absent keeps, null clears, value sets
use chrono::NaiveDate;
use payroll::core::Patch;
use payroll::employees::UpdateEmployeeParams;
use payroll::workspaces::UpdateWorkspaceParams;
use serde_json::json;

#[test]
fn test_absent_null_and_value_are_distinct() {
    let params: UpdateEmployeeParams = serde_json::from_value(json!({
        "birth_date": null,
        "phone": "+1 555 0100"
    }))
    .unwrap();

    assert_eq!(params.birth_date, Patch::Clear);
    assert_eq!(params.phone, Patch::Set("+1 555 0100".to_string()));
    assert!(params.gender.is_unchanged());
    assert!(params.first_name.is_none());
    assert!(!params.is_empty());
}

#[test]
fn test_empty_object_is_empty_update() {
    let params: UpdateEmployeeParams = serde_json::from_value(json!({})).unwrap();
    assert!(params.is_empty());

    let params: UpdateWorkspaceParams = serde_json::from_value(json!({})).unwrap();
    assert!(params.is_empty());
}

#[test]
fn test_date_patch_parses_iso_dates() {
    let params: UpdateEmployeeParams =
        serde_json::from_value(json!({ "birth_date": "1990-02-28" })).unwrap();
    assert_eq!(
        params.birth_date,
        Patch::Set(NaiveDate::from_ymd_opt(1990, 2, 28).unwrap())
    );

    let bad = serde_json::from_value::<UpdateEmployeeParams>(json!({ "birth_date": "28/02/1990" }));
    assert!(bad.is_err());
}

#[test]
fn test_apply_resolves_against_current() {
    assert_eq!(Patch::Unchanged.apply(Some("a")), Some("a"));
    assert_eq!(Patch::Clear.apply(Some("a")), None);
    assert_eq!(Patch::Set("b").apply(None), Some("b"));
    assert_eq!(Patch::from(Some(3)), Patch::Set(3));
    assert_eq!(Patch::<i32>::from(None), Patch::Clear);
}
