//! Loading the rule table and outcomes through serde
#![cfg(feature = "serde")]

use signup_validation::{validate, FieldId, FieldValidator, RuleTable, ValidationResult};

#[test]
fn test_rule_table_from_json() {
    let table: RuleTable = serde_json::from_str(r#"{"name": 5, "password": 10}"#).unwrap();
    assert_eq!(table.minimum_for(FieldId::Name), 5);
    assert_eq!(table.minimum_for(FieldId::Password), 10);

    let validator = FieldValidator::with_rules(table);
    assert_eq!(
        validator.validate("John Smith", "Abcdef1").message(),
        Some("You must have at least 10 letters in password")
    );
}

#[test]
fn test_partial_table_keeps_defaults() {
    let table: RuleTable = serde_json::from_str(r#"{"password": 8}"#).unwrap();
    assert_eq!(table, RuleTable::default().with_minimum(FieldId::Password, 8));
}

#[test]
fn test_rule_table_serializes_by_field_name() {
    let json = serde_json::to_value(RuleTable::default()).unwrap();
    assert_eq!(json, serde_json::json!({"name": 4, "password": 6}));
}

#[test]
fn test_field_id_names() {
    assert_eq!(serde_json::to_string(&FieldId::Password).unwrap(), r#""password""#);
}

#[test]
fn test_result_roundtrip() {
    let result = validate("", "");
    let json = serde_json::to_string(&result).unwrap();
    assert_eq!(
        json,
        r#"{"valid":false,"message":"Must not leave any fields blank"}"#
    );
    let back: ValidationResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}
