//! End-to-end validation scenarios.

use fieldrules_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

use crate::validator_for;

// ============================================================================
// DATES
// ============================================================================

#[test]
fn impossible_calendar_date_fails() {
    let validator = validator_for(&[("dob", json!("02/30/2020"), &["Date:MM/dd/yyyy"])]);

    assert!(validator.fails());
    assert_eq!(validator.invalid_fields(), vec!["dob"]);
    assert_eq!(
        validator.errors().get_rule("dob", "Date"),
        Some("The dob must be a valid date in the MM/dd/yyyy format")
    );
}

#[test]
fn real_date_passes() {
    let validator = validator_for(&[("dob", json!("02/20/2020"), &["Date:MM/dd/yyyy"])]);

    assert!(!validator.fails());
    assert_eq!(validator.validate().get("dob"), Some(&json!("02/20/2020")));
    assert!(validator.errors().is_empty());
}

#[rstest]
#[case("02/30/2020", Some("Please enter a real date of birth"))]
#[case("02/20/2020", None)]
fn required_date_with_custom_message(#[case] dob: &str, #[case] expected: Option<&str>) {
    let validator = Validator::builder()
        .value("dob", dob)
        .rules("dob", ["Required", "Date:MM/dd/yyyy"])
        .message("dob.Date", "Please enter a real date of birth")
        .build()
        .unwrap();

    assert_eq!(validator.errors().first("dob"), expected);
    assert_eq!(validator.fails(), expected.is_some());
}

#[rstest]
#[case("dd-MM-yyyy", "20-02-2020", true)]
#[case("dd-MM-yyyy", "30-02-2020", false)]
#[case("MM-dd-yy", "02-20-20", true)]
#[case("dd/MM/yyyy", "20/02", false)]
fn date_patterns(#[case] pattern: &str, #[case] value: &str, #[case] valid: bool) {
    let rule = format!("Date:{pattern}");
    let validator = validator_for(&[("when", json!(value), &[rule.as_str()])]);
    assert_eq!(!validator.fails(), valid);
}

#[test]
fn canonical_pattern_comes_from_config() {
    let config =
        ValidatorConfig::default().with_canonical_date_pattern(DatePattern::DayMonthYearDash);
    let validator = Validator::builder()
        .config(config)
        .value("when", "12/31/1999")
        .rules("when", ["Date:MM/dd/yyyy"])
        .build()
        .unwrap();

    assert!(!validator.fails());
    assert_eq!(validator.config().canonical_date_pattern.as_str(), "dd-MM-yyyy");
}

// ============================================================================
// CHAINS
// ============================================================================

#[test]
fn min_renders_its_parameter() {
    let validator = validator_for(&[("age", json!("15"), &["Min:18"])]);
    assert_eq!(validator.first("age"), "The age must be at least 18");
}

#[test]
fn required_failure_skips_rest_of_chain() {
    let validator = validator_for(&[("agree", json!(""), &["Required", "Boolean"])]);

    let messages = validator.get("agree").unwrap();
    assert_eq!(
        messages.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["Required"]
    );
    assert_eq!(validator.first("agree"), "The agree field is required");
}

#[test]
fn one_field_failing_does_not_abort_others() {
    let validator = validator_for(&[
        ("name", json!(null), &["Required"]),
        ("age", json!(30), &["Numeric", "Min:18"]),
        ("agree", json!("maybe"), &["Boolean"]),
    ]);

    assert_eq!(validator.invalid_fields(), vec!["name", "agree"]);
    assert_eq!(validator.valid_fields(), vec!["age"]);
    assert_eq!(
        validator.validate().keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["age"]
    );
}

#[rstest]
#[case(json!(null), true)]
#[case(json!(""), false)]
#[case(json!("x"), true)]
fn nullable_chain(#[case] value: serde_json::Value, #[case] valid: bool) {
    let validator = validator_for(&[("middle", value, &["Nullable"])]);
    assert_eq!(!validator.fails(), valid);
}

#[test]
fn custom_templates_override_defaults() {
    let validator = Validator::builder()
        .value("age", "abc")
        .rules("age", ["Numeric", "Min:18"])
        .messages([
            ("age.Numeric", ":key must be digits, got :value"),
            ("age.Min", "at least :min please"),
        ])
        .build()
        .unwrap();

    insta::assert_json_snapshot!(validator.errors(), @r#"
    {
      "age": {
        "Numeric": "age must be digits, got abc",
        "Min": "at least 18 please"
      }
    }
    "#);
}

#[test]
fn fields_without_chains_are_neither_valid_nor_invalid() {
    let validator = Validator::builder()
        .value("age", "20")
        .value("comment", "")
        .rules("age", ["Min:18"])
        .build()
        .unwrap();

    assert!(validator.has("comment"));
    assert!(!validator.valid_fields().contains(&"comment"));
    assert!(!validator.invalid_fields().contains(&"comment"));
}

// ============================================================================
// CONFIGURATION ERRORS
// ============================================================================

#[rstest]
#[case("Email", "RULE_UNKNOWN")]
#[case("required", "RULE_UNKNOWN")]
#[case("Min", "RULE_MISSING_PARAM")]
#[case("Min:1,2", "RULE_UNEXPECTED_PARAMS")]
#[case("Min:abc", "RULE_INVALID_PARAM")]
#[case("Date:yyyy.MM.dd", "RULE_INVALID_PARAM")]
#[case("Boolean:strict", "RULE_UNEXPECTED_PARAMS")]
fn bad_chains_fail_at_build(#[case] token: &str, #[case] code: &str) {
    let err = Validator::builder()
        .value("field", "value")
        .rules("field", [token])
        .build()
        .unwrap_err();
    assert_eq!(err.code(), code);
}

// ============================================================================
// LOGGING
// ============================================================================

#[test]
fn run_is_traced_without_changing_results() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("fieldrules_validator=trace"))
        .with_test_writer()
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let validator = validator_for(&[
        ("age", json!("15"), &["Numeric", "Min:18"]),
        ("note", json!("free text"), &[]),
    ]);

    assert_eq!(validator.invalid_fields(), vec!["age"]);
    assert_eq!(validator.valid_fields(), vec!["note"]);
}
