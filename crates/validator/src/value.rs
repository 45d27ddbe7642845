//! Conversions from dynamic field values.
//!
//! Field values arrive as [`serde_json::Value`]. Rules never look at the JSON
//! type directly; they work on the *string form* of a value, and numeric rules
//! additionally on its numeric form.

use std::borrow::Cow;

use serde_json::Value;

/// Returns the string form of a value.
///
/// Strings are returned as-is (without JSON quoting), `null` becomes the empty
/// string, numbers and booleans use their canonical textual form, and arrays
/// and objects are rendered as compact JSON.
///
/// # Examples
///
/// ```
/// use fieldrules_validator::value::string_form;
/// use serde_json::json;
///
/// assert_eq!(string_form(&json!("abc")), "abc");
/// assert_eq!(string_form(&json!(18)), "18");
/// assert_eq!(string_form(&json!(true)), "true");
/// assert_eq!(string_form(&json!(null)), "");
/// ```
#[must_use]
pub fn string_form(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed(""),
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        Value::Number(n) => Cow::Owned(n.to_string()),
        Value::Array(_) | Value::Object(_) => Cow::Owned(value.to_string()),
    }
}

/// Returns the numeric form of a value, if it has one.
///
/// JSON numbers are numeric. Strings are numeric when, after trimming, they
/// parse as a finite decimal number. Everything else (booleans included) is
/// not numeric.
#[must_use]
pub fn numeric_form(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_number(s),
        _ => None,
    }
}

/// Parses a finite decimal number from text.
///
/// `"inf"`, `"NaN"` and friends are rejected even though `f64::from_str`
/// accepts them.
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!("hello"), "hello")]
    #[case(json!(""), "")]
    #[case(json!(null), "")]
    #[case(json!(42), "42")]
    #[case(json!(2.5), "2.5")]
    #[case(json!(false), "false")]
    #[case(json!([1, 2]), "[1,2]")]
    fn string_form_of(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(string_form(&value), expected);
    }

    #[rstest]
    #[case(json!(18), Some(18.0))]
    #[case(json!("18"), Some(18.0))]
    #[case(json!(" 17.5 "), Some(17.5))]
    #[case(json!("-3"), Some(-3.0))]
    #[case(json!("abc"), None)]
    #[case(json!(""), None)]
    #[case(json!("NaN"), None)]
    #[case(json!("inf"), None)]
    #[case(json!(true), None)]
    #[case(json!(null), None)]
    fn numeric_form_of(#[case] value: Value, #[case] expected: Option<f64>) {
        assert_eq!(numeric_form(&value), expected);
    }
}
