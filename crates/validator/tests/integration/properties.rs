//! Property-based tests.

use fieldrules_validator::prelude::*;
use proptest::prelude::*;
use serde_json::{Value, json};

fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        "[a-z0-9 ]{0,8}".prop_map(Value::String),
        prop::sample::select(vec!["on", "off", "true", "0", "17", "18.5", "02/20/2020"])
            .prop_map(|s| json!(s)),
    ]
}

fn arb_chain() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(
        prop::sample::select(vec![
            "Required",
            "Nullable",
            "Boolean",
            "Numeric",
            "Min:18",
            "Date:MM/dd/yyyy",
        ]),
        0..4,
    )
}

/// `(value, Some(chain))` per field; `None` means no chain.
fn arb_fields() -> impl Strategy<Value = Vec<(Value, Option<Vec<&'static str>>)>> {
    prop::collection::vec((arb_value(), prop::option::of(arb_chain())), 0..6)
}

fn build(fields: &[(Value, Option<Vec<&'static str>>)]) -> Validator {
    let mut builder = Validator::builder();
    for (i, (value, chain)) in fields.iter().enumerate() {
        let field = format!("f{i}");
        builder = builder.value(field.clone(), value.clone());
        if let Some(chain) = chain {
            builder = builder.rules(field, chain.iter().copied());
        }
    }
    builder.build().expect("built-in chains resolve")
}

// ============================================================================
// PARTITION: valid and invalid fields split the fields that have a chain
// ============================================================================

proptest! {
    #[test]
    fn valid_and_invalid_partition_chained_fields(fields in arb_fields()) {
        let validator = build(&fields);
        let valid = validator.valid_fields();
        let invalid = validator.invalid_fields();

        for (i, (_, chain)) in fields.iter().enumerate() {
            let field = format!("f{i}");
            let in_valid = valid.contains(&field.as_str());
            let in_invalid = invalid.contains(&field.as_str());

            if chain.is_some() {
                prop_assert!(in_valid ^ in_invalid, "{field} must be in exactly one list");
            } else {
                prop_assert!(!in_valid && !in_invalid, "{field} has no chain");
            }
        }

        prop_assert_eq!(validator.fails(), !invalid.is_empty());
        prop_assert_eq!(validator.validate().len(), valid.len());
    }
}

// ============================================================================
// IDEMPOTENCE: repeated queries return the same snapshot
// ============================================================================

proptest! {
    #[test]
    fn queries_are_stable(fields in arb_fields()) {
        let validator = build(&fields);
        let first = (validator.fails(), validator.errors().clone(), validator.validate().clone());
        let second = (validator.fails(), validator.errors().clone(), validator.validate().clone());
        prop_assert_eq!(first, second);
    }
}

// ============================================================================
// MESSAGE BAG: first non-empty message wins
// ============================================================================

proptest! {
    #[test]
    fn add_keeps_first_non_empty(messages in prop::collection::vec("[a-z]{0,3}", 1..8)) {
        let mut bag = MessageBag::new();
        for message in &messages {
            bag.add("field", "Rule", message.as_str());
        }

        let expected = messages.iter().find(|m| !m.is_empty()).map_or("", String::as_str);
        prop_assert_eq!(bag.get_rule("field", "Rule"), Some(expected));
    }

    #[test]
    fn merge_keeps_last_source(first in "[a-z]{1,3}", last in "[a-z]{1,3}") {
        let mut a = MessageBag::new();
        a.add("field", "Rule", first.as_str());
        let mut b = MessageBag::new();
        b.add("field", "Rule", last.as_str());

        let merged = MessageBag::merged([a, b]);
        prop_assert_eq!(merged.get_rule("field", "Rule"), Some(last.as_str()));
    }
}
