//! User-defined rules plugged into the registry.

use fieldrules_validator::prelude::*;
use fieldrules_validator::rule;
use pretty_assertions::assert_eq;
use serde_json::json;

rule! {
    /// The value must not contain whitespace.
    pub NoSpaces as "NoSpaces";
    message: "The :key must not contain spaces";
    check(ctx) { !ctx.text().chars().any(char::is_whitespace) }
}

/// The string form must be at most `max` characters long.
#[derive(Debug)]
struct MaxLength {
    max: usize,
    raw: String,
}

impl Rule for MaxLength {
    fn name(&self) -> &str {
        "MaxLength"
    }

    fn default_message(&self) -> &str {
        "The :key may not be longer than :max characters"
    }

    fn validate(&self, ctx: &RuleContext<'_>) -> RuleOutcome {
        if ctx.text().chars().count() <= self.max {
            RuleOutcome::pass()
        } else {
            ctx.fail(self, &[(":max", self.raw.as_str())], ChainFlow::StopField)
        }
    }
}

fn registry() -> RuleRegistry {
    RuleRegistry::builtin()
        .with(NoSpaces::NAME, |_, _| Ok(Box::new(NoSpaces)))
        .with("MaxLength", |params, _| {
            let raw = params.first().cloned().unwrap_or_default();
            let max = raw
                .parse()
                .map_err(|_| ConfigurationError::InvalidParameter {
                    rule: "MaxLength".to_owned(),
                    param: raw.clone(),
                    reason: "not a length".to_owned(),
                })?;
            Ok(Box::new(MaxLength { max, raw }))
        })
}

#[test]
fn custom_rules_run_in_chains() {
    let validator = Validator::builder()
        .registry(registry())
        .value("username", "john doe the third")
        .rules("username", ["Required", "MaxLength:8", "NoSpaces"])
        .build()
        .unwrap();

    // MaxLength stops the chain, so NoSpaces never reports.
    assert_eq!(
        validator.get("username").unwrap().len(),
        1,
        "{}",
        validator.errors()
    );
    assert_eq!(
        validator.first("username"),
        "The username may not be longer than 8 characters"
    );
}

#[test]
fn custom_rule_parameter_errors() {
    let err = Validator::builder()
        .registry(registry())
        .rules("username", ["MaxLength:long"])
        .build()
        .unwrap_err();
    assert_eq!(err.code(), "RULE_INVALID_PARAM");
}

#[test]
fn builtin_rules_unavailable_in_empty_registry() {
    let err = Validator::builder()
        .registry(RuleRegistry::empty())
        .value("x", json!(1))
        .rules("x", ["Numeric"])
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        ConfigurationError::UnknownRule {
            rule: "Numeric".into()
        }
    );
}
