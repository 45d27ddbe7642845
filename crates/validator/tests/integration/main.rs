//! Integration tests for fieldrules-validator.

mod custom_rules;
mod properties;
mod scenarios;

use fieldrules_validator::prelude::*;
use serde_json::Value;

/// Builds a validator from `(field, value, chain)` rows.
pub fn validator_for(rows: &[(&str, Value, &[&str])]) -> Validator {
    rows.iter()
        .fold(Validator::builder(), |builder, (field, value, chain)| {
            builder
                .value(*field, value.clone())
                .rules(*field, chain.iter().copied())
        })
        .build()
        .expect("chains resolve")
}
