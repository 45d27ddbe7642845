//! Subcommand implementations.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::Context;
use fieldrules_validator::{MessageBag, RuleRegistry, Validator, ValidatorConfig};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Input document of `fieldrules check`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckRequest {
    pub values: IndexMap<String, Value>,
    #[serde(default)]
    pub rules: IndexMap<String, Vec<String>>,
    #[serde(default)]
    pub messages: IndexMap<String, String>,
}

/// Output document of `fieldrules check`.
#[derive(Debug, Serialize)]
pub struct CheckReport<'a> {
    pub fails: bool,
    pub errors: &'a MessageBag,
    pub passed: &'a IndexMap<String, Value>,
    pub valid_fields: Vec<&'a str>,
    pub invalid_fields: Vec<&'a str>,
}

impl<'a> CheckReport<'a> {
    pub fn from_validator(validator: &'a Validator) -> Self {
        Self {
            fails: validator.fails(),
            errors: validator.errors(),
            passed: validator.validate(),
            valid_fields: validator.valid_fields(),
            invalid_fields: validator.invalid_fields(),
        }
    }
}

/// Reads a request from `path`, or from stdin when `path` is `-`.
pub fn read_request(path: &Path) -> anyhow::Result<CheckRequest> {
    let text = if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read request from stdin")?;
        text
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("failed to read request {}", path.display()))?
    };

    serde_json::from_str(&text).context("request is not a valid fieldrules document")
}

/// Runs `fieldrules check`; returns the rendered report and whether
/// validation failed.
pub fn run_check(
    request: CheckRequest,
    config: ValidatorConfig,
    compact: bool,
) -> anyhow::Result<(String, bool)> {
    let validator = Validator::builder()
        .config(config)
        .values(request.values)
        .chains(request.rules)
        .messages(request.messages)
        .build()
        .context("invalid rule configuration")?;

    let report = CheckReport::from_validator(&validator);
    let rendered = if compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };

    tracing::info!(
        fails = report.fails,
        invalid = report.invalid_fields.len(),
        "check finished"
    );
    Ok((rendered, report.fails))
}

/// Runs `fieldrules rules`.
pub fn run_rules() -> String {
    let registry = RuleRegistry::builtin();
    registry.names().collect::<Vec<_>>().join("\n")
}
