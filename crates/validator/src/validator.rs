//! Orchestration of rule chains over a set of field values.
//!
//! A [`Validator`] owns the field values, the resolved rule chain of every
//! field and the custom message templates. Chains are resolved when the
//! validator is built, so every configuration mistake surfaces there as a
//! [`ConfigurationError`]. The run itself cannot fail: it happens lazily on
//! the first query, exactly once, and every later query reads the same
//! snapshot.
//!
//! # Examples
//!
//! ```
//! use fieldrules_validator::Validator;
//! use serde_json::json;
//!
//! let validator = Validator::builder()
//!     .value("age", json!("15"))
//!     .value("dob", json!("02/20/2020"))
//!     .rules("age", ["Required", "Min:18"])
//!     .rules("dob", ["Date:MM/dd/yyyy"])
//!     .build()
//!     .unwrap();
//!
//! assert!(validator.fails());
//! assert_eq!(validator.first("age"), "The age must be at least 18");
//! assert_eq!(validator.valid_fields(), vec!["dob"]);
//! ```

use std::cell::OnceCell;

use indexmap::IndexMap;
use serde_json::Value;

use crate::config::ValidatorConfig;
use crate::error::ConfigurationError;
use crate::message_bag::{FieldMessages, MessageBag};
use crate::registry::{RuleRegistry, RuleSpec};
use crate::rule::{Rule, RuleContext};

// ============================================================================
// RUN STATE
// ============================================================================

/// One resolved entry of a field's chain.
#[derive(Debug)]
struct ChainLink {
    /// Name as written in the chain; also the message key suffix.
    name: String,
    rule: Box<dyn Rule>,
}

/// Snapshot produced by the single validation run.
#[derive(Debug, Default)]
struct Report {
    errors: MessageBag,
    passed: IndexMap<String, Value>,
    failed: bool,
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Validates field values against per-field rule chains.
///
/// The lazy run state lives in a [`OnceCell`], so a `Validator` is not
/// `Sync`; build one per thread.
///
/// ```compile_fail
/// fn assert_sync<T: Sync>() {}
/// assert_sync::<fieldrules_validator::Validator>();
/// ```
#[derive(Debug)]
pub struct Validator {
    values: IndexMap<String, Value>,
    chains: IndexMap<String, Vec<ChainLink>>,
    messages: IndexMap<String, String>,
    config: ValidatorConfig,
    report: OnceCell<Report>,
}

impl Validator {
    /// Builds a validator with the built-in rules and default configuration.
    ///
    /// `messages` are keyed `"field.Rule"`.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigurationError`] met while resolving the rule
    /// chains, or [`ConfigurationError::InvalidArgument`] for an empty field
    /// name.
    pub fn new<V, R, M>(values: V, rules: R, messages: M) -> Result<Self, ConfigurationError>
    where
        V: IntoIterator<Item = (String, Value)>,
        R: IntoIterator<Item = (String, Vec<String>)>,
        M: IntoIterator<Item = (String, String)>,
    {
        Self::builder()
            .values(values)
            .chains(rules)
            .messages(messages)
            .build()
    }

    /// Starts a [`ValidatorBuilder`].
    #[must_use]
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::default()
    }

    fn report(&self) -> &Report {
        self.report.get_or_init(|| self.run())
    }

    fn run(&self) -> Report {
        let span = tracing::debug_span!("validate", fields = self.values.len());
        let _enter = span.enter();

        let mut report = Report::default();

        for (field, value) in &self.values {
            let Some(chain) = self.chains.get(field) else {
                tracing::trace!(field = %field, "no rule chain, skipped");
                continue;
            };

            let mut field_failed = false;
            for link in chain {
                let key = format!("{field}.{}", link.name);
                let ctx = RuleContext::new(field, value)
                    .with_message(self.messages.get(&key).map(String::as_str));
                let outcome = link.rule.validate(&ctx);

                if outcome.valid {
                    tracing::trace!(field = %field, rule = %link.name, "rule passed");
                    continue;
                }

                tracing::debug!(
                    field = %field,
                    rule = %link.name,
                    message = %outcome.message,
                    "rule failed"
                );
                field_failed = true;
                let stop = outcome.stops_field();
                report
                    .errors
                    .add(field.as_str(), link.name.as_str(), outcome.message);
                if stop {
                    break;
                }
            }

            if field_failed {
                report.failed = true;
            } else {
                report.passed.insert(field.clone(), value.clone());
            }
        }

        tracing::debug!(
            failed = report.failed,
            invalid = report.errors.keys().count(),
            passed = report.passed.len(),
            "validation finished"
        );
        report
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Returns true if any rule of any field failed.
    #[must_use]
    pub fn fails(&self) -> bool {
        self.report().failed
    }

    /// Failure messages of the run.
    #[must_use]
    pub fn errors(&self) -> &MessageBag {
        &self.report().errors
    }

    /// Values of the fields whose whole chain passed, in input order.
    #[must_use]
    pub fn validate(&self) -> &IndexMap<String, Value> {
        &self.report().passed
    }

    /// Fields with at least one failure message.
    #[must_use]
    pub fn invalid_fields(&self) -> Vec<&str> {
        self.report().errors.keys().collect()
    }

    /// Supplied fields that have a rule chain and no failure message.
    #[must_use]
    pub fn valid_fields(&self) -> Vec<&str> {
        let errors = &self.report().errors;
        self.values
            .keys()
            .filter(|field| self.chains.contains_key(*field) && !errors.has(field))
            .map(String::as_str)
            .collect()
    }

    /// First failure message of `field`, or `""` if it has none.
    #[must_use]
    pub fn first(&self, field: &str) -> &str {
        self.report().errors.first(field).unwrap_or_default()
    }

    /// All failure messages of `field`, keyed by rule.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldMessages> {
        self.report().errors.get(field)
    }

    /// Returns true if a value was supplied for `field`.
    #[must_use]
    pub fn has(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    /// Names of all supplied fields, in input order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Returns true once the chains have been evaluated.
    #[must_use]
    pub fn has_run(&self) -> bool {
        self.report.get().is_some()
    }

    /// Configuration the chains were resolved with.
    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builder for [`Validator`].
#[derive(Debug, Default)]
pub struct ValidatorBuilder {
    values: IndexMap<String, Value>,
    rules: IndexMap<String, Vec<String>>,
    messages: IndexMap<String, String>,
    config: ValidatorConfig,
    registry: Option<RuleRegistry>,
}

impl ValidatorBuilder {
    /// Adds or replaces one field value.
    #[must_use = "builder methods must be chained or built"]
    pub fn value(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(field.into(), value.into());
        self
    }

    /// Adds or replaces many field values.
    #[must_use = "builder methods must be chained or built"]
    pub fn values<K, V>(mut self, values: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.values
            .extend(values.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Sets the rule chain of one field.
    #[must_use = "builder methods must be chained or built"]
    pub fn rules<S: Into<String>>(
        mut self,
        field: impl Into<String>,
        chain: impl IntoIterator<Item = S>,
    ) -> Self {
        self.rules
            .insert(field.into(), chain.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the rule chains of many fields.
    #[must_use = "builder methods must be chained or built"]
    pub fn chains<K, C, S>(mut self, chains: impl IntoIterator<Item = (K, C)>) -> Self
    where
        K: Into<String>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for (field, chain) in chains {
            self = self.rules(field, chain);
        }
        self
    }

    /// Sets the message template for a `"field.Rule"` key.
    #[must_use = "builder methods must be chained or built"]
    pub fn message(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.messages.insert(key.into(), template.into());
        self
    }

    /// Sets many message templates.
    #[must_use = "builder methods must be chained or built"]
    pub fn messages<K, T>(mut self, messages: impl IntoIterator<Item = (K, T)>) -> Self
    where
        K: Into<String>,
        T: Into<String>,
    {
        self.messages
            .extend(messages.into_iter().map(|(k, t)| (k.into(), t.into())));
        self
    }

    /// Sets the configuration used to resolve chains.
    #[must_use = "builder methods must be chained or built"]
    pub fn config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Resolves rule names against `registry` instead of the built-in one.
    #[must_use = "builder methods must be chained or built"]
    pub fn registry(mut self, registry: RuleRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Resolves every rule chain and builds the validator.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidArgument`] for an empty field
    /// name, or the first error raised while resolving a rule.
    pub fn build(self) -> Result<Validator, ConfigurationError> {
        let registry = self.registry.unwrap_or_default();

        if self.values.contains_key("") || self.rules.contains_key("") {
            return Err(ConfigurationError::InvalidArgument {
                argument: "field".to_owned(),
                reason: "field name must not be empty".to_owned(),
            });
        }

        for key in self.messages.keys() {
            if !key.contains('.') {
                tracing::warn!(
                    key = %key,
                    "message key is not of the form `field.Rule`, it will never match"
                );
            }
        }

        let mut chains = IndexMap::with_capacity(self.rules.len());
        for (field, tokens) in self.rules {
            let mut chain = Vec::with_capacity(tokens.len());
            for token in &tokens {
                let spec = RuleSpec::parse(token);
                let rule = registry.resolve(&spec, &self.config).inspect_err(|err| {
                    tracing::warn!(
                        field = %field,
                        rule = %token,
                        error = %err,
                        "rule resolution failed"
                    );
                })?;
                chain.push(ChainLink {
                    name: spec.name,
                    rule,
                });
            }
            chains.insert(field, chain);
        }

        tracing::debug!(
            fields = self.values.len(),
            chains = chains.len(),
            "validator built"
        );

        Ok(Validator {
            values: self.values,
            chains,
            messages: self.messages,
            config: self.config,
            report: OnceCell::new(),
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
