//! The rule abstraction.
//!
//! A [`Rule`] checks one field value and answers with a [`RuleOutcome`]:
//! whether the value is valid, the rendered failure message, and a
//! [`ChainFlow`] directive telling the validator whether the remaining rules
//! of the field's chain should still run.
//!
//! Rule parameters (the `18` in `Min:18`) are parsed once, when the chain is
//! resolved, and live in the rule struct. The per-field inputs travel in a
//! [`RuleContext`].
//!
//! # Examples
//!
//! ```
//! use fieldrules_validator::rule::{ChainFlow, Rule, RuleContext};
//! use fieldrules_validator::rules::Required;
//! use serde_json::json;
//!
//! let value = json!("");
//! let ctx = RuleContext::new("name", &value);
//! let outcome = Required.validate(&ctx);
//!
//! assert!(!outcome.valid);
//! assert_eq!(outcome.message, "The name field is required");
//! assert_eq!(outcome.flow, ChainFlow::StopField);
//! ```

use std::borrow::Cow;
use std::fmt;

use serde_json::Value;

use crate::value::string_form;

// ============================================================================
// CHAIN FLOW
// ============================================================================

/// What the validator does with the rest of a field's chain after a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChainFlow {
    /// Keep evaluating the next rule of this field.
    #[default]
    Continue,
    /// Skip the remaining rules of this field; other fields are unaffected.
    StopField,
}

// ============================================================================
// OUTCOME
// ============================================================================

/// Result of evaluating one rule against one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    /// Whether the value satisfied the rule.
    pub valid: bool,
    /// Rendered failure message; empty when `valid` is true.
    pub message: String,
    /// Chain directive, only consulted when `valid` is false.
    pub flow: ChainFlow,
}

impl RuleOutcome {
    /// A passing outcome.
    #[must_use]
    pub fn pass() -> Self {
        Self {
            valid: true,
            message: String::new(),
            flow: ChainFlow::Continue,
        }
    }

    /// A failing outcome carrying a rendered message.
    #[must_use]
    pub fn fail(message: impl Into<String>, flow: ChainFlow) -> Self {
        Self {
            valid: false,
            message: message.into(),
            flow,
        }
    }

    /// Returns true if this outcome stops the field's chain.
    #[must_use]
    pub fn stops_field(&self) -> bool {
        !self.valid && self.flow == ChainFlow::StopField
    }
}

// ============================================================================
// CONTEXT
// ============================================================================

/// Per-field inputs handed to [`Rule::validate`].
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// Field name, substituted for `:key`.
    pub key: &'a str,
    /// Field value under test, substituted for `:value`.
    pub value: &'a Value,
    /// Caller-supplied message template overriding the rule's default.
    pub message: Option<&'a str>,
}

impl<'a> RuleContext<'a> {
    /// Creates a context with no custom message.
    #[must_use]
    pub fn new(key: &'a str, value: &'a Value) -> Self {
        Self {
            key,
            value,
            message: None,
        }
    }

    /// Sets the custom message template.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: Option<&'a str>) -> Self {
        self.message = message;
        self
    }

    /// String form of the value under test.
    #[must_use]
    pub fn text(&self) -> Cow<'a, str> {
        string_form(self.value)
    }

    /// Builds a failing outcome for `rule`, rendering the custom template if
    /// one was supplied and the rule's default template otherwise.
    ///
    /// `:key` and `:value` are substituted first, then each of `extra` in
    /// order.
    #[must_use]
    pub fn fail<R>(&self, rule: &R, extra: &[(&str, &str)], flow: ChainFlow) -> RuleOutcome
    where
        R: Rule + ?Sized,
    {
        let template = self.message.unwrap_or_else(|| rule.default_message());
        RuleOutcome::fail(self.render(template, extra), flow)
    }

    /// Substitutes placeholders into a message template.
    #[must_use]
    pub fn render(&self, template: &str, extra: &[(&str, &str)]) -> String {
        let mut message = template
            .replace(":key", self.key)
            .replace(":value", &self.text());
        for (placeholder, replacement) in extra {
            message = message.replace(placeholder, replacement);
        }
        message
    }
}

// ============================================================================
// RULE TRAIT
// ============================================================================

/// A single named check applied to one field value.
///
/// Implementations are immutable: all parameters are fixed at construction,
/// so one instance can be evaluated against any number of fields.
pub trait Rule: fmt::Debug + Send + Sync {
    /// The name the rule is registered and reported under (`"Min"`).
    fn name(&self) -> &str;

    /// Message template used when the caller supplied none.
    fn default_message(&self) -> &str;

    /// Evaluates the rule against `ctx.value`.
    fn validate(&self, ctx: &RuleContext<'_>) -> RuleOutcome;
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug)]
    struct AlwaysFails;

    impl Rule for AlwaysFails {
        fn name(&self) -> &str {
            "AlwaysFails"
        }

        fn default_message(&self) -> &str {
            "The :key (:value) failed :limit"
        }

        fn validate(&self, ctx: &RuleContext<'_>) -> RuleOutcome {
            ctx.fail(self, &[(":limit", "10")], ChainFlow::Continue)
        }
    }

    #[test]
    fn renders_default_template() {
        let value = json!(7);
        let ctx = RuleContext::new("count", &value);
        let outcome = AlwaysFails.validate(&ctx);

        assert!(!outcome.valid);
        assert_eq!(outcome.message, "The count (7) failed 10");
        assert!(!outcome.stops_field());
    }

    #[test]
    fn custom_template_wins() {
        let value = json!("x");
        let ctx = RuleContext::new("count", &value).with_message(Some("Bad :key: :value"));
        let outcome = AlwaysFails.validate(&ctx);

        assert_eq!(outcome.message, "Bad count: x");
    }

    #[test]
    fn works_as_trait_object() {
        let rule: Box<dyn Rule> = Box::new(AlwaysFails);
        assert_eq!(rule.name(), "AlwaysFails");

        let value = json!(null);
        let outcome = rule.validate(&RuleContext::new("n", &value));
        assert_eq!(outcome.message, "The n () failed 10");
    }

    #[test]
    fn pass_has_no_message() {
        let outcome = RuleOutcome::pass();
        assert!(outcome.valid);
        assert!(outcome.message.is_empty());
        assert!(!outcome.stops_field());
    }

    #[test]
    fn stop_field_only_counts_on_failure() {
        let outcome = RuleOutcome::fail("nope", ChainFlow::StopField);
        assert!(outcome.stops_field());
    }
}
