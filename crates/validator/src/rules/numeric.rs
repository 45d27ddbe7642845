//! Numeric rules: `Numeric` and `Min`.

use crate::error::ConfigurationError;
use crate::rule::{ChainFlow, Rule, RuleContext, RuleOutcome};
use crate::value::{numeric_form, parse_number};

crate::rule! {
    /// The value must be a number: a JSON number, or a string holding a
    /// finite decimal number.
    pub Numeric as "Numeric";
    message: "The :key must be a number";
    check(ctx) { numeric_form(ctx.value).is_some() }
}

// ============================================================================
// MIN
// ============================================================================

/// The value must be numeric and at least the configured minimum.
///
/// Built from exactly one numeric parameter (`Min:18`). The `:min`
/// placeholder renders the parameter exactly as it was written.
///
/// # Examples
///
/// ```
/// use fieldrules_validator::rule::{Rule, RuleContext};
/// use fieldrules_validator::rules::Min;
/// use serde_json::json;
///
/// let min = Min::from_params(&["18".to_owned()]).unwrap();
///
/// let adult = json!("21");
/// assert!(min.validate(&RuleContext::new("age", &adult)).valid);
///
/// let minor = json!(15);
/// let outcome = min.validate(&RuleContext::new("age", &minor));
/// assert_eq!(outcome.message, "The age must be at least 18");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Min {
    min: f64,
    raw: String,
}

impl Min {
    /// Name this rule is registered under.
    pub const NAME: &'static str = "Min";

    /// Creates a minimum rule from a number.
    #[must_use]
    pub fn new(min: f64) -> Self {
        Self {
            min,
            raw: min.to_string(),
        }
    }

    /// Builds the rule from its textual parameters.
    pub fn from_params(params: &[String]) -> Result<Self, ConfigurationError> {
        ConfigurationError::check_arity(Self::NAME, params, 1)?;
        let raw = &params[0];

        // The parameter goes through the same check as values do.
        let min = parse_number(raw).ok_or_else(|| ConfigurationError::InvalidParameter {
            rule: Self::NAME.to_owned(),
            param: raw.clone(),
            reason: "not a number".to_owned(),
        })?;

        Ok(Self {
            min,
            raw: raw.trim().to_owned(),
        })
    }

    /// The configured minimum.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }
}

impl Rule for Min {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn default_message(&self) -> &str {
        "The :key must be at least :min"
    }

    fn validate(&self, ctx: &RuleContext<'_>) -> RuleOutcome {
        match numeric_form(ctx.value) {
            Some(actual) if actual >= self.min => RuleOutcome::pass(),
            _ => ctx.fail(self, &[(":min", self.raw.as_str())], ChainFlow::Continue),
        }
    }
}
