//! Validator configuration.

use serde::{Deserialize, Serialize};

use crate::rules::DatePattern;

/// Environment variable overriding [`ValidatorConfig::canonical_date_pattern`].
pub const DATE_PATTERN_ENV: &str = "FIELDRULES_DATE_PATTERN";

/// Settings shared by the rule registry and the validator.
///
/// Passed explicitly at construction; nothing in the engine reads global
/// state.
///
/// # Examples
///
/// ```
/// use fieldrules_validator::{DatePattern, ValidatorConfig};
///
/// let config = ValidatorConfig::default();
/// assert_eq!(config.canonical_date_pattern, DatePattern::MonthDayYearSlash);
///
/// let config = ValidatorConfig::default()
///     .with_canonical_date_pattern(DatePattern::DayMonthYearDash);
/// assert_eq!(config.canonical_date_pattern.as_str(), "dd-MM-yyyy");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Layout the `Date` rule re-orders a value into before strict parsing.
    pub canonical_date_pattern: DatePattern,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            canonical_date_pattern: DatePattern::MonthDayYearSlash,
        }
    }
}

impl ValidatorConfig {
    /// Create configuration from environment variables.
    ///
    /// Unset or unrecognised values fall back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var(DATE_PATTERN_ENV) {
            match raw.parse::<DatePattern>() {
                Ok(pattern) => config.canonical_date_pattern = pattern,
                Err(err) => {
                    tracing::warn!(value = %raw, error = %err, "ignoring {DATE_PATTERN_ENV}");
                }
            }
        }

        config
    }

    /// Sets the canonical date pattern.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_canonical_date_pattern(mut self, pattern: DatePattern) -> Self {
        self.canonical_date_pattern = pattern;
        self
    }
}
