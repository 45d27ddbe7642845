//! Configuration errors.
//!
//! A [`ConfigurationError`] means the *caller's setup* is wrong: a rule name
//! that does not exist, a missing or malformed rule parameter, a bad message
//! key. Values that simply fail a rule are not errors; they are reported
//! through the [`MessageBag`](crate::MessageBag).

/// Error type for rule-chain and message-bag configuration mistakes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigurationError {
    /// No rule is registered under this name.
    #[error("unknown rule `{rule}`")]
    UnknownRule { rule: String },

    /// A rule that needs a parameter was given none.
    #[error("rule `{rule}` needs {expected} parameter(s), none given")]
    MissingParameter { rule: String, expected: usize },

    /// A rule was given more parameters than it accepts.
    #[error("rule `{rule}` accepts {expected} parameter(s), {actual} given")]
    UnexpectedParameters {
        rule: String,
        expected: usize,
        actual: usize,
    },

    /// A parameter is present but unusable.
    #[error("invalid parameter `{param}` for rule `{rule}`: {reason}")]
    InvalidParameter {
        rule: String,
        param: String,
        reason: String,
    },

    /// An argument violates a construction precondition.
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument { argument: String, reason: String },

    /// A message key is not of the form `field.Rule`.
    #[error("malformed message key `{key}`: expected `<field>.<Rule>`")]
    MalformedMessageKey { key: String },

    /// A positional message lookup went past the recorded messages.
    #[error("message index {index} out of range for `{field}` ({len} message(s))")]
    IndexOutOfRange {
        field: String,
        index: usize,
        len: usize,
    },
}

impl ConfigurationError {
    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownRule { .. } => "RULE_UNKNOWN",
            Self::MissingParameter { .. } => "RULE_MISSING_PARAM",
            Self::UnexpectedParameters { .. } => "RULE_UNEXPECTED_PARAMS",
            Self::InvalidParameter { .. } => "RULE_INVALID_PARAM",
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
            Self::MalformedMessageKey { .. } => "MESSAGE_KEY_MALFORMED",
            Self::IndexOutOfRange { .. } => "MESSAGE_INDEX_OUT_OF_RANGE",
        }
    }

    /// Checks a rule's parameter count against the exact number it needs.
    pub(crate) fn check_arity(
        rule: &str,
        params: &[String],
        expected: usize,
    ) -> Result<(), Self> {
        match params.len() {
            0 if expected > 0 => Err(Self::MissingParameter {
                rule: rule.to_owned(),
                expected,
            }),
            n if n != expected => Err(Self::UnexpectedParameters {
                rule: rule.to_owned(),
                expected,
                actual: n,
            }),
            _ => Ok(()),
        }
    }
}
