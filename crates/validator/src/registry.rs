//! Rule name resolution.
//!
//! A rule chain is written as tokens like `"Required"` or `"Date:MM/dd/yyyy"`.
//! [`RuleSpec::parse`] splits a token into a name and parameters, and
//! [`RuleRegistry::resolve`] turns the parsed token into a constructed
//! [`Rule`] using a table of constructor functions.
//!
//! # Examples
//!
//! ```
//! use fieldrules_validator::{RuleRegistry, RuleSpec, ValidatorConfig};
//!
//! let registry = RuleRegistry::builtin();
//! let spec = RuleSpec::parse("Min:18");
//! let rule = registry.resolve(&spec, &ValidatorConfig::default()).unwrap();
//! assert_eq!(rule.name(), "Min");
//!
//! let unknown = registry.resolve(&RuleSpec::parse("Email"), &ValidatorConfig::default());
//! assert!(unknown.is_err());
//! ```

use std::fmt;

use indexmap::IndexMap;

use crate::config::ValidatorConfig;
use crate::error::ConfigurationError;
use crate::rule::Rule;
use crate::rules::{Boolean, Date, Min, Nullable, Numeric, Required};

// ============================================================================
// RULE SPEC
// ============================================================================

/// A parsed rule token: name plus textual parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleSpec {
    /// Rule name, matched case-sensitively.
    pub name: String,
    /// Parameters in the order written.
    pub params: Vec<String>,
}

impl RuleSpec {
    /// Parses `"Name"` or `"Name:p1,p2,..."`.
    ///
    /// Only the first colon separates the name, so parameters may contain
    /// colons. An empty parameter section (`"Name:"`) yields no parameters.
    #[must_use]
    pub fn parse(token: &str) -> Self {
        match token.split_once(':') {
            Some((name, params)) => Self {
                name: name.to_owned(),
                params: if params.is_empty() {
                    Vec::new()
                } else {
                    params.split(',').map(str::to_owned).collect()
                },
            },
            None => Self {
                name: token.to_owned(),
                params: Vec::new(),
            },
        }
    }
}

impl fmt::Display for RuleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.params.is_empty() {
            write!(f, ":{}", self.params.join(","))?;
        }
        Ok(())
    }
}

// ============================================================================
// REGISTRY
// ============================================================================

/// Constructor stored in a [`RuleRegistry`].
pub type RuleFactory =
    fn(&[String], &ValidatorConfig) -> Result<Box<dyn Rule>, ConfigurationError>;

/// Table mapping rule names to constructors.
#[derive(Clone)]
pub struct RuleRegistry {
    factories: IndexMap<String, RuleFactory>,
}

impl RuleRegistry {
    /// Creates a registry with no rules.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            factories: IndexMap::new(),
        }
    }

    /// Creates a registry holding every built-in rule.
    #[must_use]
    pub fn builtin() -> Self {
        Self::empty()
            .with(Required::NAME, unit::<Required>)
            .with(Nullable::NAME, unit::<Nullable>)
            .with(Boolean::NAME, unit::<Boolean>)
            .with(Numeric::NAME, unit::<Numeric>)
            .with(Min::NAME, |params, _| Ok(Box::new(Min::from_params(params)?)))
            .with(Date::NAME, |params, config| {
                Ok(Box::new(Date::from_params(params, config)?))
            })
    }

    /// Registers a rule, replacing any previous rule of the same name.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, name: impl Into<String>, factory: RuleFactory) -> Self {
        self.register(name, factory);
        self
    }

    /// Registers a rule in place, replacing any previous rule of the same name.
    pub fn register(&mut self, name: impl Into<String>, factory: RuleFactory) -> &mut Self {
        let name = name.into();
        if self.factories.insert(name.clone(), factory).is_some() {
            tracing::debug!(rule = %name, "replaced registered rule");
        }
        self
    }

    /// Returns true if a rule is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered rule names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Constructs the rule described by `spec`.
    pub fn resolve(
        &self,
        spec: &RuleSpec,
        config: &ValidatorConfig,
    ) -> Result<Box<dyn Rule>, ConfigurationError> {
        let factory =
            self.factories
                .get(&spec.name)
                .ok_or_else(|| ConfigurationError::UnknownRule {
                    rule: spec.name.clone(),
                })?;
        factory(&spec.params, config)
    }

    /// Parses and constructs a rule from its token.
    pub fn resolve_token(
        &self,
        token: &str,
        config: &ValidatorConfig,
    ) -> Result<Box<dyn Rule>, ConfigurationError> {
        self.resolve(&RuleSpec::parse(token), config)
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Constructor for parameterless rules.
fn unit<R>(
    params: &[String],
    _config: &ValidatorConfig,
) -> Result<Box<dyn Rule>, ConfigurationError>
where
    R: Rule + Default + 'static,
{
    let rule = R::default();
    ConfigurationError::check_arity(rule.name(), params, 0)?;
    Ok(Box::new(rule))
}

// ============================================================================
// TESTS
// ============================================================================
