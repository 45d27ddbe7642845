//! Prelude module for convenient imports.
//!
//! Provides a single `use fieldrules_validator::prelude::*;` import that
//! brings in the validator, its builder, the rule trait and every built-in
//! rule.
//!
//! # Examples
//!
//! ```rust
//! use fieldrules_validator::prelude::*;
//! use serde_json::json;
//!
//! let value = json!("yes");
//! let outcome = Boolean.validate(&RuleContext::new("agree", &value));
//! assert!(!outcome.valid);
//! ```

// ============================================================================
// ENGINE: Validator, registry, messages
// ============================================================================

pub use crate::config::ValidatorConfig;
pub use crate::error::ConfigurationError;
pub use crate::message_bag::MessageBag;
pub use crate::registry::{RuleRegistry, RuleSpec};
pub use crate::validator::{Validator, ValidatorBuilder};

// ============================================================================
// RULES: Trait and built-ins
// ============================================================================

pub use crate::rule::{ChainFlow, Rule, RuleContext, RuleOutcome};
pub use crate::rules::{Boolean, Date, DatePattern, Min, Nullable, Numeric, Required};
