//! # fieldrules-validator
//!
//! Rule-chain validation of named field values, with failure messages
//! collected into a [`MessageBag`].
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldrules_validator::prelude::*;
//! use serde_json::json;
//!
//! let validator = Validator::builder()
//!     .value("dob", json!("02/30/2020"))
//!     .value("agree", json!("on"))
//!     .rules("dob", ["Required", "Date:MM/dd/yyyy"])
//!     .rules("agree", ["Boolean"])
//!     .build()?;
//!
//! assert!(validator.fails());
//! assert_eq!(validator.invalid_fields(), vec!["dob"]);
//! assert_eq!(validator.valid_fields(), vec!["agree"]);
//! # Ok::<(), ConfigurationError>(())
//! ```
//!
//! ## Rule Chains
//!
//! Each field gets an ordered chain of rule tokens, `"Name"` or
//! `"Name:p1,p2"`. Tokens are resolved through a [`RuleRegistry`] when the
//! validator is built; unknown names and bad parameters are
//! [`ConfigurationError`]s, never validation failures.
//!
//! ## Creating Rules
//!
//! Use the [`rule!`] macro for parameterless rules, or implement
//! [`Rule`](rule::Rule) manually and register a constructor with
//! [`RuleRegistry::register`].
//!
//! ## Built-in Rules
//!
//! - **Presence**: [`Required`](rules::Required), [`Nullable`](rules::Nullable)
//! - **Type**: [`Boolean`](rules::Boolean), [`Numeric`](rules::Numeric)
//! - **Bounds**: [`Min`](rules::Min)
//! - **Dates**: [`Date`](rules::Date)

mod macros;

pub mod config;
pub mod error;
pub mod message_bag;
pub mod prelude;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod validator;
pub mod value;

pub use crate::config::ValidatorConfig;
pub use crate::error::ConfigurationError;
pub use crate::message_bag::{FieldMessages, MessageBag};
pub use crate::registry::{RuleFactory, RuleRegistry, RuleSpec};
pub use crate::rules::DatePattern;
pub use crate::validator::{Validator, ValidatorBuilder};
