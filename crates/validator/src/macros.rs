//! Macros for declaring rules with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rule!`]: declare a parameterless rule (unit struct + `Rule` impl)
//!
//! # Examples
//!
//! ```rust
//! use fieldrules_validator::rule;
//! use fieldrules_validator::rule::{Rule, RuleContext};
//! use serde_json::json;
//!
//! rule! {
//!     /// The value must be upper case.
//!     pub Uppercase as "Uppercase";
//!     message: "The :key must be upper case";
//!     check(ctx) { ctx.text().chars().all(|c| !c.is_lowercase()) }
//! }
//!
//! let value = json!("abc");
//! let outcome = Uppercase.validate(&RuleContext::new("code", &value));
//! assert_eq!(outcome.message, "The code must be upper case");
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Declares a parameterless rule: unit struct definition and `Rule`
/// implementation.
///
/// `#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]` is always
/// applied. The `check` block evaluates to `bool`; the optional `on_fail`
/// line sets the [`ChainFlow`](crate::rule::ChainFlow) reported when the
/// check fails (defaults to `Continue`).
///
/// ```rust,ignore
/// rule! {
///     pub Required as "Required";
///     message: "The :key field is required";
///     on_fail: ChainFlow::StopField;
///     check(ctx) { !ctx.value.is_null() && !ctx.text().is_empty() }
/// }
/// ```
#[macro_export]
macro_rules! rule {
    (@flow) => {
        $crate::rule::ChainFlow::Continue
    };
    (@flow $flow:expr) => {
        $flow
    };

    (
        $(#[$meta:meta])*
        $vis:vis $name:ident as $rule_name:literal;
        message: $message:literal;
        $(on_fail: $flow:expr;)?
        check($ctx:ident) $check:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $name {
            /// Name this rule is registered under.
            pub const NAME: &'static str = $rule_name;
        }

        impl $crate::rule::Rule for $name {
            fn name(&self) -> &str {
                $rule_name
            }

            fn default_message(&self) -> &str {
                $message
            }

            fn validate(
                &self,
                $ctx: &$crate::rule::RuleContext<'_>,
            ) -> $crate::rule::RuleOutcome {
                let passed: bool = $check;
                if passed {
                    $crate::rule::RuleOutcome::pass()
                } else {
                    $ctx.fail(self, &[], $crate::rule!(@flow $($flow)?))
                }
            }
        }
    };
}
