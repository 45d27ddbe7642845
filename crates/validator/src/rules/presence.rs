//! Presence rules: `Required` and `Nullable`.
//!
//! Both rules distinguish an *absent* value (JSON `null`) from a *present but
//! blank* one (a value whose string form is empty).

use crate::rule::ChainFlow;

crate::rule! {
    /// The value must be present and its string form non-empty.
    ///
    /// A failure stops the rest of the field's chain: there is nothing left
    /// to check on a missing value.
    pub Required as "Required";
    message: "The :key field is required";
    on_fail: ChainFlow::StopField;
    check(ctx) { !ctx.value.is_null() && !ctx.text().is_empty() }
}

crate::rule! {
    /// The value may be absent, but not blank.
    ///
    /// `null` passes, a blank value fails, and any other value passes this
    /// rule and is left to the rest of the chain. Validity does not
    /// default to `false` here; under that default every non-blank value
    /// would fail.
    pub Nullable as "Nullable";
    message: "The :key field can be null";
    check(ctx) { ctx.value.is_null() || !ctx.text().is_empty() }
}
