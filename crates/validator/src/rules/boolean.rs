//! Boolean rule

/// String forms accepted as booleans (compared lowercase).
pub const BOOLEAN_LITERALS: [&str; 6] = ["0", "1", "true", "false", "on", "off"];

crate::rule! {
    /// The value must read as a boolean: `0`, `1`, `true`, `false`, `on` or
    /// `off`, case-insensitively.
    pub Boolean as "Boolean";
    message: "The :key must either be true or false";
    check(ctx) {
        let text = ctx.text().to_lowercase();
        BOOLEAN_LITERALS.contains(&text.as_str())
    }
}
