//! Built-in rules
//!
//! | Name       | Parameters       | Passes when                                   |
//! |------------|------------------|-----------------------------------------------|
//! | `Required` | none             | value is non-null and its string form non-empty |
//! | `Nullable` | none             | value is null, or non-blank                  |
//! | `Boolean`  | none             | value reads as `0/1/true/false/on/off`        |
//! | `Numeric`  | none             | value is a finite number                      |
//! | `Min`      | `min`            | value is numeric and `>= min`                 |
//! | `Date`     | `pattern`        | value is a real date written in `pattern`     |
//!
//! All of them are registered in [`RuleRegistry::builtin`](crate::RuleRegistry::builtin).

pub mod boolean;
pub mod date;
pub mod numeric;
pub mod presence;

pub use boolean::Boolean;
pub use date::{Date, DatePattern};
pub use numeric::{Min, Numeric};
pub use presence::{Nullable, Required};
