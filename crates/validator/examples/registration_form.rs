//! Validating a registration form with fieldrules-validator

use fieldrules_validator::prelude::*;
use serde_json::json;

fn main() -> Result<(), ConfigurationError> {
    let validator = Validator::builder()
        .value("name", json!("Ada"))
        .value("age", json!("15"))
        .value("dob", json!("02/30/2020"))
        .value("newsletter", json!("yes"))
        .rules("name", ["Required"])
        .rules("age", ["Required", "Numeric", "Min:18"])
        .rules("dob", ["Required", "Date:MM/dd/yyyy"])
        .rules("newsletter", ["Nullable", "Boolean"])
        .message("age.Min", "You must be :min or older to register")
        .build()?;

    if validator.fails() {
        for field in validator.invalid_fields() {
            println!("✗ {field}: {}", validator.first(field));
        }
    }

    for (field, value) in validator.validate() {
        println!("✓ {field} = {value}");
    }

    println!("\nall messages: {}", validator.errors());
    Ok(())
}
