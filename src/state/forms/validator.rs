//! Per-step field validation

use super::field::{FieldConstraint, FieldSpec};
use super::schema::StepSpec;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Validation errors keyed by field name
pub type FieldErrors = BTreeMap<String, String>;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email pattern")
});

/// Check one value against its field spec.
///
/// Whitespace-only values count as missing; lengths are counted in
/// characters of the trimmed value.
pub fn validate_field(field: &FieldSpec, value: &str) -> Option<&'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Some(field.required_message);
    }

    let valid = match field.constraint {
        FieldConstraint::Email => EMAIL_PATTERN.is_match(value),
        FieldConstraint::MinLength(min) => value.chars().count() >= min,
    };

    if valid {
        None
    } else {
        Some(field.invalid_message)
    }
}

/// Validate only the fields declared on `step`
pub fn validate_step(step: &StepSpec, values: &BTreeMap<String, String>) -> FieldErrors {
    step.fields
        .iter()
        .filter_map(|field| {
            let value = values.get(field.name).map(String::as_str).unwrap_or("");
            validate_field(field, value).map(|msg| (field.name.to_string(), msg.to_string()))
        })
        .collect()
}
