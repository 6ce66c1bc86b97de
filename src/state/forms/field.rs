//! Form field definitions

/// Format constraint checked when a step is validated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldConstraint {
    /// Must look like an email address
    Email,
    /// Must contain at least this many characters
    MinLength(usize),
}

/// Static description of a single waitlist field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Payload key
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub is_multiline: bool,
    pub constraint: FieldConstraint,
    /// Shown when the field is left empty
    pub required_message: &'static str,
    /// Shown when the value fails its constraint
    pub invalid_message: &'static str,
}

impl FieldSpec {
    /// Create an email field
    pub const fn email(
        name: &'static str,
        label: &'static str,
        placeholder: &'static str,
        required_message: &'static str,
        invalid_message: &'static str,
    ) -> Self {
        Self {
            name,
            label,
            placeholder,
            is_multiline: false,
            constraint: FieldConstraint::Email,
            required_message,
            invalid_message,
        }
    }

    /// Create a text field with a minimum length.
    ///
    /// The same message is used for a missing and a too-short value.
    pub const fn min_length(
        name: &'static str,
        label: &'static str,
        placeholder: &'static str,
        min: usize,
        message: &'static str,
    ) -> Self {
        Self {
            name,
            label,
            placeholder,
            is_multiline: false,
            constraint: FieldConstraint::MinLength(min),
            required_message: message,
            invalid_message: message,
        }
    }

    /// Mark the field as a multi-line text area
    pub const fn multiline(self) -> Self {
        Self {
            is_multiline: true,
            ..self
        }
    }
}
