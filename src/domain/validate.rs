//! Field validation primitives shared by all entity shapes.
//!
//! Validation accumulates every failure into a [`ValidationErrors`]
//! field-to-message map instead of stopping at the first one, so a
//! single 400 response lists everything wrong with the payload.

use std::collections::BTreeMap;
use std::fmt;

/// Maximum length of `name` fields, in characters.
pub const NAME_MAX_CHARS: usize = 100;
/// Maximum length of `email` fields, in characters.
pub const EMAIL_MAX_CHARS: usize = 200;
/// Maximum length of `phone` fields, in characters.
pub const PHONE_MAX_CHARS: usize = 25;

/// Accumulated field-to-message validation failures.
///
/// Ordered by field name so response bodies are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Records a failure message for `field`. The first message per
    /// field wins; later ones for the same field are dropped.
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_insert_with(|| message.into());
    }

    /// Returns `true` when no failure has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the underlying field-to-message map.
    #[must_use]
    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.0
    }

    /// Returns `Ok(value)` when empty, otherwise `Err(self)`.
    ///
    /// # Errors
    ///
    /// Returns the accumulated failures when any field was rejected.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field} {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Validates a required text field: must be non-empty and at most
/// `max_chars` characters.
pub fn require_text(errors: &mut ValidationErrors, field: &str, value: &str, max_chars: usize) {
    if value.trim().is_empty() {
        errors.push(field, "is required");
    } else if value.chars().count() > max_chars {
        errors.push(field, format!("must be at most {max_chars} characters"));
    }
}

/// Validates an optional text field: length-checked only when present.
pub fn optional_text(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<&str>,
    max_chars: usize,
) {
    if let Some(value) = value
        && value.chars().count() > max_chars
    {
        errors.push(field, format!("must be at most {max_chars} characters"));
    }
}

/// Validates an entity id reference: database identities start at 1.
pub fn require_id(errors: &mut ValidationErrors, field: &str, value: i64) {
    if value < 1 {
        errors.push(field, "must be a positive id");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_text_rejects_empty_and_whitespace() {
        let mut errors = ValidationErrors::new();
        require_text(&mut errors, "name", "", NAME_MAX_CHARS);
        require_text(&mut errors, "vin", "   ", NAME_MAX_CHARS);
        assert_eq!(errors.as_map().len(), 2);
        assert_eq!(errors.as_map().get("name").map(String::as_str), Some("is required"));
        assert_eq!(errors.as_map().get("vin").map(String::as_str), Some("is required"));
    }

    #[test]
    fn require_text_rejects_oversized() {
        let mut errors = ValidationErrors::new();
        let long = "x".repeat(NAME_MAX_CHARS + 1);
        require_text(&mut errors, "name", &long, NAME_MAX_CHARS);
        assert_eq!(
            errors.as_map().get("name").map(String::as_str),
            Some("must be at most 100 characters")
        );
    }

    #[test]
    fn require_text_counts_characters_not_bytes() {
        let mut errors = ValidationErrors::new();
        // 100 two-byte characters fit in a VARCHAR(100).
        let exactly_max = "é".repeat(NAME_MAX_CHARS);
        require_text(&mut errors, "name", &exactly_max, NAME_MAX_CHARS);
        assert!(errors.is_empty());
    }

    #[test]
    fn optional_text_skips_absent_values() {
        let mut errors = ValidationErrors::new();
        optional_text(&mut errors, "phone", None, PHONE_MAX_CHARS);
        assert!(errors.is_empty());

        optional_text(&mut errors, "phone", Some("555-0000"), PHONE_MAX_CHARS);
        assert!(errors.is_empty());

        let long = "5".repeat(PHONE_MAX_CHARS + 1);
        optional_text(&mut errors, "phone", Some(&long), PHONE_MAX_CHARS);
        assert_eq!(errors.as_map().len(), 1);
    }

    #[test]
    fn require_id_rejects_non_positive() {
        let mut errors = ValidationErrors::new();
        require_id(&mut errors, "customer_id", 0);
        require_id(&mut errors, "mechanic_id", -3);
        assert_eq!(errors.as_map().len(), 2);

        let mut ok = ValidationErrors::new();
        require_id(&mut ok, "customer_id", 1);
        assert!(ok.is_empty());
    }

    #[test]
    fn first_message_per_field_wins() {
        let mut errors = ValidationErrors::new();
        errors.push("email", "is required");
        errors.push("email", "must be at most 200 characters");
        assert_eq!(errors.as_map().get("email").map(String::as_str), Some("is required"));
    }

    #[test]
    fn display_joins_fields_in_order() {
        let mut errors = ValidationErrors::new();
        errors.push("name", "is required");
        errors.push("email", "is required");
        assert_eq!(errors.to_string(), "email is required; name is required");
    }

    #[test]
    fn into_result_round_trips() {
        let empty = ValidationErrors::new();
        assert_eq!(empty.into_result(7), Ok(7));

        let mut errors = ValidationErrors::new();
        errors.push("name", "is required");
        assert!(errors.into_result(7).is_err());
    }
}
