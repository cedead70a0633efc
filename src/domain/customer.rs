//! Customer entity and its validated create/update shapes.

use super::validate::{
    EMAIL_MAX_CHARS, NAME_MAX_CHARS, PHONE_MAX_CHARS, ValidationErrors, optional_text,
    require_text,
};

/// A customer row as stored in the `customers` table.
///
/// `id` is assigned by the database at insert and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    /// Database-generated identity.
    pub id: i64,
    /// Customer name, at most 100 characters.
    pub name: String,
    /// Unique contact email, at most 200 characters.
    pub email: String,
    /// Optional phone number, at most 25 characters.
    pub phone: Option<String>,
}

/// Validated payload for creating a customer.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    /// Customer name.
    pub name: String,
    /// Contact email; uniqueness is enforced by the database.
    pub email: String,
    /// Optional phone number.
    pub phone: Option<String>,
}

impl NewCustomer {
    /// Validates the full create shape.
    ///
    /// # Errors
    ///
    /// Returns a field-to-message map listing every missing, empty, or
    /// oversized field.
    pub fn new(
        name: String,
        email: String,
        phone: Option<String>,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        require_text(&mut errors, "name", &name, NAME_MAX_CHARS);
        require_text(&mut errors, "email", &email, EMAIL_MAX_CHARS);
        optional_text(&mut errors, "phone", phone.as_deref(), PHONE_MAX_CHARS);
        errors.into_result(Self { name, email, phone })
    }
}

/// Validated partial update for a customer.
///
/// Every field is optional; absent fields leave the stored value
/// untouched. Provided fields obey the same rules as on create.
#[derive(Debug, Clone, Default)]
pub struct CustomerPatch {
    /// Replacement name, when provided.
    pub name: Option<String>,
    /// Replacement email, when provided.
    pub email: Option<String>,
    /// Replacement phone, when provided. An explicitly provided empty
    /// string is applied as-is.
    pub phone: Option<String>,
}

impl CustomerPatch {
    /// Validates the partial shape.
    ///
    /// # Errors
    ///
    /// Returns a field-to-message map for any provided field that is
    /// empty (required fields) or oversized.
    pub fn new(
        name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(name) = name.as_deref() {
            require_text(&mut errors, "name", name, NAME_MAX_CHARS);
        }
        if let Some(email) = email.as_deref() {
            require_text(&mut errors, "email", email, EMAIL_MAX_CHARS);
        }
        optional_text(&mut errors, "phone", phone.as_deref(), PHONE_MAX_CHARS);
        errors.into_result(Self { name, email, phone })
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn new_customer_accepts_valid_payload() {
        let result = NewCustomer::new(
            "Ann".to_string(),
            "ann@x.com".to_string(),
            Some("555-0000".to_string()),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn new_customer_lists_all_missing_fields() {
        let result = NewCustomer::new(String::new(), String::new(), None);
        let Err(errors) = result else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.as_map().get("name").map(String::as_str), Some("is required"));
        assert_eq!(errors.as_map().get("email").map(String::as_str), Some("is required"));
    }

    #[test]
    fn new_customer_rejects_oversized_email() {
        let email = format!("{}@x.com", "a".repeat(200));
        let result = NewCustomer::new("Ann".to_string(), email, None);
        let Err(errors) = result else {
            panic!("expected validation failure");
        };
        assert!(errors.as_map().contains_key("email"));
        assert!(!errors.as_map().contains_key("name"));
    }

    #[test]
    fn patch_allows_single_field() {
        let result = CustomerPatch::new(None, None, Some("555-1234".to_string()));
        let Ok(patch) = result else {
            panic!("expected valid patch");
        };
        assert!(patch.name.is_none());
        assert!(patch.email.is_none());
        assert_eq!(patch.phone.as_deref(), Some("555-1234"));
    }

    #[test]
    fn patch_rejects_empty_required_field() {
        let result = CustomerPatch::new(Some(String::new()), None, None);
        let Err(errors) = result else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.as_map().get("name").map(String::as_str), Some("is required"));
    }

    #[test]
    fn empty_patch_is_valid() {
        assert!(CustomerPatch::new(None, None, None).is_ok());
    }
}
