//! Mechanic entity and its validated create/update shapes.

use super::validate::{
    EMAIL_MAX_CHARS, NAME_MAX_CHARS, PHONE_MAX_CHARS, ValidationErrors, optional_text,
    require_text,
};

/// A mechanic row as stored in the `mechanics` table.
#[derive(Debug, Clone, PartialEq)]
pub struct Mechanic {
    /// Database-generated identity.
    pub id: i64,
    /// Mechanic name, at most 100 characters.
    pub name: String,
    /// Unique contact email, at most 200 characters.
    pub email: String,
    /// Optional phone number, at most 25 characters.
    pub phone: Option<String>,
    /// Annual salary.
    pub salary: f64,
}

/// Validated payload for creating a mechanic.
#[derive(Debug, Clone)]
pub struct NewMechanic {
    /// Mechanic name.
    pub name: String,
    /// Contact email; uniqueness is enforced by the database.
    pub email: String,
    /// Optional phone number.
    pub phone: Option<String>,
    /// Annual salary; must be finite and non-negative.
    pub salary: f64,
}

impl NewMechanic {
    /// Validates the full create shape. `salary` is `None` when the
    /// request omitted it, which is reported as a missing field.
    ///
    /// # Errors
    ///
    /// Returns a field-to-message map listing every missing, empty,
    /// oversized, or out-of-range field.
    pub fn new(
        name: String,
        email: String,
        phone: Option<String>,
        salary: Option<f64>,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        require_text(&mut errors, "name", &name, NAME_MAX_CHARS);
        require_text(&mut errors, "email", &email, EMAIL_MAX_CHARS);
        optional_text(&mut errors, "phone", phone.as_deref(), PHONE_MAX_CHARS);
        match salary {
            Some(salary) => validate_salary(&mut errors, salary),
            None => errors.push("salary", "is required"),
        }
        errors.into_result(Self {
            name,
            email,
            phone,
            salary: salary.unwrap_or_default(),
        })
    }
}

/// Validated partial update for a mechanic.
#[derive(Debug, Clone, Default)]
pub struct MechanicPatch {
    /// Replacement name, when provided.
    pub name: Option<String>,
    /// Replacement email, when provided.
    pub email: Option<String>,
    /// Replacement phone, when provided.
    pub phone: Option<String>,
    /// Replacement salary, when provided.
    pub salary: Option<f64>,
}

impl MechanicPatch {
    /// Validates the partial shape.
    ///
    /// # Errors
    ///
    /// Returns a field-to-message map for any provided field that
    /// violates the create-time rules.
    pub fn new(
        name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        salary: Option<f64>,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(name) = name.as_deref() {
            require_text(&mut errors, "name", name, NAME_MAX_CHARS);
        }
        if let Some(email) = email.as_deref() {
            require_text(&mut errors, "email", email, EMAIL_MAX_CHARS);
        }
        optional_text(&mut errors, "phone", phone.as_deref(), PHONE_MAX_CHARS);
        if let Some(salary) = salary {
            validate_salary(&mut errors, salary);
        }
        errors.into_result(Self {
            name,
            email,
            phone,
            salary,
        })
    }
}

fn validate_salary(errors: &mut ValidationErrors, salary: f64) {
    if !salary.is_finite() || salary < 0.0 {
        errors.push("salary", "must be a non-negative number");
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn new_mechanic_accepts_valid_payload() {
        let result = NewMechanic::new(
            "Bo".to_string(),
            "bo@shop.com".to_string(),
            None,
            Some(52_000.0),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn new_mechanic_requires_salary() {
        let result = NewMechanic::new("Bo".to_string(), "bo@shop.com".to_string(), None, None);
        let Err(errors) = result else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.as_map().get("salary").map(String::as_str), Some("is required"));
    }

    #[test]
    fn new_mechanic_rejects_negative_salary() {
        let result =
            NewMechanic::new("Bo".to_string(), "bo@shop.com".to_string(), None, Some(-1.0));
        let Err(errors) = result else {
            panic!("expected validation failure");
        };
        assert_eq!(
            errors.as_map().get("salary").map(String::as_str),
            Some("must be a non-negative number")
        );
    }

    #[test]
    fn new_mechanic_rejects_non_finite_salary() {
        let result = NewMechanic::new(
            "Bo".to_string(),
            "bo@shop.com".to_string(),
            None,
            Some(f64::INFINITY),
        );
        assert!(result.is_err());
    }

    #[test]
    fn patch_validates_only_provided_fields() {
        let result = MechanicPatch::new(None, None, None, Some(60_000.0));
        let Ok(patch) = result else {
            panic!("expected valid patch");
        };
        assert_eq!(patch.salary, Some(60_000.0));
        assert!(patch.name.is_none());

        let bad = MechanicPatch::new(Some(String::new()), None, None, Some(-5.0));
        let Err(errors) = bad else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.as_map().len(), 2);
    }
}
