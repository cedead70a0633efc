//! Customer DTOs for create, update, and read operations.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Customer;

/// Request body for `POST /customers`.
///
/// `name` and `email` are required by validation, not by
/// deserialization, so omissions are reported field-by-field.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCustomerRequest {
    /// Customer name (required, max 100 chars).
    #[serde(default)]
    pub name: Option<String>,
    /// Contact email (required, max 200 chars, unique).
    #[serde(default)]
    pub email: Option<String>,
    /// Phone number (optional, max 25 chars).
    #[serde(default)]
    pub phone: Option<String>,
}

/// Request body for `PUT /customers/{id}`. Absent fields are left
/// untouched.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCustomerRequest {
    /// Replacement name.
    #[serde(default)]
    pub name: Option<String>,
    /// Replacement email.
    #[serde(default)]
    pub email: Option<String>,
    /// Replacement phone.
    #[serde(default)]
    pub phone: Option<String>,
}

/// A customer as returned by the API.
#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerDto {
    /// Generated identity.
    pub id: i64,
    /// Customer name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Phone number, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl From<Customer> for CustomerDto {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            email: customer.email,
            phone: customer.phone,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn create_request_tolerates_missing_fields() {
        let req: Result<CreateCustomerRequest, _> = serde_json::from_str("{}");
        let Ok(req) = req else {
            panic!("deserialization failed");
        };
        assert!(req.name.is_none());
        assert!(req.email.is_none());
        assert!(req.phone.is_none());
    }

    #[test]
    fn dto_omits_null_phone() {
        let dto = CustomerDto::from(Customer {
            id: 1,
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            phone: None,
        });
        let json = serde_json::to_value(&dto).ok();
        let Some(json) = json else {
            panic!("serialization failed");
        };
        assert!(json.pointer("/phone").is_none());
        assert_eq!(json.pointer("/id").and_then(|v| v.as_i64()), Some(1));
    }
}
