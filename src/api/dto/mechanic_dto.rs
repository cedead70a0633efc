//! Mechanic DTOs for create, update, and read operations.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Mechanic;

/// Request body for `POST /mechanics`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMechanicRequest {
    /// Mechanic name (required, max 100 chars).
    #[serde(default)]
    pub name: Option<String>,
    /// Contact email (required, max 200 chars, unique).
    #[serde(default)]
    pub email: Option<String>,
    /// Phone number (optional, max 25 chars).
    #[serde(default)]
    pub phone: Option<String>,
    /// Annual salary (required, non-negative).
    #[serde(default)]
    pub salary: Option<f64>,
}

/// Request body for `PUT /mechanics/{id}`. Absent fields are left
/// untouched.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateMechanicRequest {
    /// Replacement name.
    #[serde(default)]
    pub name: Option<String>,
    /// Replacement email.
    #[serde(default)]
    pub email: Option<String>,
    /// Replacement phone.
    #[serde(default)]
    pub phone: Option<String>,
    /// Replacement salary.
    #[serde(default)]
    pub salary: Option<f64>,
}

/// A mechanic as returned by the API.
#[derive(Debug, Serialize, ToSchema)]
pub struct MechanicDto {
    /// Generated identity.
    pub id: i64,
    /// Mechanic name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Phone number, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Annual salary.
    pub salary: f64,
}

impl From<Mechanic> for MechanicDto {
    fn from(mechanic: Mechanic) -> Self {
        Self {
            id: mechanic.id,
            name: mechanic.name,
            email: mechanic.email,
            phone: mechanic.phone,
            salary: mechanic.salary,
        }
    }
}
