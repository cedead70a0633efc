//! Service error types with HTTP status code mapping.
//!
//! [`ShopError`] is the central error type for the service. Each variant
//! maps to a specific HTTP status code and structured JSON error response.

use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::validate::ValidationErrors;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 1001,
///     "message": "invalid request",
///     "details": { "email": "is required" }
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see code ranges on [`ShopError`]).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Field-to-message mapping, populated for validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<BTreeMap<String, String>>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category             | HTTP Status                  |
/// |-----------|----------------------|------------------------------|
/// | 1000–1999 | Validation           | 400 Bad Request              |
/// | 2000–2999 | Not Found / Conflict | 404 Not Found / 409 Conflict |
/// | 3000–3999 | Server               | 500 Internal Server Error    |
#[derive(Debug, thiserror::Error)]
pub enum ShopError {
    /// Request payload failed shape validation.
    #[error("invalid request: {0}")]
    Validation(ValidationErrors),

    /// Customer with the given id was not found.
    #[error("customer not found: {0}")]
    CustomerNotFound(i64),

    /// Mechanic with the given id was not found.
    #[error("mechanic not found: {0}")]
    MechanicNotFound(i64),

    /// Service ticket with the given id was not found.
    #[error("service ticket not found: {0}")]
    TicketNotFound(i64),

    /// A uniqueness or referential-integrity rule rejected the write.
    #[error("constraint violation: {0}")]
    Constraint(String),

    /// Persistence layer failure.
    #[error("persistence error: {0}")]
    Persistence(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ShopError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::Validation(_) => 1001,
            Self::CustomerNotFound(_) => 2001,
            Self::MechanicNotFound(_) => 2002,
            Self::TicketNotFound(_) => 2003,
            Self::Constraint(_) => 2101,
            Self::Persistence(_) => 3001,
            Self::Internal(_) => 3000,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::CustomerNotFound(_) | Self::MechanicNotFound(_) | Self::TicketNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            Self::Constraint(_) => StatusCode::CONFLICT,
            Self::Persistence(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for ShopError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

impl IntoResponse for ShopError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();
        let details = match &self {
            Self::Validation(errors) => Some(errors.as_map().clone()),
            _ => None,
        };
        let body = ErrorResponse {
            error: ErrorBody {
                code,
                message: self.to_string(),
                details,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400_with_details() {
        let mut errors = ValidationErrors::new();
        errors.push("email", "is required");
        let err = ShopError::Validation(errors);

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), 1001);

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_variants_map_to_404() {
        assert_eq!(
            ShopError::CustomerNotFound(1).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ShopError::MechanicNotFound(2).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ShopError::TicketNotFound(3).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ShopError::CustomerNotFound(1).error_code(), 2001);
        assert_eq!(ShopError::MechanicNotFound(2).error_code(), 2002);
        assert_eq!(ShopError::TicketNotFound(3).error_code(), 2003);
    }

    #[test]
    fn constraint_maps_to_409() {
        let err = ShopError::Constraint("duplicate email".to_string());
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
        assert_eq!(err.error_code(), 2101);
    }

    #[test]
    fn server_errors_map_to_500() {
        let persistence = ShopError::Persistence("pool exhausted".to_string());
        let internal = ShopError::Internal("boom".to_string());
        assert_eq!(persistence.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(persistence.error_code(), 3001);
        assert_eq!(internal.error_code(), 3000);
    }

    #[test]
    fn error_body_serializes_details_map() {
        let mut errors = ValidationErrors::new();
        errors.push("name", "is required");
        errors.push("email", "must be at most 200 characters");
        let body = ErrorResponse {
            error: ErrorBody {
                code: 1001,
                message: "invalid request".to_string(),
                details: Some(errors.as_map().clone()),
            },
        };
        let json = serde_json::to_value(&body).ok();
        let Some(json) = json else {
            panic!("serialization failed");
        };
        assert_eq!(json.pointer("/error/code").and_then(|v| v.as_u64()), Some(1001));
        assert_eq!(
            json.pointer("/error/details/name").and_then(|v| v.as_str()),
            Some("is required")
        );
        assert_eq!(
            json.pointer("/error/details/email").and_then(|v| v.as_str()),
            Some("must be at most 200 characters")
        );
    }

    #[test]
    fn details_omitted_when_absent() {
        let body = ErrorResponse {
            error: ErrorBody {
                code: 2001,
                message: "customer not found: 7".to_string(),
                details: None,
            },
        };
        let json = serde_json::to_value(&body).ok();
        let Some(json) = json else {
            panic!("serialization failed");
        };
        assert!(json.pointer("/error/details").is_none());
    }
}
