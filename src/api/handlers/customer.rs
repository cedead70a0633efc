//! Customer CRUD handlers: create, list, get, update, delete.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{CreateCustomerRequest, CustomerDto, MessageResponse, UpdateCustomerRequest};
use crate::app_state::AppState;
use crate::domain::{CustomerPatch, NewCustomer};
use crate::error::{ErrorResponse, ShopError};

/// `POST /customers` — Create a new customer.
///
/// # Errors
///
/// Returns [`ShopError`] on invalid payload or duplicate email.
#[utoipa::path(
    post,
    path = "/api/v1/customers",
    tag = "Customers",
    summary = "Create a customer",
    description = "Validates the payload and inserts a customer row. Email must be unique.",
    request_body = CreateCustomerRequest,
    responses(
        (status = 201, description = "Customer created", body = CustomerDto),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 409, description = "Duplicate email", body = ErrorResponse),
    )
)]
pub async fn create_customer(
    State(state): State<AppState>,
    Json(req): Json<CreateCustomerRequest>,
) -> Result<impl IntoResponse, ShopError> {
    let new = NewCustomer::new(
        req.name.unwrap_or_default(),
        req.email.unwrap_or_default(),
        req.phone,
    )?;
    let customer = state.shop.create_customer(new).await?;
    Ok((StatusCode::CREATED, Json(CustomerDto::from(customer))))
}

/// `GET /customers` — List all customers.
///
/// # Errors
///
/// Returns [`ShopError`] on internal failures.
#[utoipa::path(
    get,
    path = "/api/v1/customers",
    tag = "Customers",
    summary = "List customers",
    description = "Returns every customer, ordered by id.",
    responses(
        (status = 200, description = "Customer list", body = Vec<CustomerDto>),
    )
)]
pub async fn list_customers(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ShopError> {
    let customers = state.shop.list_customers().await?;
    let data: Vec<CustomerDto> = customers.into_iter().map(CustomerDto::from).collect();
    Ok(Json(data))
}

/// `GET /customers/:id` — Get one customer.
///
/// # Errors
///
/// Returns [`ShopError::CustomerNotFound`] if the customer does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/customers/{id}",
    tag = "Customers",
    summary = "Get a customer",
    params(
        ("id" = i64, Path, description = "Customer id"),
    ),
    responses(
        (status = 200, description = "Customer details", body = CustomerDto),
        (status = 404, description = "Customer not found", body = ErrorResponse),
    )
)]
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ShopError> {
    let customer = state.shop.get_customer(id).await?;
    Ok(Json(CustomerDto::from(customer)))
}

/// `PUT /customers/:id` — Partially update a customer.
///
/// Absent fields are left untouched; provided fields are validated
/// with the same rules as on create.
///
/// # Errors
///
/// Returns [`ShopError`] on invalid payload, missing customer, or
/// duplicate email.
#[utoipa::path(
    put,
    path = "/api/v1/customers/{id}",
    tag = "Customers",
    summary = "Update a customer",
    params(
        ("id" = i64, Path, description = "Customer id"),
    ),
    request_body = UpdateCustomerRequest,
    responses(
        (status = 200, description = "Customer updated", body = CustomerDto),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Customer not found", body = ErrorResponse),
        (status = 409, description = "Duplicate email", body = ErrorResponse),
    )
)]
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateCustomerRequest>,
) -> Result<impl IntoResponse, ShopError> {
    let patch = CustomerPatch::new(req.name, req.email, req.phone)?;
    let customer = state.shop.update_customer(id, patch).await?;
    Ok(Json(CustomerDto::from(customer)))
}

/// `DELETE /customers/:id` — Delete a customer.
///
/// # Errors
///
/// Returns [`ShopError::CustomerNotFound`] if the customer does not
/// exist and [`ShopError::Constraint`] if tickets still reference it.
#[utoipa::path(
    delete,
    path = "/api/v1/customers/{id}",
    tag = "Customers",
    summary = "Delete a customer",
    description = "Deletes a customer. Customers that still own service tickets cannot be deleted.",
    params(
        ("id" = i64, Path, description = "Customer id"),
    ),
    responses(
        (status = 200, description = "Customer deleted", body = MessageResponse),
        (status = 404, description = "Customer not found", body = ErrorResponse),
        (status = 409, description = "Customer still owns tickets", body = ErrorResponse),
    )
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ShopError> {
    state.shop.delete_customer(id).await?;
    Ok(Json(MessageResponse::deleted("customer", id)))
}

/// Customer management routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/customers", post(create_customer).get(list_customers))
        .route(
            "/customers/{id}",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
}
