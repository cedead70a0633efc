//! Mechanic CRUD handlers: create, list, get, update, delete.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{CreateMechanicRequest, MechanicDto, MessageResponse, UpdateMechanicRequest};
use crate::app_state::AppState;
use crate::domain::{MechanicPatch, NewMechanic};
use crate::error::{ErrorResponse, ShopError};

/// `POST /mechanics` — Create a new mechanic.
///
/// # Errors
///
/// Returns [`ShopError`] on invalid payload or duplicate email.
#[utoipa::path(
    post,
    path = "/api/v1/mechanics",
    tag = "Mechanics",
    summary = "Create a mechanic",
    description = "Validates the payload and inserts a mechanic row. Email must be unique.",
    request_body = CreateMechanicRequest,
    responses(
        (status = 201, description = "Mechanic created", body = MechanicDto),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 409, description = "Duplicate email", body = ErrorResponse),
    )
)]
pub async fn create_mechanic(
    State(state): State<AppState>,
    Json(req): Json<CreateMechanicRequest>,
) -> Result<impl IntoResponse, ShopError> {
    let new = NewMechanic::new(
        req.name.unwrap_or_default(),
        req.email.unwrap_or_default(),
        req.phone,
        req.salary,
    )?;
    let mechanic = state.shop.create_mechanic(new).await?;
    Ok((StatusCode::CREATED, Json(MechanicDto::from(mechanic))))
}

/// `GET /mechanics` — List all mechanics.
///
/// # Errors
///
/// Returns [`ShopError`] on internal failures.
#[utoipa::path(
    get,
    path = "/api/v1/mechanics",
    tag = "Mechanics",
    summary = "List mechanics",
    description = "Returns every mechanic, ordered by id.",
    responses(
        (status = 200, description = "Mechanic list", body = Vec<MechanicDto>),
    )
)]
pub async fn list_mechanics(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ShopError> {
    let mechanics = state.shop.list_mechanics().await?;
    let data: Vec<MechanicDto> = mechanics.into_iter().map(MechanicDto::from).collect();
    Ok(Json(data))
}

/// `GET /mechanics/:id` — Get one mechanic.
///
/// # Errors
///
/// Returns [`ShopError::MechanicNotFound`] if the mechanic does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/mechanics/{id}",
    tag = "Mechanics",
    summary = "Get a mechanic",
    params(
        ("id" = i64, Path, description = "Mechanic id"),
    ),
    responses(
        (status = 200, description = "Mechanic details", body = MechanicDto),
        (status = 404, description = "Mechanic not found", body = ErrorResponse),
    )
)]
pub async fn get_mechanic(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ShopError> {
    let mechanic = state.shop.get_mechanic(id).await?;
    Ok(Json(MechanicDto::from(mechanic)))
}

/// `PUT /mechanics/:id` — Partially update a mechanic.
///
/// # Errors
///
/// Returns [`ShopError`] on invalid payload, missing mechanic, or
/// duplicate email.
#[utoipa::path(
    put,
    path = "/api/v1/mechanics/{id}",
    tag = "Mechanics",
    summary = "Update a mechanic",
    params(
        ("id" = i64, Path, description = "Mechanic id"),
    ),
    request_body = UpdateMechanicRequest,
    responses(
        (status = 200, description = "Mechanic updated", body = MechanicDto),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Mechanic not found", body = ErrorResponse),
        (status = 409, description = "Duplicate email", body = ErrorResponse),
    )
)]
pub async fn update_mechanic(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateMechanicRequest>,
) -> Result<impl IntoResponse, ShopError> {
    let patch = MechanicPatch::new(req.name, req.email, req.phone, req.salary)?;
    let mechanic = state.shop.update_mechanic(id, patch).await?;
    Ok(Json(MechanicDto::from(mechanic)))
}

/// `DELETE /mechanics/:id` — Delete a mechanic.
///
/// Removes the mechanic and its ticket assignments; the tickets
/// themselves are untouched.
///
/// # Errors
///
/// Returns [`ShopError::MechanicNotFound`] if the mechanic does not exist.
#[utoipa::path(
    delete,
    path = "/api/v1/mechanics/{id}",
    tag = "Mechanics",
    summary = "Delete a mechanic",
    params(
        ("id" = i64, Path, description = "Mechanic id"),
    ),
    responses(
        (status = 200, description = "Mechanic deleted", body = MessageResponse),
        (status = 404, description = "Mechanic not found", body = ErrorResponse),
    )
)]
pub async fn delete_mechanic(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ShopError> {
    state.shop.delete_mechanic(id).await?;
    Ok(Json(MessageResponse::deleted("mechanic", id)))
}

/// Mechanic management routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/mechanics", post(create_mechanic).get(list_mechanics))
        .route(
            "/mechanics/{id}",
            get(get_mechanic).put(update_mechanic).delete(delete_mechanic),
        )
}
