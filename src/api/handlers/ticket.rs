//! Service ticket handlers: CRUD plus mechanic assignment.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};

use crate::api::dto::{
    CreateServiceTicketRequest, MessageResponse, ServiceTicketDto, UpdateServiceTicketRequest,
};
use crate::app_state::AppState;
use crate::domain::{NewServiceTicket, ServiceTicketPatch};
use crate::error::{ErrorResponse, ShopError};

/// `POST /service-tickets` — Create a new service ticket.
///
/// The referenced customer and every mechanic in `mechanic_ids` must
/// exist; the ticket and its assignments land in one transaction.
///
/// # Errors
///
/// Returns [`ShopError`] on invalid payload or dangling references.
#[utoipa::path(
    post,
    path = "/api/v1/service-tickets",
    tag = "ServiceTickets",
    summary = "Create a service ticket",
    request_body = CreateServiceTicketRequest,
    responses(
        (status = 201, description = "Ticket created", body = ServiceTicketDto),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Referenced customer or mechanic not found", body = ErrorResponse),
    )
)]
pub async fn create_ticket(
    State(state): State<AppState>,
    Json(req): Json<CreateServiceTicketRequest>,
) -> Result<impl IntoResponse, ShopError> {
    let new = NewServiceTicket::new(
        req.vin.unwrap_or_default(),
        req.service_date,
        req.service_desc,
        req.customer_id,
        req.mechanic_ids,
    )?;
    let ticket = state.shop.create_ticket(new).await?;
    Ok((StatusCode::CREATED, Json(ServiceTicketDto::from(ticket))))
}

/// `GET /service-tickets` — List all service tickets.
///
/// # Errors
///
/// Returns [`ShopError`] on internal failures.
#[utoipa::path(
    get,
    path = "/api/v1/service-tickets",
    tag = "ServiceTickets",
    summary = "List service tickets",
    description = "Returns every ticket with its assigned mechanics, ordered by id.",
    responses(
        (status = 200, description = "Ticket list", body = Vec<ServiceTicketDto>),
    )
)]
pub async fn list_tickets(State(state): State<AppState>) -> Result<impl IntoResponse, ShopError> {
    let tickets = state.shop.list_tickets().await?;
    let data: Vec<ServiceTicketDto> = tickets.into_iter().map(ServiceTicketDto::from).collect();
    Ok(Json(data))
}

/// `GET /service-tickets/:id` — Get one service ticket.
///
/// # Errors
///
/// Returns [`ShopError::TicketNotFound`] if the ticket does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/service-tickets/{id}",
    tag = "ServiceTickets",
    summary = "Get a service ticket",
    params(
        ("id" = i64, Path, description = "Ticket id"),
    ),
    responses(
        (status = 200, description = "Ticket details", body = ServiceTicketDto),
        (status = 404, description = "Ticket not found", body = ErrorResponse),
    )
)]
pub async fn get_ticket(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ShopError> {
    let ticket = state.shop.get_ticket(id).await?;
    Ok(Json(ServiceTicketDto::from(ticket)))
}

/// `PUT /service-tickets/:id` — Partially update a service ticket.
///
/// A provided `mechanic_ids` list replaces the whole assignment set.
///
/// # Errors
///
/// Returns [`ShopError`] on invalid payload, missing ticket, or
/// dangling references.
#[utoipa::path(
    put,
    path = "/api/v1/service-tickets/{id}",
    tag = "ServiceTickets",
    summary = "Update a service ticket",
    params(
        ("id" = i64, Path, description = "Ticket id"),
    ),
    request_body = UpdateServiceTicketRequest,
    responses(
        (status = 200, description = "Ticket updated", body = ServiceTicketDto),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Ticket, customer, or mechanic not found", body = ErrorResponse),
    )
)]
pub async fn update_ticket(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateServiceTicketRequest>,
) -> Result<impl IntoResponse, ShopError> {
    let patch = ServiceTicketPatch::new(
        req.vin,
        req.service_date,
        req.service_desc,
        req.customer_id,
        req.mechanic_ids,
    )?;
    let ticket = state.shop.update_ticket(id, patch).await?;
    Ok(Json(ServiceTicketDto::from(ticket)))
}

/// `DELETE /service-tickets/:id` — Delete a service ticket.
///
/// The ticket's mechanic assignments are removed with it.
///
/// # Errors
///
/// Returns [`ShopError::TicketNotFound`] if the ticket does not exist.
#[utoipa::path(
    delete,
    path = "/api/v1/service-tickets/{id}",
    tag = "ServiceTickets",
    summary = "Delete a service ticket",
    params(
        ("id" = i64, Path, description = "Ticket id"),
    ),
    responses(
        (status = 200, description = "Ticket deleted", body = MessageResponse),
        (status = 404, description = "Ticket not found", body = ErrorResponse),
    )
)]
pub async fn delete_ticket(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ShopError> {
    state.shop.delete_ticket(id).await?;
    Ok(Json(MessageResponse::deleted("service ticket", id)))
}

/// `PUT /service-tickets/:id/assign-mechanic/:mechanic_id` — Assign a
/// mechanic to a ticket.
///
/// Idempotent: assigning an already-assigned mechanic changes nothing.
///
/// # Errors
///
/// Returns [`ShopError::TicketNotFound`] or
/// [`ShopError::MechanicNotFound`] for dangling references.
#[utoipa::path(
    put,
    path = "/api/v1/service-tickets/{id}/assign-mechanic/{mechanic_id}",
    tag = "ServiceTickets",
    summary = "Assign a mechanic",
    params(
        ("id" = i64, Path, description = "Ticket id"),
        ("mechanic_id" = i64, Path, description = "Mechanic id"),
    ),
    responses(
        (status = 200, description = "Assignment recorded", body = ServiceTicketDto),
        (status = 404, description = "Ticket or mechanic not found", body = ErrorResponse),
    )
)]
pub async fn assign_mechanic(
    State(state): State<AppState>,
    Path((id, mechanic_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, ShopError> {
    let ticket = state.shop.assign_mechanic(id, mechanic_id).await?;
    Ok(Json(ServiceTicketDto::from(ticket)))
}

/// `PUT /service-tickets/:id/remove-mechanic/:mechanic_id` — Remove a
/// mechanic assignment from a ticket.
///
/// Removing a mechanic that is not assigned leaves the ticket
/// unchanged.
///
/// # Errors
///
/// Returns [`ShopError::TicketNotFound`] or
/// [`ShopError::MechanicNotFound`] for dangling references.
#[utoipa::path(
    put,
    path = "/api/v1/service-tickets/{id}/remove-mechanic/{mechanic_id}",
    tag = "ServiceTickets",
    summary = "Remove a mechanic assignment",
    params(
        ("id" = i64, Path, description = "Ticket id"),
        ("mechanic_id" = i64, Path, description = "Mechanic id"),
    ),
    responses(
        (status = 200, description = "Assignment removed", body = ServiceTicketDto),
        (status = 404, description = "Ticket or mechanic not found", body = ErrorResponse),
    )
)]
pub async fn remove_mechanic(
    State(state): State<AppState>,
    Path((id, mechanic_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, ShopError> {
    let ticket = state.shop.remove_mechanic(id, mechanic_id).await?;
    Ok(Json(ServiceTicketDto::from(ticket)))
}

/// Service ticket routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/service-tickets", post(create_ticket).get(list_tickets))
        .route(
            "/service-tickets/{id}",
            get(get_ticket).put(update_ticket).delete(delete_ticket),
        )
        .route(
            "/service-tickets/{id}/assign-mechanic/{mechanic_id}",
            put(assign_mechanic),
        )
        .route(
            "/service-tickets/{id}/remove-mechanic/{mechanic_id}",
            put(remove_mechanic),
        )
}
