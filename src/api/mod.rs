//! REST API layer: route handlers, DTOs, and router composition.
//!
//! All resource endpoints are mounted under `/api/v1`.

pub mod dto;
pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// OpenAPI document covering every endpoint the service exposes.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "autoshop-api",
        description = "CRUD backend for an auto-repair shop: customers, mechanics, and service tickets."
    ),
    paths(
        handlers::customer::create_customer,
        handlers::customer::list_customers,
        handlers::customer::get_customer,
        handlers::customer::update_customer,
        handlers::customer::delete_customer,
        handlers::mechanic::create_mechanic,
        handlers::mechanic::list_mechanics,
        handlers::mechanic::get_mechanic,
        handlers::mechanic::update_mechanic,
        handlers::mechanic::delete_mechanic,
        handlers::ticket::create_ticket,
        handlers::ticket::list_tickets,
        handlers::ticket::get_ticket,
        handlers::ticket::update_ticket,
        handlers::ticket::delete_ticket,
        handlers::ticket::assign_mechanic,
        handlers::ticket::remove_mechanic,
        handlers::system::health_handler,
    ),
    components(schemas(
        dto::CreateCustomerRequest,
        dto::UpdateCustomerRequest,
        dto::CustomerDto,
        dto::CreateMechanicRequest,
        dto::UpdateMechanicRequest,
        dto::MechanicDto,
        dto::CreateServiceTicketRequest,
        dto::UpdateServiceTicketRequest,
        dto::ServiceTicketDto,
        dto::MessageResponse,
        crate::error::ErrorResponse,
        crate::error::ErrorBody,
    )),
    tags(
        (name = "Customers", description = "Customer management"),
        (name = "Mechanics", description = "Mechanic management"),
        (name = "ServiceTickets", description = "Service tickets and mechanic assignment"),
        (name = "System", description = "Health and diagnostics"),
    )
)]
pub struct ApiDoc;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .nest("/api/v1", handlers::routes())
        .merge(handlers::system::routes())
}
