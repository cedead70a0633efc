//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::ShopService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Shop service for all business logic.
    pub shop: Arc<ShopService>,
}
