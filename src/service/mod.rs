//! Service layer: operation orchestration.
//!
//! [`ShopService`] coordinates the CRUD operations, turning storage
//! absences into typed not-found errors and logging every mutation.

pub mod shop_service;

pub use shop_service::ShopService;
