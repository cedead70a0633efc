//! # autoshop-api
//!
//! REST API backend for an auto-repair shop. Tracks customers,
//! mechanics, and service tickets over a PostgreSQL schema with a
//! many-to-many assignment between tickets and mechanics.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── ShopService (service/)
//!     │
//!     ├── Domain types + validation (domain/)
//!     │
//!     └── PgStore → PostgreSQL (persistence/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
