//! Persistence layer: PostgreSQL storage for the shop schema.
//!
//! Provides [`PgStore`], the relational access layer over
//! `sqlx::PgPool`. Uniqueness, nullability, and referential-integrity
//! rules live in the database schema (see `migrations/`); this module
//! translates their violations into the central error type.

pub mod models;
pub mod postgres;

pub use postgres::PgStore;
