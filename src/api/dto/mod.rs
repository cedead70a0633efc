//! Data Transfer Objects for REST request/response serialization.
//!
//! Create requests model every field as optional so that missing
//! required fields surface as a structured validation response listing
//! each one, rather than a bare deserialization failure.

pub mod common_dto;
pub mod customer_dto;
pub mod mechanic_dto;
pub mod ticket_dto;

pub use common_dto::*;
pub use customer_dto::*;
pub use mechanic_dto::*;
pub use ticket_dto::*;
