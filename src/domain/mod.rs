//! Domain layer: entity types and payload validation.
//!
//! This module contains the three persisted entity types (customers,
//! mechanics, service tickets), their create and partial-update shapes,
//! and the field validation rules every mutating operation applies
//! before touching the database.

pub mod customer;
pub mod mechanic;
pub mod ticket;
pub mod validate;

pub use customer::{Customer, CustomerPatch, NewCustomer};
pub use mechanic::{Mechanic, MechanicPatch, NewMechanic};
pub use ticket::{NewServiceTicket, ServiceTicket, ServiceTicketPatch};
pub use validate::ValidationErrors;
