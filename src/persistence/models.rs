//! Database row models and their conversions into domain entities.

use chrono::NaiveDate;
use sqlx::FromRow;

use crate::domain::{Customer, Mechanic, ServiceTicket};

/// A row from the `customers` table.
#[derive(Debug, Clone, FromRow)]
pub struct CustomerRow {
    /// Identity column.
    pub id: i64,
    /// Customer name.
    pub name: String,
    /// Unique email.
    pub email: String,
    /// Optional phone number.
    pub phone: Option<String>,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
        }
    }
}

/// A row from the `mechanics` table.
#[derive(Debug, Clone, FromRow)]
pub struct MechanicRow {
    /// Identity column.
    pub id: i64,
    /// Mechanic name.
    pub name: String,
    /// Unique email.
    pub email: String,
    /// Optional phone number.
    pub phone: Option<String>,
    /// Annual salary.
    pub salary: f64,
}

impl From<MechanicRow> for Mechanic {
    fn from(row: MechanicRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            salary: row.salary,
        }
    }
}

/// A row from the `service_tickets` table, without its assignments.
#[derive(Debug, Clone, FromRow)]
pub struct TicketRow {
    /// Identity column.
    pub id: i64,
    /// Vehicle identification number.
    pub vin: String,
    /// Scheduled service date.
    pub service_date: NaiveDate,
    /// Optional work description.
    pub service_desc: Option<String>,
    /// Owning customer.
    pub customer_id: i64,
}

impl TicketRow {
    /// Combines the row with its assignment set from the join table.
    #[must_use]
    pub fn into_ticket(self, mechanic_ids: Vec<i64>) -> ServiceTicket {
        ServiceTicket {
            id: self.id,
            vin: self.vin,
            service_date: self.service_date,
            service_desc: self.service_desc,
            customer_id: self.customer_id,
            mechanic_ids,
        }
    }
}
