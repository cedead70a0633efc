//! Service ticket DTOs for create, update, and read operations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ServiceTicket;

/// Request body for `POST /service-tickets`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateServiceTicketRequest {
    /// Vehicle identification number (required, max 100 chars).
    #[serde(default)]
    pub vin: Option<String>,
    /// Scheduled service date, `YYYY-MM-DD` (required).
    #[serde(default)]
    pub service_date: Option<NaiveDate>,
    /// Work description (optional, max 300 chars).
    #[serde(default)]
    pub service_desc: Option<String>,
    /// Owning customer id (required).
    #[serde(default)]
    pub customer_id: Option<i64>,
    /// Mechanics to assign at creation; duplicates collapse.
    #[serde(default)]
    pub mechanic_ids: Vec<i64>,
}

/// Request body for `PUT /service-tickets/{id}`. Absent fields are left
/// untouched; a provided `mechanic_ids` list replaces the whole
/// assignment set.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateServiceTicketRequest {
    /// Replacement VIN.
    #[serde(default)]
    pub vin: Option<String>,
    /// Replacement service date.
    #[serde(default)]
    pub service_date: Option<NaiveDate>,
    /// Replacement description.
    #[serde(default)]
    pub service_desc: Option<String>,
    /// Moves the ticket to another customer.
    #[serde(default)]
    pub customer_id: Option<i64>,
    /// Replacement assignment set.
    #[serde(default)]
    pub mechanic_ids: Option<Vec<i64>>,
}

/// A service ticket as returned by the API.
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceTicketDto {
    /// Generated identity.
    pub id: i64,
    /// Vehicle identification number.
    pub vin: String,
    /// Scheduled service date.
    pub service_date: NaiveDate,
    /// Work description, when given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_desc: Option<String>,
    /// Owning customer.
    pub customer_id: i64,
    /// Assigned mechanics, ordered by id.
    pub mechanic_ids: Vec<i64>,
}

impl From<ServiceTicket> for ServiceTicketDto {
    fn from(ticket: ServiceTicket) -> Self {
        Self {
            id: ticket.id,
            vin: ticket.vin,
            service_date: ticket.service_date,
            service_desc: ticket.service_desc,
            customer_id: ticket.customer_id,
            mechanic_ids: ticket.mechanic_ids,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn create_request_parses_iso_date() {
        let req: Result<CreateServiceTicketRequest, _> = serde_json::from_str(
            r#"{"vin":"VIN-1","service_date":"2026-08-01","customer_id":1,"mechanic_ids":[2,3]}"#,
        );
        let Ok(req) = req else {
            panic!("deserialization failed");
        };
        assert_eq!(req.vin.as_deref(), Some("VIN-1"));
        assert_eq!(
            req.service_date.map(|d| d.to_string()),
            Some("2026-08-01".to_string())
        );
        assert_eq!(req.customer_id, Some(1));
        assert_eq!(req.mechanic_ids, vec![2, 3]);
    }

    #[test]
    fn update_request_distinguishes_absent_from_empty_assignments() {
        let absent: Result<UpdateServiceTicketRequest, _> = serde_json::from_str("{}");
        let Ok(absent) = absent else {
            panic!("deserialization failed");
        };
        assert!(absent.mechanic_ids.is_none());

        let cleared: Result<UpdateServiceTicketRequest, _> =
            serde_json::from_str(r#"{"mechanic_ids":[]}"#);
        let Ok(cleared) = cleared else {
            panic!("deserialization failed");
        };
        assert_eq!(cleared.mechanic_ids, Some(vec![]));
    }

    #[test]
    fn dto_serializes_date_as_iso() {
        let Ok(date) = "2026-08-01".parse::<NaiveDate>() else {
            panic!("valid date literal");
        };
        let dto = ServiceTicketDto::from(ServiceTicket {
            id: 1,
            vin: "VIN-1".to_string(),
            service_date: date,
            service_desc: None,
            customer_id: 2,
            mechanic_ids: vec![3],
        });
        let json = serde_json::to_value(&dto).ok();
        let Some(json) = json else {
            panic!("serialization failed");
        };
        assert_eq!(
            json.pointer("/service_date").and_then(|v| v.as_str()),
            Some("2026-08-01")
        );
        assert!(json.pointer("/service_desc").is_none());
    }
}
