//! Service ticket entity, its validated shapes, and mechanic assignment.

use chrono::NaiveDate;

use super::validate::{ValidationErrors, optional_text, require_id, require_text};

/// Maximum length of the `vin` field, in characters.
pub const VIN_MAX_CHARS: usize = 100;
/// Maximum length of the `service_desc` field, in characters.
pub const DESC_MAX_CHARS: usize = 300;

/// A service ticket row plus its mechanic assignments.
///
/// `mechanic_ids` is composed from the `service_mechanics` join table;
/// the set never contains duplicates (composite primary key).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceTicket {
    /// Database-generated identity.
    pub id: i64,
    /// Vehicle identification number, at most 100 characters.
    pub vin: String,
    /// Scheduled service date.
    pub service_date: NaiveDate,
    /// Optional work description, at most 300 characters.
    pub service_desc: Option<String>,
    /// Owning customer.
    pub customer_id: i64,
    /// Assigned mechanics, ordered by id.
    pub mechanic_ids: Vec<i64>,
}

/// Validated payload for creating a service ticket.
#[derive(Debug, Clone)]
pub struct NewServiceTicket {
    /// Vehicle identification number.
    pub vin: String,
    /// Scheduled service date.
    pub service_date: NaiveDate,
    /// Optional work description.
    pub service_desc: Option<String>,
    /// Owning customer; existence is verified at insert.
    pub customer_id: i64,
    /// Mechanics to assign, deduplicated and order-preserved.
    pub mechanic_ids: Vec<i64>,
}

impl NewServiceTicket {
    /// Validates the full create shape. `service_date` and
    /// `customer_id` are `None` when the request omitted them, which is
    /// reported as a missing field. Duplicate mechanic ids in the
    /// request collapse into one assignment.
    ///
    /// # Errors
    ///
    /// Returns a field-to-message map listing every missing, empty,
    /// oversized, or non-positive field.
    pub fn new(
        vin: String,
        service_date: Option<NaiveDate>,
        service_desc: Option<String>,
        customer_id: Option<i64>,
        mechanic_ids: Vec<i64>,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        require_text(&mut errors, "vin", &vin, VIN_MAX_CHARS);
        if service_date.is_none() {
            errors.push("service_date", "is required");
        }
        optional_text(&mut errors, "service_desc", service_desc.as_deref(), DESC_MAX_CHARS);
        match customer_id {
            Some(customer_id) => require_id(&mut errors, "customer_id", customer_id),
            None => errors.push("customer_id", "is required"),
        }
        for &id in &mechanic_ids {
            require_id(&mut errors, "mechanic_ids", id);
        }
        errors.into_result(Self {
            vin,
            service_date: service_date.unwrap_or_default(),
            service_desc,
            customer_id: customer_id.unwrap_or_default(),
            mechanic_ids: dedupe_ids(mechanic_ids),
        })
    }
}

/// Validated partial update for a service ticket.
///
/// A provided `mechanic_ids` list replaces the whole assignment set.
#[derive(Debug, Clone, Default)]
pub struct ServiceTicketPatch {
    /// Replacement VIN, when provided.
    pub vin: Option<String>,
    /// Replacement service date, when provided.
    pub service_date: Option<NaiveDate>,
    /// Replacement description, when provided.
    pub service_desc: Option<String>,
    /// Moves the ticket to another customer, when provided.
    pub customer_id: Option<i64>,
    /// Replacement assignment set, when provided.
    pub mechanic_ids: Option<Vec<i64>>,
}

impl ServiceTicketPatch {
    /// Validates the partial shape.
    ///
    /// # Errors
    ///
    /// Returns a field-to-message map for any provided field that
    /// violates the create-time rules.
    pub fn new(
        vin: Option<String>,
        service_date: Option<NaiveDate>,
        service_desc: Option<String>,
        customer_id: Option<i64>,
        mechanic_ids: Option<Vec<i64>>,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(vin) = vin.as_deref() {
            require_text(&mut errors, "vin", vin, VIN_MAX_CHARS);
        }
        optional_text(&mut errors, "service_desc", service_desc.as_deref(), DESC_MAX_CHARS);
        if let Some(customer_id) = customer_id {
            require_id(&mut errors, "customer_id", customer_id);
        }
        if let Some(ids) = &mechanic_ids {
            for &id in ids {
                require_id(&mut errors, "mechanic_ids", id);
            }
        }
        errors.into_result(Self {
            vin,
            service_date,
            service_desc,
            customer_id,
            mechanic_ids: mechanic_ids.map(dedupe_ids),
        })
    }
}

/// Removes duplicate ids while preserving first-seen order.
fn dedupe_ids(ids: Vec<i64>) -> Vec<i64> {
    let mut out = Vec::with_capacity(ids.len());
    for id in ids {
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        let Ok(date) = s.parse() else {
            panic!("valid date literal");
        };
        date
    }

    #[test]
    fn new_ticket_accepts_valid_payload() {
        let result = NewServiceTicket::new(
            "1HGBH41JXMN109186".to_string(),
            Some(date("2026-08-01")),
            Some("brake pads".to_string()),
            Some(1),
            vec![1, 2],
        );
        assert!(result.is_ok());
    }

    #[test]
    fn new_ticket_requires_vin_date_and_customer() {
        let result = NewServiceTicket::new(String::new(), None, None, None, vec![]);
        let Err(errors) = result else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.as_map().get("vin").map(String::as_str), Some("is required"));
        assert_eq!(
            errors.as_map().get("service_date").map(String::as_str),
            Some("is required")
        );
        assert_eq!(
            errors.as_map().get("customer_id").map(String::as_str),
            Some("is required")
        );
    }

    #[test]
    fn new_ticket_rejects_non_positive_customer_id() {
        let result =
            NewServiceTicket::new("VIN-1".to_string(), Some(date("2026-08-01")), None, Some(0), vec![]);
        let Err(errors) = result else {
            panic!("expected validation failure");
        };
        assert_eq!(
            errors.as_map().get("customer_id").map(String::as_str),
            Some("must be a positive id")
        );
    }

    #[test]
    fn new_ticket_rejects_oversized_description() {
        let result = NewServiceTicket::new(
            "VIN-1".to_string(),
            Some(date("2026-08-01")),
            Some("x".repeat(DESC_MAX_CHARS + 1)),
            Some(1),
            vec![],
        );
        let Err(errors) = result else {
            panic!("expected validation failure");
        };
        assert!(errors.as_map().contains_key("service_desc"));
    }

    #[test]
    fn new_ticket_dedupes_mechanic_ids() {
        let result = NewServiceTicket::new(
            "VIN-1".to_string(),
            Some(date("2026-08-01")),
            None,
            Some(1),
            vec![3, 1, 3, 2, 1],
        );
        let Ok(ticket) = result else {
            panic!("expected valid ticket");
        };
        assert_eq!(ticket.mechanic_ids, vec![3, 1, 2]);
    }

    #[test]
    fn new_ticket_rejects_non_positive_mechanic_id() {
        let result = NewServiceTicket::new(
            "VIN-1".to_string(),
            Some(date("2026-08-01")),
            None,
            Some(1),
            vec![0],
        );
        let Err(errors) = result else {
            panic!("expected validation failure");
        };
        assert!(errors.as_map().contains_key("mechanic_ids"));
    }

    #[test]
    fn patch_replaces_assignment_set_deduplicated() {
        let result =
            ServiceTicketPatch::new(None, None, None, None, Some(vec![2, 2, 1]));
        let Ok(patch) = result else {
            panic!("expected valid patch");
        };
        assert_eq!(patch.mechanic_ids, Some(vec![2, 1]));
    }

    #[test]
    fn patch_validates_provided_fields_only() {
        let bad = ServiceTicketPatch::new(Some(String::new()), None, None, Some(-1), None);
        let Err(errors) = bad else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.as_map().len(), 2);

        let ok = ServiceTicketPatch::new(None, Some(date("2026-09-01")), None, None, None);
        assert!(ok.is_ok());
    }
}
