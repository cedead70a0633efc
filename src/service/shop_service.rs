//! Shop service: one operation per (entity, verb) pair.

use crate::domain::{
    Customer, CustomerPatch, Mechanic, MechanicPatch, NewCustomer, NewMechanic, NewServiceTicket,
    ServiceTicket, ServiceTicketPatch,
};
use crate::error::ShopError;
use crate::persistence::PgStore;

/// Orchestration layer for all shop operations.
///
/// Stateless coordinator over [`PgStore`]: handlers validate payloads
/// into domain shapes, this service performs the persistence operation,
/// maps absence to the typed not-found error, and logs mutations.
#[derive(Debug, Clone)]
pub struct ShopService {
    store: PgStore,
}

impl ShopService {
    /// Creates a new `ShopService`.
    #[must_use]
    pub fn new(store: PgStore) -> Self {
        Self { store }
    }

    // ── Customers ───────────────────────────────────────────────────

    /// Creates a customer.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::Constraint`] on a duplicate email.
    pub async fn create_customer(&self, new: NewCustomer) -> Result<Customer, ShopError> {
        let customer = self.store.insert_customer(&new).await?;
        tracing::info!(customer_id = customer.id, "customer created");
        Ok(customer)
    }

    /// Returns every customer.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::Persistence`] on database failure.
    pub async fn list_customers(&self) -> Result<Vec<Customer>, ShopError> {
        self.store.list_customers().await
    }

    /// Returns one customer.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::CustomerNotFound`] when the id does not exist.
    pub async fn get_customer(&self, id: i64) -> Result<Customer, ShopError> {
        self.store
            .get_customer(id)
            .await?
            .ok_or(ShopError::CustomerNotFound(id))
    }

    /// Applies a partial update to a customer.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::CustomerNotFound`] when the id does not
    /// exist and [`ShopError::Constraint`] on a duplicate email.
    pub async fn update_customer(
        &self,
        id: i64,
        patch: CustomerPatch,
    ) -> Result<Customer, ShopError> {
        let customer = self
            .store
            .update_customer(id, &patch)
            .await?
            .ok_or(ShopError::CustomerNotFound(id))?;
        tracing::info!(customer_id = id, "customer updated");
        Ok(customer)
    }

    /// Deletes a customer.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::CustomerNotFound`] when the id does not
    /// exist and [`ShopError::Constraint`] when tickets still reference it.
    pub async fn delete_customer(&self, id: i64) -> Result<(), ShopError> {
        if !self.store.delete_customer(id).await? {
            return Err(ShopError::CustomerNotFound(id));
        }
        tracing::info!(customer_id = id, "customer deleted");
        Ok(())
    }

    // ── Mechanics ───────────────────────────────────────────────────

    /// Creates a mechanic.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::Constraint`] on a duplicate email.
    pub async fn create_mechanic(&self, new: NewMechanic) -> Result<Mechanic, ShopError> {
        let mechanic = self.store.insert_mechanic(&new).await?;
        tracing::info!(mechanic_id = mechanic.id, "mechanic created");
        Ok(mechanic)
    }

    /// Returns every mechanic.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::Persistence`] on database failure.
    pub async fn list_mechanics(&self) -> Result<Vec<Mechanic>, ShopError> {
        self.store.list_mechanics().await
    }

    /// Returns one mechanic.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::MechanicNotFound`] when the id does not exist.
    pub async fn get_mechanic(&self, id: i64) -> Result<Mechanic, ShopError> {
        self.store
            .get_mechanic(id)
            .await?
            .ok_or(ShopError::MechanicNotFound(id))
    }

    /// Applies a partial update to a mechanic.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::MechanicNotFound`] when the id does not
    /// exist and [`ShopError::Constraint`] on a duplicate email.
    pub async fn update_mechanic(
        &self,
        id: i64,
        patch: MechanicPatch,
    ) -> Result<Mechanic, ShopError> {
        let mechanic = self
            .store
            .update_mechanic(id, &patch)
            .await?
            .ok_or(ShopError::MechanicNotFound(id))?;
        tracing::info!(mechanic_id = id, "mechanic updated");
        Ok(mechanic)
    }

    /// Deletes a mechanic; its assignments cascade.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::MechanicNotFound`] when the id does not exist.
    pub async fn delete_mechanic(&self, id: i64) -> Result<(), ShopError> {
        if !self.store.delete_mechanic(id).await? {
            return Err(ShopError::MechanicNotFound(id));
        }
        tracing::info!(mechanic_id = id, "mechanic deleted");
        Ok(())
    }

    // ── Service tickets ─────────────────────────────────────────────

    /// Creates a ticket with its initial mechanic assignments.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::CustomerNotFound`] /
    /// [`ShopError::MechanicNotFound`] for dangling references.
    pub async fn create_ticket(&self, new: NewServiceTicket) -> Result<ServiceTicket, ShopError> {
        let ticket = self.store.insert_ticket(&new).await?;
        tracing::info!(
            ticket_id = ticket.id,
            customer_id = ticket.customer_id,
            "service ticket created"
        );
        Ok(ticket)
    }

    /// Returns every ticket.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::Persistence`] on database failure.
    pub async fn list_tickets(&self) -> Result<Vec<ServiceTicket>, ShopError> {
        self.store.list_tickets().await
    }

    /// Returns one ticket.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::TicketNotFound`] when the id does not exist.
    pub async fn get_ticket(&self, id: i64) -> Result<ServiceTicket, ShopError> {
        self.store
            .get_ticket(id)
            .await?
            .ok_or(ShopError::TicketNotFound(id))
    }

    /// Applies a partial update to a ticket; a provided assignment set
    /// replaces the existing one.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::TicketNotFound`] when the id does not exist
    /// and the reference errors of [`PgStore::update_ticket`].
    pub async fn update_ticket(
        &self,
        id: i64,
        patch: ServiceTicketPatch,
    ) -> Result<ServiceTicket, ShopError> {
        let ticket = self
            .store
            .update_ticket(id, &patch)
            .await?
            .ok_or(ShopError::TicketNotFound(id))?;
        tracing::info!(ticket_id = id, "service ticket updated");
        Ok(ticket)
    }

    /// Deletes a ticket; its assignments cascade.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::TicketNotFound`] when the id does not exist.
    pub async fn delete_ticket(&self, id: i64) -> Result<(), ShopError> {
        if !self.store.delete_ticket(id).await? {
            return Err(ShopError::TicketNotFound(id));
        }
        tracing::info!(ticket_id = id, "service ticket deleted");
        Ok(())
    }

    /// Assigns a mechanic to a ticket (idempotent).
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::TicketNotFound`] or
    /// [`ShopError::MechanicNotFound`] for dangling references.
    pub async fn assign_mechanic(
        &self,
        ticket_id: i64,
        mechanic_id: i64,
    ) -> Result<ServiceTicket, ShopError> {
        let ticket = self.store.assign_mechanic(ticket_id, mechanic_id).await?;
        tracing::info!(ticket_id, mechanic_id, "mechanic assigned");
        Ok(ticket)
    }

    /// Removes a mechanic assignment from a ticket.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::TicketNotFound`] or
    /// [`ShopError::MechanicNotFound`] for dangling references.
    pub async fn remove_mechanic(
        &self,
        ticket_id: i64,
        mechanic_id: i64,
    ) -> Result<ServiceTicket, ShopError> {
        let ticket = self.store.remove_mechanic(ticket_id, mechanic_id).await?;
        tracing::info!(ticket_id, mechanic_id, "mechanic removed");
        Ok(ticket)
    }
}
