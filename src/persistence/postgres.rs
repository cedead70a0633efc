//! PostgreSQL implementation of the persistence layer.
//!
//! Single-row lookups return `Option` — absence is not an error here;
//! callers decide how to surface it. Multi-statement operations
//! (ticket inserts, assignment changes) run inside one transaction and
//! return typed not-found errors for the references they verify.

use sqlx::error::ErrorKind;
use sqlx::{PgPool, Postgres, Transaction};

use super::models::{CustomerRow, MechanicRow, TicketRow};
use crate::domain::{
    Customer, CustomerPatch, Mechanic, MechanicPatch, NewCustomer, NewMechanic, NewServiceTicket,
    ServiceTicket, ServiceTicketPatch,
};
use crate::error::ShopError;

/// PostgreSQL-backed store using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Creates a new store with the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // ── Customers ───────────────────────────────────────────────────

    /// Inserts a customer and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::Constraint`] on a duplicate email and
    /// [`ShopError::Persistence`] on other database failures.
    pub async fn insert_customer(&self, new: &NewCustomer) -> Result<Customer, ShopError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            "INSERT INTO customers (name, email, phone) VALUES ($1, $2, $3) \
             RETURNING id, name, email, phone",
        )
        .bind(&new.name)
        .bind(&new.email)
        .bind(new.phone.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(translate_db_err)?;

        Ok(row.into())
    }

    /// Looks up a customer by id.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::Persistence`] on database failure.
    pub async fn get_customer(&self, id: i64) -> Result<Option<Customer>, ShopError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            "SELECT id, name, email, phone FROM customers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(translate_db_err)?;

        Ok(row.map(Customer::from))
    }

    /// Returns every customer, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::Persistence`] on database failure.
    pub async fn list_customers(&self) -> Result<Vec<Customer>, ShopError> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            "SELECT id, name, email, phone FROM customers ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(translate_db_err)?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    /// Applies the provided patch fields to a customer. Returns `None`
    /// when the id does not exist; no row is mutated in that case.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::Constraint`] on a duplicate email and
    /// [`ShopError::Persistence`] on other database failures.
    pub async fn update_customer(
        &self,
        id: i64,
        patch: &CustomerPatch,
    ) -> Result<Option<Customer>, ShopError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            "UPDATE customers SET \
                 name = COALESCE($2, name), \
                 email = COALESCE($3, email), \
                 phone = COALESCE($4, phone) \
             WHERE id = $1 \
             RETURNING id, name, email, phone",
        )
        .bind(id)
        .bind(patch.name.as_deref())
        .bind(patch.email.as_deref())
        .bind(patch.phone.as_deref())
        .fetch_optional(&self.pool)
        .await
        .map_err(translate_db_err)?;

        Ok(row.map(Customer::from))
    }

    /// Deletes a customer. Returns `false` when the id does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::Constraint`] when the customer still owns
    /// service tickets (the foreign key restricts the delete) and
    /// [`ShopError::Persistence`] on other database failures.
    pub async fn delete_customer(&self, id: i64) -> Result<bool, ShopError> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(translate_db_err)?;

        Ok(result.rows_affected() > 0)
    }

    // ── Mechanics ───────────────────────────────────────────────────

    /// Inserts a mechanic and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::Constraint`] on a duplicate email and
    /// [`ShopError::Persistence`] on other database failures.
    pub async fn insert_mechanic(&self, new: &NewMechanic) -> Result<Mechanic, ShopError> {
        let row = sqlx::query_as::<_, MechanicRow>(
            "INSERT INTO mechanics (name, email, phone, salary) VALUES ($1, $2, $3, $4) \
             RETURNING id, name, email, phone, salary",
        )
        .bind(&new.name)
        .bind(&new.email)
        .bind(new.phone.as_deref())
        .bind(new.salary)
        .fetch_one(&self.pool)
        .await
        .map_err(translate_db_err)?;

        Ok(row.into())
    }

    /// Looks up a mechanic by id.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::Persistence`] on database failure.
    pub async fn get_mechanic(&self, id: i64) -> Result<Option<Mechanic>, ShopError> {
        let row = sqlx::query_as::<_, MechanicRow>(
            "SELECT id, name, email, phone, salary FROM mechanics WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(translate_db_err)?;

        Ok(row.map(Mechanic::from))
    }

    /// Returns every mechanic, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::Persistence`] on database failure.
    pub async fn list_mechanics(&self) -> Result<Vec<Mechanic>, ShopError> {
        let rows = sqlx::query_as::<_, MechanicRow>(
            "SELECT id, name, email, phone, salary FROM mechanics ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(translate_db_err)?;

        Ok(rows.into_iter().map(Mechanic::from).collect())
    }

    /// Applies the provided patch fields to a mechanic. Returns `None`
    /// when the id does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::Constraint`] on a duplicate email and
    /// [`ShopError::Persistence`] on other database failures.
    pub async fn update_mechanic(
        &self,
        id: i64,
        patch: &MechanicPatch,
    ) -> Result<Option<Mechanic>, ShopError> {
        let row = sqlx::query_as::<_, MechanicRow>(
            "UPDATE mechanics SET \
                 name = COALESCE($2, name), \
                 email = COALESCE($3, email), \
                 phone = COALESCE($4, phone), \
                 salary = COALESCE($5, salary) \
             WHERE id = $1 \
             RETURNING id, name, email, phone, salary",
        )
        .bind(id)
        .bind(patch.name.as_deref())
        .bind(patch.email.as_deref())
        .bind(patch.phone.as_deref())
        .bind(patch.salary)
        .fetch_optional(&self.pool)
        .await
        .map_err(translate_db_err)?;

        Ok(row.map(Mechanic::from))
    }

    /// Deletes a mechanic. Its join-table assignments cascade; tickets
    /// themselves are untouched. Returns `false` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::Persistence`] on database failure.
    pub async fn delete_mechanic(&self, id: i64) -> Result<bool, ShopError> {
        let result = sqlx::query("DELETE FROM mechanics WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(translate_db_err)?;

        Ok(result.rows_affected() > 0)
    }

    // ── Service tickets ─────────────────────────────────────────────

    /// Inserts a ticket and its mechanic assignments in one transaction.
    ///
    /// The referenced customer and every referenced mechanic are
    /// verified inside the transaction before the writes land.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::CustomerNotFound`] or
    /// [`ShopError::MechanicNotFound`] for dangling references and
    /// [`ShopError::Persistence`] on other database failures.
    pub async fn insert_ticket(&self, new: &NewServiceTicket) -> Result<ServiceTicket, ShopError> {
        let mut tx = self.pool.begin().await.map_err(translate_db_err)?;

        if !customer_exists(&mut tx, new.customer_id).await? {
            return Err(ShopError::CustomerNotFound(new.customer_id));
        }

        let row = sqlx::query_as::<_, TicketRow>(
            "INSERT INTO service_tickets (vin, service_date, service_desc, customer_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, vin, service_date, service_desc, customer_id",
        )
        .bind(&new.vin)
        .bind(new.service_date)
        .bind(new.service_desc.as_deref())
        .bind(new.customer_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(translate_db_err)?;

        for &mechanic_id in &new.mechanic_ids {
            if !mechanic_exists(&mut tx, mechanic_id).await? {
                return Err(ShopError::MechanicNotFound(mechanic_id));
            }
            insert_assignment(&mut tx, row.id, mechanic_id).await?;
        }

        let mechanic_ids = assignment_ids(&mut tx, row.id).await?;
        tx.commit().await.map_err(translate_db_err)?;

        Ok(row.into_ticket(mechanic_ids))
    }

    /// Looks up a ticket by id, composing its assignment set.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::Persistence`] on database failure.
    pub async fn get_ticket(&self, id: i64) -> Result<Option<ServiceTicket>, ShopError> {
        let row = sqlx::query_as::<_, TicketRow>(
            "SELECT id, vin, service_date, service_desc, customer_id \
             FROM service_tickets WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(translate_db_err)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mechanic_ids = sqlx::query_scalar::<_, i64>(
            "SELECT mechanic_id FROM service_mechanics WHERE ticket_id = $1 ORDER BY mechanic_id",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(translate_db_err)?;

        Ok(Some(row.into_ticket(mechanic_ids)))
    }

    /// Returns every ticket with its assignment set, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::Persistence`] on database failure.
    pub async fn list_tickets(&self) -> Result<Vec<ServiceTicket>, ShopError> {
        let rows = sqlx::query_as::<_, TicketRow>(
            "SELECT id, vin, service_date, service_desc, customer_id \
             FROM service_tickets ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(translate_db_err)?;

        let pairs = sqlx::query_as::<_, (i64, i64)>(
            "SELECT ticket_id, mechanic_id FROM service_mechanics \
             ORDER BY ticket_id, mechanic_id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(translate_db_err)?;

        let mut by_ticket: std::collections::BTreeMap<i64, Vec<i64>> =
            std::collections::BTreeMap::new();
        for (ticket_id, mechanic_id) in pairs {
            by_ticket.entry(ticket_id).or_default().push(mechanic_id);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let ids = by_ticket.remove(&row.id).unwrap_or_default();
                row.into_ticket(ids)
            })
            .collect())
    }

    /// Applies the provided patch fields to a ticket. A provided
    /// `mechanic_ids` list replaces the whole assignment set
    /// atomically. Returns `None` when the id does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::CustomerNotFound`] /
    /// [`ShopError::MechanicNotFound`] for dangling references and
    /// [`ShopError::Persistence`] on other database failures.
    pub async fn update_ticket(
        &self,
        id: i64,
        patch: &ServiceTicketPatch,
    ) -> Result<Option<ServiceTicket>, ShopError> {
        let mut tx = self.pool.begin().await.map_err(translate_db_err)?;

        if let Some(customer_id) = patch.customer_id {
            if !customer_exists(&mut tx, customer_id).await? {
                return Err(ShopError::CustomerNotFound(customer_id));
            }
        }

        let row = sqlx::query_as::<_, TicketRow>(
            "UPDATE service_tickets SET \
                 vin = COALESCE($2, vin), \
                 service_date = COALESCE($3, service_date), \
                 service_desc = COALESCE($4, service_desc), \
                 customer_id = COALESCE($5, customer_id) \
             WHERE id = $1 \
             RETURNING id, vin, service_date, service_desc, customer_id",
        )
        .bind(id)
        .bind(patch.vin.as_deref())
        .bind(patch.service_date)
        .bind(patch.service_desc.as_deref())
        .bind(patch.customer_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(translate_db_err)?;

        let Some(row) = row else {
            return Ok(None);
        };

        if let Some(ids) = &patch.mechanic_ids {
            for &mechanic_id in ids {
                if !mechanic_exists(&mut tx, mechanic_id).await? {
                    return Err(ShopError::MechanicNotFound(mechanic_id));
                }
            }
            sqlx::query("DELETE FROM service_mechanics WHERE ticket_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(translate_db_err)?;
            for &mechanic_id in ids {
                insert_assignment(&mut tx, id, mechanic_id).await?;
            }
        }

        let mechanic_ids = assignment_ids(&mut tx, id).await?;
        tx.commit().await.map_err(translate_db_err)?;

        Ok(Some(row.into_ticket(mechanic_ids)))
    }

    /// Deletes a ticket; its join-table rows cascade. Returns `false`
    /// when absent.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::Persistence`] on database failure.
    pub async fn delete_ticket(&self, id: i64) -> Result<bool, ShopError> {
        let result = sqlx::query("DELETE FROM service_tickets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(translate_db_err)?;

        Ok(result.rows_affected() > 0)
    }

    /// Adds one mechanic assignment to a ticket. Idempotent: assigning
    /// an already-assigned mechanic leaves the join table unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::TicketNotFound`] or
    /// [`ShopError::MechanicNotFound`] for dangling references and
    /// [`ShopError::Persistence`] on other database failures.
    pub async fn assign_mechanic(
        &self,
        ticket_id: i64,
        mechanic_id: i64,
    ) -> Result<ServiceTicket, ShopError> {
        let mut tx = self.pool.begin().await.map_err(translate_db_err)?;

        let row = ticket_row(&mut tx, ticket_id)
            .await?
            .ok_or(ShopError::TicketNotFound(ticket_id))?;
        if !mechanic_exists(&mut tx, mechanic_id).await? {
            return Err(ShopError::MechanicNotFound(mechanic_id));
        }

        insert_assignment(&mut tx, ticket_id, mechanic_id).await?;

        let mechanic_ids = assignment_ids(&mut tx, ticket_id).await?;
        tx.commit().await.map_err(translate_db_err)?;

        Ok(row.into_ticket(mechanic_ids))
    }

    /// Removes one mechanic assignment from a ticket. Removing a pair
    /// that is not present leaves the ticket unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::TicketNotFound`] or
    /// [`ShopError::MechanicNotFound`] for dangling references and
    /// [`ShopError::Persistence`] on other database failures.
    pub async fn remove_mechanic(
        &self,
        ticket_id: i64,
        mechanic_id: i64,
    ) -> Result<ServiceTicket, ShopError> {
        let mut tx = self.pool.begin().await.map_err(translate_db_err)?;

        let row = ticket_row(&mut tx, ticket_id)
            .await?
            .ok_or(ShopError::TicketNotFound(ticket_id))?;
        if !mechanic_exists(&mut tx, mechanic_id).await? {
            return Err(ShopError::MechanicNotFound(mechanic_id));
        }

        sqlx::query("DELETE FROM service_mechanics WHERE ticket_id = $1 AND mechanic_id = $2")
            .bind(ticket_id)
            .bind(mechanic_id)
            .execute(&mut *tx)
            .await
            .map_err(translate_db_err)?;

        let mechanic_ids = assignment_ids(&mut tx, ticket_id).await?;
        tx.commit().await.map_err(translate_db_err)?;

        Ok(row.into_ticket(mechanic_ids))
    }
}

// ── Transaction helpers ─────────────────────────────────────────────

async fn customer_exists(
    tx: &mut Transaction<'_, Postgres>,
    id: i64,
) -> Result<bool, ShopError> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM customers WHERE id = $1)")
        .bind(id)
        .fetch_one(&mut **tx)
        .await
        .map_err(translate_db_err)
}

async fn mechanic_exists(
    tx: &mut Transaction<'_, Postgres>,
    id: i64,
) -> Result<bool, ShopError> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM mechanics WHERE id = $1)")
        .bind(id)
        .fetch_one(&mut **tx)
        .await
        .map_err(translate_db_err)
}

async fn ticket_row(
    tx: &mut Transaction<'_, Postgres>,
    id: i64,
) -> Result<Option<TicketRow>, ShopError> {
    sqlx::query_as::<_, TicketRow>(
        "SELECT id, vin, service_date, service_desc, customer_id \
         FROM service_tickets WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&mut **tx)
    .await
    .map_err(translate_db_err)
}

async fn insert_assignment(
    tx: &mut Transaction<'_, Postgres>,
    ticket_id: i64,
    mechanic_id: i64,
) -> Result<(), ShopError> {
    sqlx::query(
        "INSERT INTO service_mechanics (ticket_id, mechanic_id) VALUES ($1, $2) \
         ON CONFLICT DO NOTHING",
    )
    .bind(ticket_id)
    .bind(mechanic_id)
    .execute(&mut **tx)
    .await
    .map_err(translate_db_err)?;
    Ok(())
}

async fn assignment_ids(
    tx: &mut Transaction<'_, Postgres>,
    ticket_id: i64,
) -> Result<Vec<i64>, ShopError> {
    sqlx::query_scalar::<_, i64>(
        "SELECT mechanic_id FROM service_mechanics WHERE ticket_id = $1 ORDER BY mechanic_id",
    )
    .bind(ticket_id)
    .fetch_all(&mut **tx)
    .await
    .map_err(translate_db_err)
}

/// Translates database constraint violations into [`ShopError::Constraint`];
/// everything else becomes [`ShopError::Persistence`].
fn translate_db_err(e: sqlx::Error) -> ShopError {
    if let sqlx::Error::Database(db) = &e {
        let name = db.constraint().unwrap_or("unnamed");
        match db.kind() {
            ErrorKind::UniqueViolation => {
                return ShopError::Constraint(format!("unique constraint {name} violated"));
            }
            ErrorKind::ForeignKeyViolation => {
                return ShopError::Constraint(format!("foreign key constraint {name} violated"));
            }
            ErrorKind::NotNullViolation => {
                return ShopError::Constraint(format!("not-null constraint {name} violated"));
            }
            _ => {}
        }
    }
    ShopError::Persistence(e.to_string())
}
