//! Repository for the `payments` table.

use sqlx::PgPool;
use thekedar_core::types::DbId;

use crate::models::payment::{NewPayment, Payment, PaymentWithLabour};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, project_id, labour_id, amount, payment_date, payment_type, notes, created_at";

/// Columns for listings joined with the labourer's name.
const JOINED_COLUMNS: &str = "p.id, p.project_id, p.labour_id, p.amount, p.payment_date, \
                              p.payment_type, p.notes, p.created_at, l.name AS labour_name";

/// [`COLUMNS`] qualified for queries joining `projects`.
const OWNED_COLUMNS: &str = "p.id, p.project_id, p.labour_id, p.amount, p.payment_date, \
                             p.payment_type, p.notes, p.created_at";

/// Provides create, read and delete for payments. Payments are never edited.
pub struct PaymentRepo;

impl PaymentRepo {
    /// Insert a validated payment, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewPayment) -> Result<Payment, sqlx::Error> {
        let query = format!(
            "INSERT INTO payments (project_id, labour_id, amount, payment_date, payment_type, notes)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(input.project_id)
            .bind(input.labour_id)
            .bind(input.amount)
            .bind(input.payment_date)
            .bind(input.payment_type.as_str())
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a payment by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Payment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM payments WHERE id = $1");
        sqlx::query_as::<_, Payment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's payments, newest date first, then by labourer name.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<PaymentWithLabour>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM payments p
             INNER JOIN labours l ON l.id = p.labour_id
             WHERE p.project_id = $1
             ORDER BY p.payment_date DESC, l.name ASC"
        );
        sqlx::query_as::<_, PaymentWithLabour>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// List a labourer's payments on projects owned by `owner_id`, newest
    /// date first.
    pub async fn list_by_labour(
        pool: &PgPool,
        labour_id: DbId,
        owner_id: DbId,
    ) -> Result<Vec<Payment>, sqlx::Error> {
        let query = format!(
            "SELECT {OWNED_COLUMNS}
             FROM payments p
             INNER JOIN projects pr ON pr.id = p.project_id
             WHERE p.labour_id = $1 AND pr.user_id = $2
             ORDER BY p.payment_date DESC, p.created_at DESC"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(labour_id)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a payment by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM payments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
