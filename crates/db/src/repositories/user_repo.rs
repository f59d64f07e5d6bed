//! Repository for the `users` table.

use sqlx::PgPool;
use thekedar_core::types::DbId;

use crate::models::user::User;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, phone, name, created_at, updated_at";

/// Provides lookups and get-or-create for users.
pub struct UserRepo;

impl UserRepo {
    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by phone number (exact match).
    pub async fn find_by_phone(pool: &PgPool, phone: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE phone = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(phone)
            .fetch_optional(pool)
            .await
    }

    /// Return the user owning `phone`, creating it if none exists yet.
    ///
    /// The boolean is `true` when a new row was inserted. Concurrent calls for
    /// the same phone converge on one row via `uq_users_phone`.
    pub async fn get_or_create(pool: &PgPool, phone: &str) -> Result<(User, bool), sqlx::Error> {
        let insert = format!(
            "INSERT INTO users (phone) VALUES ($1)
             ON CONFLICT ON CONSTRAINT uq_users_phone DO NOTHING
             RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, User>(&insert)
            .bind(phone)
            .fetch_optional(pool)
            .await?;

        if let Some(user) = created {
            tracing::info!(user_id = %user.id, "Created user on first login");
            return Ok((user, true));
        }

        let existing = Self::find_by_phone(pool, phone)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;
        Ok((existing, false))
    }
}
