//! User entity model.

use serde::Serialize;
use sqlx::FromRow;
use thekedar_core::types::{DbId, Timestamp};

/// A row from the `users` table. Users are created on first OTP login.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub phone: String,
    pub name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
