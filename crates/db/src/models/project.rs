//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thekedar_core::types::{DbId, Timestamp};

use crate::models::labour::Labour;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    /// Owning user. Never changes after creation.
    pub user_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A project together with the labours currently assigned to it.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectWithLabours {
    #[serde(flatten)]
    pub project: Project,
    pub labours: Vec<Labour>,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub description: Option<String>,
}

/// DTO for replacing a project's editable fields.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub name: String,
    pub description: Option<String>,
}
