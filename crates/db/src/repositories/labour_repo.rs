//! Repository for the `labours` table and the `project_labours` join table.

use sqlx::PgPool;
use thekedar_core::types::DbId;

use crate::models::labour::{CreateLabour, Labour, UpdateLabour};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, phone, daily_wage, created_at, updated_at";

/// Same columns, qualified with the `l` alias for joined queries.
const COLUMNS_L: &str = "l.id, l.name, l.phone, l.daily_wage, l.created_at, l.updated_at";

/// Provides CRUD operations for labourers and their project assignments.
pub struct LabourRepo;

impl LabourRepo {
    /// Insert a new labourer, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateLabour) -> Result<Labour, sqlx::Error> {
        let query = format!(
            "INSERT INTO labours (name, phone, daily_wage)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Labour>(&query)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(input.daily_wage)
            .fetch_one(pool)
            .await
    }

    /// Find a labourer by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Labour>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM labours WHERE id = $1");
        sqlx::query_as::<_, Labour>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every labourer, ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Labour>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM labours ORDER BY name ASC");
        sqlx::query_as::<_, Labour>(&query).fetch_all(pool).await
    }

    /// List the labourers assigned to a project, ordered by name.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Labour>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS_L}
             FROM labours l
             INNER JOIN project_labours pl ON pl.labour_id = l.id
             WHERE pl.project_id = $1
             ORDER BY l.name ASC"
        );
        sqlx::query_as::<_, Labour>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Replace a labourer's profile.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLabour,
    ) -> Result<Option<Labour>, sqlx::Error> {
        let query = format!(
            "UPDATE labours SET
                name = $2,
                phone = $3,
                daily_wage = $4,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Labour>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(input.daily_wage)
            .fetch_optional(pool)
            .await
    }

    /// Delete a labourer by ID. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key violation while any project still references
    /// the labourer; see [`LabourRepo::is_referenced`].
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM labours WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Assign a labourer to a project.
    ///
    /// Idempotent: returns `false` when the pair was already assigned.
    pub async fn assign_to_project(
        pool: &PgPool,
        project_id: DbId,
        labour_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO project_labours (project_id, labour_id)
             VALUES ($1, $2)
             ON CONFLICT ON CONSTRAINT uq_project_labours_pair DO NOTHING",
        )
        .bind(project_id)
        .bind(labour_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove a labourer from a project. Returns `true` if an assignment was removed.
    ///
    /// Attendance and payment history for the pair is kept.
    pub async fn remove_from_project(
        pool: &PgPool,
        project_id: DbId,
        labour_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM project_labours WHERE project_id = $1 AND labour_id = $2")
                .bind(project_id)
                .bind(labour_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// `true` when the labourer is currently assigned to the project.
    pub async fn is_assigned(
        pool: &PgPool,
        project_id: DbId,
        labour_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                SELECT 1 FROM project_labours WHERE project_id = $1 AND labour_id = $2
             )",
        )
        .bind(project_id)
        .bind(labour_id)
        .fetch_one(pool)
        .await
    }

    /// `true` while any assignment, attendance or payment row points at the
    /// labourer.
    pub async fn is_referenced(pool: &PgPool, labour_id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM project_labours WHERE labour_id = $1)
                 OR EXISTS(SELECT 1 FROM work_days WHERE labour_id = $1)
                 OR EXISTS(SELECT 1 FROM payments WHERE labour_id = $1)",
        )
        .bind(labour_id)
        .fetch_one(pool)
        .await
    }
}
