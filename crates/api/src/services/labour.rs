use sqlx::PgPool;
use thekedar_core::error::CoreError;
use thekedar_core::labour::validate_labour;
use thekedar_core::types::DbId;
use thekedar_db::models::labour::{CreateLabour, Labour, UpdateLabour};
use thekedar_db::repositories::LabourRepo;

use crate::error::{AppError, AppResult};

/// Labourer profiles and project assignments.
pub struct LabourService;

impl LabourService {
    pub async fn create(pool: &PgPool, input: &CreateLabour) -> AppResult<Labour> {
        validate_labour(&input.name, input.phone.as_deref(), input.daily_wage)?;
        Ok(LabourRepo::create(pool, input).await?)
    }

    pub async fn get(pool: &PgPool, id: DbId) -> AppResult<Labour> {
        LabourRepo::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::not_found("Labour", id))
    }

    pub async fn list(pool: &PgPool) -> AppResult<Vec<Labour>> {
        Ok(LabourRepo::list(pool).await?)
    }

    pub async fn list_by_project(pool: &PgPool, project_id: DbId) -> AppResult<Vec<Labour>> {
        Ok(LabourRepo::list_by_project(pool, project_id).await?)
    }

    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateLabour) -> AppResult<Labour> {
        validate_labour(&input.name, input.phone.as_deref(), input.daily_wage)?;
        LabourRepo::update(pool, id, input)
            .await?
            .ok_or_else(|| AppError::not_found("Labour", id))
    }

    /// Delete a labourer no project refers to any more.
    ///
    /// A labourer with an assignment or any attendance or payment history is
    /// kept until the projects holding those rows are deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<()> {
        Self::get(pool, id).await?;
        if LabourRepo::is_referenced(pool, id).await? {
            return Err(CoreError::Conflict(
                "labour is still assigned to a project or has attendance or payment records"
                    .into(),
            )
            .into());
        }
        if LabourRepo::delete(pool, id).await? {
            Ok(())
        } else {
            Err(AppError::not_found("Labour", id))
        }
    }

    /// Assign an existing labourer to a project. Assigning twice is a no-op.
    pub async fn assign_to_project(
        pool: &PgPool,
        project_id: DbId,
        labour_id: DbId,
    ) -> AppResult<()> {
        Self::get(pool, labour_id).await?;
        let inserted = LabourRepo::assign_to_project(pool, project_id, labour_id).await?;
        if inserted {
            tracing::info!(project_id = %project_id, labour_id = %labour_id, "Labour assigned");
        }
        Ok(())
    }

    /// Remove an assignment. History recorded for the pair is kept.
    pub async fn remove_from_project(
        pool: &PgPool,
        project_id: DbId,
        labour_id: DbId,
    ) -> AppResult<()> {
        if LabourRepo::remove_from_project(pool, project_id, labour_id).await? {
            Ok(())
        } else {
            Err(AppError::not_found("Project labour", labour_id))
        }
    }
}
