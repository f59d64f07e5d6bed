use sqlx::PgPool;
use thekedar_core::error::CoreError;
use thekedar_core::project::validate_project;
use thekedar_core::types::DbId;
use thekedar_db::models::project::{CreateProject, Project, ProjectWithLabours, UpdateProject};
use thekedar_db::repositories::{LabourRepo, ProjectRepo};

use crate::error::{AppError, AppResult};

/// Projects and the ownership rule.
pub struct ProjectService;

impl ProjectService {
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateProject,
    ) -> AppResult<Project> {
        validate_project(&input.name, input.description.as_deref())?;
        let project = ProjectRepo::create(pool, owner_id, input).await?;
        tracing::info!(project_id = %project.id, user_id = %owner_id, "Project created");
        Ok(project)
    }

    /// A project together with its assigned labourers.
    pub async fn get(pool: &PgPool, id: DbId) -> AppResult<ProjectWithLabours> {
        let project = ProjectRepo::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::not_found("Project", id))?;
        let labours = LabourRepo::list_by_project(pool, id).await?;
        Ok(ProjectWithLabours { project, labours })
    }

    pub async fn list_by_owner(pool: &PgPool, owner_id: DbId) -> AppResult<Vec<Project>> {
        Ok(ProjectRepo::list_by_owner(pool, owner_id).await?)
    }

    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateProject) -> AppResult<Project> {
        validate_project(&input.name, input.description.as_deref())?;
        ProjectRepo::update(pool, id, input)
            .await?
            .ok_or_else(|| AppError::not_found("Project", id))
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<()> {
        if ProjectRepo::delete(pool, id).await? {
            tracing::info!(project_id = %id, "Project deleted");
            Ok(())
        } else {
            Err(AppError::not_found("Project", id))
        }
    }

    pub async fn is_owner(pool: &PgPool, project_id: DbId, user_id: DbId) -> AppResult<bool> {
        Ok(ProjectRepo::is_owner(pool, project_id, user_id).await?)
    }

    /// `Forbidden` unless `user_id` owns `project_id`.
    ///
    /// A project that does not exist is reported the same way as one owned
    /// by someone else.
    pub async fn require_owner(pool: &PgPool, project_id: DbId, user_id: DbId) -> AppResult<()> {
        if Self::is_owner(pool, project_id, user_id).await? {
            Ok(())
        } else {
            Err(CoreError::Forbidden("access denied".into()).into())
        }
    }
}
