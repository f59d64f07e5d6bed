//! Domain services.
//!
//! Each service is a zero-sized struct whose methods take `&PgPool` and
//! return [`AppResult`](crate::error::AppResult). Mutating operations run,
//! in order: field validation, referential checks, then the repository
//! call. Project ownership is checked by handlers through
//! [`ProjectService::require_owner`] before any project-scoped call.

pub mod labour;
pub mod payment;
pub mod project;
pub mod work_day;

pub use labour::LabourService;
pub use payment::PaymentService;
pub use project::ProjectService;
pub use work_day::WorkDayService;

use sqlx::PgPool;
use thekedar_core::error::{CoreError, InvalidField};
use thekedar_core::types::DbId;
use thekedar_db::repositories::LabourRepo;

use crate::error::AppResult;

/// Reject a (project, labour) pair that is not currently assigned.
async fn require_assignment(pool: &PgPool, project_id: DbId, labour_id: DbId) -> AppResult<()> {
    if LabourRepo::is_assigned(pool, project_id, labour_id).await? {
        Ok(())
    } else {
        Err(CoreError::invalid(
            InvalidField::Labour,
            "labour is not assigned to this project",
        )
        .into())
    }
}
