//! Route definitions for the `/projects` resource.
//!
//! Assignments, balances, attendance and payments of a project are nested
//! under `/projects/{project_id}/...`.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                                          -> list
/// POST   /                                          -> create
/// GET    /{project_id}                              -> get_by_id
/// PUT    /{project_id}                              -> update
/// DELETE /{project_id}                              -> delete
///
/// GET    /{project_id}/labours                      -> list_labours
/// POST   /{project_id}/labours                      -> assign_labour
/// DELETE /{project_id}/labours/{labour_id}          -> remove_labour
/// GET    /{project_id}/labours/{labour_id}/balance  -> labour_balance
/// GET    /{project_id}/balances                     -> list_balances
///
/// GET    /{project_id}/attendance                   -> list_attendance
/// POST   /{project_id}/attendance                   -> record_attendance
///
/// GET    /{project_id}/payments                     -> list_payments
/// POST   /{project_id}/payments                     -> record_payment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{project_id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route(
            "/{project_id}/labours",
            get(project::list_labours).post(project::assign_labour),
        )
        .route(
            "/{project_id}/labours/{labour_id}",
            delete(project::remove_labour),
        )
        .route(
            "/{project_id}/labours/{labour_id}/balance",
            get(project::labour_balance),
        )
        .route("/{project_id}/balances", get(project::list_balances))
        .route(
            "/{project_id}/attendance",
            get(project::list_attendance).post(project::record_attendance),
        )
        .route(
            "/{project_id}/payments",
            get(project::list_payments).post(project::record_payment),
        )
}
