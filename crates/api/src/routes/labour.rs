//! Route definitions for the `/labours` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::labour;
use crate::state::AppState;

/// Routes mounted at `/labours`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete
/// GET    /{id}/attendance  -> list_attendance
/// GET    /{id}/payments    -> list_payments
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(labour::list).post(labour::create))
        .route(
            "/{id}",
            get(labour::get_by_id)
                .put(labour::update)
                .delete(labour::delete),
        )
        .route("/{id}/attendance", get(labour::list_attendance))
        .route("/{id}/payments", get(labour::list_payments))
}
