pub mod attendance;
pub mod auth;
pub mod health;
pub mod labour;
pub mod payment;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/send-otp                                   issue passcode (public)
/// /auth/verify-otp                                 verify passcode, open session (public)
/// /auth/refresh                                    refresh session (public)
/// /auth/me                                         current user
///
/// /projects                                        list, create
/// /projects/{project_id}                           get (with labours), update, delete
/// /projects/{project_id}/labours                   list, assign
/// /projects/{project_id}/labours/{labour_id}       remove assignment
/// /projects/{project_id}/labours/{labour_id}/balance   balance of one labour
/// /projects/{project_id}/balances                  balances of all assigned labours
/// /projects/{project_id}/attendance                list (?date=), record
/// /projects/{project_id}/payments                  list, record
///
/// /labours                                         list, create
/// /labours/{id}                                    get, update, delete
/// /labours/{id}/attendance                         attendance across own projects
/// /labours/{id}/payments                           payments across own projects
///
/// /attendance/{id}                                 get, update, delete
///
/// /payments/{id}                                   get, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/projects", project::router())
        .nest("/labours", labour::router())
        .nest("/attendance", attendance::router())
        .nest("/payments", payment::router())
}
