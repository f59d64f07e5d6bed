use std::sync::Arc;

use crate::auth::session::SessionManager;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: thekedar_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Passcode challenges and session tokens.
    pub sessions: Arc<SessionManager>,
}
