//! Envelope for list responses.
//!
//! Collections go out as `{ "data": [...] }`; single records are returned
//! bare.

use serde::Serialize;

/// `{ "data": T }`, used by every listing handler.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
