//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Optional calendar-date filter (`?date=YYYY-MM-DD`) for attendance listings.
///
/// The raw string is parsed by the service so a malformed value reports
/// `INVALID_DATE` rather than a generic query rejection.
#[derive(Debug, Default, Deserialize)]
pub struct DateFilterParams {
    pub date: Option<String>,
}
