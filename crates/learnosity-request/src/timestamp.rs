//! Canonical timestamp rendering for signed requests.

use chrono::{DateTime, Utc};

/// Format for every timestamp that enters a signature: year, zero-padded
/// month and day, a hyphen, then zero-padded 24-hour time truncated to the
/// minute. The missing seconds are intentional: signatures computed within
/// the same minute are stable.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M";

/// Render an instant in UTC as `YYYYMMDD-HHMM`.
pub fn format(instant: DateTime<Utc>) -> String {
    instant.format(TIMESTAMP_FORMAT).to_string()
}

/// Render the current time.
///
/// Callers must reuse the returned string for the whole request-build
/// operation rather than calling this again; every signature within one
/// build has to observe the identical timestamp string.
pub fn now() -> String {
    format(Utc::now())
}
