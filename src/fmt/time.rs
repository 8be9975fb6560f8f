//! Record timestamps, always in UTC with millisecond precision and a numeric offset.

use chrono::{DateTime, Utc};

/// strftime equivalent of `yyyy-MM-dd HH:mm:ss.SSSZ`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f%z";

/// Formats epoch milliseconds, e.g. `0` becomes `1970-01-01 00:00:00.000+0000`.
///
/// Each call builds its own formatter, so concurrent callers share nothing.
/// Millisecond values outside chrono's range fall back to the raw number.
#[must_use]
pub fn format_millis(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis).map_or_else(
        || millis.to_string(),
        |dt| dt.format(TIMESTAMP_FORMAT).to_string(),
    )
}
