//! Long-form en-US date formatting.

use chrono::{DateTime, FixedOffset, Utc};

/// `January 15, 2025, 02:30 PM`
const LONG_DATE_TIME: &str = "%B %-d, %Y, %I:%M %p";

/// Format a timestamp as a long-form date with a two-digit 12-hour clock,
/// in the given offset.
pub fn long_date_time(ts: &DateTime<Utc>, offset: FixedOffset) -> String {
    ts.with_timezone(&offset).format(LONG_DATE_TIME).to_string()
}
