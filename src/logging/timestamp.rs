//! Local timestamps in `YYYY-MM-DD.HH:MM:SS` form

use chrono::{DateTime, Local, NaiveDateTime};

/// strftime pattern for line timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d.%H:%M:%S";

/// Format a local time for a log line
pub fn format(time: &DateTime<Local>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Current local time, formatted
pub fn now() -> String {
    format(&Local::now())
}

/// Parse a timestamp produced by [`format`]
pub fn parse(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
}
