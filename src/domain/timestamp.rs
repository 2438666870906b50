//! Timestamped names for sweep folders.

use chrono::{DateTime, TimeZone};

/// Format used for sweep folder names, e.g. `2026-10-17-09.30.05.123`.
///
/// Lexicographic order matches chronological order and the result contains
/// no path separators.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H.%M.%S%.3f";

pub fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}
