//! Common utilities

use chrono::{DateTime, SecondsFormat, Utc};
use std::time::SystemTime;

/// Format a byte count as kilobytes with one decimal place
pub fn format_size_kb(bytes: u64) -> String {
    format!("{:.1} KB", bytes as f64 / 1024.0)
}

/// Format a timestamp as ISO 8601 in UTC with millisecond precision
pub fn format_timestamp(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Format a filesystem time, or "unknown" when the platform did not report one
pub fn format_system_time(time: Option<SystemTime>) -> String {
    time.map(|t| format_timestamp(DateTime::<Utc>::from(t)))
        .unwrap_or_else(|| "unknown".to_string())
}
