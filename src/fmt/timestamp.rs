use chrono::{DateTime, Local};

/// Millisecond layout; `%.3f` always prints three digits, so every stamp has the same width.
pub const TIMESTAMP_LAYOUT: &str = "%Y/%m/%d - %H:%M:%S%.3f";

#[must_use]
pub fn format_timestamp(time: &DateTime<Local>) -> String {
    time.format(TIMESTAMP_LAYOUT).to_string()
}
