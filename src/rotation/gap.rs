//! Config files and CLI args give gaps as "90s", "30m", "1h" or "1d"; rotation works on
//! `TimeDelta`. These two functions bridge that gap.

use chrono::TimeDelta;

/// Accepts a bare number of seconds or a number with an `ms`, `s`, `m`, `h`, `d` or `w`
/// suffix. `"0"` disables rotation.
///
/// # Errors
/// `Error::InvalidGap` for empty, negative or unparseable input.
pub fn parse_gap(s: &str) -> Result<TimeDelta, crate::Error> {
    let trimmed = s.trim().to_lowercase();
    let invalid = || crate::Error::InvalidGap(s.to_string());

    let split = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let (num_str, unit) = trimmed.split_at(split);
    let n: i64 = num_str.parse().map_err(|_| invalid())?;

    let delta = match unit.trim() {
        "ms" => TimeDelta::try_milliseconds(n),
        "" | "s" | "sec" => TimeDelta::try_seconds(n),
        "m" | "min" => TimeDelta::try_minutes(n),
        "h" => TimeDelta::try_hours(n),
        "d" => TimeDelta::try_days(n),
        "w" => TimeDelta::try_weeks(n),
        _ => None,
    };
    delta.ok_or_else(invalid)
}

/// Largest whole unit that divides the gap evenly: `3600s` prints as `1h`.
#[must_use]
pub fn format_gap(gap: TimeDelta) -> String {
    const UNITS: [(i64, &str); 5] = [
        (7 * 24 * 3_600_000, "w"),
        (24 * 3_600_000, "d"),
        (3_600_000, "h"),
        (60_000, "m"),
        (1_000, "s"),
    ];

    let ms = gap.num_milliseconds();
    if ms == 0 {
        return "0".to_string();
    }
    for (size, suffix) in UNITS {
        if ms % size == 0 {
            return format!("{}{suffix}", ms / size);
        }
    }
    format!("{ms}ms")
}
