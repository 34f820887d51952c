//! The rotation decision itself, kept free of I/O.

use chrono::{DateTime, Local, TimeDelta};
use std::fmt;
use std::str::FromStr;

/// A due rotation: the new boundary and how many whole gaps it lies past the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rollover {
    pub boundary: DateTime<Local>,
    pub intervals: i64,
}

/// Returns the next rotation boundary when more than one `gap` has passed since `last`.
///
/// The boundary advances by whole multiples of `gap` (`floor(elapsed / gap)` of them),
/// so boundaries stay aligned to the initial reference time however sparse the writes
/// are. Intervals skipped without any record get no boundary of their own. A zero or
/// negative gap never rotates.
#[must_use]
pub fn next_rollover(
    last: DateTime<Local>,
    now: DateTime<Local>,
    gap: TimeDelta,
) -> Option<Rollover> {
    if gap <= TimeDelta::zero() {
        return None;
    }
    let elapsed = now - last;
    if elapsed <= gap {
        return None;
    }

    let gap_ns = gap.num_nanoseconds()?;
    let elapsed_ns = elapsed.num_nanoseconds().unwrap_or(i64::MAX);
    let intervals = elapsed_ns / gap_ns;
    // intervals * gap_ns <= elapsed_ns, so this cannot overflow
    let boundary = last.checked_add_signed(TimeDelta::nanoseconds(intervals * gap_ns))?;

    Some(Rollover {
        boundary,
        intervals,
    })
}

/// What to do when the next file cannot be provisioned during rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SinkFailure {
    /// Keep writing to the previous file and retry on the next record. The failure is
    /// reported on stderr through [`crate::internal`], which starts itself at `Warn` if
    /// `internal::init` was never called.
    #[default]
    KeepPrevious,
    /// Return `Error::SinkUnavailable` from the emit call; the record is not written.
    Propagate,
}

impl SinkFailure {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::KeepPrevious => "keep_previous",
            Self::Propagate => "propagate",
        }
    }
}

impl fmt::Display for SinkFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SinkFailure {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "keep_previous" | "keep" => Ok(Self::KeepPrevious),
            "propagate" | "error" => Ok(Self::Propagate),
            _ => Err(crate::Error::InvalidSinkFailure(s.to_string())),
        }
    }
}
