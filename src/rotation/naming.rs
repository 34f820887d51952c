//! Rotated files are named from the rotation boundary, never from the wall-clock
//! instant of the write that triggered the rollover.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use std::fmt::{self, Write};
use std::sync::Arc;

pub const DAILY_PATTERN: &str = "%Y-%m-%d.log";
pub const HOURLY_PATTERN: &str = "%Y-%m-%d_%H.log";
pub const MINUTELY_PATTERN: &str = "%Y-%m-%d_%H-%M.log";

/// Maps a rotation boundary to a file name.
///
/// Patterns are checked when built, so naming never fails at rotation time.
#[derive(Clone)]
pub struct FileNaming(Naming);

#[derive(Clone)]
enum Naming {
    Pattern(String),
    Custom(Arc<dyn Fn(&DateTime<Local>) -> String + Send + Sync>),
}

impl Default for FileNaming {
    fn default() -> Self {
        Self::daily()
    }
}

impl fmt::Debug for FileNaming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Naming::Pattern(p) => f.debug_tuple("Pattern").field(p).finish(),
            Naming::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl FileNaming {
    /// `2024-01-02.log`
    #[must_use]
    pub fn daily() -> Self {
        Self(Naming::Pattern(DAILY_PATTERN.to_string()))
    }

    /// `2024-01-02_15.log`, for gaps shorter than a day, where daily names would collide.
    #[must_use]
    pub fn hourly() -> Self {
        Self(Naming::Pattern(HOURLY_PATTERN.to_string()))
    }

    /// `2024-01-02_15-04.log`. Avoids `:` since some filesystems reject it.
    #[must_use]
    pub fn minutely() -> Self {
        Self(Naming::Pattern(MINUTELY_PATTERN.to_string()))
    }

    /// strftime pattern applied to the boundary, e.g. `%Y-%m-%d.log`.
    ///
    /// # Errors
    /// `Error::InvalidFileName` for unknown or incomplete specifiers such as `%Q`.
    pub fn pattern(pattern: impl Into<String>) -> Result<Self, crate::Error> {
        let pattern = pattern.into();
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(crate::Error::InvalidFileName(pattern));
        }
        Ok(Self(Naming::Pattern(pattern)))
    }

    pub fn custom(f: impl Fn(&DateTime<Local>) -> String + Send + Sync + 'static) -> Self {
        Self(Naming::Custom(Arc::new(f)))
    }

    /// The strftime pattern, or `None` for a custom function.
    #[must_use]
    pub fn as_pattern(&self) -> Option<&str> {
        match &self.0 {
            Naming::Pattern(p) => Some(p),
            Naming::Custom(_) => None,
        }
    }

    #[must_use]
    pub fn name(&self, boundary: &DateTime<Local>) -> String {
        match &self.0 {
            Naming::Pattern(pattern) => {
                let mut name = String::new();
                // validated on construction; the raw pattern is the fallback
                if write!(name, "{}", boundary.format(pattern)).is_err() {
                    name.clone_from(pattern);
                }
                name
            }
            Naming::Custom(f) => f(boundary),
        }
    }
}
