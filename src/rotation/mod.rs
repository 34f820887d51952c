//! Time-gapped file rotation. Rotation is pull-based: nothing runs in the background,
//! the check happens when a record is about to be written.

mod file;
mod gap;
mod logger;
mod naming;
mod policy;
mod provision;

pub use file::RotatingFile;
pub use gap::{format_gap, parse_gap};
pub use logger::{RotatingFileBuilder, RotatingFileLogger};
pub use naming::{DAILY_PATTERN, FileNaming, HOURLY_PATTERN, MINUTELY_PATTERN};
pub use policy::{Rollover, SinkFailure, next_rollover};
pub use provision::{FsProvisioner, Provision};
