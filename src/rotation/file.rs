//! A sink that owns exactly one open log file and rolls over to the next one when a
//! record arrives more than one gap after the last rotation boundary.

use super::naming::FileNaming;
use super::policy::{SinkFailure, next_rollover};
use super::provision::Provision;
use crate::internal;
use crate::sink::Sink;
use chrono::{DateTime, Local, TimeDelta};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct RotatingFile {
    directory: PathBuf,
    naming: FileNaming,
    /// Zero disables rotation.
    gap: TimeDelta,
    /// Boundary the active file is named after; moves only in whole gaps.
    last_rotation: DateTime<Local>,
    active: Box<dyn Write + Send>,
    active_path: PathBuf,
    provisioner: Arc<dyn Provision>,
    on_failure: SinkFailure,
}

impl RotatingFile {
    /// Opens the first file, named after `now`, which also becomes the reference
    /// boundary for all later rotations.
    ///
    /// # Errors
    /// `Error::SinkUnavailable` when the first file cannot be provisioned.
    pub fn open(
        directory: impl Into<PathBuf>,
        naming: FileNaming,
        provisioner: Arc<dyn Provision>,
        now: DateTime<Local>,
    ) -> Result<Self, crate::Error> {
        let directory = directory.into();
        let name = naming.name(&now);
        let active = provision(provisioner.as_ref(), &directory, &name)?;
        let active_path = directory.join(&name);
        internal::debug(&format!("Opened log file {}", active_path.display()));

        Ok(Self {
            directory,
            naming,
            gap: TimeDelta::zero(),
            last_rotation: now,
            active,
            active_path,
            provisioner,
            on_failure: SinkFailure::default(),
        })
    }

    #[must_use]
    pub const fn with_gap(mut self, gap: TimeDelta) -> Self {
        self.gap = gap;
        self
    }

    #[must_use]
    pub const fn with_sink_failure(mut self, policy: SinkFailure) -> Self {
        self.on_failure = policy;
        self
    }

    #[must_use]
    pub const fn gap(&self) -> TimeDelta {
        self.gap
    }

    /// Takes effect on the next record; the reference boundary is kept.
    pub const fn set_gap(&mut self, gap: TimeDelta) {
        self.gap = gap;
    }

    /// Applies to files opened by later rotations.
    pub fn set_naming(&mut self, naming: FileNaming) {
        self.naming = naming;
    }

    pub const fn set_sink_failure(&mut self, policy: SinkFailure) {
        self.on_failure = policy;
    }

    #[must_use]
    pub const fn sink_failure(&self) -> SinkFailure {
        self.on_failure
    }

    #[must_use]
    pub const fn last_rotation(&self) -> DateTime<Local> {
        self.last_rotation
    }

    #[must_use]
    pub fn active_path(&self) -> &Path {
        &self.active_path
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Swaps in the file for `boundary`. The old handle is closed right after the new one
    /// is acquired, so exactly one file is held open outside this call.
    fn rotate_to(&mut self, boundary: DateTime<Local>) -> Result<(), crate::Error> {
        let name = self.naming.name(&boundary);
        let file = provision(self.provisioner.as_ref(), &self.directory, &name)?;

        let mut previous = std::mem::replace(&mut self.active, file);
        if let Err(e) = previous.flush() {
            internal::warn(&format!(
                "Flushing {} before close failed: {e}",
                self.active_path.display()
            ));
        }
        drop(previous);

        self.active_path = self.directory.join(&name);
        self.last_rotation = boundary;
        Ok(())
    }
}

fn provision(
    provisioner: &dyn Provision,
    dir: &Path,
    name: &str,
) -> Result<Box<dyn Write + Send>, crate::Error> {
    provisioner
        .provision(dir, name)
        .map_err(|source| crate::Error::SinkUnavailable {
            path: dir.join(name),
            source,
        })
}

impl Sink for RotatingFile {
    fn prepare(&mut self, now: DateTime<Local>) -> Result<(), crate::Error> {
        let Some(rollover) = next_rollover(self.last_rotation, now, self.gap) else {
            return Ok(());
        };

        match self.rotate_to(rollover.boundary) {
            Ok(()) => {
                internal::info(&format!(
                    "Rotated to {} ({} gap(s) elapsed)",
                    self.active_path.display(),
                    rollover.intervals
                ));
                Ok(())
            }
            // boundary stays put, so the next record tries again
            Err(e) => match self.on_failure {
                SinkFailure::KeepPrevious => {
                    internal::error(&format!(
                        "{e}; still writing to {}",
                        self.active_path.display()
                    ));
                    Ok(())
                }
                SinkFailure::Propagate => Err(e),
            },
        }
    }

    fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        self.active.write_all(line)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.active.flush()
    }
}
