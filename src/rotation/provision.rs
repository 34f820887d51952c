//! Opening files is kept behind a trait so the rotation logic never touches the
//! filesystem directly and tests can observe every open.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Given a directory and a file name, returns an append-mode writer or the reason it
/// could not be opened.
pub trait Provision: Send + Sync {
    /// # Errors
    /// Directory creation or file open failures.
    fn provision(&self, dir: &Path, file_name: &str) -> io::Result<Box<dyn Write + Send>>;
}

/// Creates the directory recursively, then opens (or creates) the file in append mode.
/// An empty directory means the current working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProvisioner;

impl Provision for FsProvisioner {
    fn provision(&self, dir: &Path, file_name: &str) -> io::Result<Box<dyn Write + Send>> {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join(file_name))?;
        Ok(Box::new(file))
    }
}
