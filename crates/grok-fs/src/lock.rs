//! Cross-process instance lock
//!
//! One admin invocation at a time: the lock is a named file in the system
//! temp directory holding an exclusive advisory flock. Acquisition is
//! non-blocking; a held lock is reported immediately instead of waiting.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::{Error, Result};

/// Guard for the process-wide instance lock.
///
/// The lock is released when the guard drops, whether the run completed
/// normally or unwound with an error. The lock file itself is left in place
/// so concurrent starters contend on a stable path.
#[derive(Debug)]
pub struct InstanceLock {
    file: File,
    path: PathBuf,
}

impl InstanceLock {
    /// Try to acquire the instance lock named after `program`.
    ///
    /// Returns [`Error::AlreadyLocked`] without blocking when another
    /// process holds the lock.
    pub fn acquire(program: &str) -> Result<Self> {
        let path = std::env::temp_dir().join(format!("{program}.lock"));
        Self::acquire_at(path)
    }

    /// Try to acquire the lock at an explicit path.
    pub fn acquire_at(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(|source| Error::io(&path, source))?;

        match file.try_lock_exclusive() {
            Ok(()) => {
                tracing::debug!("Acquired instance lock at {}", path.display());
                Ok(Self { file, path })
            }
            Err(source)
                if source.raw_os_error() == fs2::lock_contended_error().raw_os_error() =>
            {
                Err(Error::AlreadyLocked { path })
            }
            Err(source) => Err(Error::Lock { path, source }),
        }
    }

    /// Path of the underlying lock file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for InstanceLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
        tracing::debug!("Released instance lock at {}", self.path.display());
    }
}
