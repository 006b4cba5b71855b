//! Whole-file installs, temp staging and source tree removal

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::{Error, Result};

/// Install a configuration file by copying `src` over `dst`.
///
/// This is a content copy, not a rename: `dst` keeps its inode, so ownership
/// and permissions of an existing destination survive the install, and the
/// source may live on a different filesystem.
pub fn install(src: &Path, dst: &Path) -> Result<()> {
    tracing::debug!("Copying {} to {}", src.display(), dst.display());
    fs::copy(src, dst).map_err(|source| Error::Copy {
        src: src.to_path_buf(),
        dst: dst.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Write `content` to a named temporary file and return its handle.
///
/// The file is deleted when the handle drops, on every exit path.
pub fn stage_text(content: &str) -> Result<NamedTempFile> {
    let mut file =
        NamedTempFile::new().map_err(|source| Error::io(std::env::temp_dir(), source))?;
    file.write_all(content.as_bytes())
        .map_err(|source| Error::io(file.path(), source))?;
    file.flush()
        .map_err(|source| Error::io(file.path(), source))?;
    Ok(file)
}

/// Recursively remove a directory tree.
pub fn remove_tree(path: &Path) -> Result<()> {
    tracing::debug!("Removing directory tree {}", path.display());
    fs::remove_dir_all(path).map_err(|source| Error::io(path, source))
}
