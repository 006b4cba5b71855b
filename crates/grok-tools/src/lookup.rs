//! Command lookup
//!
//! Resolves a tool given either an explicit path or a bare name searched
//! on `PATH`.

use std::env;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Resolve a tool to an existing executable path.
///
/// An argument containing a path separator is taken literally and must
/// exist. A bare name is looked up in every directory of `PATH`, first
/// hit wins.
pub fn resolve(name_or_path: &str) -> Result<PathBuf> {
    let candidate = Path::new(name_or_path);
    if candidate.components().count() > 1 {
        if candidate.is_file() {
            return Ok(candidate.to_path_buf());
        }
        return Err(Error::NotFound {
            command: name_or_path.to_string(),
        });
    }

    let path_var = env::var_os("PATH").unwrap_or_default();
    for dir in env::split_paths(&path_var) {
        let full = dir.join(name_or_path);
        if full.is_file() {
            tracing::debug!("Resolved {} to {}", name_or_path, full.display());
            return Ok(full);
        }
    }

    Err(Error::NotFound {
        command: name_or_path.to_string(),
    })
}
