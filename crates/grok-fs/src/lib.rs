//! Filesystem layer for the indexer admin tool
//!
//! Provides instance path resolution, whole-file configuration installs,
//! scoped temp staging and the cross-process instance lock.

pub mod error;
pub mod io;
pub mod lock;
pub mod paths;

pub use error::{Error, Result};
pub use io::{install, remove_tree, stage_text};
pub use lock::InstanceLock;
pub use paths::config_file;
