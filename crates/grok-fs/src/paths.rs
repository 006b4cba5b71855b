//! Well-known paths inside an indexer instance base directory

use std::path::{Path, PathBuf};

/// Directory under the instance base that holds configuration files.
pub const CONFIG_DIR: &str = "etc";

/// File name of the persisted service configuration.
pub const CONFIG_FILE: &str = "configuration.xml";

/// Return the local configuration file path for an instance base directory.
pub fn config_file(base: &Path) -> PathBuf {
    base.join(CONFIG_DIR).join(CONFIG_FILE)
}
