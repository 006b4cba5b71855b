//! Operation implementations for the admin CLI

mod project;
mod refresh;

pub use project::{add_project, delete_project};
pub use refresh::{refresh_configuration, upload_configuration};

use std::path::PathBuf;

use grok_web::ServiceClient;

/// Shared state for one invocation's operations.
///
/// `doit` is the dry-run switch: when false, every mutating action
/// (service call, file write, subprocess) is suppressed at the point where
/// it would happen and a log line is emitted instead.
pub struct OpContext {
    pub client: ServiceClient,
    pub base: PathBuf,
    pub roconfig: Option<PathBuf>,
    pub merge_tool: PathBuf,
    pub doit: bool,
}
