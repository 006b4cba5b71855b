//! Subprocess execution with captured output

use std::ffi::OsStr;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use crate::{Error, Result};

/// Run `program` with `args`, capturing stdout and stderr.
///
/// On success the captured standard output is returned. A non-zero exit
/// code or termination by signal yields [`Error::Failed`] carrying the
/// combined output. Execution is bounded by `timeout`; an overrunning
/// child is killed.
pub async fn run<S: AsRef<OsStr>>(
    program: &Path,
    args: &[S],
    timeout: Duration,
) -> Result<String> {
    let command = render(program, args);
    tracing::debug!("Running {}", command);

    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let output = tokio::time::timeout(timeout, cmd.output())
        .await
        .map_err(|_| Error::Timeout {
            command: command.clone(),
            secs: timeout.as_secs(),
        })?
        .map_err(|source| Error::Spawn {
            command: command.clone(),
            source,
        })?;

    if !output.status.success() {
        let status = match output.status.code() {
            Some(code) => format!("exit code {code}"),
            None => "terminated by signal".to_string(),
        };
        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        return Err(Error::Failed {
            command,
            status,
            output: combined,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn render<S: AsRef<OsStr>>(program: &Path, args: &[S]) -> String {
    let mut parts = vec![program.display().to_string()];
    parts.extend(args.iter().map(|a| a.as_ref().to_string_lossy().into_owned()));
    parts.join(" ")
}
