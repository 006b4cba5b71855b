//! Cross-crate integration tests for the config sync pipeline
//!
//! These exercise the fetch -> stage -> merge -> install flow through the
//! library crates, without going through the compiled binary.

use std::fs;
use std::time::Duration;

use httpmock::prelude::*;
use tempfile::TempDir;

use grok_fs::InstanceLock;
use grok_web::ServiceClient;

#[tokio::test]
async fn fetch_stage_install_roundtrip() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/source/api/v1/configuration");
        then.status(200).body("<configuration>live</configuration>");
    });

    let temp = TempDir::new().unwrap();
    let base = temp.path();
    fs::create_dir_all(base.join("etc")).unwrap();
    let main_config = grok_fs::config_file(base);
    fs::write(&main_config, "stale").unwrap();

    let client = ServiceClient::new(&server.url("/source"), Duration::from_secs(5)).unwrap();
    let current = client.get_configuration().await.unwrap();

    let staged = grok_fs::stage_text(&current).unwrap();
    let staged_path = staged.path().to_path_buf();
    grok_fs::install(staged.path(), &main_config).unwrap();
    drop(staged);

    assert_eq!(
        fs::read_to_string(&main_config).unwrap(),
        "<configuration>live</configuration>"
    );
    // The staging file is gone once its scope ends.
    assert!(!staged_path.exists());
}

#[cfg(unix)]
#[tokio::test]
async fn merge_tool_output_becomes_installed_content() {
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    let temp = TempDir::new().unwrap();
    let base = temp.path();
    fs::create_dir_all(base.join("etc")).unwrap();
    let main_config = grok_fs::config_file(base);
    fs::write(&main_config, "stale").unwrap();

    let roconfig = base.join("readonly.xml");
    fs::write(&roconfig, "<ro/>").unwrap();

    let merge = base.join("config-merge");
    fs::write(&merge, "#!/bin/sh\ncat \"$1\" \"$2\"\n").unwrap();
    fs::set_permissions(&merge, fs::Permissions::from_mode(0o755)).unwrap();

    let staged = grok_fs::stage_text("<live/>").unwrap();
    let merged = grok_tools::run(
        Path::new(&merge),
        &[roconfig.as_os_str(), staged.path().as_os_str()],
        Duration::from_secs(30),
    )
    .await
    .unwrap();

    let merged_file = grok_fs::stage_text(&merged).unwrap();
    grok_fs::install(merged_file.path(), &main_config).unwrap();

    assert_eq!(fs::read_to_string(&main_config).unwrap(), "<ro/><live/>");
}

#[test]
fn instance_lock_is_exclusive_across_guards() {
    let temp = TempDir::new().unwrap();
    let lock_path = temp.path().join("admin.lock");

    let first = InstanceLock::acquire_at(&lock_path).unwrap();
    assert!(matches!(
        InstanceLock::acquire_at(&lock_path).unwrap_err(),
        grok_fs::Error::AlreadyLocked { .. }
    ));

    drop(first);
    InstanceLock::acquire_at(&lock_path).unwrap();
}
