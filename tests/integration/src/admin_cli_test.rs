//! End-to-end smoke tests driving the compiled `grokadm` binary.

#![cfg(unix)]

use std::fs;

use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

fn grokadm(tmp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("grokadm").expect("grokadm binary");
    // Isolate the instance lock per test.
    cmd.env("TMPDIR", tmp.path());
    cmd
}

#[test]
fn version_flag_works() {
    Command::cargo_bin("grokadm")
        .expect("grokadm binary")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("grokadm"));
}

#[test]
fn refresh_roundtrip_against_mock_service() {
    let tmp = TempDir::new().unwrap();
    let base = tmp.path().join("inst");
    fs::create_dir_all(base.join("etc")).unwrap();
    fs::write(base.join("etc/configuration.xml"), "stale").unwrap();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/source/api/v1/configuration");
        then.status(200).body("<config/>");
    });

    grokadm(&tmp)
        .args([
            "-b",
            base.to_str().unwrap(),
            "-U",
            &server.url("/source"),
            "-c",
            "/bin/cat",
            "-r",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Refreshing configuration"));

    assert_eq!(
        fs::read_to_string(base.join("etc/configuration.xml")).unwrap(),
        "<config/>"
    );
}

#[test]
fn lock_contention_exits_with_failure() {
    let tmp = TempDir::new().unwrap();
    let base = tmp.path().join("inst");
    fs::create_dir_all(base.join("etc")).unwrap();
    fs::write(base.join("etc/configuration.xml"), "stale").unwrap();

    let _held = grok_fs::InstanceLock::acquire_at(tmp.path().join("grokadm.lock")).unwrap();

    grokadm(&tmp)
        .args([
            "-b",
            base.to_str().unwrap(),
            "-U",
            "http://127.0.0.1:1/source",
            "-c",
            "/bin/cat",
            "-r",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Already running"));
}
