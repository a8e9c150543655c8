//! CLI smoke tests.
//!
//! Every invocation gets an empty config directory and no `MODECHAT_SERVER`
//! so the developer's own settings never leak in.

#![allow(clippy::unwrap_used)]

mod common;

use assert_cmd::Command;
use common::FakeBackend;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn modechat(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("modechat").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("NO_COLOR", "1")
        .env_remove("MODECHAT_SERVER")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_displays_usage() {
    let home = TempDir::new().unwrap();
    modechat(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("profile switching"))
        .stdout(predicate::str::contains("--server"))
        .stdout(predicate::str::contains("send"))
        .stdout(predicate::str::contains("auto"));
}

#[test]
fn test_version_displays_version() {
    let home = TempDir::new().unwrap();
    modechat(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_profiles_lists_defaults() {
    let home = TempDir::new().unwrap();
    modechat(&home)
        .arg("profiles")
        .assert()
        .success()
        .stdout(predicate::str::contains("conversational"))
        .stdout(predicate::str::contains("exploratory"))
        .stdout(predicate::str::contains("strict"))
        .stdout(predicate::str::contains("debug"));
}

#[test]
fn test_profiles_from_config_file() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("modechat");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("config.toml"),
        "[modechat]\nprofiles = [\"formal\", \"casual\"]\n",
    )
    .unwrap();

    modechat(&home)
        .arg("profiles")
        .assert()
        .success()
        .stdout(predicate::str::contains("formal"))
        .stdout(predicate::str::contains("casual"))
        .stdout(predicate::str::contains("exploratory").not());
}

#[test]
fn test_configure_show_without_config() {
    let home = TempDir::new().unwrap();
    modechat(&home)
        .args(["configure", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(not set)"));
}

#[test]
fn test_invalid_server_url() {
    let home = TempDir::new().unwrap();
    modechat(&home)
        .args(["state", "--server", "localhost:8000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid server URL"));
}

#[test]
fn test_unparseable_server_url_from_config_file() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("modechat");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("config.toml"),
        "[modechat]\nserver = \"https://host:notaport\"\n",
    )
    .unwrap();

    modechat(&home)
        .arg("state")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid server URL"))
        .stderr(predicate::str::contains("Could not reach").not());
}

#[test]
fn test_send_requires_message() {
    let home = TempDir::new().unwrap();
    modechat(&home).arg("send").assert().failure();
}

#[test]
fn test_auto_rejects_unknown_value() {
    let home = TempDir::new().unwrap();
    modechat(&home).args(["auto", "maybe"]).assert().failure();
}

#[test]
fn test_state_unreachable_backend() {
    let home = TempDir::new().unwrap();
    modechat(&home)
        .args(["state", "--server", "http://127.0.0.1:9"])
        .assert()
        .code(exitcode::UNAVAILABLE)
        .stderr(predicate::str::contains("Could not reach"));
}

#[test]
fn test_state_prints_backend_mode() {
    let home = TempDir::new().unwrap();
    let backend = FakeBackend::start(vec![(200, r#"{"profile":"strict","auto":false}"#)]);

    modechat(&home)
        .args(["state", "--server", &backend.url])
        .assert()
        .success()
        .stdout(predicate::str::contains("strict"))
        .stdout(predicate::str::contains("off"));
}

#[test]
fn test_send_prints_reply() {
    let home = TempDir::new().unwrap();
    let backend = FakeBackend::start(vec![
        (200, r#"{"profile":"conversational","auto":true}"#),
        (
            200,
            r#"{"reply":"Hi! How can I help?","profile":"conversational","auto":true}"#,
        ),
    ]);

    modechat(&home)
        .args(["send", "hello", "there", "--server", &backend.url])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hi! How can I help?"));

    assert_eq!(
        backend.request_lines(),
        vec!["GET /api/state", "POST /api/chat"]
    );
    assert!(backend.requests()[1].body.contains("\"hello there\""));
}

#[test]
fn test_send_failure_exits_unavailable() {
    let home = TempDir::new().unwrap();
    let backend = FakeBackend::start(vec![
        (200, r#"{"profile":"conversational","auto":true}"#),
        (500, r#"{"detail":"boom"}"#),
    ]);

    modechat(&home)
        .args(["send", "hello", "--server", &backend.url])
        .assert()
        .code(exitcode::UNAVAILABLE)
        .stdout(predicate::str::contains("Failed to send message."))
        .stderr(predicate::str::contains("Error."));
}

#[test]
fn test_server_from_environment() {
    let home = TempDir::new().unwrap();
    let backend = FakeBackend::start(vec![(200, r#"{"auto":true,"profile":"debug"}"#)]);

    modechat(&home)
        .env("MODECHAT_SERVER", &backend.url)
        .args(["auto", "on"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Automatic mode enabled."));

    assert_eq!(backend.request_lines(), vec!["POST /api/auto/1"]);
}
