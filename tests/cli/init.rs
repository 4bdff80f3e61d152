use crate::cli::support::{relnote, stdout_json};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Init command tests
// ============================================================================

#[test]
fn test_init_writes_default_config() {
    let dir = tempdir().unwrap();

    relnote()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config to"));

    let content = fs::read_to_string(dir.path().join(".relnote/config.toml")).unwrap();
    assert!(content.contains("[analysis]"));
    assert!(content.contains("include_outgoing_direct_links = true"));
    assert!(content.contains("include_backlink_direct_links = true"));
    assert!(content.contains("limit = 50"));
}

#[test]
fn test_init_refuses_overwrite() {
    let dir = tempdir().unwrap();

    relnote()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    relnote()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("already exists"));

    relnote()
        .current_dir(dir.path())
        .args(["init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_init_json_status() {
    let dir = tempdir().unwrap();

    let output = relnote()
        .current_dir(dir.path())
        .args(["--format", "json", "init"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["status"], "ok");
    assert!(json["path"]
        .as_str()
        .unwrap()
        .ends_with("config.toml"));
}

#[test]
fn test_init_custom_config_path() {
    let dir = tempdir().unwrap();

    relnote()
        .current_dir(dir.path())
        .args(["--config", "settings/relnote.toml", "init"])
        .assert()
        .success();

    assert!(dir.path().join("settings/relnote.toml").exists());
    assert!(!dir.path().join(".relnote/config.toml").exists());
}
