use crate::cli::support::{relnote, stdout_json, write_links};
use predicates::prelude::*;
use tempfile::tempdir;

const FOLDER_LINKS: &str = r#"{
  "Projects/Alpha/Index.md": {"Projects/Alpha/Plan.md": 1, "Projects/Beta/Plan.md": 1},
  "Projects/Beta/Index.md": {"Projects/Beta/Plan.md": 1},
  "Plan.md": {}
}"#;

// ============================================================================
// Resolve command tests
// ============================================================================

#[test]
fn test_resolve_exact_and_extension() {
    let dir = tempdir().unwrap();
    write_links(dir.path(), FOLDER_LINKS);

    relnote()
        .current_dir(dir.path())
        .args(["resolve", "Plan.md"])
        .assert()
        .success()
        .stdout("Plan.md\n");

    relnote()
        .current_dir(dir.path())
        .args(["resolve", "Plan"])
        .assert()
        .success()
        .stdout("Plan.md\n");
}

#[test]
fn test_resolve_prefers_context_folder() {
    let dir = tempdir().unwrap();
    write_links(dir.path(), FOLDER_LINKS);

    relnote()
        .current_dir(dir.path())
        .args([
            "resolve",
            "Beta/Plan",
            "--from",
            "Projects/Beta/Index.md",
        ])
        .assert()
        .success()
        .stdout("Projects/Beta/Plan.md\n");
}

#[test]
fn test_resolve_json() {
    let dir = tempdir().unwrap();
    write_links(dir.path(), FOLDER_LINKS);

    let output = relnote()
        .current_dir(dir.path())
        .args(["--format", "json", "resolve", "Alpha/Plan"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["name"], "Alpha/Plan");
    assert_eq!(json["path"], "Projects/Alpha/Plan.md");
    assert!(json["from"].is_null());
}

#[test]
fn test_resolve_records() {
    let dir = tempdir().unwrap();
    write_links(dir.path(), FOLDER_LINKS);

    relnote()
        .current_dir(dir.path())
        .args(["--format", "records", "resolve", "Plan"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H relnote=1 records=1 mode=resolve name=\"Plan\"",
        ))
        .stdout(predicate::str::contains("N \"Plan.md\""));
}

#[test]
fn test_resolve_unknown_name() {
    let dir = tempdir().unwrap();
    write_links(dir.path(), FOLDER_LINKS);

    relnote()
        .current_dir(dir.path())
        .args(["resolve", "Missing"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("note not found: Missing"));
}
