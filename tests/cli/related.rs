use crate::cli::support::{relnote, stdout_json, write_config, write_links, SHARED_HUB_LINKS};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Related command tests
// ============================================================================

fn result_paths(json: &serde_json::Value) -> Vec<String> {
    json["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["path"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_related_human_output() {
    let dir = tempdir().unwrap();
    write_links(dir.path(), SHARED_HUB_LINKS);

    relnote()
        .current_dir(dir.path())
        .args(["related", "A.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Related to A:"))
        .stdout(predicate::str::contains("2.35 [##        ] D"))
        .stdout(predicate::str::contains("via: B, C"))
        .stdout(predicate::str::contains("0.91 [#         ] E"));
}

#[test]
fn test_related_json_scores_and_order() {
    let dir = tempdir().unwrap();
    write_links(dir.path(), SHARED_HUB_LINKS);

    let output = relnote()
        .current_dir(dir.path())
        .args(["--format", "json", "related", "A.md"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["note"], "A.md");
    assert_eq!(json["total"], 4);
    assert_eq!(result_paths(&json), vec!["D.md", "E.md", "C.md", "B.md"]);

    let d = &json["results"][0];
    assert!((d["score"].as_f64().unwrap() - 2.3529).abs() < 1e-4);
    assert_eq!(d["name"], "D");
    assert_eq!(d["common_neighbors"], serde_json::json!(["B.md", "C.md"]));

    let c = &json["results"][2];
    assert_eq!(c["score"].as_f64().unwrap(), 0.0);
    assert_eq!(c["common_neighbors"], serde_json::json!([]));
}

#[test]
fn test_related_without_direct_links() {
    let dir = tempdir().unwrap();
    write_links(dir.path(), SHARED_HUB_LINKS);

    let output = relnote()
        .current_dir(dir.path())
        .args([
            "--format",
            "json",
            "related",
            "A.md",
            "--no-backlinks",
            "--no-outgoing",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(result_paths(&stdout_json(&output)), vec!["D.md", "E.md"]);
}

#[test]
fn test_related_resolves_link_text() {
    let dir = tempdir().unwrap();
    write_links(dir.path(), SHARED_HUB_LINKS);

    let output = relnote()
        .current_dir(dir.path())
        .args(["--format", "json", "related", "A"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["note"], "A.md");
}

#[test]
fn test_related_limit_and_all() {
    let dir = tempdir().unwrap();
    write_links(dir.path(), SHARED_HUB_LINKS);

    let output = relnote()
        .current_dir(dir.path())
        .args(["--format", "json", "related", "A.md", "--limit", "1"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["total"], 4);
    assert_eq!(result_paths(&json), vec!["D.md"]);

    relnote()
        .current_dir(dir.path())
        .args(["related", "A.md", "-n", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("... 2 more"));

    relnote()
        .current_dir(dir.path())
        .args(["related", "A.md", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("more").not());
}

#[test]
fn test_related_limit_conflicts_with_all() {
    let dir = tempdir().unwrap();
    write_links(dir.path(), SHARED_HUB_LINKS);

    relnote()
        .current_dir(dir.path())
        .args(["related", "A.md", "--all", "--limit", "3"])
        .assert()
        .code(2);
}

#[test]
fn test_related_zero_limit_rejected() {
    let dir = tempdir().unwrap();
    write_links(dir.path(), SHARED_HUB_LINKS);

    relnote()
        .current_dir(dir.path())
        .args(["related", "A.md", "--limit", "0"])
        .assert()
        .code(2);
}

#[test]
fn test_related_records_output() {
    let dir = tempdir().unwrap();
    write_links(dir.path(), SHARED_HUB_LINKS);

    relnote()
        .current_dir(dir.path())
        .args(["--format", "records", "related", "A.md", "--no-outgoing"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H relnote=1 records=1 mode=related note=\"A.md\" results=2 shown=2",
        ))
        .stdout(predicate::str::contains(
            "N \"D.md\" score=2.3529 common=\"B.md,C.md\"",
        ))
        .stdout(predicate::str::contains(
            "N \"E.md\" score=0.9102 common=\"C.md\"",
        ));
}

#[test]
fn test_related_exclude_flag() {
    let dir = tempdir().unwrap();
    write_links(
        dir.path(),
        r#"{
          "Q.md": {"hub.md": 1, "Archive/old.md": 1},
          "Archive/twin.md": {"hub.md": 1},
          "Archive/old.md": {"hub.md": 1},
          "peer.md": {"hub.md": 1}
        }"#,
    );

    let output = relnote()
        .current_dir(dir.path())
        .args(["--format", "json", "related", "Q.md", "--exclude", "Archive/"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let paths = result_paths(&stdout_json(&output));
    // Excluded notes never score, but a direct link still shows up
    assert!(paths.contains(&"peer.md".to_string()));
    assert!(paths.contains(&"Archive/old.md".to_string()));
    assert!(!paths.contains(&"Archive/twin.md".to_string()));
}

#[test]
fn test_related_uses_config_file() {
    let dir = tempdir().unwrap();
    write_links(dir.path(), SHARED_HUB_LINKS);
    write_config(
        dir.path(),
        "[analysis]\nexcluded_folders = \"\"\ninclude_outgoing_direct_links = false\ninclude_backlink_direct_links = false\n\n[display]\nshow_folder_names = true\nlimit = 1\n",
    );

    let output = relnote()
        .current_dir(dir.path())
        .args(["--format", "json", "related", "A.md"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["total"], 2);
    assert_eq!(result_paths(&json), vec!["D.md"]);
    assert_eq!(json["results"][0]["name"], "D");
}

#[test]
fn test_related_show_folders() {
    let dir = tempdir().unwrap();
    write_links(
        dir.path(),
        r#"{"Notes/A.md": {"Hubs/H.md": 1}, "Notes/B.md": {"Hubs/H.md": 1}}"#,
    );

    relnote()
        .current_dir(dir.path())
        .args(["related", "Notes/A.md", "--show-folders", "--no-outgoing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("] Notes/B"))
        .stdout(predicate::str::contains("via: Hubs/H"));
}

#[test]
fn test_related_unknown_note_is_empty() {
    let dir = tempdir().unwrap();
    write_links(dir.path(), SHARED_HUB_LINKS);

    relnote()
        .current_dir(dir.path())
        .args(["related", "Nowhere.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No related notes found."));
}

#[test]
fn test_related_missing_snapshot() {
    let dir = tempdir().unwrap();

    relnote()
        .current_dir(dir.path())
        .args(["related", "A.md"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("link snapshot not found"));
}

#[test]
fn test_related_missing_snapshot_json_error() {
    let dir = tempdir().unwrap();

    relnote()
        .current_dir(dir.path())
        .args(["--format", "json", "related", "A.md"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("snapshot_not_found"));
}

#[test]
fn test_related_malformed_snapshot() {
    let dir = tempdir().unwrap();
    write_links(dir.path(), "{ not json");

    relnote()
        .current_dir(dir.path())
        .args(["related", "A.md"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid link snapshot"));
}

#[test]
fn test_related_links_flag_and_root() {
    let dir = tempdir().unwrap();
    let vault = dir.path().join("vault");
    std::fs::create_dir_all(&vault).unwrap();
    std::fs::write(vault.join("export.json"), SHARED_HUB_LINKS).unwrap();

    relnote()
        .arg("--root")
        .arg(&vault)
        .args(["--links", "export.json", "related", "A.md", "--no-outgoing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("D"));
}

#[test]
fn test_related_is_repeatable() {
    let dir = tempdir().unwrap();
    write_links(dir.path(), SHARED_HUB_LINKS);

    let run = || {
        relnote()
            .current_dir(dir.path())
            .args(["--format", "records", "related", "A.md"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}
