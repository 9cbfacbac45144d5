//! E2E tests for preference persistence across `bv` invocations.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/board.json")
}

fn bv_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bv"));
    cmd.current_dir(dir);
    cmd.env("BOARDVIEW_LOG", "error");
    cmd.env("BOARDVIEW_CONFIG", dir.join("config.toml"));
    cmd.env_remove("BOARDVIEW_PREFS");
    cmd.env_remove("BOARDVIEW_ENDPOINT");
    cmd.env_remove("FORMAT");
    cmd
}

fn prefs_file(dir: &Path) -> PathBuf {
    dir.join("prefs/preferences.json")
}

fn run_json(dir: &Path, args: &[&str]) -> Value {
    let output = bv_cmd(dir)
        .arg("--prefs")
        .arg(prefs_file(dir))
        .arg("--json")
        .args(args)
        .output()
        .expect("bv should not crash");
    assert!(
        output.status.success(),
        "bv {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("valid JSON")
}

fn board_json(dir: &Path) -> Value {
    let fixture = fixture();
    let fixture = fixture.to_str().expect("utf8 path");
    run_json(dir, &["board", "--input", fixture])
}

#[test]
fn fresh_install_reports_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let prefs = run_json(dir.path(), &["prefs"]);

    assert_eq!(prefs["group_by"], "By Status");
    assert_eq!(prefs["sort_by"], "priority");
    assert_eq!(prefs["group_by_recognized"], true);
    assert_eq!(
        prefs["storage"],
        prefs_file(dir.path()).display().to_string()
    );
    // Reading alone never writes.
    assert!(!prefs_file(dir.path()).exists());
}

#[test]
fn group_change_survives_into_next_board() {
    let dir = TempDir::new().expect("temp dir");

    let changed = run_json(dir.path(), &["group", "by-user"]);
    assert_eq!(changed["group_by"], "By User");
    assert_eq!(changed["sort_by"], "priority");

    let raw = fs::read_to_string(prefs_file(dir.path())).expect("prefs written");
    let stored: Value = serde_json::from_str(&raw).expect("stored JSON");
    assert_eq!(stored["groupBy"], "By User");
    assert_eq!(stored["sortBy"], "priority");

    let view = board_json(dir.path());
    assert_eq!(view["group_by"], "By User");
    assert_eq!(view["groups"][0]["name"], "Anoop sharma");
}

#[test]
fn sort_change_keeps_grouping() {
    let dir = TempDir::new().expect("temp dir");
    run_json(dir.path(), &["group", "By Priority"]);
    let changed = run_json(dir.path(), &["sort", "title"]);

    assert_eq!(changed["group_by"], "By Priority");
    assert_eq!(changed["sort_by"], "title");

    let view = board_json(dir.path());
    let ids: Vec<&str> = view["groups"][2]["tickets"]
        .as_array()
        .expect("tickets")
        .iter()
        .map(|t| t["id"].as_str().expect("id"))
        .collect();
    // Priority 1: "Integrate..." before "Optimize..." by title.
    assert_eq!(view["groups"][2]["name"], "1");
    assert_eq!(ids, vec!["CAM-6", "CAM-3"]);
}

#[test]
fn unrecognized_stored_grouping_renders_empty_board() {
    let dir = TempDir::new().expect("temp dir");
    let path = prefs_file(dir.path());
    fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    fs::write(&path, r#"{"groupBy":"By Team","sortBy":"title"}"#).expect("write prefs");

    let prefs = run_json(dir.path(), &["prefs"]);
    assert_eq!(prefs["group_by"], "By Team");
    assert_eq!(prefs["group_by_recognized"], false);

    let view = board_json(dir.path());
    assert_eq!(view["group_by"], "By Team");
    assert!(view["groups"].as_array().expect("groups").is_empty());

    // Picking a real mode again repairs the board.
    run_json(dir.path(), &["group", "by-status"]);
    let view = board_json(dir.path());
    assert_eq!(view["groups"].as_array().expect("groups").len(), 3);
}

#[test]
fn unrecognized_stored_ordering_keeps_input_order() {
    let dir = TempDir::new().expect("temp dir");
    let path = prefs_file(dir.path());
    fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    fs::write(&path, r#"{"groupBy":"By Status","sortBy":"age"}"#).expect("write prefs");

    let view = board_json(dir.path());
    let in_progress: Vec<&str> = view["groups"][1]["tickets"]
        .as_array()
        .expect("tickets")
        .iter()
        .map(|t| t["id"].as_str().expect("id"))
        .collect();
    assert_eq!(in_progress, vec!["CAM-2", "CAM-3", "CAM-5"]);
}

#[test]
fn corrupt_preferences_file_falls_back_to_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let path = prefs_file(dir.path());
    fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    fs::write(&path, "{ not json").expect("write prefs");

    let prefs = run_json(dir.path(), &["prefs"]);
    assert_eq!(prefs["group_by"], "By Status");
    assert_eq!(prefs["sort_by"], "priority");
}

#[test]
fn no_persist_leaves_disk_untouched() {
    let dir = TempDir::new().expect("temp dir");
    bv_cmd(dir.path())
        .env("BOARDVIEW_PREFS", prefs_file(dir.path()))
        .args(["--no-persist", "--json", "group", "by-user"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"storage\": null"));

    assert!(!prefs_file(dir.path()).exists());
}

#[test]
fn prefs_path_from_env() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("env-prefs.json");
    bv_cmd(dir.path())
        .env("BOARDVIEW_PREFS", &path)
        .args(["sort", "title"])
        .assert()
        .success();

    let stored: Value =
        serde_json::from_str(&fs::read_to_string(&path).expect("prefs written")).expect("json");
    assert_eq!(stored["sortBy"], "title");
    assert_eq!(stored["groupBy"], "By Status");
}

#[test]
fn quiet_suppresses_confirmation() {
    let dir = TempDir::new().expect("temp dir");
    bv_cmd(dir.path())
        .arg("--prefs")
        .arg(prefs_file(dir.path()))
        .args(["-q", "group", "by-priority"])
        .assert()
        .success()
        .stdout("");

    let prefs = run_json(dir.path(), &["prefs"]);
    assert_eq!(prefs["group_by"], "By Priority");
}

#[test]
fn unknown_mode_is_rejected_and_not_stored() {
    let dir = TempDir::new().expect("temp dir");
    bv_cmd(dir.path())
        .arg("--prefs")
        .arg(prefs_file(dir.path()))
        .args(["group", "by-team"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("by-team"));

    assert!(!prefs_file(dir.path()).exists());
}

#[test]
fn completions_emit_script() {
    let dir = TempDir::new().expect("temp dir");
    bv_cmd(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bv"));
}
