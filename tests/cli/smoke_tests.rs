use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

#[path = "../common/mod.rs"]
mod common;
use common::{TempWorkspace, days_ago};

fn sheet_scan() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sheet-scan"));
    cmd.env_remove("SHEET_SCAN_ROOT").env_remove("RUST_LOG");
    cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn shows_help() {
    sheet_scan()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sheet-scan"))
        .stdout(predicate::str::contains("keywords"));
}

#[test]
fn scan_prints_latest_revision_per_sheet() {
    let ws = TempWorkspace::new();
    ws.create_file_at("A101.pdf", "v1", days_ago(10));
    ws.create_file_at("a101-rev2.pdf", "v2", days_ago(2));
    ws.create_file("B200.dwg", "cad");
    ws.create_file("desktop.ini", "");

    let json = stdout_json(sheet_scan().arg("--root").arg(ws.path()).args([
        "scan",
        "--extensions",
        ".pdf",
        "--latest-per-sheet",
    ]));

    assert_eq!(json["count"], 1);
    assert_eq!(json["files"][0]["name"], "a101-rev2.pdf");
    assert_eq!(json["files"][0]["sheet"], "a101");
}

#[test]
fn root_can_come_from_the_environment() {
    let ws = TempWorkspace::new();
    ws.create_file("Scope.pdf", "x");

    let json = stdout_json(sheet_scan().env("SHEET_SCAN_ROOT", ws.path()).args(["keywords", "scope"]));

    assert_eq!(json["count"], 1);
    assert!(json["files"][0].get("sheet").is_none());
}

#[test]
fn root_can_come_from_a_config_file() {
    let ws = TempWorkspace::new();
    ws.create_file("A101.pdf", "x");
    let config = ws.create_file("settings/sheet-scan.json", "");
    std::fs::write(&config, serde_json::json!({ "root": ws.path() }).to_string()).unwrap();

    let json = stdout_json(sheet_scan().arg("--config").arg(&config).arg("count"));

    assert_eq!(json, serde_json::json!({ "count": 2 }));
}

#[test]
fn inaccessible_root_is_reported_with_exit_code_zero() {
    let ws = TempWorkspace::new();
    let missing = ws.path().join("gone");

    let json = stdout_json(sheet_scan().arg("--root").arg(&missing).args(["keywords", "a"]));
    assert_eq!(json, serde_json::json!({ "files": [], "error": "Project root not accessible" }));

    let json = stdout_json(sheet_scan().arg("--root").arg(&missing).arg("root-accessible"));
    assert_eq!(json, serde_json::json!({ "accessible": false }));
}

#[test]
fn escaping_path_is_a_soft_error() {
    let ws = TempWorkspace::new();

    let json = stdout_json(sheet_scan().arg("--root").arg(ws.path()).args(["scan", "--path", "../.."]));

    assert_eq!(json["error"], "Path escapes project root: ../..");
}

#[test]
fn dot_segments_do_not_leak_into_paths() {
    let ws = TempWorkspace::new();
    ws.create_file("Specs/S1.pdf", "x");
    ws.create_file("Drawings/A101.pdf", "x");

    let json = stdout_json(sheet_scan().arg("--root").arg(ws.path().join(".")).args([
        "scan",
        "--path",
        "Drawings/../Specs",
    ]));

    assert_eq!(json["count"], 1);
    assert_eq!(json["files"][0]["relativePath"], "Specs/S1.pdf");
    let full = ws.path().join("Specs").join("S1.pdf");
    assert_eq!(json["files"][0]["fullPath"], full.to_string_lossy().into_owned());
}

#[test]
fn default_root_is_the_working_directory() {
    let ws = TempWorkspace::new();
    ws.create_file("A101.pdf", "x");

    let json = stdout_json(sheet_scan().current_dir(ws.path()).arg("scan"));

    let full = json["files"][0]["fullPath"].as_str().unwrap().to_owned();
    assert!(!full.contains("/./"), "{full}");
    assert!(full.ends_with("A101.pdf"));
}

#[test]
fn table_format() {
    let ws = TempWorkspace::new();
    ws.create_file("A101.pdf", "x");

    sheet_scan()
        .arg("--root")
        .arg(ws.path())
        .args(["scan", "--format", "table"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A101.pdf"))
        .stdout(predicate::str::contains("1 file(s)"));
}

#[test]
fn root_prints_the_effective_root() {
    let ws = TempWorkspace::new();

    sheet_scan()
        .arg("--root")
        .arg(ws.path())
        .args(["root", "--format", "table"])
        .assert()
        .success()
        .stdout(predicate::str::contains(ws.path().to_string_lossy().into_owned()));
}

#[test]
fn invalid_config_fails() {
    let ws = TempWorkspace::new();
    let config = ws.create_file("bad.json", "{ not json");

    sheet_scan()
        .arg("--config")
        .arg(&config)
        .arg("count")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid settings"));
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    sheet_scan().assert().failure();
}
