// tests/integration/envelopes.rs
use serde_json::{Value, json};
use sheet_scan_domain::{KeywordQuery, ScanOptions};
use sheet_scan_infra::FsDirectoryWalker;
use sheet_scan_usecase::ScanOrchestrator;

#[path = "../common/mod.rs"]
mod common;
use common::{TempWorkspace, days_ago};

fn to_json(value: impl serde::Serialize) -> Value {
    serde_json::to_value(value).unwrap()
}

#[test]
fn scan_envelope_carries_files_and_count() {
    let ws = TempWorkspace::new();
    ws.create_file_at("Sheets/A101.pdf", &"x".repeat(1280), days_ago(1));
    let walker = FsDirectoryWalker::new();

    let envelope = to_json(ScanOrchestrator::new(&walker).scan_path(&ScanOptions::new(ws.path())).envelope());

    assert_eq!(envelope["count"], 1);
    assert!(envelope.get("error").is_none());
    let file = &envelope["files"][0];
    assert_eq!(file["name"], "A101.pdf");
    assert_eq!(file["extension"], ".pdf");
    assert_eq!(file["sizeBytes"], 1280);
    assert_eq!(file["sizeLabel"], "1.3 KB");
    assert_eq!(file["sheet"], "a101");
    assert!(file["fullPath"].as_str().unwrap().ends_with("A101.pdf"));
    assert_eq!(file["relativePath"].as_str().unwrap().replace('\\', "/"), "Sheets/A101.pdf");
    let modified = file["modified"].as_str().unwrap();
    assert!(modified.ends_with('Z'), "{modified}");
    assert_eq!(modified.len(), "2024-03-01T12:00:00.000Z".len());
}

#[test]
fn keyword_envelope_has_no_sheet() {
    let ws = TempWorkspace::new();
    ws.create_file("Contract.pdf", "x");
    let walker = FsDirectoryWalker::new();

    let envelope =
        to_json(ScanOrchestrator::new(&walker).scan_keywords(&KeywordQuery::from_csv(ws.path(), "contract")).envelope());

    assert_eq!(envelope["count"], 1);
    assert!(envelope["files"][0].get("sheet").is_none());
}

#[test]
fn empty_keywords_are_an_empty_success() {
    let ws = TempWorkspace::new();
    ws.create_file("Contract.pdf", "x");
    let walker = FsDirectoryWalker::new();

    let envelope = to_json(ScanOrchestrator::new(&walker).scan_keywords(&KeywordQuery::from_csv(ws.path(), "")).envelope());

    assert_eq!(envelope, json!({ "files": [], "count": 0 }));
}

#[test]
fn inaccessible_root_envelope() {
    let ws = TempWorkspace::new();
    let walker = FsDirectoryWalker::new();
    let query = KeywordQuery::from_csv(ws.path().join("gone"), "a");

    let envelope = to_json(ScanOrchestrator::new(&walker).scan_keywords(&query).envelope());

    assert_eq!(envelope, json!({ "files": [], "error": "Project root not accessible" }));
}
