// tests/integration/end_to_end.rs
use sheet_scan_domain::{ExtensionAllowList, KeywordQuery, ScanOptions};
use sheet_scan_infra::FsDirectoryWalker;
use sheet_scan_usecase::{ScanOrchestrator, ScanRequest};

#[path = "../common/mod.rs"]
mod common;
use common::{TempWorkspace, days_ago};

fn drawing_set() -> TempWorkspace {
    let ws = TempWorkspace::new();
    ws.create_file_at("A101.pdf", "v1", days_ago(10));
    ws.create_file_at("a101-rev2.pdf", "v2", days_ago(2));
    ws.create_file_at("B200.dwg", "cad", days_ago(1));
    ws.create_file("desktop.ini", "[.ShellClassInfo]");
    ws
}

fn names(files: &[sheet_scan_usecase::ScannedFile]) -> Vec<&str> {
    files.iter().map(|f| f.name.as_str()).collect()
}

#[test]
fn latest_pdf_per_sheet() {
    let ws = drawing_set();
    let walker = FsDirectoryWalker::new();
    let options = ScanOptions::new(ws.path())
        .with_extensions(ExtensionAllowList::from_csv(".pdf"))
        .with_latest_per_sheet(true);

    let outcome = ScanOrchestrator::new(&walker).scan_path(&options);

    assert_eq!(outcome.error, None);
    assert_eq!(outcome.count(), 1);
    assert_eq!(outcome.files[0].name, "a101-rev2.pdf");
    assert_eq!(outcome.files[0].sheet.as_deref(), Some("a101"));
    assert_eq!(outcome.files[0].size_label, "2 B");
}

#[test]
fn unfiltered_scan_drops_ignored_files_and_sorts_newest_first() {
    let ws = drawing_set();
    ws.create_file_at("B201.docx", "notes", days_ago(1));
    let walker = FsDirectoryWalker::new();

    let outcome = ScanOrchestrator::new(&walker).scan_path(&ScanOptions::new(ws.path()));

    assert_eq!(names(&outcome.files), vec!["B201.docx", "a101-rev2.pdf", "A101.pdf"]);
    assert!(outcome.files.iter().all(|f| f.sheet.is_some()));
}

#[test]
fn sub_directory_scan_reports_root_relative_paths() {
    let ws = TempWorkspace::new();
    ws.create_file_at("Architecture/Sheets/A101.pdf", "x", days_ago(3));
    ws.create_file_at("Architecture/A001.pdf", "x", days_ago(2));
    ws.create_file_at("Structure/S101.pdf", "x", days_ago(1));
    let walker = FsDirectoryWalker::new();
    let usecase = ScanOrchestrator::new(&walker);

    let recursive = usecase.scan_path(&ScanOptions::new(ws.path()).with_relative_path("Architecture"));
    let rel: Vec<_> = recursive.files.iter().map(|f| f.relative_path.replace('\\', "/")).collect();
    assert_eq!(rel, vec!["Architecture/A001.pdf", "Architecture/Sheets/A101.pdf"]);

    let shallow = usecase.scan_path(
        &ScanOptions::new(ws.path()).with_relative_path("Architecture").with_recursive(false),
    );
    assert_eq!(names(&shallow.files), vec!["A001.pdf"]);
}

#[test]
fn parent_segments_inside_root_resolve_cleanly() {
    let ws = TempWorkspace::new();
    ws.create_file_at("Specs/S1.pdf", "x", days_ago(1));
    ws.create_file_at("Drawings/A101.pdf", "x", days_ago(1));
    let walker = FsDirectoryWalker::new();
    let options = ScanOptions::new(ws.path().join(".")).with_relative_path("Drawings/../Specs");

    let outcome = ScanOrchestrator::new(&walker).scan_path(&options);

    assert_eq!(outcome.error, None);
    assert_eq!(outcome.count(), 1);
    assert_eq!(outcome.files[0].relative_path.replace('\\', "/"), "Specs/S1.pdf");
    assert_eq!(outcome.files[0].full_path, ws.path().join("Specs").join("S1.pdf").to_string_lossy());
}

#[test]
fn missing_sub_directory_is_a_soft_error() {
    let ws = drawing_set();
    let walker = FsDirectoryWalker::new();
    let options = ScanOptions::new(ws.path()).with_relative_path("Nope");

    let outcome = ScanOrchestrator::new(&walker).scan_path(&options);

    let expected = format!("Path not accessible: {}", ws.path().join("Nope").display());
    assert_eq!(outcome.error, Some(expected));
    assert!(outcome.files.is_empty());
}

#[test]
fn keyword_scan_searches_the_whole_root() {
    let ws = TempWorkspace::new();
    ws.create_file_at("Admin/Main Contract.docx", "x", days_ago(5));
    ws.create_file_at("Admin/Scope of Works.pdf", "x", days_ago(1));
    ws.create_file_at("Drawings/A101.pdf", "x", days_ago(1));
    ws.create_file("Admin/~$Main Contract.docx", "lock");
    let walker = FsDirectoryWalker::new();

    let outcome = ScanOrchestrator::new(&walker).scan_keywords(&KeywordQuery::from_csv(ws.path(), "CONTRACT,scope"));

    assert_eq!(names(&outcome.files), vec!["Scope of Works.pdf", "Main Contract.docx"]);
    assert!(outcome.files.iter().all(|f| f.sheet.is_none()));
}

#[test]
fn inaccessible_root() {
    let ws = TempWorkspace::new();
    let missing = ws.path().join("gone");
    let walker = FsDirectoryWalker::new();
    let usecase = ScanOrchestrator::new(&walker);

    let keywords = usecase.scan_keywords(&KeywordQuery::from_csv(&missing, "a"));
    assert_eq!(keywords.error.as_deref(), Some("Project root not accessible"));
    assert!(!usecase.root_accessible(&missing));
    assert_eq!(usecase.count_files(&missing).count, 0);
}

#[test]
fn count_matches_non_ignored_files() {
    let ws = drawing_set();
    ws.create_file("nested/deeper/C300.pdf", "x");
    ws.create_file("nested/.DS_Store", "x");
    let walker = FsDirectoryWalker::new();

    let count = ScanOrchestrator::new(&walker).count_files(ws.path());

    assert_eq!(count.count, 3);
    assert_eq!(count.error, None);
}

#[test]
fn batch_of_mixed_requests() {
    let ws = drawing_set();
    let walker = FsDirectoryWalker::new();
    let requests = vec![
        ScanRequest::from(ScanOptions::new(ws.path()).with_latest_per_sheet(true)),
        ScanRequest::from(KeywordQuery::from_csv(ws.path(), "dwg,REV")),
        ScanRequest::from(ScanOptions::new(ws.path()).with_relative_path("../")),
    ];

    let outcomes = ScanOrchestrator::new(&walker).scan_batch(&requests);

    assert_eq!(names(&outcomes[0].files), vec!["a101-rev2.pdf"]);
    assert_eq!(names(&outcomes[1].files), vec!["a101-rev2.pdf"]);
    assert_eq!(outcomes[2].error.as_deref(), Some("Path escapes project root: ../"));
}
