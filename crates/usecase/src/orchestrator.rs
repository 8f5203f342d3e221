use std::path::Path;

use sheet_scan_domain::{
    FileRecord, FilterPipeline, KeywordQuery, ScanOptions, analytics::sort::sort_latest_first,
    latest_per_sheet, sheet_id,
};
use sheet_scan_ports::filesystem::{DirectoryWalker, FileEntryDto, SkippedEntry, WalkPlan, WalkReport};
use sheet_scan_shared_kernel::{ApplicationError, FileSize, ModificationTime};
use tracing::{debug, warn};

use crate::dto::{CountOutcome, ScanOutcome, ScanRequest, ScannedFile};

/// Runs scans against a [`DirectoryWalker`]. Holds no state of its own, so one
/// instance can serve any number of concurrent requests.
pub struct ScanOrchestrator<'a> {
    walker: &'a dyn DirectoryWalker,
}

impl<'a> ScanOrchestrator<'a> {
    pub fn new(walker: &'a dyn DirectoryWalker) -> Self {
        Self { walker }
    }

    /// Scan `root/relative_path`, filter, optionally keep the latest revision
    /// per sheet, and return the records newest first.
    pub fn scan_path(&self, options: &ScanOptions) -> ScanOutcome {
        let dir = match options.resolve_dir() {
            Ok(dir) => dir,
            Err(err) => {
                warn!(relative = options.relative_path(), "{err}");
                return ScanOutcome::failed(err.to_string());
            }
        };
        if let Err(source) = self.walker.probe(&dir) {
            let err = ApplicationError::ScanPathInaccessible { dir, source: Box::new(source) };
            warn!(cause = %source_of(&err), "{err}");
            return ScanOutcome::failed(err.to_string());
        }

        let report = self.walker.walk(&WalkPlan { dir, recursive: options.recursive() });
        let (records, skipped) = into_records(report, options.root());
        let mut records = FilterPipeline::for_scan(options).apply(records);
        if options.latest_per_sheet() {
            records = latest_per_sheet(records);
        }
        sort_latest_first(&mut records);
        debug!(files = records.len(), skipped = skipped.len(), "path scan finished");

        let files = records
            .iter()
            .map(|r| ScannedFile::from_record(r, Some(sheet_id(r.name().as_str()))))
            .collect();
        ScanOutcome { files, skipped, error: None }
    }

    /// Case-insensitive substring search over every file name under the root.
    pub fn scan_keywords(&self, query: &KeywordQuery) -> ScanOutcome {
        if query.is_empty() {
            return ScanOutcome::default();
        }
        if let Err(source) = self.walker.probe(query.root()) {
            let err = ApplicationError::ProjectRootInaccessible { source: Box::new(source) };
            warn!(cause = %source_of(&err), "{err}");
            return ScanOutcome::failed(err.to_string());
        }

        let report = self.walker.walk(&WalkPlan::recursive(query.root()));
        let (records, skipped) = into_records(report, query.root());
        let mut records = FilterPipeline::for_keywords(query).apply(records);
        sort_latest_first(&mut records);
        debug!(keywords = query.keywords().len(), files = records.len(), "keyword scan finished");

        let files = records.iter().map(|r| ScannedFile::from_record(r, None)).collect();
        ScanOutcome { files, skipped, error: None }
    }

    /// Number of non-ignored files anywhere under `root`.
    pub fn count_files(&self, root: &Path) -> CountOutcome {
        if let Err(source) = self.walker.probe(root) {
            let err = ApplicationError::ProjectRootInaccessible { source: Box::new(source) };
            warn!(cause = %source_of(&err), "{err}");
            return CountOutcome { count: 0, error: Some(err.to_string()) };
        }
        let report = self.walker.walk(&WalkPlan::recursive(root));
        CountOutcome { count: report.entries.len(), error: None }
    }

    pub fn root_accessible(&self, root: &Path) -> bool {
        self.walker.probe(root).is_ok()
    }

    pub fn run(&self, request: &ScanRequest) -> ScanOutcome {
        match request {
            ScanRequest::Path(options) => self.scan_path(options),
            ScanRequest::Keywords(query) => self.scan_keywords(query),
        }
    }

    /// Runs independent requests, in parallel with the `parallel` feature.
    /// Outcomes come back in request order.
    pub fn scan_batch(&self, requests: &[ScanRequest]) -> Vec<ScanOutcome> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            requests.par_iter().map(|request| self.run(request)).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            requests.iter().map(|request| self.run(request)).collect()
        }
    }
}

fn into_records(report: WalkReport, root: &Path) -> (Vec<FileRecord>, Vec<SkippedEntry>) {
    let records = report.entries.into_iter().map(|entry| port_to_domain_record(entry, root)).collect();
    (records, report.skipped)
}

fn port_to_domain_record(entry: FileEntryDto, root: &Path) -> FileRecord {
    FileRecord::new(entry.path, root, FileSize::new(entry.size), ModificationTime::new(entry.mtime))
}

fn source_of(err: &ApplicationError) -> String {
    std::error::Error::source(err).map(ToString::to_string).unwrap_or_default()
}
