// crates/infra/src/filesystem.rs
use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use ignore::{DirEntry, WalkBuilder};
use sheet_scan_domain::is_ignored;
use sheet_scan_ports::filesystem::{
    DirectoryWalker, FileEntryDto, SkipReason, SkippedEntry, WalkPlan, WalkReport,
};
use sheet_scan_shared_kernel::{InfrastructureError, Result};
use tracing::debug;

/// Filesystem adapter implementing the `DirectoryWalker` port on top of `ignore::WalkBuilder`.
///
/// Every standard filter of the builder is switched off: no gitignore, no
/// hidden-file rule, no parent ignore files. The only exclusions are the
/// domain ignore rules, applied to file names. Symlinks are not followed and
/// are never reported as files.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsDirectoryWalker;

impl FsDirectoryWalker {
    pub fn new() -> Self {
        Self
    }
}

impl DirectoryWalker for FsDirectoryWalker {
    fn walk(&self, plan: &WalkPlan) -> WalkReport {
        let mut builder = WalkBuilder::new(&plan.dir);
        builder.standard_filters(false);
        builder.follow_links(false);
        builder.sort_by_file_name(|a, b| a.cmp(b));
        if !plan.recursive {
            builder.max_depth(Some(1));
        }

        let mut report = WalkReport::default();
        for result in builder.build() {
            match result {
                Ok(entry) if entry.depth() == 0 => {}
                Ok(entry) => visit_entry(entry, &mut report),
                Err(err) => {
                    let path = error_path(&err).map_or_else(|| plan.dir.clone(), Path::to_path_buf);
                    skip(&mut report, path, SkipReason::SubtreeReadFailure, err.to_string());
                }
            }
        }
        report
    }

    fn probe(&self, dir: &Path) -> Result<()> {
        let meta = fs::metadata(dir)
            .map_err(|source| InfrastructureError::DirectoryUnavailable { path: dir.to_path_buf(), source })?;
        if !meta.is_dir() {
            return Err(InfrastructureError::NotADirectory { path: dir.to_path_buf() }.into());
        }
        fs::read_dir(dir)
            .map_err(|source| InfrastructureError::DirectoryUnavailable { path: dir.to_path_buf(), source })?;
        Ok(())
    }
}

fn visit_entry(entry: DirEntry, report: &mut WalkReport) {
    let is_file = entry.file_type().is_some_and(|ft| ft.is_file());
    if !is_file || is_ignored(&entry.file_name().to_string_lossy()) {
        return;
    }

    let stat = entry
        .metadata()
        .map_err(|err| err.to_string())
        .and_then(|meta| meta.modified().map(|mtime| (meta.len(), mtime)).map_err(|err| err.to_string()));
    match stat {
        Ok((size, mtime)) => report.entries.push(FileEntryDto {
            path: entry.into_path(),
            size,
            mtime: DateTime::<Utc>::from(mtime),
        }),
        Err(detail) => skip(report, entry.into_path(), SkipReason::EntryReadFailure, detail),
    }
}

fn skip(report: &mut WalkReport, path: PathBuf, reason: SkipReason, detail: String) {
    debug!(path = %path.display(), %reason, "skipped: {detail}");
    report.skipped.push(SkippedEntry { path, reason, detail });
}

fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => error_path(err),
        ignore::Error::Loop { child, .. } => Some(child.as_path()),
        ignore::Error::Partial(errs) => errs.iter().find_map(error_path),
        _ => None,
    }
}
