// crates/ports/src/filesystem.rs
use std::{fmt, path::{Path, PathBuf}};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sheet_scan_shared_kernel::Result;

/// Input parameters controlling one directory walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkPlan {
    pub dir: PathBuf,
    pub recursive: bool,
}

impl WalkPlan {
    pub fn recursive(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), recursive: true }
    }

    pub fn shallow(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), recursive: false }
    }
}

/// DTO representing a file that passed the ignore rules and whose metadata was readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntryDto {
    pub path: PathBuf,
    pub size: u64,
    pub mtime: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// The file was listed but its metadata or mtime could not be read.
    EntryReadFailure,
    /// A directory could not be listed; nothing below it was visited.
    SubtreeReadFailure,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EntryReadFailure => f.write_str("entry unreadable"),
            Self::SubtreeReadFailure => f.write_str("subtree unreadable"),
        }
    }
}

/// Something the walk had to leave out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedEntry {
    pub path: PathBuf,
    pub reason: SkipReason,
    pub detail: String,
}

impl fmt::Display for SkippedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.path.display(), self.reason, self.detail)
    }
}

/// Everything a walk produced. A walk never fails as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkReport {
    pub entries: Vec<FileEntryDto>,
    pub skipped: Vec<SkippedEntry>,
}

/// Port for walking a directory tree.
pub trait DirectoryWalker: Send + Sync {
    fn walk(&self, plan: &WalkPlan) -> WalkReport;

    /// Succeeds only for an existing, readable directory.
    fn probe(&self, dir: &Path) -> Result<()>;
}
