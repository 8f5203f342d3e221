// crates/usecase/src/dto.rs
use serde::{Deserialize, Serialize};
use sheet_scan_domain::{FileRecord, KeywordQuery, ScanOptions, SheetId};
use sheet_scan_ports::filesystem::SkippedEntry;
use sheet_scan_shared_kernel::ModificationTime;

/// A [`FileRecord`] as it leaves the use case, annotated for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScannedFile {
    pub name: String,
    pub full_path: String,
    pub relative_path: String,
    pub size_bytes: u64,
    pub modified: ModificationTime,
    pub extension: String,
    /// Set by scoped scans only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet: Option<String>,
    pub size_label: String,
}

impl ScannedFile {
    pub fn from_record(record: &FileRecord, sheet: Option<SheetId>) -> Self {
        Self {
            name: record.name().as_str().to_owned(),
            full_path: record.full_path().to_string_lossy().into_owned(),
            relative_path: record.relative_path().to_string_lossy().into_owned(),
            size_bytes: record.size().bytes(),
            modified: record.modified(),
            extension: record.extension().as_str().to_owned(),
            sheet: sheet.map(SheetId::into_string),
            size_label: record.size().label(),
        }
    }
}

/// Result of a scan. Failures live in `error`; they are never raised.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutcome {
    pub files: Vec<ScannedFile>,
    pub skipped: Vec<SkippedEntry>,
    pub error: Option<String>,
}

impl ScanOutcome {
    pub fn failed(error: impl Into<String>) -> Self {
        Self { error: Some(error.into()), ..Self::default() }
    }

    pub fn count(&self) -> usize {
        self.files.len()
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Wire shape of the outcome; skipped entries are diagnostics and stay out of it.
    pub fn envelope(&self) -> ScanEnvelope {
        match &self.error {
            Some(error) => ScanEnvelope::Failure { files: Vec::new(), error: error.clone() },
            None => ScanEnvelope::Success { files: self.files.clone(), count: self.files.len() },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScanEnvelope {
    Success { files: Vec<ScannedFile>, count: usize },
    Failure { files: Vec<ScannedFile>, error: String },
}

/// Result of counting the files under the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountOutcome {
    pub count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// One unit of work for [`crate::ScanOrchestrator::scan_batch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanRequest {
    Path(ScanOptions),
    Keywords(KeywordQuery),
}

impl From<ScanOptions> for ScanRequest {
    fn from(options: ScanOptions) -> Self {
        Self::Path(options)
    }
}

impl From<KeywordQuery> for ScanRequest {
    fn from(query: KeywordQuery) -> Self {
        Self::Keywords(query)
    }
}
