//! # Domain
//!
//! Pure scanning rules: which files count, how revisions group into sheets,
//! how records are filtered, deduplicated and ordered. Nothing here touches
//! the filesystem.

#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod dedupe;
pub mod filtering;
pub mod model;
pub mod options;
pub mod policy;
pub mod sheet;

pub use dedupe::latest_per_sheet;
pub use filtering::{ExtensionAllowList, FilterPipeline, RecordFilter};
pub use model::FileRecord;
pub use options::{KeywordQuery, ScanOptions};
pub use policy::is_ignored;
pub use sheet::{SheetId, sheet_id};
