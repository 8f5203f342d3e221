// domain analytics sorting utilities
use std::cmp::Ordering;

use crate::model::FileRecord;

/// Newest first; equal timestamps fall back to ascending relative path.
///
/// This is the only ordering the scan results guarantee.
pub fn sort_latest_first(records: &mut [FileRecord]) {
    records.sort_by(compare_latest_first);
}

#[inline]
pub fn compare_latest_first(a: &FileRecord, b: &FileRecord) -> Ordering {
    b.modified()
        .cmp(&a.modified())
        .then_with(|| a.relative_path().cmp(b.relative_path()))
}
