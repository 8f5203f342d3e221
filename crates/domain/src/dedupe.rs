// crates/domain/src/dedupe.rs
use std::collections::HashMap;

use crate::{
    model::FileRecord,
    sheet::{SheetId, sheet_id},
};

/// Keeps the most recently modified record for every sheet id.
///
/// A later record replaces the kept one only when its `modified` is strictly
/// greater, so on an exact tie the record seen first wins. The walk order is
/// therefore the tie-breaker. Output lists one record per sheet id in
/// first-seen order.
pub fn latest_per_sheet(records: Vec<FileRecord>) -> Vec<FileRecord> {
    let mut slot_of: HashMap<SheetId, usize> = HashMap::new();
    let mut kept: Vec<FileRecord> = Vec::new();

    for record in records {
        let key = sheet_id(record.name().as_str());
        match slot_of.get(&key) {
            Some(&slot) => {
                if record.modified() > kept[slot].modified() {
                    kept[slot] = record;
                }
            }
            None => {
                slot_of.insert(key, kept.len());
                kept.push(record);
            }
        }
    }

    kept
}
