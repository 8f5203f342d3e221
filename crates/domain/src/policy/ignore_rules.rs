// crates/domain/src/policy/ignore_rules.rs
//! Filename exclusion policy applied while walking.
//!
//! Excluded entries never become records, so no later filter can see them.

use sheet_scan_shared_kernel::FileExtension;

/// OS and editor artefacts, compared lowercase.
pub const IGNORED_FILE_NAMES: &[&str] = &[
    "desktop.ini",
    "thumbs.db",
    ".ds_store",
    ".thumbs",
    ".spotlight-v100",
    ".trashes",
    ".fseventsd",
    ".temporaryitems",
];

/// Archives, CAD binaries and database files.
pub const IGNORED_EXTENSIONS: &[&str] =
    &[".zip", ".rar", ".7z", ".tar", ".gz", ".dwg", ".dxf", ".sqlite", ".mdb"];

/// Returns `true` when `file_name` must be left out of every result.
///
/// Case-insensitive. A name is ignored when it is a known artefact, starts
/// with `.` (hidden) or `~$` (office lock file), or carries an extension from
/// [`IGNORED_EXTENSIONS`].
pub fn is_ignored(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    if IGNORED_FILE_NAMES.contains(&lower.as_str()) {
        return true;
    }
    if lower.starts_with('.') || lower.starts_with("~$") {
        return true;
    }
    let ext = FileExtension::of(&lower);
    IGNORED_EXTENSIONS.contains(&ext.as_str())
}
