use std::collections::BTreeSet;

use sheet_scan_shared_kernel::FileExtension;

/// Case-insensitive set of permitted extensions. Empty means "allow all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionAllowList(BTreeSet<String>);

impl ExtensionAllowList {
    /// Parses a comma-separated list such as `".pdf, DOCX"`.
    ///
    /// Entries are trimmed, lowercased and given a leading `.` when missing;
    /// blank entries are dropped.
    pub fn from_csv(raw: &str) -> Self {
        raw.split(',').collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, ext: &FileExtension) -> bool {
        self.0.contains(ext.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

fn normalise(entry: &str) -> Option<String> {
    let entry = entry.trim().to_lowercase();
    if entry.is_empty() {
        None
    } else if entry.starts_with('.') {
        Some(entry)
    } else {
        Some(format!(".{entry}"))
    }
}

impl<S: AsRef<str>> FromIterator<S> for ExtensionAllowList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().filter_map(|e| normalise(e.as_ref())).collect())
    }
}
