// crates/domain/src/filtering/filters.rs
use crate::{
    filtering::ExtensionAllowList,
    model::FileRecord,
    options::{KeywordQuery, ScanOptions},
};

/// One case-insensitive predicate over a record's name or extension.
///
/// Predicates never look at path, size or time, and none of them has side
/// effects, so any ordering of a pipeline keeps the same records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordFilter {
    Extension(ExtensionAllowList),
    /// Stored lowercase.
    NameStartsWith(String),
    /// Stored lowercase.
    NameContains(String),
    /// Stored lowercase; matches when any keyword occurs in the name.
    KeywordAny(Vec<String>),
}

impl RecordFilter {
    pub fn extension(allow: ExtensionAllowList) -> Self {
        Self::Extension(allow)
    }

    pub fn name_starts_with(prefix: &str) -> Self {
        Self::NameStartsWith(prefix.to_lowercase())
    }

    pub fn name_contains(needle: &str) -> Self {
        Self::NameContains(needle.to_lowercase())
    }

    pub fn keyword_any<S: AsRef<str>>(keywords: &[S]) -> Self {
        Self::KeywordAny(keywords.iter().map(|k| k.as_ref().to_lowercase()).collect())
    }

    pub fn matches(&self, record: &FileRecord) -> bool {
        match self {
            Self::Extension(allow) => allow.is_empty() || allow.contains(record.extension()),
            Self::NameStartsWith(prefix) => record.name().to_lowercase().starts_with(prefix.as_str()),
            Self::NameContains(needle) => record.name().to_lowercase().contains(needle.as_str()),
            Self::KeywordAny(keywords) => {
                let name = record.name().to_lowercase();
                keywords.iter().any(|k| name.contains(k.as_str()))
            }
        }
    }
}

/// Ordered list of [`RecordFilter`]s; a record survives when every filter accepts it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPipeline {
    filters: Vec<RecordFilter>,
}

impl FilterPipeline {
    pub fn new(filters: Vec<RecordFilter>) -> Self {
        Self { filters }
    }

    /// Extension, starts-with and contains filters, each only when configured.
    pub fn for_scan(options: &ScanOptions) -> Self {
        let mut filters = Vec::new();
        if !options.extensions().is_empty() {
            filters.push(RecordFilter::extension(options.extensions().clone()));
        }
        if let Some(prefix) = options.name_starts_with() {
            filters.push(RecordFilter::name_starts_with(prefix));
        }
        if let Some(needle) = options.name_contains() {
            filters.push(RecordFilter::name_contains(needle));
        }
        Self::new(filters)
    }

    pub fn for_keywords(query: &KeywordQuery) -> Self {
        Self::new(vec![RecordFilter::keyword_any(query.keywords())])
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn filters(&self) -> &[RecordFilter] {
        &self.filters
    }

    pub fn accepts(&self, record: &FileRecord) -> bool {
        self.filters.iter().all(|f| f.matches(record))
    }

    pub fn apply(&self, mut records: Vec<FileRecord>) -> Vec<FileRecord> {
        if !self.filters.is_empty() {
            records.retain(|r| self.accepts(r));
        }
        records
    }
}
