// crates/domain/src/options.rs
use std::path::{Component, Path, PathBuf};

use sheet_scan_shared_kernel::{DomainError, DomainResult, path::lexical_normalise};

use crate::filtering::ExtensionAllowList;

/// Parameters of one scoped scan. Built per request, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    root: PathBuf,
    relative_path: String,
    recursive: bool,
    extensions: ExtensionAllowList,
    name_starts_with: Option<String>,
    name_contains: Option<String>,
    latest_per_sheet: bool,
}

impl ScanOptions {
    /// Recursive, unfiltered scan of the whole `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: lexical_normalise(&root.into()),
            relative_path: String::new(),
            recursive: true,
            extensions: ExtensionAllowList::default(),
            name_starts_with: None,
            name_contains: None,
            latest_per_sheet: false,
        }
    }

    #[must_use]
    pub fn with_relative_path(mut self, relative_path: impl Into<String>) -> Self {
        self.relative_path = relative_path.into();
        self
    }

    #[must_use]
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    #[must_use]
    pub fn with_extensions(mut self, extensions: ExtensionAllowList) -> Self {
        self.extensions = extensions;
        self
    }

    #[must_use]
    pub fn with_name_starts_with(mut self, prefix: Option<String>) -> Self {
        self.name_starts_with = non_blank(prefix);
        self
    }

    #[must_use]
    pub fn with_name_contains(mut self, needle: Option<String>) -> Self {
        self.name_contains = non_blank(needle);
        self
    }

    #[must_use]
    pub fn with_latest_per_sheet(mut self, latest_per_sheet: bool) -> Self {
        self.latest_per_sheet = latest_per_sheet;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    pub fn recursive(&self) -> bool {
        self.recursive
    }

    pub fn extensions(&self) -> &ExtensionAllowList {
        &self.extensions
    }

    pub fn name_starts_with(&self) -> Option<&str> {
        self.name_starts_with.as_deref()
    }

    pub fn name_contains(&self) -> Option<&str> {
        self.name_contains.as_deref()
    }

    pub fn latest_per_sheet(&self) -> bool {
        self.latest_per_sheet
    }

    /// Joins the relative path onto the root without touching the filesystem.
    ///
    /// `.` segments are dropped and `..` pops the segment before it, so the
    /// result never carries dot segments from the request. An empty relative
    /// path resolves to the root itself.
    ///
    /// # Errors
    ///
    /// [`DomainError::PathEscapesRoot`] when the relative path is absolute or
    /// climbs above the root with `..`.
    pub fn resolve_dir(&self) -> DomainResult<PathBuf> {
        let relative = normalise_separators(&self.relative_path);
        let mut dir = self.root.clone();
        let mut depth = 0usize;
        for component in Path::new(&relative).components() {
            match component {
                Component::Normal(segment) => {
                    dir.push(segment);
                    depth += 1;
                }
                Component::CurDir => {}
                Component::ParentDir if depth > 0 => {
                    dir.pop();
                    depth -= 1;
                }
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(DomainError::PathEscapesRoot { relative: self.relative_path.clone() });
                }
            }
        }
        Ok(dir)
    }
}

/// Parameters of a whole-root keyword scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordQuery {
    root: PathBuf,
    keywords: Vec<String>,
}

impl KeywordQuery {
    /// Blank keywords are dropped, so `"a,,b"` yields `[a, b]`.
    pub fn new<I, S>(root: impl Into<PathBuf>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();
        Self { root: lexical_normalise(&root.into()), keywords }
    }

    pub fn from_csv(root: impl Into<PathBuf>, raw: &str) -> Self {
        Self::new(root, raw.split(','))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

// Clients on Windows send `Sheets\Arch`; elsewhere a backslash would be part of the name.
#[cfg(windows)]
fn normalise_separators(relative: &str) -> String {
    relative.to_string()
}

#[cfg(not(windows))]
fn normalise_separators(relative: &str) -> String {
    relative.replace('\\', "/")
}
