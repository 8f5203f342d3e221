use std::path::Path;

use sheet_scan_shared_kernel::{
    FileExtension, FileName, FilePath, FileSize, ModificationTime, path::relative_to,
};

/// One file discovered by a walk.
///
/// Built once per entry and never mutated; two records for the same path from
/// different walks are unrelated values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    name: FileName,
    full_path: FilePath,
    relative_path: FilePath,
    size: FileSize,
    modified: ModificationTime,
    extension: FileExtension,
}

impl FileRecord {
    /// `relative_path` is `full_path` with `base` stripped from the front.
    pub fn new(
        full_path: impl Into<FilePath>,
        base: &Path,
        size: FileSize,
        modified: ModificationTime,
    ) -> Self {
        let full_path = full_path.into();
        let name = full_path
            .file_name()
            .map(|n| FileName::new(n.to_string_lossy().into_owned()))
            .unwrap_or_else(|| FileName::new(String::new()));
        let relative_path = FilePath::new(relative_to(&full_path, base));
        let extension = name.extension();
        Self { name, full_path, relative_path, size, modified, extension }
    }

    pub fn name(&self) -> &FileName {
        &self.name
    }

    pub fn full_path(&self) -> &FilePath {
        &self.full_path
    }

    pub fn relative_path(&self) -> &FilePath {
        &self.relative_path
    }

    pub fn size(&self) -> FileSize {
        self.size
    }

    pub fn modified(&self) -> ModificationTime {
        self.modified
    }

    pub fn extension(&self) -> &FileExtension {
        &self.extension
    }
}
