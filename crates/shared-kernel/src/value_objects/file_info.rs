// crates/shared-kernel/src/value_objects/file_info.rs
use std::{
    borrow::Cow,
    ops::Deref,
    path::{Path, PathBuf},
};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wrapper around `PathBuf` that guarantees UTF-8 displayability in higher layers.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FilePath(PathBuf);

impl FilePath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Returns a UTF-8 view suitable for logging and UI; non UTF-8 segments are lossy converted.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        self.0.to_string_lossy()
    }
}

impl From<PathBuf> for FilePath {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&Path> for FilePath {
    fn from(path: &Path) -> Self {
        Self::new(path.to_path_buf())
    }
}

impl AsRef<Path> for FilePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Deref for FilePath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Base file name including its extension.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FileName(String);

impl FileName {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Lowercased copy used by every case-insensitive comparison.
    #[must_use]
    pub fn to_lowercase(&self) -> String {
        self.0.to_lowercase()
    }

    /// Splits the name into stem and extension.
    ///
    /// The extension starts at the last `.` unless that dot is the first
    /// character, so `.profile` has no extension and `plan.` has `"."`.
    #[must_use]
    pub fn split_extension(&self) -> (&str, &str) {
        split_extension(&self.0)
    }

    #[must_use]
    pub fn stem(&self) -> &str {
        self.split_extension().0
    }

    pub fn extension(&self) -> FileExtension {
        FileExtension::new(self.split_extension().1)
    }
}

fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => name.split_at(idx),
        _ => (name, ""),
    }
}

impl From<String> for FileName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<&str> for FileName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl AsRef<str> for FileName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Lowercased extension including the leading dot, or empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FileExtension(String);

impl FileExtension {
    pub fn new(ext: impl AsRef<str>) -> Self {
        Self(ext.as_ref().to_lowercase())
    }

    /// Extension of a bare file name, following the same rule as [`FileName::split_extension`].
    pub fn of(file_name: &str) -> Self {
        Self::new(split_extension(file_name).1)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for FileExtension {
    fn from(ext: &str) -> Self {
        Self::new(ext)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[must_use]
#[repr(transparent)]
#[serde(transparent)]
pub struct FileSize(u64);

impl FileSize {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;

    #[inline]
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn bytes(self) -> u64 {
        self.0
    }

    /// Short label in binary units: `"500 B"`, `"2.0 KB"`, `"5.0 MB"`.
    ///
    /// One decimal, rounded half-up on the exact quotient.
    pub fn label(self) -> String {
        let bytes = self.0;
        if bytes < Self::KIB {
            format!("{bytes} B")
        } else if bytes < Self::MIB {
            format!("{} KB", one_decimal(bytes, Self::KIB))
        } else {
            format!("{} MB", one_decimal(bytes, Self::MIB))
        }
    }
}

fn one_decimal(bytes: u64, unit: u64) -> String {
    let unit = u128::from(unit);
    let tenths = (u128::from(bytes) * 10 + unit / 2) / unit;
    format!("{}.{}", tenths / 10, tenths % 10)
}

impl From<u64> for FileSize {
    fn from(bytes: u64) -> Self {
        Self::new(bytes)
    }
}

impl From<FileSize> for u64 {
    fn from(size: FileSize) -> Self {
        size.bytes()
    }
}

/// Last-modified instant, always held in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use]
#[repr(transparent)]
pub struct ModificationTime(DateTime<Utc>);

impl ModificationTime {
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self(timestamp)
    }

    pub fn timestamp(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// ISO-8601 with millisecond precision and a `Z` suffix.
    pub fn to_iso8601(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl From<DateTime<Utc>> for ModificationTime {
    fn from(timestamp: DateTime<Utc>) -> Self {
        Self::new(timestamp)
    }
}

impl From<std::time::SystemTime> for ModificationTime {
    fn from(time: std::time::SystemTime) -> Self {
        Self::new(DateTime::<Utc>::from(time))
    }
}

impl Serialize for ModificationTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso8601())
    }
}

impl<'de> Deserialize<'de> for ModificationTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| Self(dt.with_timezone(&Utc)))
            .map_err(serde::de::Error::custom)
    }
}
