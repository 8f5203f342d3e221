// src/config.rs
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sheet_scan_shared_kernel::{
    DomainError, ErrorContext, InfrastructureError, Result, path::logical_absolute,
};

/// Runtime settings of the binary.
///
/// Layers, later ones winning: built-in defaults, the `--config` file, then
/// `SHEET_SCAN_ROOT` / `--root` (clap resolves those two, flag over env).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub root: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self { root: PathBuf::from(".") }
    }
}

impl Settings {
    pub fn load(config: Option<&Path>, root_override: Option<PathBuf>) -> Result<Self> {
        let mut settings = match config {
            Some(path) => Self::from_file(path).with_context(|| format!("config {}", path.display()))?,
            None => Self::default(),
        };
        if let Some(root) = root_override {
            settings.root = root;
        }
        settings.validate()?;
        Ok(settings)
    }

    /// Parses JSON, or YAML when the extension is `.yaml`/`.yml`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| InfrastructureError::ConfigLoad { path: path.to_path_buf(), source })?;
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
        if is_yaml { parse_yaml(&text) } else { Ok(serde_json::from_str(&text)?) }
    }

    pub fn validate(&self) -> Result<()> {
        if self.root.as_os_str().is_empty() {
            return Err(DomainError::InvalidConfiguration { reason: "project root must not be empty".into() }.into());
        }
        Ok(())
    }

    /// The root as an absolute path with `.` and `..` folded, without resolving symlinks.
    pub fn project_root(&self) -> PathBuf {
        logical_absolute(&self.root)
    }
}

#[cfg(feature = "yaml")]
fn parse_yaml(text: &str) -> Result<Settings> {
    Ok(serde_yaml::from_str(text)?)
}

#[cfg(not(feature = "yaml"))]
fn parse_yaml(_text: &str) -> Result<Settings> {
    Err(InfrastructureError::SerializationError {
        format: "YAML".into(),
        details: "built without the `yaml` feature".into(),
    }
    .into())
}
