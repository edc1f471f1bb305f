//! Manifest-backed setting source.

use std::path::{Path, PathBuf};

use toml::{Table, Value};

use super::{Setting, SettingError};

/// Manifest file looked up in the execution directory.
pub const DEFAULT_MANIFEST: &str = "Cargo.toml";

/// Dotted path of the setting table inside the manifest.
pub const DEFAULT_SETTING_TABLE: &str = "package.metadata.config";

/// Reads a [`Setting`] out of a table nested inside a TOML manifest.
#[derive(Debug, Clone)]
pub struct SettingSource {
    path: PathBuf,
    table: Vec<String>,
}

impl SettingSource {
    /// Creates a source for `table` (dotted, e.g. `package.metadata.config`)
    /// in the manifest at `path`. An empty table path selects the root table.
    pub fn new(path: impl AsRef<Path>, table: &str) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            table: table
                .split('.')
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and validates the setting.
    ///
    /// Every provider declaration is parsed here so a malformed one fails
    /// before any provider is resolved.
    pub fn load(&self) -> Result<Setting, SettingError> {
        let manifest = load_manifest(&self.path)?;

        let value = lookup_table(&manifest, &self.table).ok_or_else(|| {
            SettingError::SettingMissing {
                path: self.path.clone(),
                table: self.table.join("."),
            }
        })?;

        let setting = value
            .try_into::<Setting>()
            .map_err(|e| SettingError::SettingInvalid {
                path: self.path.clone(),
                source: e,
            })?;

        setting.specs()?;
        tracing::debug!(
            path = %self.path.display(),
            providers = setting.providers.len(),
            "loaded setting"
        );
        Ok(setting)
    }
}

fn load_manifest(path: &Path) -> Result<Table, SettingError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).map_err(|e| SettingError::Parse {
            path: path.to_path_buf(),
            source: e,
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(SettingError::ManifestNotFound(path.to_path_buf()))
        }
        Err(e) => Err(SettingError::Read {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Walks `path` through nested tables. Returns `None` if any segment is absent.
fn lookup_table(root: &Table, path: &[String]) -> Option<Value> {
    let Some((first, rest)) = path.split_first() else {
        return Some(Value::Table(root.clone()));
    };

    let mut current = root.get(first)?;
    for part in rest {
        current = current.as_table()?.get(part)?;
    }
    Some(current.clone())
}
