use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SettingError {
    #[error("settings manifest not found: {0}")]
    ManifestNotFound(PathBuf),

    #[error("failed to read settings manifest '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse settings manifest '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("cannot find setting table '{table}' in {path}")]
    SettingMissing { path: PathBuf, table: String },

    #[error("invalid setting in {path}: {source}")]
    SettingInvalid {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid provider declaration '{0}': provider name is empty")]
    InvalidProviderSpec(String),

    #[error("cannot find type file in path {0}")]
    TypeFileNotFound(PathBuf),

    #[error("failed to read type file '{path}': {source}")]
    TypeFileRead {
        path: PathBuf,
        source: std::io::Error,
    },
}
