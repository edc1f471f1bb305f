//! The declarative setting block and the files it points at.

mod error;
mod source;
mod spec;
mod type_file;

use serde::Deserialize;

pub use error::SettingError;
pub use source::{SettingSource, DEFAULT_MANIFEST, DEFAULT_SETTING_TABLE};
pub use spec::ProviderSpec;
pub use type_file::TypeFile;

/// The setting block read once at startup.
///
/// ```toml
/// [package.metadata.config]
/// type = "config/types.toml"
/// providers = ["file:/etc/app.toml", "env:APP", "dockerSecret:db"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Setting {
    /// Path of the type file, relative to the execution directory.
    #[serde(rename = "type")]
    pub type_path: String,

    /// Raw `name:parameter` declarations in invocation order.
    pub providers: Vec<String>,
}

impl Setting {
    pub fn new<I, S>(type_path: impl Into<String>, providers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            type_path: type_path.into(),
            providers: providers.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses every provider declaration, failing on the first malformed one.
    pub fn specs(&self) -> Result<Vec<ProviderSpec>, SettingError> {
        self.providers.iter().map(|raw| ProviderSpec::parse(raw)).collect()
    }
}
