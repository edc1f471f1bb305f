use std::path::{Path, PathBuf};

use super::SettingError;

/// The type-definition file named by [`Setting::type_path`](super::Setting).
///
/// Its bytes are read eagerly at startup and carried as-is; they are never
/// decoded or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeFile {
    path: PathBuf,
    contents: Vec<u8>,
}

impl TypeFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingError> {
        let path = path.as_ref();
        match std::fs::read(path) {
            Ok(contents) => Ok(Self {
                path: path.to_path_buf(),
                contents,
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(SettingError::TypeFileNotFound(path.to_path_buf()))
            }
            Err(e) => Err(SettingError::TypeFileRead {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contents(&self) -> &[u8] {
        &self.contents
    }
}
