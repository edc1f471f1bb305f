//! The execution directory used as the base for settings and local providers.

use std::path::{Path, PathBuf};

/// Absolute base directory of the running application.
///
/// Settings are looked up here and local-path provider candidates are
/// resolved against it.
///
/// ## Example
///
/// ```
/// use provider_config::ExecutionContext;
///
/// let ctx = ExecutionContext::at("/srv/app");
/// assert_eq!(ctx.resolve("providers/vault"), std::path::Path::new("/srv/app/providers/vault"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionContext {
    dir: PathBuf,
}

impl ExecutionContext {
    /// Uses `dir` as the execution directory.
    ///
    /// Relative paths are anchored at the process working directory.
    pub fn at(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: absolutize(dir.as_ref()),
        }
    }

    /// Detects the execution directory.
    ///
    /// Tries the directory of the current executable, then the directory of
    /// `argv[0]`, then the working directory.
    pub fn detect() -> Self {
        let dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .or_else(|| {
                std::env::args_os()
                    .next()
                    .map(PathBuf::from)
                    .and_then(|arg0| arg0.parent().map(Path::to_path_buf))
                    .filter(|dir| !dir.as_os_str().is_empty())
            })
            .unwrap_or_else(|| PathBuf::from("."));

        let ctx = Self::at(dir);
        tracing::debug!(dir = %ctx.dir.display(), "detected execution directory");
        ctx
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Joins `relative` onto the execution directory.
    ///
    /// An absolute `relative` replaces the base, as with [`Path::join`].
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.dir.join(relative)
    }
}

fn absolutize(dir: &Path) -> PathBuf {
    if dir.is_absolute() {
        return dir.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(dir),
        Err(_) => dir.to_path_buf(),
    }
}
