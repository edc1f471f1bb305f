//! Local providers: executable files inside the project.

use std::path::{Path, PathBuf};
use std::process::Command;

use super::{BoxError, Candidate, LoadedModule, ModuleLoader, Provider, ProviderHandle};

/// Loads local-path candidates that point at regular files.
///
/// The file is run once per invocation with the parameter as its only
/// argument (no argument when the declaration had none).
#[derive(Debug, Default, Clone, Copy)]
pub struct ScriptLoader;

impl ModuleLoader for ScriptLoader {
    fn probe(&self, candidate: &Candidate) -> bool {
        matches!(candidate, Candidate::Path(path) if path.is_file())
    }

    fn load(&self, candidate: &Candidate) -> Result<LoadedModule, BoxError> {
        let Candidate::Path(path) = candidate else {
            return Err(format!("'{candidate}' is not a local path").into());
        };
        ensure_executable(path)?;

        let path = path.clone();
        Ok(LoadedModule::Handle(ProviderHandle::new(move || {
            ScriptProvider::new(path.clone())
        })))
    }
}

#[cfg(unix)]
fn ensure_executable(path: &Path) -> Result<(), BoxError> {
    use std::os::unix::fs::PermissionsExt;

    let mode = std::fs::metadata(path)?.permissions().mode();
    if mode & 0o111 == 0 {
        return Err(format!("'{}' is not executable", path.display()).into());
    }
    Ok(())
}

#[cfg(not(unix))]
fn ensure_executable(path: &Path) -> Result<(), BoxError> {
    std::fs::metadata(path)?;
    Ok(())
}

/// Runs a local executable as a provider.
#[derive(Debug, Clone)]
pub struct ScriptProvider {
    program: PathBuf,
}

impl ScriptProvider {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Provider for ScriptProvider {
    fn resolve(&mut self, parameter: Option<&str>) -> Result<(), BoxError> {
        tracing::info!(program = %self.program.display(), ?parameter, "running local provider");
        let status = Command::new(&self.program).args(parameter).status()?;
        if !status.success() {
            return Err(format!("'{}' exited with {status}", self.program.display()).into());
        }
        Ok(())
    }
}
