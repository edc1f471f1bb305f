//! Providers registered before any declared provider is resolved.

use super::{BoxError, Provider, ProviderError, ProviderHandle, Registry};

/// Names the built-in providers are registered under.
pub const BUILTINS: [&str; 3] = ["file", "env", "dockerSecret"];

#[derive(Debug, Default, Clone, Copy)]
pub struct FileProvider;

impl Provider for FileProvider {
    fn resolve(&mut self, parameter: Option<&str>) -> Result<(), BoxError> {
        tracing::info!("file provider - {}", parameter.unwrap_or_default());
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EnvProvider;

impl Provider for EnvProvider {
    fn resolve(&mut self, parameter: Option<&str>) -> Result<(), BoxError> {
        tracing::info!("env provider - {}", parameter.unwrap_or_default());
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DockerSecretProvider;

impl Provider for DockerSecretProvider {
    fn resolve(&mut self, parameter: Option<&str>) -> Result<(), BoxError> {
        tracing::info!("docker secret provider - {}", parameter.unwrap_or_default());
        Ok(())
    }
}

/// Registers `file`, `env` and `dockerSecret` without `force`.
pub fn register_builtins(registry: &mut Registry) -> Result<(), ProviderError> {
    registry.register("file", ProviderHandle::of::<FileProvider>(), false)?;
    registry.register("env", ProviderHandle::of::<EnvProvider>(), false)?;
    registry.register("dockerSecret", ProviderHandle::of::<DockerSecretProvider>(), false)?;
    Ok(())
}
