//! Provider orchestration: resolve each declared provider and invoke it.

mod builder;

use crate::context::ExecutionContext;
use crate::provider::{ProviderError, ProviderHandle, Registry, Resolver};
use crate::setting::{ProviderSpec, Setting, TypeFile};
use crate::Error;

pub use builder::ConfigBuilder;

/// A resolved provider declaration, ready to be invoked.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub name: String,
    pub parameter: Option<String>,
    pub handle: ProviderHandle,
}

/// The configuration bootstrapper.
///
/// Owns the setting, the provider registry and the resolver. Created once
/// at startup through [`Config::builder`]; the built-in providers are
/// registered by then, so [`register_provider`](Self::register_provider)
/// needs `force` to replace them.
#[derive(Debug)]
pub struct Config {
    setting: Setting,
    type_file: TypeFile,
    registry: Registry,
    resolver: Resolver,
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Registers `handle` under `name` ahead of automatic resolution.
    ///
    /// Fails with [`ProviderError::Duplicate`] if `name` is taken and `force`
    /// is false.
    pub fn register_provider(
        &mut self,
        name: impl Into<String>,
        handle: ProviderHandle,
        force: bool,
    ) -> Result<(), ProviderError> {
        self.registry.register(name, handle, force)
    }

    /// Returns the provider for `name`, resolving and registering it if needed.
    pub fn resolve_provider(&mut self, name: &str) -> Result<ProviderHandle, ProviderError> {
        self.resolver.resolve(&mut self.registry, name)
    }

    /// Resolves every declared provider without invoking any of them.
    pub fn plan(&mut self) -> Result<Vec<Invocation>, Error> {
        self.setting
            .specs()?
            .into_iter()
            .map(|spec| -> Result<Invocation, Error> {
                let handle = self.resolve_provider(&spec.name)?;
                Ok(Invocation {
                    name: spec.name,
                    parameter: spec.parameter,
                    handle,
                })
            })
            .collect()
    }

    /// Resolves and invokes every declared provider in declaration order.
    ///
    /// Each provider runs to completion before the next one is resolved.
    /// The first failure aborts the build; later providers are not touched.
    ///
    /// A failing provider surfaces as [`ProviderError::Invocation`] naming the
    /// provider. The error the provider returned is unchanged one level down:
    /// `err.source().and_then(|e| e.source())`.
    pub fn build(&mut self) -> Result<(), Error> {
        for spec in self.setting.specs()? {
            self.invoke(&spec)?;
        }
        Ok(())
    }

    fn invoke(&mut self, spec: &ProviderSpec) -> Result<(), ProviderError> {
        let handle = self.resolve_provider(&spec.name)?;
        tracing::info!(provider = %spec.name, parameter = ?spec.parameter(), "invoking provider");
        handle
            .instantiate()
            .resolve(spec.parameter())
            .map_err(|source| ProviderError::Invocation {
                name: spec.name.clone(),
                source,
            })
    }

    pub fn setting(&self) -> &Setting {
        &self.setting
    }

    pub fn type_file(&self) -> &TypeFile {
        &self.type_file
    }

    pub fn execution_dir(&self) -> &ExecutionContext {
        self.resolver.context()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}
