use std::path::{Path, PathBuf};

use super::Config;
use crate::context::ExecutionContext;
use crate::provider::{
    register_builtins, LoaderChain, ModuleLoader, Registry, Resolver, ScriptLoader, DEFAULT_SCOPE,
};
use crate::setting::{Setting, SettingSource, TypeFile, DEFAULT_MANIFEST, DEFAULT_SETTING_TABLE};
use crate::Error;

/// Builder for a [`Config`].
///
/// By default the setting is read from the `[package.metadata.config]` table
/// of `Cargo.toml` in the detected execution directory:
///
/// ```toml
/// [package.metadata.config]
/// type = "config/types.toml"
/// providers = ["env:APP", "vault:secret/app", "./providers/local.sh:x"]
/// ```
///
/// ## Example
///
/// ```no_run
/// use provider_config::{Config, ModuleTable, ProviderHandle};
/// # use provider_config::{BoxError, Provider};
/// # #[derive(Default)] struct Vault;
/// # impl Provider for Vault {
/// #     fn resolve(&mut self, _: Option<&str>) -> Result<(), BoxError> { Ok(()) }
/// # }
///
/// let mut config = Config::builder()
///     .execution_dir("/srv/app")
///     .with_loader(ModuleTable::new().with_package("config-vault-provider", ProviderHandle::of::<Vault>()))
///     .init()?;
/// config.build()?;
/// # Ok::<(), provider_config::Error>(())
/// ```
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .init() is called"]
pub struct ConfigBuilder {
    execution_dir: Option<PathBuf>,
    manifest: Option<PathBuf>,
    table: Option<String>,
    setting: Option<Setting>,
    scope: Option<String>,
    loaders: LoaderChain,
}

impl ConfigBuilder {
    /// Uses `dir` instead of detecting the execution directory.
    pub fn execution_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.execution_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Manifest holding the setting, relative to the execution directory.
    pub fn manifest(mut self, path: impl AsRef<Path>) -> Self {
        self.manifest = Some(path.as_ref().to_path_buf());
        self
    }

    /// Dotted table path of the setting inside the manifest.
    pub fn setting_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Supplies the setting directly; no manifest is read.
    pub fn with_setting(mut self, setting: Setting) -> Self {
        self.setting = Some(setting);
        self
    }

    /// Organization scope for scoped candidate names.
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Adds a module loader. Loaders are consulted in registration order,
    /// ahead of the built-in local script loader.
    pub fn with_loader(mut self, loader: impl ModuleLoader + 'static) -> Self {
        self.loaders.push(loader);
        self
    }

    /// Loads the setting and type file and registers the built-in providers.
    ///
    /// Every setting error surfaces here, before any provider is resolved.
    pub fn init(self) -> Result<Config, Error> {
        let context = match self.execution_dir {
            Some(dir) => ExecutionContext::at(dir),
            None => ExecutionContext::detect(),
        };

        let setting = match self.setting {
            Some(setting) => {
                setting.specs()?;
                setting
            }
            None => {
                let manifest = self
                    .manifest
                    .as_deref()
                    .unwrap_or(Path::new(DEFAULT_MANIFEST));
                let manifest = context.resolve(manifest);
                let table = self.table.as_deref().unwrap_or(DEFAULT_SETTING_TABLE);
                SettingSource::new(manifest, table).load()?
            }
        };

        let type_file = TypeFile::load(context.resolve(&setting.type_path))?;

        let mut loaders = self.loaders;
        loaders.push(ScriptLoader);
        let resolver = Resolver::new(
            loaders,
            self.scope.unwrap_or_else(|| DEFAULT_SCOPE.to_string()),
            context,
        );

        let mut registry = Registry::new();
        register_builtins(&mut registry)?;

        tracing::debug!(
            dir = %resolver.context().dir().display(),
            providers = setting.providers.len(),
            "config initialized"
        );

        Ok(Config {
            setting,
            type_file,
            registry,
            resolver,
        })
    }
}
