pub mod config;
pub mod context;
mod error;
pub mod provider;
pub mod setting;

pub use config::{Config, ConfigBuilder, Invocation};
pub use context::ExecutionContext;
pub use error::Error;
pub use provider::{
    BoxError, Candidate, LoadedModule, ModuleLoader, ModuleTable, Provider, ProviderError,
    ProviderFactory, ProviderHandle, Registry,
};
pub use setting::{ProviderSpec, Setting, SettingError, TypeFile};
