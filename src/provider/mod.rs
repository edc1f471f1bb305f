//! Providers, their registry and the name resolution that populates it.

mod builtin;
mod error;
mod loader;
mod registry;
mod resolver;
mod script;

use std::fmt;
use std::sync::Arc;

pub use builtin::{register_builtins, DockerSecretProvider, EnvProvider, FileProvider, BUILTINS};
pub use error::{BoxError, ProviderError};
pub use loader::{Candidate, LoadedModule, LoaderChain, ModuleLoader, ModuleTable};
pub use registry::Registry;
pub use resolver::{Resolver, DEFAULT_SCOPE};
pub use script::{ScriptLoader, ScriptProvider};

/// A single configuration-resolution step.
pub trait Provider {
    /// Performs the provider's side effect for `parameter`.
    ///
    /// `parameter` is `None` when the declaration carried no `:`.
    fn resolve(&mut self, parameter: Option<&str>) -> Result<(), BoxError>;
}

/// Produces fresh [`Provider`] instances.
pub trait ProviderFactory: Send + Sync {
    fn instantiate(&self) -> Box<dyn Provider>;
}

impl<F, P> ProviderFactory for F
where
    F: Fn() -> P + Send + Sync,
    P: Provider + 'static,
{
    fn instantiate(&self) -> Box<dyn Provider> {
        Box::new(self())
    }
}

/// A shared, cheaply cloneable reference to a [`ProviderFactory`].
///
/// Two handles are the same provider when they point at the same factory;
/// see [`ProviderHandle::ptr_eq`].
#[derive(Clone)]
pub struct ProviderHandle(Arc<dyn ProviderFactory>);

impl ProviderHandle {
    pub fn new(factory: impl ProviderFactory + 'static) -> Self {
        Self(Arc::new(factory))
    }

    /// A handle constructing `P` through its `Default` impl.
    pub fn of<P>() -> Self
    where
        P: Provider + Default + 'static,
    {
        Self::new(P::default)
    }

    pub fn instantiate(&self) -> Box<dyn Provider> {
        self.0.instantiate()
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ProviderHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ProviderHandle")
            .field(&Arc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}
