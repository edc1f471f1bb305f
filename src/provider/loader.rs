//! Pluggable module loading used by the resolver.
//!
//! A [`ModuleLoader`] maps a [`Candidate`] identifier to a loaded module.
//! Probing is side-effect free and only answers "could this be loaded";
//! loading does the real work and may fail.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::{Path, PathBuf};

use super::{BoxError, ProviderHandle};

/// One identifier tried during provider resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Candidate {
    /// A package-style identifier, e.g. `@hackmd/config-vault-provider`.
    Package(String),
    /// An absolute path under the execution directory.
    Path(PathBuf),
}

impl Candidate {
    pub fn package(id: impl Into<String>) -> Self {
        Self::Package(id.into())
    }

    pub fn path(path: impl AsRef<Path>) -> Self {
        Self::Path(path.as_ref().to_path_buf())
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Package(id) => f.write_str(id),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// What a loader hands back for a candidate.
#[derive(Debug, Clone)]
pub enum LoadedModule {
    /// The module is the provider handle itself.
    Handle(ProviderHandle),
    /// The module exports its provider as a default alongside metadata.
    Wrapped {
        default: ProviderHandle,
        metadata: BTreeMap<String, String>,
    },
}

impl LoadedModule {
    /// Unwraps the default export, or returns the bare handle.
    pub fn into_handle(self) -> ProviderHandle {
        match self {
            Self::Handle(handle) => handle,
            Self::Wrapped { default, .. } => default,
        }
    }

    pub fn metadata(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Self::Handle(_) => None,
            Self::Wrapped { metadata, .. } => Some(metadata),
        }
    }
}

impl From<ProviderHandle> for LoadedModule {
    fn from(handle: ProviderHandle) -> Self {
        Self::Handle(handle)
    }
}

pub trait ModuleLoader: Send + Sync + fmt::Debug {
    /// Returns true if `candidate` can be loaded by this loader.
    fn probe(&self, candidate: &Candidate) -> bool;

    /// Loads `candidate`. Only called after a successful probe.
    fn load(&self, candidate: &Candidate) -> Result<LoadedModule, BoxError>;
}

/// In-memory module table, for providers compiled into the application.
#[derive(Debug, Default, Clone)]
pub struct ModuleTable {
    modules: HashMap<Candidate, LoadedModule>,
}

impl ModuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, candidate: Candidate, module: impl Into<LoadedModule>) {
        self.modules.insert(candidate, module.into());
    }

    #[must_use]
    pub fn with_package(mut self, id: impl Into<String>, module: impl Into<LoadedModule>) -> Self {
        self.insert(Candidate::package(id), module);
        self
    }

    #[must_use]
    pub fn with_path(mut self, path: impl AsRef<Path>, module: impl Into<LoadedModule>) -> Self {
        self.insert(Candidate::path(path), module);
        self
    }
}

impl ModuleLoader for ModuleTable {
    fn probe(&self, candidate: &Candidate) -> bool {
        self.modules.contains_key(candidate)
    }

    fn load(&self, candidate: &Candidate) -> Result<LoadedModule, BoxError> {
        self.modules
            .get(candidate)
            .cloned()
            .ok_or_else(|| format!("module '{candidate}' is not in the table").into())
    }
}

/// Loaders consulted in order; the first that probes a candidate loads it.
#[derive(Debug, Default)]
pub struct LoaderChain {
    loaders: Vec<Box<dyn ModuleLoader>>,
}

impl LoaderChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, loader: impl ModuleLoader + 'static) {
        self.loaders.push(Box::new(loader));
    }

    pub fn len(&self) -> usize {
        self.loaders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaders.is_empty()
    }
}

impl ModuleLoader for LoaderChain {
    fn probe(&self, candidate: &Candidate) -> bool {
        self.loaders.iter().any(|loader| loader.probe(candidate))
    }

    fn load(&self, candidate: &Candidate) -> Result<LoadedModule, BoxError> {
        self.loaders
            .iter()
            .find(|loader| loader.probe(candidate))
            .ok_or_else(|| BoxError::from(format!("no loader accepts '{candidate}'")))?
            .load(candidate)
    }
}
