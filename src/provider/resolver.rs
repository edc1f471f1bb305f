//! Maps short provider names onto loadable modules.

use super::{Candidate, ModuleLoader, ProviderError, ProviderHandle, Registry};
use crate::context::ExecutionContext;

/// Organization scope used by the first two naming conventions.
pub const DEFAULT_SCOPE: &str = "@hackmd";

/// Resolves provider names that are not yet registered.
///
/// Candidates are tried in a fixed order and the first one the loader can
/// probe is authoritative:
///
/// 1. `<scope>/config-<name>-provider`
/// 2. `<scope>/config-provider-<name>`
/// 3. `config-<name>-provider`
/// 4. `config-provider-<name>`
/// 5. `<name>`
/// 6. `<execution dir>/<name>`
///
/// Names containing a path separator only yield the last candidate.
#[derive(Debug)]
pub struct Resolver {
    loader: Box<dyn ModuleLoader>,
    scope: String,
    context: ExecutionContext,
}

impl Resolver {
    pub fn new(
        loader: impl ModuleLoader + 'static,
        scope: impl Into<String>,
        context: ExecutionContext,
    ) -> Self {
        Self {
            loader: Box::new(loader),
            scope: scope.into(),
            context,
        }
    }

    pub fn context(&self) -> &ExecutionContext {
        &self.context
    }

    /// The candidates for `name`, in the order they are tried.
    pub fn candidates(&self, name: &str) -> Vec<Candidate> {
        let local = Candidate::path(self.context.resolve(name));
        if name.contains(['/', '\\']) {
            return vec![local];
        }

        let scope = &self.scope;
        vec![
            Candidate::Package(format!("{scope}/config-{name}-provider")),
            Candidate::Package(format!("{scope}/config-provider-{name}")),
            Candidate::Package(format!("config-{name}-provider")),
            Candidate::Package(format!("config-provider-{name}")),
            Candidate::Package(name.to_string()),
            local,
        ]
    }

    /// Returns the provider bound to `name`, loading and registering it first
    /// if needed.
    ///
    /// Registered names return immediately without consulting the loader.
    /// Otherwise the first candidate that probes successfully is loaded and
    /// registered under `name`; a load failure at that point is final and no
    /// further candidates are tried.
    pub fn resolve(
        &self,
        registry: &mut Registry,
        name: &str,
    ) -> Result<ProviderHandle, ProviderError> {
        if name.is_empty() {
            return Err(ProviderError::EmptyName);
        }
        if let Some(handle) = registry.get(name) {
            return Ok(handle.clone());
        }

        let candidates = self.candidates(name);
        for candidate in &candidates {
            if !self.loader.probe(candidate) {
                tracing::debug!(provider = name, %candidate, "candidate not found");
                continue;
            }

            tracing::debug!(provider = name, %candidate, "loading provider");
            let handle = self
                .loader
                .load(candidate)
                .map_err(|source| ProviderError::Load {
                    name: name.to_string(),
                    candidate: candidate.clone(),
                    source,
                })?
                .into_handle();

            registry.register(name, handle.clone(), false)?;
            return Ok(handle);
        }

        Err(ProviderError::NotFound {
            name: name.to_string(),
            candidates,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    use super::super::testing::Noop;
    use super::super::{BoxError, LoadedModule, ModuleTable};
    use super::*;

    /// Wraps a table and records every probe.
    #[derive(Debug)]
    struct Probing {
        table: ModuleTable,
        probes: Arc<Mutex<Vec<String>>>,
        broken: Option<Candidate>,
    }

    impl Probing {
        fn new(table: ModuleTable) -> Self {
            Self {
                table,
                probes: Arc::default(),
                broken: None,
            }
        }
    }

    impl ModuleLoader for Probing {
        fn probe(&self, candidate: &Candidate) -> bool {
            self.probes.lock().unwrap().push(candidate.to_string());
            self.broken.as_ref() == Some(candidate) || self.table.probe(candidate)
        }

        fn load(&self, candidate: &Candidate) -> Result<LoadedModule, BoxError> {
            if self.broken.as_ref() == Some(candidate) {
                return Err("module panicked during load".into());
            }
            self.table.load(candidate)
        }
    }

    fn resolver(loader: impl ModuleLoader + 'static) -> Resolver {
        Resolver::new(loader, DEFAULT_SCOPE, ExecutionContext::at("/srv/app"))
    }

    const VAULT_CANDIDATES: [&str; 6] = [
        "@hackmd/config-vault-provider",
        "@hackmd/config-provider-vault",
        "config-vault-provider",
        "config-provider-vault",
        "vault",
        "/srv/app/vault",
    ];

    #[test]
    fn test_candidate_order() {
        let names: Vec<String> = resolver(ModuleTable::new())
            .candidates("vault")
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(names, VAULT_CANDIDATES);
    }

    #[test]
    fn test_custom_scope() {
        let resolver = Resolver::new(ModuleTable::new(), "@acme", ExecutionContext::at("/srv/app"));
        assert_eq!(
            resolver.candidates("vault")[0],
            Candidate::package("@acme/config-vault-provider")
        );
    }

    #[test]
    fn test_path_name_only_tries_local_path() {
        let candidates = resolver(ModuleTable::new()).candidates("providers/vault");
        assert_eq!(
            candidates,
            [Candidate::Path(PathBuf::from("/srv/app/providers/vault"))]
        );
    }

    #[test]
    fn test_registered_name_skips_search() {
        let loader = Probing::new(ModuleTable::new());
        let probes = Arc::clone(&loader.probes);
        let resolver = resolver(loader);
        let mut registry = Registry::new();
        let handle = ProviderHandle::of::<Noop>();
        registry.register("vault", handle.clone(), false).unwrap();

        let resolved = resolver.resolve(&mut registry, "vault").unwrap();
        assert!(resolved.ptr_eq(&handle));
        assert!(probes.lock().unwrap().is_empty());
    }

    #[test]
    fn test_first_candidate_wins() {
        let scoped = ProviderHandle::of::<Noop>();
        let table = ModuleTable::new()
            .with_package("@hackmd/config-provider-vault", scoped.clone())
            .with_package("vault", ProviderHandle::of::<Noop>());
        let resolver = resolver(table);
        let mut registry = Registry::new();

        let resolved = resolver.resolve(&mut registry, "vault").unwrap();
        assert!(resolved.ptr_eq(&scoped));
    }

    #[test]
    fn test_bare_name_probes_package_forms_first() {
        let bare = ProviderHandle::of::<Noop>();
        let loader = Probing::new(ModuleTable::new().with_package("vault", bare.clone()));
        let probes = Arc::clone(&loader.probes);
        let resolver = resolver(loader);
        let mut registry = Registry::new();

        let resolved = resolver.resolve(&mut registry, "vault").unwrap();
        assert!(resolved.ptr_eq(&bare));
        assert_eq!(*probes.lock().unwrap(), VAULT_CANDIDATES[..5]);
    }

    #[test]
    fn test_resolved_provider_is_registered_under_requested_name() {
        let local = ProviderHandle::of::<Noop>();
        let table = ModuleTable::new().with_path("/srv/app/vault", local.clone());
        let resolver = resolver(table);
        let mut registry = Registry::new();

        resolver.resolve(&mut registry, "vault").unwrap();
        assert!(registry.get("vault").unwrap().ptr_eq(&local));
        assert!(!registry.has("/srv/app/vault"));

        // second resolve is served from the registry
        let again = resolver.resolve(&mut registry, "vault").unwrap();
        assert!(again.ptr_eq(&local));
    }

    #[test]
    fn test_wrapped_module_registers_default() {
        let default = ProviderHandle::of::<Noop>();
        let table = ModuleTable::new().with_package(
            "config-vault-provider",
            LoadedModule::Wrapped {
                default: default.clone(),
                metadata: Default::default(),
            },
        );
        let mut registry = Registry::new();

        let resolved = resolver(table).resolve(&mut registry, "vault").unwrap();
        assert!(resolved.ptr_eq(&default));
    }

    #[test]
    fn test_not_found_lists_all_candidates() {
        let loader = Probing::new(ModuleTable::new());
        let probes = Arc::clone(&loader.probes);
        let mut registry = Registry::new();

        let err = resolver(loader)
            .resolve(&mut registry, "vault")
            .unwrap_err();
        match &err {
            ProviderError::NotFound { name, candidates } => {
                assert_eq!(name, "vault");
                let tried: Vec<String> = candidates.iter().map(ToString::to_string).collect();
                assert_eq!(tried, VAULT_CANDIDATES);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(*probes.lock().unwrap(), VAULT_CANDIDATES);
        assert!(err.to_string().contains("config-provider-vault"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_load_failure_stops_search() {
        let mut loader = Probing::new(
            ModuleTable::new().with_package("vault", ProviderHandle::of::<Noop>()),
        );
        loader.broken = Some(Candidate::package("config-vault-provider"));
        let probes = Arc::clone(&loader.probes);
        let mut registry = Registry::new();

        let err = resolver(loader)
            .resolve(&mut registry, "vault")
            .unwrap_err();
        assert!(matches!(
            &err,
            ProviderError::Load { candidate, .. } if *candidate == Candidate::package("config-vault-provider")
        ));
        assert_eq!(probes.lock().unwrap().len(), 3);
        assert!(!registry.has("vault"));
    }
}
