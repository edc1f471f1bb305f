use std::collections::HashMap;

use super::{ProviderError, ProviderHandle};

/// Name-indexed provider bindings.
///
/// A bound name is only replaced when the caller passes `force`, so a
/// convention-resolved provider can never shadow an explicitly registered one.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    providers: HashMap<String, ProviderHandle>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `handle`.
    ///
    /// Fails with [`ProviderError::Duplicate`] if `name` is already bound and
    /// `force` is false; the existing binding is left untouched.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        handle: ProviderHandle,
        force: bool,
    ) -> Result<(), ProviderError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ProviderError::EmptyName);
        }
        if self.providers.contains_key(&name) {
            if !force {
                return Err(ProviderError::Duplicate { name });
            }
            tracing::warn!(provider = %name, "overriding registered provider");
        } else {
            tracing::debug!(provider = %name, "registered provider");
        }
        self.providers.insert(name, handle);
        Ok(())
    }

    pub fn has(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&ProviderHandle> {
        self.providers.get(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.providers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
