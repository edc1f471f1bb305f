use thiserror::Error;

use super::Candidate;

/// Error type returned by providers and module loaders.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProviderError {
    #[error("provider name must not be empty")]
    EmptyName,

    #[error("provider '{name}' already exists, set `force` to override it")]
    Duplicate { name: String },

    #[error("could not resolve provider '{name}' (tried: {})", join(.candidates))]
    NotFound {
        name: String,
        candidates: Vec<Candidate>,
    },

    #[error("failed to load provider '{name}' from '{candidate}': {source}")]
    Load {
        name: String,
        candidate: Candidate,
        source: BoxError,
    },

    #[error("provider '{name}' failed: {source}")]
    Invocation { name: String, source: BoxError },
}

fn join(candidates: &[Candidate]) -> String {
    candidates
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
