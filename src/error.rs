use crate::provider::ProviderError;
use crate::setting::SettingError;
use thiserror::Error;

/// Top-level error type for the provider-config library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("setting error: {0}")]
    Setting(#[from] SettingError),

    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),
}
