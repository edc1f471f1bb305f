use provider_config::{BoxError, Config, ModuleTable, Provider, ProviderHandle};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct VaultProvider;

impl Provider for VaultProvider {
    fn resolve(&mut self, parameter: Option<&str>) -> Result<(), BoxError> {
        println!("vault provider - {}", parameter.unwrap_or_default());
        Ok(())
    }
}

fn main() -> Result<(), provider_config::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut config = Config::builder()
        .execution_dir("demos")
        .manifest("app.toml")
        .setting_table("config")
        .with_loader(
            ModuleTable::new().with_package("config-vault-provider", ProviderHandle::of::<VaultProvider>()),
        )
        .init()?;

    println!("providers: {:?}", config.registry().names());
    config.build()?;

    Ok(())
}
