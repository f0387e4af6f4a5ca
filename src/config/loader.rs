use std::path::Path;
use tracing::{debug, warn};

use super::{provider_config_path, ConfigError, ProviderConfig};

/// Load the provider configuration from `~/.gitlab-tag-protection/config.toml`.
///
/// Returns `Ok(ProviderConfig::default())` if the file does not exist.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file exists but cannot be read or parsed.
pub fn load_provider_config() -> Result<ProviderConfig, ConfigError> {
    let Some(path) = provider_config_path() else {
        warn!("Could not determine home directory; using default provider config");
        return Ok(ProviderConfig::default());
    };
    load_provider_config_from(&path)
}

/// Load the provider configuration from an explicit path.
pub fn load_provider_config_from(path: &Path) -> Result<ProviderConfig, ConfigError> {
    if !path.exists() {
        debug!("Provider config not found at {}; using defaults", path.display());
        return Ok(ProviderConfig::default());
    }
    let content = std::fs::read_to_string(path)?;
    let config: ProviderConfig = toml::from_str(&content)?;
    debug!("Loaded provider config from {}", path.display());
    Ok(config)
}
