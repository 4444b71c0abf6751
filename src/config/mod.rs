mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the YAML config (if any) and applies environment overrides.
pub async fn load() -> Result<Config> {
    let explicit_path = env::var("CONFIG_PATH").ok();
    let mut config = load_file(explicit_path.as_deref()).await?;
    config.apply_overrides(|name| env::var(name).ok())?;
    Ok(config)
}

/// A missing default file falls back to built-in defaults; a missing
/// explicitly requested file is an error.
pub async fn load_file(explicit_path: Option<&str>) -> Result<Config> {
    let config_path = explicit_path.unwrap_or(DEFAULT_CONFIG_PATH);

    debug!("Loading configuration from: {}", config_path);

    let config_str = match tokio::fs::read_to_string(config_path).await {
        Ok(s) => s,
        Err(e) if explicit_path.is_none() && e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No {} found, using defaults", config_path);
            return Ok(Config::default());
        }
        Err(e) => {
            return Err(Error::config(format!(
                "Failed to read {}: {}",
                config_path, e
            )));
        }
    };

    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }

    Ok(serde_yaml::from_str(&config_str)?)
}

impl Config {
    /// Applies `API_KEY`, `PORT` and `APP_ENV` from the given lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.provider.api_key = lookup("API_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .map(ApiKey::from);

        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| Error::config(format!("Invalid PORT: '{}'", port)))?;
        }

        if let Some(mode) = lookup("APP_ENV") {
            self.server.mode = if mode.trim().eq_ignore_ascii_case("production") {
                DeploymentMode::Production
            } else {
                DeploymentMode::Development
            };
        }

        Ok(())
    }
}
