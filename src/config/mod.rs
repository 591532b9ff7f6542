mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use std::path::Path;
use tracing::{debug, info};

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the YAML config file (if any), applies environment overrides and
/// validates the result.
pub async fn load() -> Result<Config> {
    load_from(DEFAULT_CONFIG_PATH, |key| env::var(key).ok()).await
}

/// `CONFIG_PATH` names a file that must exist; without it `default_path`
/// is read only when present.
pub async fn load_from<F>(default_path: &str, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let explicit_path = lookup("CONFIG_PATH").filter(|path| !path.trim().is_empty());
    let config_path = explicit_path
        .clone()
        .unwrap_or_else(|| default_path.to_string());

    let mut config = if explicit_path.is_some() || Path::new(&config_path).exists() {
        debug!("Loading configuration from: {}", config_path);
        let config_str = tokio::fs::read_to_string(&config_path).await?;
        parse(&config_str)?
    } else {
        info!("No {} found, using built-in defaults", config_path);
        Config::default()
    };

    apply_env_overrides(&mut config, lookup)?;
    config.validate()?;

    Ok(config)
}

pub fn parse(config_str: &str) -> Result<Config> {
    // An empty document deserializes to unit, not a mapping.
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(config_str)?)
}

/// Blank variables (as left by an unfilled `.env` line) count as unset.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(api_key) = lookup("GROQ_API_KEY") {
        config.llm.api_key = api_key;
    }
    if let Some(token) = lookup("STATIC_TOKEN") {
        config.auth.static_token = token;
    }
    if let Some(model) = lookup("LLM_MODEL") {
        config.llm.model = model;
    }
    if let Some(base_url) = lookup("LLM_BASE_URL") {
        config.llm.base_url = base_url;
    }
    if let Some(host) = lookup("HOST") {
        config.server.host = host;
    }
    if let Some(port) = lookup("PORT") {
        config.server.port = port
            .parse()
            .map_err(|_| Error::config(format!("PORT is not a valid port number: '{port}'")))?;
    }
    Ok(())
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.llm.api_key.trim().is_empty() {
            return Err(Error::config(
                "LLM API key is not set (llm.api_key or GROQ_API_KEY)",
            ));
        }
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(Error::config(format!(
                "llm.temperature must be between 0.0 and 2.0, got {}",
                self.llm.temperature
            )));
        }
        if self.llm.timeout_secs == 0 {
            return Err(Error::config("llm.timeout_secs must be greater than zero"));
        }
        if self.auth.static_token.is_empty() {
            return Err(Error::config("auth.static_token must not be empty"));
        }
        Ok(())
    }
}
