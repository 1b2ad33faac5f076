// Configuration module

mod models;

pub use models::*;

use crate::error::{RelayError, Result};
use config::{Config, Environment, File};
use std::path::PathBuf;

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Deployment environment variables `GENAI_API_KEY` / `GENAI_MODEL` (highest)
    /// 2. Environment variables (prefix: CUPOLA_)
    /// 3. Config file
    /// 4. Defaults (lowest)
    pub fn load() -> Result<Self> {
        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&Self::default())?)
            // Load from config file if it exists
            .add_source(File::with_name(&Self::default_config_path()).required(false))
            // Override with environment variables
            .add_source(Environment::with_prefix("CUPOLA").separator("_"))
            .build()
            .map_err(|e| RelayError::Config(e.to_string()))?;

        let mut config: AppConfig = config
            .try_deserialize()
            .map_err(|e| RelayError::Config(e.to_string()))?;

        // The deployment system sets the credential and model under these
        // names; they win over every other source.
        if let Ok(key) = std::env::var("GENAI_API_KEY") {
            if !key.is_empty() {
                config.genai.api_key = Some(key);
            }
        }
        if let Ok(model) = std::env::var("GENAI_MODEL") {
            if !model.is_empty() {
                config.genai.model = model;
            }
        }

        Ok(config)
    }

    fn default_config_path() -> String {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".cupola")
            .join("config.toml")
            .to_string_lossy()
            .to_string()
    }
}
