//! Configuration management for the API server
//!
//! Loads the server configuration from a config file with environment
//! overrides and exposes the account pipeline: validate the raw authorizations
//! list, normalize it and build the account database.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use serde_json::Value;
use std::env;
use std::path::PathBuf;

use crate::accounts::{AccountDatabase, normalize_accounts, validate_accounts_field};
use crate::error::{AccountError, ValidationError};

/// Configuration key the API account list is stored under
pub const AUTHORIZATIONS_KEY: &str = "authorizations";

/// Server configuration loaded once at startup
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// IP address the API endpoint binds to
    pub bind_address: String,

    /// Port for the API endpoint
    pub port: u16,

    /// Directory that relative `password_file` paths resolve against;
    /// defaults to the process working directory
    pub base_dir: Option<String>,

    /// Raw API account list: structured objects or description strings
    #[serde(default)]
    pub authorizations: Value,
}

impl ServerConfig {
    /// Load configuration with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        // Try the installed path first, then the local development path
        let config_paths = ["/etc/api-accounts/config", "config"];

        let mut last_error = None;

        for config_path in &config_paths {
            match Self::load_from(config_path) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    last_error = Some(e);
                    continue;
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| ConfigError::Message("no configuration source found".into())))
    }

    /// Load configuration from an explicit file path with environment overrides
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(path))
            .add_source(Environment::with_prefix("API_ACCOUNTS").separator("__"))
            .build()?;
        settings.try_deserialize()
    }

    /// Validate the configuration, collecting every problem found
    ///
    /// An empty result means the configuration is *valid* and the account
    /// database can be built from it.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.bind_address.is_empty() {
            errors.push(ValidationError::new("'bind_address' cannot be empty"));
        }
        if self.port == 0 {
            errors.push(ValidationError::new("'port' cannot be 0"));
        }

        validate_accounts_field(AUTHORIZATIONS_KEY, &self.authorizations, &mut errors);
        errors
    }

    /// Build the account database from a *valid* configuration
    ///
    /// Normalizes the authorizations list against the base directory, then
    /// resolves every account, reading password files from disk as needed.
    pub fn account_database(&self) -> Result<AccountDatabase, AccountError> {
        let normalized = normalize_accounts(&self.authorizations, &self.resolved_base_dir())?;
        AccountDatabase::from_normalized(&normalized)
    }

    fn resolved_base_dir(&self) -> PathBuf {
        match &self.base_dir {
            Some(dir) => PathBuf::from(dir),
            None => env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }
}
