//! Configuration management for the CorteYa login
//!
//! Layers built-in defaults, an optional `config.toml` and `CORTEYA__*`
//! environment variables into a single [`AppConfig`].

use crate::auth::{DEFAULT_MIN_SECRET_LENGTH, IdentityTable, Role};
use crate::error::AppError;
use crate::utils::validation::{is_email_like, meets_min_length};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

/// Config file looked up in the working directory when no path is given.
const DEFAULT_CONFIG_PATH: &str = "config";
const ENV_PREFIX: &str = "CORTEYA";

/// Complete application configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    /// Default log filter, used when RUST_LOG is unset
    pub log_level: String,

    /// Minimum number of characters in a secret
    pub min_secret_length: usize,

    /// Print the demo accounts before the first prompt
    pub show_demo_accounts: bool,

    /// Accepted identities, checked in declared order
    pub identities: IdentityTable,

    /// Where each role lands after signing in
    pub routes: RouteConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            min_secret_length: DEFAULT_MIN_SECRET_LENGTH,
            show_demo_accounts: true,
            identities: IdentityTable::default(),
            routes: RouteConfig::default(),
        }
    }
}

/// Role-specific destinations
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RouteConfig {
    pub admin: String,
    pub business: String,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            admin: "/admin".to_string(),
            business: "/dashboard".to_string(),
        }
    }
}

impl RouteConfig {
    pub fn destination_for(&self, role: Role) -> &str {
        match role {
            Role::Admin => &self.admin,
            Role::Business => &self.business,
        }
    }
}

impl AppConfig {
    /// Load configuration from `path` (or `./config.*` when `None`) with
    /// environment overrides.
    ///
    /// An explicit path must exist; the default one is optional.
    pub fn load(path: Option<&str>) -> Result<Self, AppError> {
        let file = match path {
            Some(path) => File::with_name(path),
            None => File::with_name(DEFAULT_CONFIG_PATH).required(false),
        };

        let settings = Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        Self::from_settings(settings)
    }

    /// Parse configuration from TOML text, without environment overrides.
    pub fn from_toml_str(toml: &str) -> Result<Self, AppError> {
        let settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;

        Self::from_settings(settings)
    }

    fn from_settings(settings: Config) -> Result<Self, AppError> {
        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.min_secret_length == 0 {
            return Err(config::ConfigError::Message(
                "min_secret_length must be greater than 0".into(),
            ));
        }

        if self.identities.is_empty() {
            return Err(config::ConfigError::Message(
                "at least one identity must be configured".into(),
            ));
        }

        for entry in self.identities.demo_accounts() {
            if entry.identifier.is_empty() || entry.secret.is_empty() {
                return Err(config::ConfigError::Message(
                    "identities need a non-empty identifier and secret".into(),
                ));
            }

            // Entries the login form would reject before lookup can never sign in.
            if !is_email_like(&entry.identifier) {
                return Err(config::ConfigError::Message(format!(
                    "{} identity {} is not an email-like identifier",
                    entry.role, entry.identifier
                )));
            }

            if !meets_min_length(&entry.secret, self.min_secret_length) {
                return Err(config::ConfigError::Message(format!(
                    "{} identity {} has a secret shorter than min_secret_length ({})",
                    entry.role, entry.identifier, self.min_secret_length
                )));
            }
        }

        if self.routes.admin.is_empty() || self.routes.business.is_empty() {
            return Err(config::ConfigError::Message(
                "route destinations cannot be empty".into(),
            ));
        }

        Ok(())
    }
}
