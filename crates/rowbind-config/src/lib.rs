//! # rowbind-config
//!
//! Layered configuration loading for rowbind using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ROWBIND_*` prefix, `__` as separator)
//! 2. Project-level `.rowbind/config.toml`
//! 3. User-level `~/.config/rowbind/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `ROWBIND_DATABASE__PATH` -> `database.path`,
//! `ROWBIND_TABLES__PERSON` -> `tables.person`, and so on.
//!
//! ```toml
//! [database]
//! path = "blog.db"
//!
//! [model]
//! identity = "id"
//!
//! [tables]
//! Person = "people"
//! ```

mod database;
mod error;
mod log;
mod model;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use log::LogConfig;
pub use model::ModelConfig;

use std::collections::BTreeMap;
use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use rowbind_core::TableMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RowbindConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub model: ModelConfig,
    /// Explicit type name → table name overrides.
    #[serde(default)]
    pub tables: BTreeMap<String, String>,
    #[serde(default)]
    pub log: LogConfig,
}

impl RowbindConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".rowbind/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("ROWBIND_").split("__"))
    }

    /// Table naming policy: configured overrides over the pluralizing default.
    pub fn table_naming(&self) -> TableMap {
        self.tables
            .iter()
            .map(|(type_name, table)| (type_name.as_str(), table.as_str()))
            .collect()
    }

    /// Reject values that would only fail later at the database.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.path.trim().is_empty() {
            return Err(invalid("database.path", "must not be empty"));
        }
        if self.model.identity.trim().is_empty() {
            return Err(invalid("model.identity", "must not be empty"));
        }
        if let Some((type_name, _)) = self.tables.iter().find(|(_, t)| t.trim().is_empty()) {
            return Err(invalid(
                &format!("tables.{type_name}"),
                "table name must not be empty",
            ));
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("rowbind").join("config.toml"))
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
