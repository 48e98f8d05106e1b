use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
    pub acquire_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_database_url() -> String { "sqlite://sochi_athletes.sqlite3".to_string() }
fn default_log_level() -> String { "warn".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Built-in defaults
    /// 2. Configuration files (config/default.toml, then config/local.toml)
    /// 3. Environment variables (prefixed with ATHLETE_MATCH__)
    /// 4. DATABASE_URL, if set
    pub fn load() -> Result<Self, ConfigError> {
        let settings = with_defaults(Config::builder())?
            .add_source(File::with_name("config/default").required(false))
            // Local overrides for development
            .add_source(File::with_name("config/local").required(false))
            // e.g., ATHLETE_MATCH__DATABASE__URL -> database.url
            .add_source(environment())
            .build()?;

        substitute_env_vars(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = with_defaults(Config::builder())?
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        settings.try_deserialize()
    }
}

fn with_defaults(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    builder
        .set_default("database.url", default_database_url())?
        .set_default("logging.level", default_log_level())?
        .set_default("logging.format", default_log_format())
}

fn environment() -> Environment {
    Environment::with_prefix("ATHLETE_MATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// DATABASE_URL wins over every other source for the database location
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    match std::env::var("DATABASE_URL") {
        Ok(url) => Config::builder()
            .add_source(settings)
            .set_override("database.url", url)?
            .build(),
        Err(_) => Ok(settings),
    }
}
