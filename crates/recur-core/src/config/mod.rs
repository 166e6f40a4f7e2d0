use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::{
    CONFIG_FILE, DEFAULT_MAX_SCAN_DAYS, DEFAULT_REFERENCE_ZONE, ENV_PREFIX, ISO_DATE_FORMAT,
};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub engine: EngineConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Days `next`/`previous` may examine before giving up.
    pub max_scan_days: u32,
    /// Pattern used when rendering enumerated dates.
    pub date_format: String,
    /// IANA zone in which "today" is evaluated.
    pub reference_zone: String,
}

impl EngineConfig {
    /// ## Summary
    /// Resolves today's date in the configured reference zone.
    ///
    /// ## Errors
    /// Returns an error if the reference zone is not a known IANA zone.
    pub fn today(&self) -> crate::error::CoreResult<chrono::NaiveDate> {
        crate::date::today_in_zone(&self.reference_zone)
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `.env` file and environment variables into a `Settings`.
    /// A `recur.toml` in the working directory takes precedence over both.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Self::builder()?
            // TOML file
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }

    /// ## Summary
    /// Loads configuration from defaults and environment variables plus an
    /// explicit TOML file.
    ///
    /// ## Errors
    /// Returns an error if the file cannot be read or the result does not deserialize.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        Ok(Self::builder()?
            .add_source(config::File::from(path).required(true))
            .build()?
            .try_deserialize::<Settings>()?)
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
        Ok(Config::builder()
            .set_default("logging.level", "info")?
            .set_default("engine.max_scan_days", i64::from(DEFAULT_MAX_SCAN_DAYS))?
            .set_default("engine.date_format", ISO_DATE_FORMAT)?
            .set_default("engine.reference_zone", DEFAULT_REFERENCE_ZONE)?
            // Environment, e.g. RECUR_ENGINE__MAX_SCAN_DAYS
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            ))
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}

/// ## Summary
/// Like [`load_config`], but reads the given TOML file instead of looking for
/// `recur.toml`.
///
/// ## Errors
/// Returns an error if the file cannot be read or the configuration does not
/// deserialize.
pub fn load_config_from(path: &std::path::Path) -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load_from(path)
}
