use anyhow::Result;
use config::{Config, ConfigBuilder, FileFormat, builder::DefaultState};
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

/// Default look-ahead for recurring series, in calendar months.
pub const DEFAULT_HORIZON_MONTHS: u32 = 12;
/// Default cap on generated occurrences for one series.
pub const DEFAULT_MAX_OCCURRENCES: u32 = 365;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub schedule: ScheduleConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Safety bounds applied when expanding recurring shipping-calendar events.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ScheduleConfig {
    pub horizon_months: u32,
    pub max_occurrences: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            horizon_months: DEFAULT_HORIZON_MONTHS,
            max_occurrences: DEFAULT_MAX_OCCURRENCES,
        }
    }
}

fn within(key: &'static str, value: u32, max: u32) -> CoreResult<()> {
    if (1..=max).contains(&value) {
        Ok(())
    } else {
        Err(CoreError::OutOfRange {
            key,
            value,
            min: 1,
            max,
        })
    }
}

impl ScheduleConfig {
    /// ## Summary
    /// Checks that both bounds are at least 1 and no larger than the defaults.
    ///
    /// ## Errors
    /// Returns `CoreError::OutOfRange` naming the first offending key.
    pub fn validate(&self) -> CoreResult<()> {
        within("schedule.horizon_months", self.horizon_months, DEFAULT_HORIZON_MONTHS)?;
        within("schedule.max_occurrences", self.max_occurrences, DEFAULT_MAX_OCCURRENCES)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    /// Process-local store, used for previews and tests.
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub backend: StoreBackend,
}

fn with_defaults(builder: ConfigBuilder<DefaultState>) -> Result<ConfigBuilder<DefaultState>> {
    Ok(builder
        .set_default("logging.level", "info")?
        .set_default("schedule.horizon_months", i64::from(DEFAULT_HORIZON_MONTHS))?
        .set_default("schedule.max_occurrences", i64::from(DEFAULT_MAX_OCCURRENCES))?
        .set_default("store.backend", "memory")?)
}

impl Settings {
    fn validated(self) -> CoreResult<Self> {
        self.schedule.validate()?;
        Ok(self)
    }

    /// ## Summary
    /// Loads configuration from environment variables and an optional `config.toml`.
    ///
    /// Variables use the `FURROW_` prefix and `__` between nesting levels,
    /// e.g. `FURROW_SCHEDULE__HORIZON_MONTHS=6`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it
    /// fails, or if a schedule bound is out of range.
    pub fn load() -> Result<Self> {
        Ok(with_defaults(Config::builder())?
            .add_source(
                config::Environment::with_prefix("FURROW")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?
            .validated()?)
    }

    /// ## Summary
    /// Builds settings from TOML text layered over the defaults.
    ///
    /// ## Errors
    /// Returns an error if the text is not valid TOML, does not match the
    /// schema, or sets a schedule bound out of range.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Ok(with_defaults(Config::builder())?
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?
            .validated()?)
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
