//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file with environment variable
//! overrides for sensitive values like `ODDS_API_KEY`.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

use crate::domain::{QuotePolicy, Side, MICRO_UNIT};
use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    pub market: MarketConfig,
    #[serde(default)]
    pub quoting: QuotingConfig,
    #[serde(default)]
    pub odds: OddsApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which market to quote and which event prices it.
#[derive(Debug, Default, Deserialize)]
pub struct MarketConfig {
    /// Venue market identifier.
    pub market_id: String,
    /// Event id on the reference odds feed.
    pub odds_event_id: String,
    /// Odds feed sport key, e.g. `baseball_mlb`.
    #[serde(default = "default_sport")]
    pub sport: String,
}

/// Quoting policy parameters, all at micro scale.
#[derive(Debug, Deserialize)]
pub struct QuotingConfig {
    /// Subtracted from the implied probability to reach the passive target.
    #[serde(default = "default_spread_offset")]
    pub spread_offset_micros: u64,
    /// Hysteresis band; the resting order survives moves smaller than this.
    #[serde(default = "default_requote_band")]
    pub requote_band_micros: u64,
    /// YES-side order size in micro-units.
    #[serde(default = "default_quantity")]
    pub yes_quantity_micros: u64,
    /// NO-side order size in micro-units.
    #[serde(default = "default_quantity")]
    pub no_quantity_micros: u64,
    /// Seconds between polling cycles.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
    /// Log decisions without submitting anything on-chain.
    #[serde(default = "default_dry_run")]
    pub dry_run: bool,
}

impl Default for QuotingConfig {
    fn default() -> Self {
        Self {
            spread_offset_micros: default_spread_offset(),
            requote_band_micros: default_requote_band(),
            yes_quantity_micros: default_quantity(),
            no_quantity_micros: default_quantity(),
            poll_interval_secs: default_poll_interval(),
            dry_run: default_dry_run(),
        }
    }
}

/// Odds feed endpoint configuration. The API key is never read from the
/// config file; it comes from the `ODDS_API_KEY` environment variable.
#[derive(Debug, Deserialize)]
pub struct OddsApiConfig {
    #[serde(default = "default_odds_api_url")]
    pub api_url: String,
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for OddsApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_odds_api_url(),
            api_key: None,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

fn default_sport() -> String {
    "baseball_mlb".into()
}

fn default_spread_offset() -> u64 {
    50_000
}

fn default_requote_band() -> u64 {
    30_000
}

fn default_quantity() -> u64 {
    1_000_000
}

fn default_poll_interval() -> u64 {
    60
}

fn default_dry_run() -> bool {
    true
}

fn default_odds_api_url() -> String {
    "https://api.the-odds-api.com/v4/sports".into()
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

        let mut config: Self = toml::from_str(&content).map_err(ConfigError::Parse)?;

        // API key comes from the environment, never from the config file.
        config.odds.api_key = std::env::var("ODDS_API_KEY").ok();

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.market.market_id.is_empty() {
            return Err(ConfigError::MissingField {
                field: "market.market_id",
            }
            .into());
        }
        if self.market.odds_event_id.is_empty() {
            return Err(ConfigError::MissingField {
                field: "market.odds_event_id",
            }
            .into());
        }
        if self.odds.api_key.as_deref().unwrap_or("").is_empty() {
            return Err(ConfigError::MissingField {
                field: "ODDS_API_KEY",
            }
            .into());
        }
        Url::parse(&self.odds.api_url).map_err(|err| ConfigError::InvalidValue {
            field: "odds.api_url",
            reason: err.to_string(),
        })?;

        if self.quoting.spread_offset_micros >= MICRO_UNIT {
            return Err(ConfigError::InvalidValue {
                field: "quoting.spread_offset_micros",
                reason: "offset must stay inside the probability domain".into(),
            }
            .into());
        }
        if self.quoting.requote_band_micros >= MICRO_UNIT {
            return Err(ConfigError::InvalidValue {
                field: "quoting.requote_band_micros",
                reason: "band must stay inside the probability domain".into(),
            }
            .into());
        }
        if self.quoting.yes_quantity_micros == 0 || self.quoting.no_quantity_micros == 0 {
            return Err(ConfigError::InvalidValue {
                field: "quoting.quantity",
                reason: "order size must be positive".into(),
            }
            .into());
        }
        if self.quoting.poll_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "quoting.poll_interval_secs",
                reason: "polling interval must be positive".into(),
            }
            .into());
        }
        Ok(())
    }

    /// Quote policy for one side.
    #[must_use]
    pub fn policy(&self, side: Side) -> QuotePolicy {
        QuotePolicy {
            spread_offset: self.quoting.spread_offset_micros,
            requote_band: self.quoting.requote_band_micros,
            quantity: match side {
                Side::Yes => self.quoting.yes_quantity_micros,
                Side::No => self.quoting.no_quantity_micros,
            },
        }
    }

    /// Sleep duration between polling cycles.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.quoting.poll_interval_secs)
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
