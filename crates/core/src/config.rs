use crate::error::CampaignResult;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Root application configuration. Loaded from an optional TOML file, then
/// environment variables with the prefix `CAMPAIGN_INSIGHTS__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub query: QueryConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default)]
    pub filter_dialect: FilterDialect,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueryConfig {
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

/// Parameter names the list endpoint expects for its filters.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FilterDialect {
    /// `campaign_type`, `start_date`, `end_date`
    #[default]
    Canonical,
    /// `tipo_campania`, `fecha_inicio`, `fecha_fin`
    Localized,
}

// Default functions
fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}
fn default_timeout_ms() -> u64 {
    10_000
}
fn default_page_size() -> u64 {
    5
}
fn default_debounce_ms() -> u64 {
    400
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            filter_dialect: FilterDialect::default(),
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            query: QueryConfig::default(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl QueryConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl AppConfig {
    /// Load configuration from an optional config file and environment variables.
    pub fn load(file: Option<&Path>) -> CampaignResult<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let builder = builder.add_source(
            config::Environment::with_prefix("CAMPAIGN_INSIGHTS")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }
}
