use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::MatchingThresholds;
use crate::services::whatsapp::DEFAULT_API_BASE;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub whatsapp: WhatsAppSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self { path: default_catalog_path() }
    }
}

fn default_catalog_path() -> String { "data/catalog.json".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct WhatsAppSettings {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    pub token: Option<String>,
    pub phone_id: Option<String>,
    pub verify_token: Option<String>,
    /// Public bot number, e.g. "whatsapp:+15551234567"
    pub number: Option<String>,
}

impl Default for WhatsAppSettings {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            token: None,
            phone_id: None,
            verify_token: None,
            number: None,
        }
    }
}

fn default_api_base() -> String { DEFAULT_API_BASE.to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    #[serde(default = "default_acceptance_threshold")]
    pub acceptance_threshold: f64,
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: f64,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            acceptance_threshold: default_acceptance_threshold(),
            fuzzy_threshold: default_fuzzy_threshold(),
        }
    }
}

impl From<&MatchingSettings> for MatchingThresholds {
    fn from(settings: &MatchingSettings) -> Self {
        Self {
            acceptance: settings.acceptance_threshold,
            fuzzy: settings.fuzzy_threshold,
            max_results: settings.max_results,
        }
    }
}

fn default_max_results() -> usize { 5 }
fn default_acceptance_threshold() -> f64 { 0.6 }
fn default_fuzzy_threshold() -> f64 { 0.7 }

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

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with DEALQ__)
    /// 5. The plain WhatsApp variables of the bot deployment
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., DEALQ__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("DEALQ")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = substitute_env_vars(settings, |key| std::env::var(key).ok())?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("DEALQ")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn thresholds(&self) -> MatchingThresholds {
        MatchingThresholds::from(&self.matching)
    }
}

/// Plain environment variables and the setting each one overrides
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("WHATSAPP_TOKEN", "whatsapp.token"),
    ("WHATSAPP_PHONE_ID", "whatsapp.phone_id"),
    ("WEBHOOK_VERIFY_TOKEN", "whatsapp.verify_token"),
    ("WHATSAPP_NUMBER", "whatsapp.number"),
    ("LOG_LEVEL", "logging.level"),
    ("LOG_FORMAT", "logging.format"),
];

/// Apply the un-prefixed deployment variables on top of loaded settings
fn substitute_env_vars<F>(settings: Config, lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut builder = Config::builder().add_source(settings);

    for (var, key) in ENV_OVERRIDES {
        if let Some(value) = lookup(var) {
            builder = builder.set_override(*key, value)?;
        }
    }

    builder.build()
}
