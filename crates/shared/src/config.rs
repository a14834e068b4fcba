//! Application configuration management.

use serde::Deserialize;

use crate::types::RoundingMode;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Division engine configuration.
    #[serde(default)]
    pub division: DivisionConfig,
    /// Report rendering configuration.
    #[serde(default)]
    pub report: ReportConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Division engine configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DivisionConfig {
    /// Midpoint rule used when rounding amounts to centavos.
    #[serde(default)]
    pub rounding: RoundingMode,
    /// Division method used when none is given ("equal" or "proportional").
    #[serde(default = "default_method")]
    pub default_method: String,
}

fn default_method() -> String {
    "equal".to_string()
}

impl Default for DivisionConfig {
    fn default() -> Self {
        Self {
            rounding: RoundingMode::default(),
            default_method: default_method(),
        }
    }
}

/// Report rendering configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Symbol printed in front of amounts in text exports.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_currency_symbol() -> String {
    "R$".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_filter() -> String {
    "republicar=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones overriding earlier ones:
    /// `config/default`, `config/{RUN_MODE}`, then `REPUBLICAR__*` variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("REPUBLICAR").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
