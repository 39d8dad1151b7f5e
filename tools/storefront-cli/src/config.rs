//! CLI configuration.

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use storefront_commerce::Currency;

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Store settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// Simulated payment settings.
    #[serde(default)]
    pub payment: PaymentConfig,

    /// Catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Store currency.
    pub fn currency(&self) -> Result<Currency> {
        Currency::from_code(&self.store.currency)
            .ok_or_else(|| anyhow!("Unknown store currency: {}", self.store.currency))
    }

    /// How long the simulated payment takes.
    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.payment.processing_delay_ms)
    }
}

/// Store settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Name shown in headers.
    #[serde(default = "default_store_name")]
    pub name: String,

    /// ISO currency code the catalog is priced in.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_store_name() -> String {
    "Storefront".to_string()
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            currency: default_currency(),
        }
    }
}

/// Simulated payment settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentConfig {
    /// Delay between submitting payment and confirmation, in milliseconds.
    #[serde(default = "default_processing_delay_ms")]
    pub processing_delay_ms: u64,
}

fn default_processing_delay_ms() -> u64 {
    1500
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            processing_delay_ms: default_processing_delay_ms(),
        }
    }
}

/// Catalog source.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// JSON product list. The bundled demo catalog when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Log output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. "info" or "storefront_commerce=debug".
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config(name: &str) -> String {
    format!(
        r#"# Storefront configuration

[store]
name = "{name}"
currency = "USD"

[payment]
# Simulated payment processing time
processing_delay_ms = 1500

[catalog]
# JSON product list; the bundled demo catalog is used when unset
# path = "products.json"

[logging]
level = "info"
"#,
        name = name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: CliConfig = toml::from_str(&generate_default_config("Storefront")).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config: CliConfig = toml::from_str(
            r#"
            [payment]
            processing_delay_ms = 0
            "#,
        )
        .unwrap();
        assert_eq!(config.processing_delay(), Duration::ZERO);
        assert_eq!(config.store.name, "Storefront");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_currency() {
        let mut config = CliConfig::default();
        assert_eq!(config.currency().unwrap(), Currency::USD);
        config.store.currency = "XYZ".into();
        assert!(config.currency().is_err());
    }

    #[test]
    fn test_load_json() {
        let path = std::env::temp_dir().join(format!("storefront-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"store": {"name": "Json Shop"}}"#).unwrap();
        let config = CliConfig::load(path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.store.name, "Json Shop");
        assert_eq!(config.store.currency, "USD");
    }
}
