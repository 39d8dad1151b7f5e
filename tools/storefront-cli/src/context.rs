//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _, Result};
use storefront_commerce::catalog::Catalog;
use storefront_commerce::checkout::CustomerDetails;
use storefront_commerce::session::StorefrontSession;

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names, in lookup order.
pub const CONFIG_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd).unwrap_or_default()
        };

        Ok(Self { config, output, cwd })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<CliConfig> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some(config);
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// The configured catalog, or the demo catalog.
    pub fn load_catalog(&self) -> Result<Catalog> {
        let catalog = match &self.config.catalog.path {
            Some(path) => {
                let path = self.resolve_path(path);
                let json = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
                Catalog::from_json(&json)
                    .with_context(|| format!("Failed to parse catalog: {}", path.display()))?
            }
            None => Catalog::demo(),
        };

        let currency = self.config.currency()?;
        if !catalog.is_empty() && catalog.currency() != currency {
            bail!(
                "Catalog is priced in {} but the store currency is {}",
                catalog.currency().code(),
                currency.code()
            );
        }

        self.output
            .debug(&format!("Loaded catalog with {} products", catalog.len()));
        Ok(catalog)
    }

    /// A fresh session over the configured catalog.
    pub fn new_session(&self) -> Result<StorefrontSession> {
        Ok(StorefrontSession::new(self.load_catalog()?)
            .with_processing_delay(self.config.processing_delay()))
    }

    /// Read customer details from a TOML (or `.json`) file.
    pub fn load_details(&self, path: &str) -> Result<CustomerDetails> {
        let path = self.resolve_path(path);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read address file: {}", path.display()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON address: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML address: {}", path.display()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> Context {
        Context {
            config: CliConfig::default(),
            output: Output::new(false, true),
            cwd: PathBuf::from(env!("CARGO_MANIFEST_DIR")),
        }
    }

    #[test]
    fn test_sample_addresses_parse() {
        let ctx = context();
        let shipping = ctx.load_details("samples/shipping.toml").unwrap();
        assert_eq!(shipping.full_name, "Ada Lovelace");
        assert!(shipping.validate().is_ok());

        let billing = ctx.load_details("samples/billing.toml").unwrap();
        assert!(billing.address_line2().is_none());
        assert!(!billing.same_recipient(&shipping));
    }

    #[test]
    fn test_default_catalog_is_demo() {
        let ctx = context();
        assert_eq!(ctx.load_catalog().unwrap(), Catalog::demo());
    }

    #[test]
    fn test_currency_mismatch_rejected() {
        let mut ctx = context();
        ctx.config.store.currency = "EUR".into();
        assert!(ctx.load_catalog().is_err());
    }

    #[test]
    fn test_mixed_currency_catalog_file_rejected() {
        let path = std::env::temp_dir().join(format!("storefront-mixed-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"[
                {"id": "a", "name": "A", "brand": "Acme", "category": "Misc",
                 "price": {"amount_cents": 1000, "currency": "USD"},
                 "originalPrice": {"amount_cents": 1000, "currency": "USD"}},
                {"id": "b", "name": "B", "brand": "Acme", "category": "Misc",
                 "price": {"amount_cents": 2000, "currency": "EUR"},
                 "originalPrice": {"amount_cents": 2000, "currency": "EUR"}}
            ]"#,
        )
        .unwrap();

        let mut ctx = context();
        ctx.config.catalog.path = Some(path.to_string_lossy().into_owned());
        let err = ctx.load_catalog().unwrap_err();
        std::fs::remove_file(&path).unwrap();

        assert!(format!("{:#}", err).contains("product b is not priced in USD"));
    }

    #[test]
    fn test_session_uses_configured_delay() {
        let mut ctx = context();
        ctx.config.payment.processing_delay_ms = 10;
        let session = ctx.new_session().unwrap();
        assert_eq!(session.processing_delay().as_millis(), 10);
    }

    #[test]
    fn test_resolve_path() {
        let ctx = context();
        assert!(ctx.resolve_path("a.toml").starts_with(&ctx.cwd));
        assert_eq!(ctx.resolve_path("/tmp/a.toml"), PathBuf::from("/tmp/a.toml"));
    }
}
