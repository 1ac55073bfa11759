//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! Every variable is optional.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `PORT` - Port to bind on all interfaces when `LISTEN` is not set
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `PLATFORM_HOST` - CNAME target for generated records (default: `cname.render.com`)
//! - `DNS_TTL_SECONDS` - TTL on generated records (default: 3600)
//! - `AVAILABILITY_RATIO` - Probability a simulated check reports "available" (default: 0.7)
//! - `AVAILABILITY_SEED` - Seed for reproducible availability and suggestions
//! - `DOMAIN_EXTENSIONS` - Comma-separated extension catalog override
//!
//! ```bash
//! export LISTEN="127.0.0.1:8080"
//! export DOMAIN_EXTENSIONS=".dev,.io,.app"
//! export AVAILABILITY_SEED=42
//! ```

use crate::domain::entities::ExtensionCatalog;
use crate::domain::synthesizer::{DEFAULT_PLATFORM_HOST, DEFAULT_TTL_SECONDS};
use crate::infrastructure::availability::DEFAULT_AVAILABLE_RATIO;
use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Hostname every generated CNAME points at.
    pub platform_host: String,
    pub dns_ttl_seconds: u32,
    /// Probability in `[0, 1]` that a simulated availability check succeeds.
    pub available_ratio: f64,
    /// When set, availability verdicts and suggestions are reproducible.
    pub availability_seed: Option<u64>,
    /// Catalog override; `None` uses the built-in extension list.
    pub extensions: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            platform_host: DEFAULT_PLATFORM_HOST.to_string(),
            dns_ttl_seconds: DEFAULT_TTL_SECONDS,
            available_ratio: DEFAULT_AVAILABLE_RATIO,
            availability_seed: None,
            extensions: None,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = Self::load_listen_addr();
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);
        let platform_host = env::var("PLATFORM_HOST").unwrap_or(defaults.platform_host);

        let dns_ttl_seconds = match env::var("DNS_TTL_SECONDS") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("DNS_TTL_SECONDS must be an integer, got '{v}'"))?,
            Err(_) => defaults.dns_ttl_seconds,
        };

        let available_ratio = match env::var("AVAILABILITY_RATIO") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("AVAILABILITY_RATIO must be a number, got '{v}'"))?,
            Err(_) => defaults.available_ratio,
        };

        let availability_seed = match env::var("AVAILABILITY_SEED") {
            Ok(v) => Some(
                v.parse()
                    .with_context(|| format!("AVAILABILITY_SEED must be an integer, got '{v}'"))?,
            ),
            Err(_) => None,
        };

        let extensions = env::var("DOMAIN_EXTENSIONS")
            .ok()
            .map(|v| parse_extension_list(&v));

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            platform_host,
            dns_ttl_seconds,
            available_ratio,
            availability_seed,
            extensions,
        })
    }

    /// Loads the bind address.
    ///
    /// Priority:
    /// 1. `LISTEN` environment variable
    /// 2. `0.0.0.0:$PORT` when `PORT` is set
    /// 3. `0.0.0.0:3000`
    fn load_listen_addr() -> String {
        if let Ok(listen) = env::var("LISTEN") {
            return listen;
        }

        match env::var("PORT") {
            Ok(port) => format!("0.0.0.0:{}", port),
            Err(_) => Self::default().listen_addr,
        }
    }

    /// Builds the extension catalog, falling back to the built-in list.
    ///
    /// # Errors
    ///
    /// Returns an error if the `DOMAIN_EXTENSIONS` override is empty,
    /// malformed, or repeats an extension.
    pub fn extension_catalog(&self) -> Result<ExtensionCatalog> {
        match &self.extensions {
            Some(extensions) => ExtensionCatalog::new(extensions.iter().cloned())
                .context("DOMAIN_EXTENSIONS is not a valid extension catalog"),
            None => Ok(ExtensionCatalog::default()),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `platform_host` is empty or carries a scheme
    /// - `dns_ttl_seconds` is 0
    /// - `available_ratio` is outside `[0, 1]`
    /// - the extension catalog override is invalid
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.platform_host.trim().is_empty() {
            anyhow::bail!("PLATFORM_HOST must not be empty");
        }

        if self.platform_host.contains("://") {
            anyhow::bail!(
                "PLATFORM_HOST must be a bare hostname, got '{}'",
                self.platform_host
            );
        }

        if self.dns_ttl_seconds == 0 {
            anyhow::bail!("DNS_TTL_SECONDS must be greater than 0");
        }

        if !(0.0..=1.0).contains(&self.available_ratio) {
            anyhow::bail!(
                "AVAILABILITY_RATIO must be between 0 and 1, got {}",
                self.available_ratio
            );
        }

        self.extension_catalog()?;

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Platform host: {}", self.platform_host);
        tracing::info!("  DNS TTL: {}s", self.dns_ttl_seconds);
        tracing::info!("  Availability ratio: {}", self.available_ratio);

        match self.availability_seed {
            Some(seed) => tracing::info!("  Random source: seeded ({})", seed),
            None => tracing::info!("  Random source: entropy"),
        }

        match &self.extensions {
            Some(extensions) => tracing::info!("  Extensions: {} (override)", extensions.len()),
            None => tracing::info!("  Extensions: built-in"),
        }
    }
}

/// Splits a comma-separated extension list, dropping blank entries.
fn parse_extension_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "LISTEN",
        "PORT",
        "LOG_FORMAT",
        "PLATFORM_HOST",
        "DNS_TTL_SECONDS",
        "AVAILABILITY_RATIO",
        "AVAILABILITY_SEED",
        "DOMAIN_EXTENSIONS",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment are run serially
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_parse_extension_list() {
        assert_eq!(
            parse_extension_list(" .dev, .io ,,.app "),
            vec![".dev", ".io", ".app"]
        );
        assert!(parse_extension_list(" , ").is_empty());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();

        config.platform_host = "https://cname.render.com".to_string();
        assert!(config.validate().is_err());

        config.platform_host = " ".to_string();
        assert!(config.validate().is_err());

        config.platform_host = "cname.render.com".to_string();

        config.dns_ttl_seconds = 0;
        assert!(config.validate().is_err());

        config.dns_ttl_seconds = 3600;

        config.available_ratio = 1.5;
        assert!(config.validate().is_err());

        config.available_ratio = f64::NAN;
        assert!(config.validate().is_err());

        config.available_ratio = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_extension_override() {
        let config = Config {
            extensions: Some(vec![".dev".to_string(), ".dev".to_string()]),
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            extensions: Some(Vec::new()),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_extension_catalog_default_and_override() {
        let config = Config::default();
        assert_eq!(config.extension_catalog().unwrap(), ExtensionCatalog::default());

        let config = Config {
            extensions: Some(vec![".dev".to_string(), ".io".to_string()]),
            ..Config::default()
        };
        let catalog = config.extension_catalog().unwrap();
        assert_eq!(catalog.extensions(), &[".dev", ".io"]);
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.platform_host, "cname.render.com");
        assert_eq!(config.dns_ttl_seconds, 3600);
        assert_eq!(config.available_ratio, 0.7);
        assert!(config.availability_seed.is_none());
        assert!(config.extensions.is_none());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();

        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("PLATFORM_HOST", "edge.example.net");
            env::set_var("DNS_TTL_SECONDS", "300");
            env::set_var("AVAILABILITY_RATIO", "0.5");
            env::set_var("AVAILABILITY_SEED", "42");
            env::set_var("DOMAIN_EXTENSIONS", ".dev,.io");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.platform_host, "edge.example.net");
        assert_eq!(config.dns_ttl_seconds, 300);
        assert_eq!(config.available_ratio, 0.5);
        assert_eq!(config.availability_seed, Some(42));
        assert_eq!(
            config.extensions,
            Some(vec![".dev".to_string(), ".io".to_string()])
        );

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_bad_numbers() {
        clear_env();

        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("AVAILABILITY_SEED", "not-a-number");
        }

        assert!(Config::from_env().is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_listen_priority() {
        clear_env();

        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("PORT", "8080");
        }
        assert_eq!(Config::load_listen_addr(), "0.0.0.0:8080");

        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:9000");
        }
        assert_eq!(Config::load_listen_addr(), "127.0.0.1:9000");

        clear_env();
    }
}
