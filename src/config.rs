//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated, and injected into the
//! services that need it. Nothing reads the environment after startup.
//!
//! ```bash
//! export APOLLO_API_KEY="..."
//! export LISTEN="0.0.0.0:3000"
//! ```
//!
//! ## Optional Variables
//!
//! - `APOLLO_API_KEY` - Apollo key; without it organization lookups fail with 500
//! - `APOLLO_BASE_URL` - Apollo origin (default: `https://app.apollo.io`)
//! - `APOLLO_TIMEOUT_SECS` - Upstream request timeout (default: none, the transport decides)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BATCH_SIZE` - Domains per Apollo request, 1 to 9000 (default: 9000)
//! - `DOMAIN_COLUMN` - CSV column holding domains (default: `domain`)
//! - `PLACEHOLDER_TOKEN` - Token replaced in link templates (default: `REPLACE_ME`)
//! - `SALES_URL_TEMPLATE`, `MARKETING_URL_TEMPLATE`, `IT_URL_TEMPLATE` - Link templates
//! - `WORKFLOW_FILE_PREFIX` - Workflow file-name prefix (default: `BRAD`)
//! - `MAX_BODY_BYTES` - Request body limit (default: 50 MiB)

use crate::application::services::csv_service::DEFAULT_DOMAIN_COLUMN;
use crate::application::services::link_service::{DEFAULT_PLACEHOLDER, LinkTemplates};
use crate::application::services::workflow_service::DEFAULT_FILE_PREFIX;
use crate::domain::entities::{MAX_BATCH_SIZE, Segment};
use crate::infrastructure::apollo::DEFAULT_BASE_URL;
use anyhow::Result;
use std::env;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Apollo key sent as `X-Api-Key`. `None` when unset or empty.
    pub apollo_api_key: Option<String>,
    pub apollo_base_url: String,
    /// Whole-request timeout for Apollo calls. `None` leaves it to the transport.
    pub apollo_timeout_secs: Option<u64>,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub batch_size: usize,
    pub domain_column: String,
    pub placeholder: String,
    pub templates: LinkTemplates,
    pub workflow_file_prefix: String,
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            apollo_api_key: None,
            apollo_base_url: DEFAULT_BASE_URL.to_string(),
            apollo_timeout_secs: None,
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            batch_size: MAX_BATCH_SIZE,
            domain_column: DEFAULT_DOMAIN_COLUMN.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            templates: LinkTemplates::default(),
            workflow_file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            max_body_bytes: 50 * 1024 * 1024,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let apollo_api_key = env::var("APOLLO_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());

        let templates = LinkTemplates {
            sales: env::var("SALES_URL_TEMPLATE").unwrap_or(defaults.templates.sales),
            marketing: env::var("MARKETING_URL_TEMPLATE").unwrap_or(defaults.templates.marketing),
            it: env::var("IT_URL_TEMPLATE").unwrap_or(defaults.templates.it),
        };

        Ok(Self {
            apollo_api_key,
            apollo_base_url: env::var("APOLLO_BASE_URL").unwrap_or(defaults.apollo_base_url),
            apollo_timeout_secs: parse_optional_var("APOLLO_TIMEOUT_SECS")?,
            listen_addr: env::var("LISTEN").unwrap_or(defaults.listen_addr),
            log_level: env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: env::var("LOG_FORMAT").unwrap_or(defaults.log_format),
            batch_size: parse_var("BATCH_SIZE", defaults.batch_size)?,
            domain_column: env::var("DOMAIN_COLUMN").unwrap_or(defaults.domain_column),
            placeholder: env::var("PLACEHOLDER_TOKEN").unwrap_or(defaults.placeholder),
            templates,
            workflow_file_prefix: env::var("WORKFLOW_FILE_PREFIX")
                .unwrap_or(defaults.workflow_file_prefix),
            max_body_bytes: parse_var("MAX_BODY_BYTES", defaults.max_body_bytes)?,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `batch_size` is outside `1..=9000`
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` or `apollo_base_url` is malformed
    /// - the placeholder is empty or missing from a template
    /// - a template is not an absolute http(s) URL
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 || self.batch_size > MAX_BATCH_SIZE {
            anyhow::bail!(
                "BATCH_SIZE must be between 1 and {}, got {}",
                MAX_BATCH_SIZE,
                self.batch_size
            );
        }

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

        if !is_http_url(&self.apollo_base_url) {
            anyhow::bail!(
                "APOLLO_BASE_URL must be an http(s) URL, got '{}'",
                self.apollo_base_url
            );
        }

        if self.apollo_timeout_secs == Some(0) {
            anyhow::bail!("APOLLO_TIMEOUT_SECS must be greater than 0");
        }

        if self.placeholder.is_empty() {
            anyhow::bail!("PLACEHOLDER_TOKEN must not be empty");
        }

        for segment in Segment::ALL {
            let template = self.templates.get(segment);
            if !template.contains(&self.placeholder) {
                anyhow::bail!(
                    "{} link template must contain the placeholder '{}'",
                    segment,
                    self.placeholder
                );
            }
            if !is_http_url(template) {
                anyhow::bail!("{} link template must be an http(s) URL", segment);
            }
        }

        if self.domain_column.is_empty() {
            anyhow::bail!("DOMAIN_COLUMN must not be empty");
        }

        if self.workflow_file_prefix.is_empty() {
            anyhow::bail!("WORKFLOW_FILE_PREFIX must not be empty");
        }

        if self.max_body_bytes == 0 {
            anyhow::bail!("MAX_BODY_BYTES must be greater than 0");
        }

        Ok(())
    }

    /// Returns whether an Apollo API key is available.
    pub fn is_apollo_configured(&self) -> bool {
        self.apollo_api_key.is_some()
    }

    pub fn apollo_timeout(&self) -> Option<Duration> {
        self.apollo_timeout_secs.map(Duration::from_secs)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Apollo: {}", self.apollo_base_url);

        match self.apollo_api_key {
            Some(ref key) => tracing::info!("  Apollo API key: {}", mask_secret(key)),
            None => tracing::warn!("  Apollo API key: not configured"),
        }

        if let Some(secs) = self.apollo_timeout_secs {
            tracing::info!("  Apollo timeout: {}s", secs);
        }
        tracing::info!("  Batch size: {}", self.batch_size);
        tracing::info!("  Domain column: {}", self.domain_column);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Parses an optional numeric variable, keeping `default` when unset.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("{name} must be a number, got '{raw}': {e}")),
        Err(_) => Ok(default),
    }
}

/// Like [`parse_var`], but an unset or blank variable yields `None`.
fn parse_optional_var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| anyhow::anyhow!("{name} must be a number, got '{raw}': {e}")),
        Err(_) => Ok(None),
    }
}

fn is_http_url(value: &str) -> bool {
    Url::parse(value).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}

/// Masks a secret for logging, keeping only its last four characters.
///
/// - `sk_live_1234abcd` → `***abcd`
/// - `abc` → `***`
fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "***".to_string();
    }

    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("***{tail}")
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
