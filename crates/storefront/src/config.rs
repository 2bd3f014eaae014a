//! Storefront configuration.
//!
//! [`StorefrontConfig::default`] matches the storefront markup. Native hosts
//! can override the tunables from the environment.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STOREFRONT_SCROLL_THRESHOLD` - Scroll offset in px past which the header shrinks (default: 50)
//! - `STOREFRONT_HEADER_SHRUNK_CLASS` - Class toggled on the header (default: header-scroll)
//! - `STOREFRONT_LOGIN_SCROLL_DELAY_MS` - Delay before scrolling to top after login (default: 100)
//! - `STOREFRONT_FOCUS_DELAY_MS` - Delay before focusing the first checkout field (default: 100)

use std::time::Duration;

use thiserror::Error;

use crate::dom::Selector;

const DEFAULT_SCROLL_THRESHOLD: f64 = 50.0;
const DEFAULT_SHRUNK_CLASS: &str = "header-scroll";
const DEFAULT_DELAY_MS: u64 = 100;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront interaction configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    /// Elements the handlers operate on
    pub elements: ElementIds,
    /// Header shrinks once the vertical scroll offset is strictly above this
    pub scroll_threshold: f64,
    /// Class added to the header while shrunk
    pub header_shrunk_class: String,
    /// Delay between revealing the store and scrolling it to the top
    pub login_scroll_delay: Duration,
    /// Delay between opening the customer modal and focusing its first field
    pub focus_delay: Duration,
}

/// The page's element contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementIds {
    pub login_page: Selector,
    pub store_page: Selector,
    pub header: Selector,
    /// Pix payment modal
    pub pix_modal: Selector,
    /// Receipt (nota fiscal) modal
    pub receipt_modal: Selector,
    /// Container the rendered receipt is written into
    pub receipt_details: Selector,
    /// Cash/card register modal
    pub register_modal: Selector,
    pub customer_modal: Selector,
    pub name_input: Selector,
    pub phone_input: Selector,
    pub tax_id_input: Selector,
    pub pix_button: Selector,
    pub footer_year: Selector,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            login_page: Selector::id("login-page"),
            store_page: Selector::id("store-page"),
            header: Selector::tag("header"),
            pix_modal: Selector::id("pagamento"),
            receipt_modal: Selector::id("notaFiscal"),
            receipt_details: Selector::id("notaDetalhes"),
            register_modal: Selector::id("modalCaixa"),
            customer_modal: Selector::id("modalDadosCliente"),
            name_input: Selector::id("nomeCliente"),
            phone_input: Selector::id("telefoneCliente"),
            tax_id_input: Selector::id("idCliente"),
            pix_button: Selector::id("pixBtn"),
            footer_year: Selector::id("year"),
        }
    }
}

impl ElementIds {
    /// The three checkout form fields, in tab order.
    #[must_use]
    pub fn customer_fields(&self) -> [&Selector; 3] {
        [&self.name_input, &self.phone_input, &self.tax_id_input]
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            elements: ElementIds::default(),
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            header_shrunk_class: DEFAULT_SHRUNK_CLASS.to_string(),
            login_scroll_delay: Duration::from_millis(DEFAULT_DELAY_MS),
            focus_delay: Duration::from_millis(DEFAULT_DELAY_MS),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup, starting from the
    /// defaults and applying every key that is present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a present value is malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup("STOREFRONT_SCROLL_THRESHOLD") {
            config.scroll_threshold = parse_threshold("STOREFRONT_SCROLL_THRESHOLD", &raw)?;
        }
        if let Some(raw) = lookup("STOREFRONT_HEADER_SHRUNK_CLASS") {
            let class = raw.trim();
            if class.is_empty() || class.contains(char::is_whitespace) {
                return Err(ConfigError::InvalidEnvVar(
                    "STOREFRONT_HEADER_SHRUNK_CLASS".to_string(),
                    "must be a single non-empty class name".to_string(),
                ));
            }
            config.header_shrunk_class = class.to_string();
        }
        if let Some(raw) = lookup("STOREFRONT_LOGIN_SCROLL_DELAY_MS") {
            config.login_scroll_delay = parse_millis("STOREFRONT_LOGIN_SCROLL_DELAY_MS", &raw)?;
        }
        if let Some(raw) = lookup("STOREFRONT_FOCUS_DELAY_MS") {
            config.focus_delay = parse_millis("STOREFRONT_FOCUS_DELAY_MS", &raw)?;
        }

        Ok(config)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn parse_threshold(key: &str, raw: &str) -> Result<f64, ConfigError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("must be a non-negative number (got {value})"),
        ));
    }
    Ok(value)
}

fn parse_millis(key: &str, raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
