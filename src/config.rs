//! Application configuration loaded from environment variables.
//!
//! - `KACHING_CURRENCY`: quote currency label attached to volume results
//!   (default `eur`)
//! - `KACHING_COIN`: coin label echoed in reports (default `bitcoin`)
//!
//! Command-line flags take precedence over both.

/// Default quote currency label.
const DEFAULT_CURRENCY: &str = "eur";

/// Default coin label.
const DEFAULT_COIN: &str = "bitcoin";

/// Top-level application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub market: MarketConfig,
}

/// Labels describing the analysed market.
#[derive(Debug)]
pub struct MarketConfig {
    pub currency: String,
    pub coin: String,
}

impl MarketConfig {
    /// Applies command-line overrides on top of the environment values.
    ///
    /// # Errors
    ///
    /// Returns [`KachingError::Config`](crate::KachingError::Config) if an
    /// override is not a valid label.
    pub fn with_overrides(
        mut self,
        currency: Option<String>,
        coin: Option<String>,
    ) -> crate::Result<Self> {
        if let Some(currency) = currency.filter(|s| !s.is_empty()) {
            self.currency = validate_label("currency", currency)?;
        }
        if let Some(coin) = coin.filter(|s| !s.is_empty()) {
            self.coin = validate_label("coin", coin)?;
        }
        Ok(self)
    }
}

/// Loads the application configuration from environment variables.
///
/// Both labels fall back to their defaults when unset or empty.
///
/// # Errors
///
/// Returns [`KachingError::Config`](crate::KachingError::Config) if a label
/// contains anything other than ASCII letters, digits or `-`.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let currency = non_empty_var("KACHING_CURRENCY")
        .map(|v| validate_label("KACHING_CURRENCY", v))
        .transpose()?
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

    let coin = non_empty_var("KACHING_COIN")
        .map(|v| validate_label("KACHING_COIN", v))
        .transpose()?
        .unwrap_or_else(|| DEFAULT_COIN.to_string());

    Ok(AppConfig {
        market: MarketConfig { currency, coin },
    })
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

/// Accepts provider-style identifiers such as `eur` or `wrapped-bitcoin`.
fn validate_label(name: &str, value: String) -> crate::Result<String> {
    if value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        Ok(value)
    } else {
        Err(crate::KachingError::Config(format!(
            "{name} must contain only ASCII letters, digits or '-', got {value:?}"
        )))
    }
}
