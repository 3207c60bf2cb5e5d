//! # Configuration State
//!
//! Stores shell configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BUNDLE_*`)
//! 2. Defaults (this file)
//!
//! The catalog itself is fixed and not configurable.
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Shell configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places the catalog's integer prices carry.
    /// 0 means prices are whole units ("$370").
    pub currency_decimals: u8,

    /// How responses are written to stdout
    pub output: OutputFormat,

    /// Log filter directive, overrides `RUST_LOG` when set
    pub log_filter: Option<String>,
}

/// Response rendering mode.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable tiles and total
    #[default]
    Text,

    /// One JSON document per line
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Currency: `$`, whole units
    /// - Output: text
    /// - Log filter: none (falls back to `RUST_LOG`, then `info`)
    fn default() -> Self {
        ConfigState {
            currency_symbol: "$".to_string(),
            currency_decimals: 0,
            output: OutputFormat::Text,
            log_filter: None,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `BUNDLE_CURRENCY_SYMBOL`: Override currency symbol
    /// - `BUNDLE_CURRENCY_DECIMALS`: Decimal places in catalog prices
    /// - `BUNDLE_OUTPUT`: `text` or `json`
    /// - `BUNDLE_LOG`: Log filter (e.g., "debug,bundle_core=trace")
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads only `BUNDLE_LOG`, so logging can start before the rest of the
    /// configuration is loaded.
    pub fn log_filter_from_env() -> Option<String> {
        log_filter_from(&|key: &str| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    ///
    /// Invalid values are logged and ignored, keeping the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(symbol) = lookup("BUNDLE_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(decimals) = lookup("BUNDLE_CURRENCY_DECIMALS") {
            match decimals.trim().parse::<u8>() {
                Ok(d) if d <= 4 => config.currency_decimals = d,
                _ => warn!(value = %decimals, "ignoring invalid BUNDLE_CURRENCY_DECIMALS"),
            }
        }

        if let Some(output) = lookup("BUNDLE_OUTPUT") {
            match output.parse() {
                Ok(format) => config.output = format,
                Err(e) => warn!(error = %e, "ignoring invalid BUNDLE_OUTPUT"),
            }
        }

        config.log_filter = log_filter_from(&lookup);

        config
    }

    /// Formats an integer amount as a currency string.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(370), "$370");
    /// ```
    pub fn format_currency(&self, amount: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = amount / divisor;
        let frac = (amount % divisor).abs();

        format!(
            "{}{}{}",
            if amount < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }
}

/// Blank `BUNDLE_LOG` counts as unset.
fn log_filter_from<F>(lookup: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup("BUNDLE_LOG").filter(|filter| !filter.trim().is_empty())
}
