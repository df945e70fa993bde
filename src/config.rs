//! Application configuration loaded from environment variables.
//!
//! - `GROCER_CURRENCY_CODE`, `GROCER_CURRENCY_SYMBOL`: store currency used
//!   for baskets and tip levels, which arrive without one. Both or neither.
//! - `GROCER_CURRENCY_RATIO`: minor units per major unit (default 100).
//! - `GROCER_TIP_LEVELS_PATH`: optional JSON file of merchant tip levels.

use std::path::PathBuf;

use tracing::warn;

use crate::models::currency::Currency;
use crate::tipping::config::TipLevels;

const DEFAULT_CURRENCY_CODE: &str = "GBP";
const DEFAULT_CURRENCY_SYMBOL: &str = "£";
const DEFAULT_CURRENCY_RATIO: u32 = 100;

/// Top-level application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub storefront: StorefrontConfig,
}

/// Storefront display configuration.
#[derive(Debug)]
pub struct StorefrontConfig {
    pub currency: Currency,
    pub tip_levels_path: Option<PathBuf>,
}

impl StorefrontConfig {
    /// Loads the configured tip levels, if a path was given.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails validation.
    pub fn tip_levels(&self) -> crate::Result<Option<TipLevels>> {
        self.tip_levels_path
            .as_deref()
            .map(TipLevels::load)
            .transpose()
    }
}

/// Loads the application configuration from environment variables.
///
/// # Errors
///
/// Returns [`GrocerError::Config`](crate::GrocerError::Config) if only one
/// of the currency code and symbol is set, or if the ratio is not a
/// positive integer.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let code = non_empty_var("GROCER_CURRENCY_CODE");
    let symbol = non_empty_var("GROCER_CURRENCY_SYMBOL");

    let (code, symbol) = match (code, symbol) {
        (Some(code), Some(symbol)) => (code, symbol),
        (Some(_), None) => {
            return Err(crate::GrocerError::Config(
                "GROCER_CURRENCY_CODE is set but GROCER_CURRENCY_SYMBOL is missing".to_string(),
            ));
        }
        (None, Some(_)) => {
            return Err(crate::GrocerError::Config(
                "GROCER_CURRENCY_SYMBOL is set but GROCER_CURRENCY_CODE is missing".to_string(),
            ));
        }
        (None, None) => (
            DEFAULT_CURRENCY_CODE.to_string(),
            DEFAULT_CURRENCY_SYMBOL.to_string(),
        ),
    };

    let ratio = match non_empty_var("GROCER_CURRENCY_RATIO") {
        Some(raw) => match raw.parse::<u32>() {
            Ok(ratio) if ratio > 0 => ratio,
            _ => {
                return Err(crate::GrocerError::Config(format!(
                    "GROCER_CURRENCY_RATIO must be a positive integer, got {raw:?}"
                )));
            }
        },
        None => DEFAULT_CURRENCY_RATIO,
    };
    if !is_power_of_ten(ratio) {
        warn!(ratio, "currency ratio is not a power of ten; decimal places are rounded down");
    }

    let tip_levels_path = non_empty_var("GROCER_TIP_LEVELS_PATH").map(PathBuf::from);

    Ok(AppConfig {
        storefront: StorefrontConfig {
            currency: Currency {
                code,
                symbol,
                ratio,
            },
            tip_levels_path,
        },
    })
}

fn is_power_of_ten(n: u32) -> bool {
    n > 0 && 10u32.pow(n.ilog10()) == n
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}
