//! Currency descriptor supplied alongside every order.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Minor units per major unit for most currencies (pence, cents).
const DEFAULT_RATIO: u32 = 100;

/// Currency an order was placed in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    /// ISO 4217 code (e.g., "GBP").
    pub code: String,
    /// Display symbol (e.g., "£").
    pub symbol: String,
    /// Minor units per major unit: 100 for GBP, 1 for JPY.
    #[serde(default = "default_ratio")]
    pub ratio: u32,
}

fn default_ratio() -> u32 {
    DEFAULT_RATIO
}

impl Currency {
    /// Creates a currency with the standard ratio of 100.
    #[must_use]
    pub fn new(code: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            symbol: symbol.into(),
            ratio: DEFAULT_RATIO,
        }
    }

    /// Pound sterling.
    #[must_use]
    pub fn gbp() -> Self {
        Self::new("GBP", "£")
    }

    /// Number of decimal places implied by the ratio.
    #[must_use]
    pub fn decimal_places(&self) -> u32 {
        match self.ratio {
            0 | 1 => 0,
            ratio => ratio.ilog10(),
        }
    }

    /// Formats an amount as `£1,234.50`.
    ///
    /// Rounds half away from zero to the currency's decimal places and
    /// groups the integer part in thousands. Negative amounts render the
    /// sign ahead of the symbol (`-£5.00`).
    #[must_use]
    pub fn format(&self, amount: Decimal) -> String {
        let places = self.decimal_places();
        let rounded =
            amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };

        let digits = format!("{:.*}", places as usize, rounded.abs());
        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (digits.as_str(), None),
        };

        let mut out = format!("{sign}{}{}", self.symbol, group_thousands(whole));
        if let Some(fraction) = fraction {
            out.push('.');
            out.push_str(fraction);
        }
        out
    }
}

/// Inserts `,` every three digits from the right.
fn group_thousands(whole: &str) -> String {
    let len = whole.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
