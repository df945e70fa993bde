//! Merchant tip configuration models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One configured tip threshold.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TipLevel {
    /// Merchant label for the band (e.g., "unhappy", "happy").
    pub level: String,
    /// Tip amount at which this band starts.
    pub amount: Decimal,
    /// Text shown while the tip sits in this band.
    pub title: String,
}
