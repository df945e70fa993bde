//! Placed order snapshot.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::currency::Currency;
use super::order_line::OrderLine;

/// A placed order as returned by the order-retrieval service.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u64,
    pub currency: Currency,
    #[serde(default)]
    pub lines: Vec<OrderLine>,
    #[serde(default)]
    pub subtotal: Decimal,
    #[serde(default)]
    pub delivery_fee: Decimal,
    #[serde(default)]
    pub service_fee: Decimal,
    #[serde(default)]
    pub tip: Decimal,
    #[serde(default)]
    pub discount: Decimal,
    #[serde(default)]
    pub total: Decimal,
}
