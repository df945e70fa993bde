//! Placed-order line models.
//!
//! Lines arrive wholesale from the order-retrieval service when an
//! order's details are fetched and are never mutated locally.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One line item within a placed order.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    /// Unique within the order.
    pub id: u64,
    /// Id of the original line this line substitutes. `None` on originals.
    #[serde(default)]
    pub substitutes_order_line_id: Option<u64>,
    pub quantity: u32,
    /// Per-unit price paid.
    pub price_paid: Decimal,
    pub item: MenuItem,
    /// Set when the store refunded or rejected this line.
    #[serde(default)]
    pub rejection_reason: Option<String>,
    #[serde(default)]
    pub refund_amount: Decimal,
    #[serde(default)]
    pub options: Vec<SelectedOption>,
}

impl OrderLine {
    /// Returns `true` if this line substitutes another line.
    #[must_use]
    pub fn is_substitute(&self) -> bool {
        self.substitutes_order_line_id.is_some()
    }

    /// Returns `true` if the store rejected this line.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        self.rejection_reason.is_some()
    }
}

/// Snapshot of the menu item at the time the order was placed.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub size: Option<ItemSize>,
    #[serde(default)]
    pub images: Vec<ItemImage>,
    /// Unit price on the menu.
    #[serde(default)]
    pub price: Decimal,
}

/// A size variant of a menu item (e.g., "large").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ItemSize {
    pub id: u64,
    pub name: String,
}

/// Image reference for a menu item.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ItemImage {
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// A single selected value of a customisation option.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedOption {
    /// Grouping key shared by every value of one option group.
    pub option_id: u64,
    /// Display name of the option group (e.g., "Toppings").
    pub option_name: String,
    /// Display name of the selected value (e.g., "Cheese").
    pub name: String,
}

/// Selected values aggregated under their option group's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedItemOption {
    pub option_name: String,
    /// Values in selection order, duplicates kept.
    pub values: Vec<String>,
}
