//! Classifies a line group into the layout it is rendered with.

use serde::Serialize;

use crate::models::order_line::OrderLine;

/// How a group of related order lines is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderLineDisplayType {
    /// A single line with nothing substituted.
    SingleItem,
    /// The same product re-confirmed at a different quantity.
    ItemWithQuantityChange,
    /// The store swapped in a different product.
    ItemWithSubs,
}

/// Classifies a group whose first line is the original.
///
/// Groups of zero or one line are [`SingleItem`](OrderLineDisplayType::SingleItem).
#[must_use]
pub fn classify(lines: &[&OrderLine]) -> OrderLineDisplayType {
    match lines {
        [] | [_] => OrderLineDisplayType::SingleItem,
        [original, substitutes @ ..] => {
            if substitutes.iter().all(|sub| sub.item.id == original.item.id) {
                OrderLineDisplayType::ItemWithQuantityChange
            } else {
                OrderLineDisplayType::ItemWithSubs
            }
        }
    }
}
