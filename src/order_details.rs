//! Order-details view model.
//!
//! Built from an explicit [`Order`] snapshot for one screen visit and
//! dropped with it. Turns the order's flat line list into render-ready
//! groups: display type per group, and per row the name, price,
//! strike-through and refund state.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::currency::Currency;
use crate::models::order::Order;
use crate::models::order_line::{GroupedItemOption, OrderLine};
use crate::order_lines::{
    OrderLineDisplayType, OrderLineGroup, group_order_lines, grouped_options, is_refunded_item,
    item_name, order_refund_total, price_paid, refund_banner, should_strike_through,
};

/// One rendered line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineRow {
    pub line_id: u64,
    pub name: String,
    pub quantity: u32,
    pub price_paid: String,
    pub strike_through: bool,
    pub is_substitute: bool,
    pub refunded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_banner: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<GroupedItemOption>,
}

/// One original line and its substitutes, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineGroupView {
    pub display_type: OrderLineDisplayType,
    pub rows: Vec<OrderLineRow>,
}

/// Formatted order amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub subtotal: String,
    pub delivery_fee: String,
    pub service_fee: String,
    pub tip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refunded: Option<String>,
    pub total: String,
}

/// Everything the order-details screen shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetailsView {
    pub order_id: u64,
    pub currency: String,
    pub groups: Vec<OrderLineGroupView>,
    pub summary: OrderSummary,
}

/// View model for a single placed order.
pub struct OrderDetails {
    order: Order,
}

impl OrderDetails {
    /// Creates the view model from the order fetched for this screen.
    pub fn new(order: Order) -> Self {
        Self { order }
    }

    /// The underlying order snapshot.
    pub fn order(&self) -> &Order {
        &self.order
    }

    fn currency(&self) -> &Currency {
        &self.order.currency
    }

    /// Line groups in the order originals were listed.
    pub fn line_groups(&self) -> Vec<OrderLineGroupView> {
        group_order_lines(&self.order.lines)
            .iter()
            .map(|group| self.group_view(group))
            .collect()
    }

    fn group_view(&self, group: &OrderLineGroup<'_>) -> OrderLineGroupView {
        let size = group.len();
        let first_substitute = group.substitutes().first().copied();
        let rows = group
            .lines()
            .into_iter()
            .map(|line| {
                let refunded = if line.is_substitute() {
                    false
                } else {
                    is_refunded_item(line, first_substitute)
                };
                self.row(line, size, refunded)
            })
            .collect();

        OrderLineGroupView {
            display_type: group.display_type(),
            rows,
        }
    }

    fn row(&self, line: &OrderLine, group_size: usize, refunded: bool) -> OrderLineRow {
        OrderLineRow {
            line_id: line.id,
            name: item_name(&line.item),
            quantity: line.quantity,
            price_paid: price_paid(line, self.currency()),
            strike_through: should_strike_through(line, group_size),
            is_substitute: line.is_substitute(),
            refunded,
            refund_banner: if refunded {
                refund_banner(line, self.currency())
            } else {
                None
            },
            options: grouped_options(&line.options),
        }
    }

    /// Sum of refunds across the order.
    pub fn refund_total(&self) -> Decimal {
        order_refund_total(&self.order.lines)
    }

    /// Formatted amounts for the order summary.
    pub fn summary(&self) -> OrderSummary {
        let currency = self.currency();
        let refund_total = self.refund_total();
        OrderSummary {
            subtotal: currency.format(self.order.subtotal),
            delivery_fee: currency.format(self.order.delivery_fee),
            service_fee: currency.format(self.order.service_fee),
            tip: currency.format(self.order.tip),
            discount: (self.order.discount > Decimal::ZERO)
                .then(|| currency.format(-self.order.discount)),
            refunded: (refund_total > Decimal::ZERO).then(|| currency.format(refund_total)),
            total: currency.format(self.order.total),
        }
    }

    /// The full screen state.
    pub fn view(&self) -> OrderDetailsView {
        OrderDetailsView {
            order_id: self.order.id,
            currency: self.currency().code.clone(),
            groups: self.line_groups(),
            summary: self.summary(),
        }
    }
}
