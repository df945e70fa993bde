//! Shared test utilities and fixtures.

use grocer::models::order::Order;

pub const ORDER_JSON: &str = include_str!("../fixtures/order.json");
pub const ORDER_WITH_ORPHAN_JSON: &str = include_str!("../fixtures/order_with_orphan.json");

/// Deserializes an order fixture.
pub fn load_order(json: &str) -> Order {
    serde_json::from_str(json).expect("failed to deserialize order fixture")
}
