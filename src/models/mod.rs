//! Data shapes supplied wholesale by the storefront's backend services.
//!
//! Orders, baskets and tip configuration are deserialized from the
//! services' camelCase JSON and treated as read-only snapshots.

pub mod basket;
pub mod currency;
pub mod order;
pub mod order_line;
pub mod tip;
