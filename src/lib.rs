//! Order-line display core for a grocery delivery storefront client.
//!
//! Regroups a placed order's substitute lines under the originals they
//! replace, classifies how each group renders, and derives the per-line
//! values the order-details screen shows. Also carries the basket
//! arithmetic behind checkout gating and courier tip banding.

pub mod basket;
pub mod config;
pub mod error;
pub mod models;
pub mod order_details;
pub mod order_lines;
pub mod tipping;
pub mod validation;

pub use error::{GrocerError, Result};
