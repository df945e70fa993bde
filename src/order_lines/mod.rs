//! Order-line substitution grouping and display classification.
//!
//! A placed order arrives as a flat list of lines. Lines the store swapped
//! in or re-confirmed point at the original they replace through
//! `substitutes_order_line_id`. This module regroups them
//! ([`grouping`]), decides how each group renders ([`display_type`]), and
//! computes the per-line values a renderer shows ([`derived`]).

pub mod derived;
pub mod display_type;
pub mod grouping;

pub use derived::{
    grouped_options, is_refunded_item, item_name, line_total, order_refund_total, price_paid,
    refund_banner, should_strike_through,
};
pub use display_type::{OrderLineDisplayType, classify};
pub use grouping::{OrderLineGroup, group_order_lines, orphaned_substitutes};
