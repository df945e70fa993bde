//! Basket snapshot models.
//!
//! All amounts are already summed by the basket service; the methods here
//! only combine them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The member's current basket as reported by the basket service.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Basket {
    /// Number of items across all lines.
    pub item_count: u32,
    pub subtotal: Decimal,
    #[serde(default)]
    pub delivery_fee: Decimal,
    #[serde(default)]
    pub service_fee: Decimal,
    #[serde(default)]
    pub tip: Decimal,
    /// Store-applied discount, excluding any coupon.
    #[serde(default)]
    pub discount: Decimal,
    /// Store minimum spend for checkout, when the store has one.
    #[serde(default)]
    pub minimum_spend: Option<Decimal>,
    #[serde(default)]
    pub coupon: Option<Coupon>,
}

/// A coupon applied to the basket.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub code: String,
    pub discount: Decimal,
    /// Subtotal the basket must reach for the coupon to apply.
    #[serde(default)]
    pub minimum_spend: Option<Decimal>,
}

impl Coupon {
    /// Returns `true` if the coupon applies to the given subtotal.
    #[must_use]
    pub fn applies_to(&self, subtotal: Decimal) -> bool {
        self.minimum_spend.is_none_or(|minimum| subtotal >= minimum)
    }
}

impl Basket {
    /// Returns `true` if the basket holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Coupon discount actually taken off, capped at the subtotal.
    #[must_use]
    pub fn coupon_discount(&self) -> Decimal {
        match &self.coupon {
            Some(coupon) if coupon.applies_to(self.subtotal) => {
                coupon.discount.min(self.subtotal).max(Decimal::ZERO)
            }
            _ => Decimal::ZERO,
        }
    }

    /// Amount payable at checkout, never below zero.
    #[must_use]
    pub fn total(&self) -> Decimal {
        let total = self.subtotal + self.delivery_fee + self.service_fee + self.tip
            - self.discount
            - self.coupon_discount();
        total.max(Decimal::ZERO)
    }

    /// How much more must be spent to reach the store minimum.
    #[must_use]
    pub fn amount_to_minimum_spend(&self) -> Decimal {
        match self.minimum_spend {
            Some(minimum) => (minimum - self.subtotal).max(Decimal::ZERO),
            None => Decimal::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn basket() -> Basket {
        Basket {
            item_count: 3,
            subtotal: dec!(20.00),
            delivery_fee: dec!(2.99),
            service_fee: dec!(0.50),
            tip: dec!(1.00),
            ..Basket::default()
        }
    }

    #[test]
    fn total_sums_fees_and_tip() {
        assert_eq!(basket().total(), dec!(24.49));
    }

    #[test]
    fn total_subtracts_discounts() {
        let basket = Basket {
            discount: dec!(2.00),
            coupon: Some(Coupon {
                code: "SAVE5".to_string(),
                discount: dec!(5.00),
                minimum_spend: None,
            }),
            ..basket()
        };
        assert_eq!(basket.total(), dec!(17.49));
    }

    #[test]
    fn total_never_negative() {
        let basket = Basket {
            discount: dec!(100),
            ..basket()
        };
        assert_eq!(basket.total(), Decimal::ZERO);
    }

    #[test]
    fn coupon_ignored_below_its_minimum() {
        let basket = Basket {
            coupon: Some(Coupon {
                code: "BIGSHOP".to_string(),
                discount: dec!(10),
                minimum_spend: Some(dec!(40)),
            }),
            ..basket()
        };
        assert_eq!(basket.coupon_discount(), Decimal::ZERO);
        assert_eq!(basket.total(), dec!(24.49));
    }

    #[test]
    fn coupon_discount_capped_at_subtotal() {
        let basket = Basket {
            coupon: Some(Coupon {
                code: "FREE".to_string(),
                discount: dec!(50),
                minimum_spend: None,
            }),
            ..basket()
        };
        assert_eq!(basket.coupon_discount(), dec!(20.00));
    }

    #[test]
    fn amount_to_minimum_spend() {
        let below = Basket {
            minimum_spend: Some(dec!(25)),
            ..basket()
        };
        assert_eq!(below.amount_to_minimum_spend(), dec!(5.00));

        let above = Basket {
            minimum_spend: Some(dec!(15)),
            ..basket()
        };
        assert_eq!(above.amount_to_minimum_spend(), Decimal::ZERO);
        assert_eq!(basket().amount_to_minimum_spend(), Decimal::ZERO);
    }
}
