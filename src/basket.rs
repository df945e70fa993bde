//! Checkout gating for the member's basket.
//!
//! Decides whether the checkout button is enabled, and if not, why.
//! Runs on every basket refresh; the basket service has already summed
//! every amount it reads.

use std::fmt;

use rust_decimal::Decimal;

use crate::models::basket::Basket;
use crate::models::currency::Currency;

/// Result of a successful checkout check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutVerdict {
    /// Checkout can proceed.
    Ready,
    /// Checkout can proceed but the member should see a notice.
    ReadyWithWarning { reason: String },
}

/// Reason checkout is blocked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutBlocker {
    EmptyBasket,
    BelowMinimumSpend {
        subtotal: Decimal,
        minimum: Decimal,
        shortfall: Decimal,
    },
    CouponMinimumNotMet {
        code: String,
        subtotal: Decimal,
        minimum: Decimal,
    },
}

impl fmt::Display for CheckoutBlocker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBasket => write!(f, "basket is empty"),
            Self::BelowMinimumSpend {
                subtotal,
                minimum,
                shortfall,
            } => write!(
                f,
                "subtotal {subtotal} is below the minimum spend of {minimum} (short by {shortfall})"
            ),
            Self::CouponMinimumNotMet {
                code,
                subtotal,
                minimum,
            } => write!(
                f,
                "coupon {code} needs a subtotal of {minimum}, basket has {subtotal}"
            ),
        }
    }
}

impl std::error::Error for CheckoutBlocker {}

impl CheckoutBlocker {
    /// Member-facing message with amounts in the basket's currency.
    pub fn message(&self, currency: &Currency) -> String {
        match self {
            Self::EmptyBasket => "Add something to your basket to check out".to_string(),
            Self::BelowMinimumSpend { shortfall, .. } => format!(
                "Spend {} more to reach the minimum order",
                currency.format(*shortfall)
            ),
            Self::CouponMinimumNotMet { code, minimum, .. } => format!(
                "Spend at least {} to use {code}",
                currency.format(*minimum)
            ),
        }
    }
}

/// Checks a basket against the store's checkout rules.
pub fn check_checkout(basket: &Basket) -> Result<CheckoutVerdict, CheckoutBlocker> {
    // 1. Nothing to buy
    if basket.is_empty() {
        return Err(CheckoutBlocker::EmptyBasket);
    }

    // 2. Store minimum spend
    if let Some(minimum) = basket.minimum_spend {
        let shortfall = basket.amount_to_minimum_spend();
        if shortfall > Decimal::ZERO {
            return Err(CheckoutBlocker::BelowMinimumSpend {
                subtotal: basket.subtotal,
                minimum,
                shortfall,
            });
        }
    }

    // 3. Coupon minimum spend
    if let Some(coupon) = &basket.coupon {
        if let Some(minimum) = coupon.minimum_spend
            && !coupon.applies_to(basket.subtotal)
        {
            return Err(CheckoutBlocker::CouponMinimumNotMet {
                code: coupon.code.clone(),
                subtotal: basket.subtotal,
                minimum,
            });
        }

        // 4. Coupon worth more than the goods
        if coupon.discount > basket.subtotal {
            return Ok(CheckoutVerdict::ReadyWithWarning {
                reason: format!(
                    "coupon {} discount {} exceeds subtotal {}; only {} is applied",
                    coupon.code,
                    coupon.discount,
                    basket.subtotal,
                    basket.coupon_discount()
                ),
            });
        }
    }

    Ok(CheckoutVerdict::Ready)
}
