//! Basket gating and tip banding from fixture configuration.

use std::path::PathBuf;

use rust_decimal_macros::dec;

use grocer::basket::{CheckoutBlocker, CheckoutVerdict, check_checkout};
use grocer::models::basket::Basket;
use grocer::models::currency::Currency;
use grocer::tipping::config::TipLevels;
use grocer::tipping::{TipBander, tip_band};

const BASKET_JSON: &str = include_str!("fixtures/basket.json");

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

#[test]
fn test_fixture_basket_below_minimum() {
    let basket: Basket = serde_json::from_str(BASKET_JSON).unwrap();

    let blocker = check_checkout(&basket).unwrap_err();
    assert_eq!(
        blocker,
        CheckoutBlocker::BelowMinimumSpend {
            subtotal: dec!(12.50),
            minimum: dec!(15.00),
            shortfall: dec!(2.50),
        }
    );
    assert_eq!(
        blocker.message(&Currency::gbp()),
        "Spend £2.50 more to reach the minimum order"
    );
}

#[test]
fn test_fixture_basket_coupon_gate_after_minimum() {
    let basket: Basket = serde_json::from_str(BASKET_JSON).unwrap();
    let basket = Basket {
        subtotal: dec!(16.00),
        ..basket
    };

    let blocker = check_checkout(&basket).unwrap_err();
    assert_eq!(
        blocker.message(&Currency::gbp()),
        "Spend at least £20.00 to use WELCOME5"
    );

    let basket = Basket {
        subtotal: dec!(20.00),
        ..basket
    };
    assert_eq!(check_checkout(&basket), Ok(CheckoutVerdict::Ready));
    assert_eq!(basket.total(), dec!(18.99));
}

#[test]
fn test_tip_levels_from_fixture() {
    let levels = TipLevels::load(&fixtures_dir().join("tip_levels.json")).unwrap();

    assert_eq!(levels.levels().len(), 3);
    assert_eq!(levels.band_for(dec!(0.50)).title, "No tip this time");
    assert_eq!(levels.band_for(dec!(1.00)).title, "Thanks!");
    assert_eq!(levels.band_for(dec!(10)).title, "You're a star");

    assert_eq!(
        tip_band(levels.levels(), dec!(2)).map(|l| l.level.as_str()),
        Some("happy")
    );
}

#[test]
fn test_tip_bander_follows_updates() {
    let levels = TipLevels::load(&fixtures_dir().join("tip_levels.json")).unwrap();
    let mut bander = TipBander::new(levels);

    for (tip, expected) in [
        (dec!(0), "unhappy"),
        (dec!(1.5), "happy"),
        (dec!(3), "very_happy"),
        (dec!(0.99), "unhappy"),
    ] {
        assert_eq!(bander.update(tip).level, expected);
        assert_eq!(bander.current_level(), Some(expected));
    }
}
