//! Presentation-independent values derived from order lines.

use rust_decimal::Decimal;

use crate::models::currency::Currency;
use crate::models::order_line::{GroupedItemOption, MenuItem, OrderLine, SelectedOption};

/// `price_paid × quantity` for a line.
#[must_use]
pub fn line_total(line: &OrderLine) -> Decimal {
    line.price_paid * Decimal::from(line.quantity)
}

/// Line total formatted in the order's currency.
#[must_use]
pub fn price_paid(line: &OrderLine, currency: &Currency) -> String {
    currency.format(line_total(line))
}

/// Item name with its size in brackets, when it has one.
#[must_use]
pub fn item_name(item: &MenuItem) -> String {
    match &item.size {
        Some(size) => format!("{} ({})", item.name, size.name),
        None => item.name.clone(),
    }
}

/// Whether a line renders crossed out.
///
/// On its own a line is crossed out only when rejected. Inside a
/// substitution or quantity-change group the original is crossed out and
/// the substitutes are not.
#[must_use]
pub fn should_strike_through(line: &OrderLine, group_size: usize) -> bool {
    if group_size <= 1 {
        line.is_rejected()
    } else {
        !line.is_substitute()
    }
}

/// Groups selected option values under their option group.
///
/// Group order and value order follow first appearance; repeated values
/// are kept.
#[must_use]
pub fn grouped_options(options: &[SelectedOption]) -> Vec<GroupedItemOption> {
    let mut keys: Vec<u64> = Vec::new();
    let mut groups: Vec<GroupedItemOption> = Vec::new();

    for option in options {
        match keys.iter().position(|&id| id == option.option_id) {
            Some(index) => groups[index].values.push(option.name.clone()),
            None => {
                keys.push(option.option_id);
                groups.push(GroupedItemOption {
                    option_name: option.option_name.clone(),
                    values: vec![option.name.clone()],
                });
            }
        }
    }

    groups
}

/// A rejected line standing on its own, outside any substitution pairing.
#[must_use]
pub fn is_refunded_item(original: &OrderLine, substitute: Option<&OrderLine>) -> bool {
    original.is_rejected() && substitute.is_none()
}

/// Banner text for a rejected line: the reason, plus the refunded amount
/// when there is one.
#[must_use]
pub fn refund_banner(line: &OrderLine, currency: &Currency) -> Option<String> {
    let reason = line.rejection_reason.as_deref()?;
    if line.refund_amount > Decimal::ZERO {
        Some(format!(
            "{reason}. {} refunded",
            currency.format(line.refund_amount)
        ))
    } else {
        Some(reason.to_string())
    }
}

/// Sum of refunds across an order's lines.
#[must_use]
pub fn order_refund_total(lines: &[OrderLine]) -> Decimal {
    lines.iter().map(|line| line.refund_amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::order_line::ItemSize;
    use crate::order_lines::test_support::{line, substitute};
    use rust_decimal_macros::dec;

    fn option(option_id: u64, option_name: &str, name: &str) -> SelectedOption {
        SelectedOption {
            option_id,
            option_name: option_name.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn price_paid_multiplies_by_quantity() {
        let line = OrderLine {
            price_paid: dec!(10),
            quantity: 12,
            ..line(1, 100)
        };
        assert_eq!(line_total(&line), dec!(120));
        assert_eq!(price_paid(&line, &Currency::gbp()), "£120.00");
    }

    #[test]
    fn price_paid_zero_quantity() {
        let line = OrderLine {
            quantity: 0,
            ..line(1, 100)
        };
        assert_eq!(price_paid(&line, &Currency::gbp()), "£0.00");
    }

    #[test]
    fn item_name_appends_size() {
        let mut item = line(1, 100).item;
        item.name = "Max basket quantity 10".to_string();
        assert_eq!(item_name(&item), "Max basket quantity 10");

        item.size = Some(ItemSize {
            id: 7,
            name: "large".to_string(),
        });
        assert_eq!(item_name(&item), "Max basket quantity 10 (large)");
    }

    #[test]
    fn single_line_strikes_through_only_when_rejected() {
        let rejected = OrderLine {
            rejection_reason: Some("Out of stock".to_string()),
            ..line(1, 100)
        };
        assert!(should_strike_through(&rejected, 1));
        assert!(!should_strike_through(&line(2, 200), 1));
    }

    #[test]
    fn group_strikes_through_original_only() {
        let original = line(1, 100);
        let sub = substitute(2, 200, 1);
        assert!(should_strike_through(&original, 2));
        assert!(!should_strike_through(&sub, 2));
    }

    #[test]
    fn rejected_substitute_in_group_not_struck() {
        let sub = OrderLine {
            rejection_reason: Some("Damaged".to_string()),
            ..substitute(2, 200, 1)
        };
        assert!(!should_strike_through(&sub, 2));
    }

    #[test]
    fn groups_options_in_first_seen_order() {
        let options = vec![
            option(345, "Toppings", "Cheese"),
            option(345, "Toppings", "Pineapple"),
            option(345, "Toppings", "Tomato"),
            option(678, "Dip", "Garlic"),
        ];
        let grouped = grouped_options(&options);
        assert_eq!(
            grouped,
            vec![
                GroupedItemOption {
                    option_name: "Toppings".to_string(),
                    values: vec![
                        "Cheese".to_string(),
                        "Pineapple".to_string(),
                        "Tomato".to_string()
                    ],
                },
                GroupedItemOption {
                    option_name: "Dip".to_string(),
                    values: vec!["Garlic".to_string()],
                },
            ]
        );
    }

    #[test]
    fn grouped_options_keep_duplicates_and_interleaving() {
        let options = vec![
            option(1, "Sauce", "Ketchup"),
            option(2, "Side", "Fries"),
            option(1, "Sauce", "Ketchup"),
        ];
        let grouped = grouped_options(&options);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].option_name, "Sauce");
        assert_eq!(grouped[0].values, vec!["Ketchup", "Ketchup"]);
        assert_eq!(grouped[1].values, vec!["Fries"]);
    }

    #[test]
    fn refunded_item_requires_rejection_and_no_substitute() {
        let rejected = OrderLine {
            rejection_reason: Some("Out of stock".to_string()),
            ..line(1, 100)
        };
        let sub = substitute(2, 200, 1);
        assert!(is_refunded_item(&rejected, None));
        assert!(!is_refunded_item(&rejected, Some(&sub)));
        assert!(!is_refunded_item(&line(3, 300), None));
    }

    #[test]
    fn refund_banner_text() {
        let gbp = Currency::gbp();
        let refunded = OrderLine {
            rejection_reason: Some("Out of stock".to_string()),
            refund_amount: dec!(3.5),
            ..line(1, 100)
        };
        assert_eq!(
            refund_banner(&refunded, &gbp).as_deref(),
            Some("Out of stock. £3.50 refunded")
        );

        let no_amount = OrderLine {
            refund_amount: Decimal::ZERO,
            ..refunded.clone()
        };
        assert_eq!(refund_banner(&no_amount, &gbp).as_deref(), Some("Out of stock"));
        assert_eq!(refund_banner(&line(2, 200), &gbp), None);
    }

    #[test]
    fn refund_total_sums_lines() {
        let lines = vec![
            OrderLine {
                refund_amount: dec!(1.25),
                ..line(1, 100)
            },
            line(2, 200),
            OrderLine {
                refund_amount: dec!(2.00),
                ..line(3, 300)
            },
        ];
        assert_eq!(order_refund_total(&lines), dec!(3.25));
    }
}
