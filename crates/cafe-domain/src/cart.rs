//! Cart Building
//!
//! Collects the ordering page's menu rows into a `NewOrder`.

use crate::error::{DomainError, DomainResult};
use crate::menu::Size;
use crate::request::{CartLine, Fulfillment, NewOrder};

/// What the customer entered on one menu row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSelection {
    pub drink_key: String,
    pub size: Size,
    /// Raw text of the quantity input
    pub qty: String,
}

impl MenuSelection {
    pub fn new(drink_key: &str) -> Self {
        Self {
            drink_key: drink_key.to_string(),
            size: Size::default(),
            qty: "0".to_string(),
        }
    }
}

/// Customer details and pickup choice
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderForm {
    /// `None` when the page has no name field
    pub customer_name: Option<String>,
    pub srn: Option<String>,
    pub fulfillment: Fulfillment,
    pub schedule_time: String,
}

/// Leading integer of a quantity input; anything else counts as zero.
///
/// Numbers past `u32::MAX` saturate rather than being dropped.
pub fn parse_qty(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let digits: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(u32::MAX)
}

/// Rows with a positive quantity, in menu order
pub fn build_cart(selections: &[MenuSelection]) -> Vec<CartLine> {
    selections
        .iter()
        .filter_map(|sel| {
            let qty = parse_qty(&sel.qty);
            (qty > 0).then(|| CartLine::new(&sel.drink_key, sel.size, qty))
        })
        .collect()
}

/// Build the order payload, rejecting an empty cart
pub fn build_new_order(form: &OrderForm, selections: &[MenuSelection]) -> DomainResult<NewOrder> {
    let items = build_cart(selections);
    if items.is_empty() {
        return Err(DomainError::EmptyCart);
    }

    let scheduled_for = match form.fulfillment {
        Fulfillment::Schedule => Some(form.schedule_time.clone()),
        Fulfillment::Now => None,
    };

    Ok(NewOrder {
        customer_name: form
            .customer_name
            .clone()
            .unwrap_or_else(|| "Guest".to_string()),
        srn: form.srn.clone().unwrap_or_default(),
        items,
        fulfillment: form.fulfillment,
        scheduled_for,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn selection(key: &str, size: Size, qty: &str) -> MenuSelection {
        MenuSelection {
            drink_key: key.to_string(),
            size,
            qty: qty.to_string(),
        }
    }

    #[test]
    fn test_parse_qty() {
        assert_eq!(parse_qty("3"), 3);
        assert_eq!(parse_qty(" 2"), 2);
        assert_eq!(parse_qty("2.7"), 2);
        assert_eq!(parse_qty(""), 0);
        assert_eq!(parse_qty("abc"), 0);
        assert_eq!(parse_qty("-4"), 0);
    }

    #[test]
    fn test_oversized_qty_is_kept() {
        assert_eq!(parse_qty("5000000000"), u32::MAX);
        assert_eq!(parse_qty("0004"), 4);

        let cart = build_cart(&[selection("latte", Size::Small, "5000000000")]);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].qty, u32::MAX);
    }

    #[test]
    fn test_all_zero_is_rejected() {
        let selections = vec![
            selection("latte", Size::Small, "0"),
            selection("mocha", Size::Regular, ""),
        ];
        assert_eq!(
            build_new_order(&OrderForm::default(), &selections),
            Err(DomainError::EmptyCart)
        );
    }

    #[test]
    fn test_only_positive_rows_become_lines() {
        let selections = vec![
            selection("espresso", Size::Small, "0"),
            selection("latte", Size::Regular, "2"),
            selection("mocha", Size::Small, "1"),
        ];
        let cart = build_cart(&selections);
        assert_eq!(cart.len(), 2);
        assert_eq!(cart[0], CartLine::new("latte", Size::Regular, 2));
        assert_eq!(cart[1].name, "mocha");
    }

    #[test]
    fn test_now_order_payload() {
        let form = OrderForm {
            customer_name: Some("Meera".to_string()),
            srn: Some("PES2".to_string()),
            fulfillment: Fulfillment::Now,
            schedule_time: "2025-01-10T10:00".to_string(),
        };
        let order = build_new_order(&form, &[selection("latte", Size::Small, "1")]).unwrap();

        assert_eq!(
            serde_json::to_value(&order).unwrap(),
            json!({
                "customer_name": "Meera",
                "srn": "PES2",
                "items": [{
                    "name": "latte",
                    "size": "small",
                    "qty": 1,
                    "sugar_level": "normal",
                    "milk_type": "regular",
                    "extra_shot": false
                }],
                "fulfillment": "now"
            })
        );
    }

    #[test]
    fn test_scheduled_order_carries_time() {
        let form = OrderForm {
            fulfillment: Fulfillment::Schedule,
            schedule_time: "2025-01-10T10:00".to_string(),
            ..OrderForm::default()
        };
        let order = build_new_order(&form, &[selection("mocha", Size::Regular, "1")]).unwrap();

        assert_eq!(order.customer_name, "Guest");
        assert_eq!(order.srn, "");
        assert_eq!(order.fulfillment, Fulfillment::Schedule);
        assert_eq!(order.scheduled_for.as_deref(), Some("2025-01-10T10:00"));
    }
}
