//! Item and pickup text shared by the dashboard and tracking views.

use crate::order::{Order, OrderItem};

/// Staff dashboard line: `Latte (small) x2 – ₹240 [Sugar: less, Extra shot]`
pub fn item_summary(item: &OrderItem) -> String {
    let mut extras = Vec::new();
    if let Some(sugar) = item.sugar_level.as_deref().filter(|s| !s.is_empty()) {
        extras.push(format!("Sugar: {}", sugar));
    }
    if let Some(milk) = item.milk_type.as_deref().filter(|m| !m.is_empty()) {
        extras.push(format!("Milk: {}", milk));
    }
    if item.extra_shot.unwrap_or(false) {
        extras.push("Extra shot".to_string());
    }

    let mut line = format!(
        "{} ({}) x{} – ₹{}",
        item.display_name, item.size, item.qty, item.line_total
    );
    if !extras.is_empty() {
        line.push_str(&format!(" [{}]", extras.join(", ")));
    }
    line
}

/// Customer tracking line: `- Latte (small) x2 | ₹240`
pub fn tracking_item_line(item: &OrderItem) -> String {
    format!(
        "- {} ({}) x{} | ₹{}",
        item.display_name, item.size, item.qty, item.line_total
    )
}

pub fn pickup_type(order: &Order) -> &'static str {
    if order.is_scheduled {
        "Scheduled"
    } else {
        "Now"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::fixtures::make_item;

    #[test]
    fn test_summary_without_extras() {
        let item = make_item("Cappuccino", "small", 2, 160.0);
        assert_eq!(item_summary(&item), "Cappuccino (small) x2 – ₹160");
    }

    #[test]
    fn test_summary_lists_present_extras_in_order() {
        let mut item = make_item("Latte", "regular", 1, 170.0);
        item.sugar_level = Some("less".to_string());
        item.milk_type = Some("oat".to_string());
        item.extra_shot = Some(true);
        assert_eq!(
            item_summary(&item),
            "Latte (regular) x1 – ₹170 [Sugar: less, Milk: oat, Extra shot]"
        );
    }

    #[test]
    fn test_summary_skips_false_extra_shot() {
        let mut item = make_item("Mocha", "small", 1, 140.0);
        item.milk_type = Some("regular".to_string());
        item.extra_shot = Some(false);
        assert_eq!(item_summary(&item), "Mocha (small) x1 – ₹140 [Milk: regular]");
    }

    #[test]
    fn test_tracking_line() {
        let item = make_item("Espresso", "small", 3, 240.0);
        assert_eq!(tracking_item_line(&item), "- Espresso (small) x3 | ₹240");
    }
}
