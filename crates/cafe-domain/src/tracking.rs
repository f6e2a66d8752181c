//! Order Tracking View Model
//!
//! Detail text and the cancel rule for the customer tracking page.

use crate::order::{or_dash, Order};
use crate::summary::{pickup_type, tracking_item_line};

/// Appended to the detail text once a cancellation succeeds
pub const STATUS_UPDATED_NOTE: &str = "\n\nStatus updated: cancelled.";

/// Customers may cancel scheduled orders that have not finished yet.
///
/// The backend enforces the real rule (including the pickup-time cutoff);
/// this only decides whether to offer the button.
pub fn can_cancel(order: &Order) -> bool {
    order.is_scheduled && !order.status.is_final_ignoring_case()
}

/// Multi-line detail block shown after a lookup
pub fn order_detail_text(order: &Order) -> String {
    let mut lines = vec![
        format!("Order ID: {}", order.order_id),
        format!("Customer: {}", order.customer_name),
        format!("SRN: {}", or_dash(order.srn.as_deref())),
        format!("Status: {}", order.status),
        format!("Pickup type: {}", pickup_type(order)),
        format!("Pickup time: {}", or_dash(order.scheduled_for.as_deref())),
        format!("Pickup code: {}", or_dash(order.completion_code.as_deref())),
        String::new(),
        "Items:".to_string(),
    ];
    lines.extend(order.items.iter().map(tracking_item_line));
    lines.push(String::new());
    lines.push(format!("Total: ₹{}", order.total));
    lines.join("\n")
}
