//! Staff Dashboard View Model
//!
//! Turns the `/api/orders` list into three tables: active, completed and
//! cancelled. Every refresh rebuilds the whole view.

use crate::order::{or_dash, Order, OrderStatus};
use crate::routes::receipt_href;
use crate::summary::{item_summary, pickup_type};

/// Display table an order belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Active,
    Completed,
    Cancelled,
}

impl Bucket {
    /// `None` for statuses the dashboard does not know how to show
    pub fn of(status: &OrderStatus) -> Option<Bucket> {
        match status {
            OrderStatus::Pending | OrderStatus::Preparing | OrderStatus::Ready => {
                Some(Bucket::Active)
            }
            OrderStatus::Completed => Some(Bucket::Completed),
            OrderStatus::Cancelled => Some(Bucket::Cancelled),
            OrderStatus::Other(_) => None,
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            Bucket::Active => "No active orders.",
            Bucket::Completed => "No completed orders yet.",
            Bucket::Cancelled => "No cancelled orders.",
        }
    }

    pub fn failed_message(&self) -> &'static str {
        match self {
            Bucket::Active => "Failed to load orders.",
            Bucket::Completed => "Failed to load completed orders.",
            Bucket::Cancelled => "Failed to load cancelled orders.",
        }
    }

    /// Column count, used to span placeholder rows
    pub fn columns(&self) -> u32 {
        match self {
            Bucket::Active => 10,
            Bucket::Completed | Bucket::Cancelled => 9,
        }
    }
}

/// Orders split by bucket
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partitioned {
    pub active: Vec<Order>,
    pub completed: Vec<Order>,
    pub cancelled: Vec<Order>,
    /// Orders with a status no bucket accepts
    pub unknown: Vec<Order>,
}

/// Split orders into buckets, keeping server order within each.
///
/// Completed orders are sorted by queue number, missing numbers first.
pub fn partition_orders(orders: Vec<Order>) -> Partitioned {
    let mut parts = Partitioned::default();
    for order in orders {
        match Bucket::of(&order.status) {
            Some(Bucket::Active) => parts.active.push(order),
            Some(Bucket::Completed) => parts.completed.push(order),
            Some(Bucket::Cancelled) => parts.cancelled.push(order),
            None => parts.unknown.push(order),
        }
    }
    parts
        .completed
        .sort_by_key(|order| order.completion_queue.unwrap_or(0));
    parts
}

/// Row view model shared by the three tables
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRow {
    pub order_id: String,
    pub receipt_href: String,
    pub customer_name: String,
    pub srn: String,
    pub pickup_type: &'static str,
    pub pickup_time: String,
    pub status: OrderStatus,
    pub status_class: String,
    pub total: String,
    pub created_at: String,
    pub item_lines: Vec<String>,
    /// Completed table only: queue number or `-`
    pub queue_label: String,
    /// Staff controls disabled
    pub locked: bool,
    pub due_soon: bool,
}

impl OrderRow {
    pub fn new(order: &Order) -> Self {
        Self {
            order_id: order.order_id.clone(),
            receipt_href: receipt_href(&order.order_id),
            customer_name: order.customer_name.clone(),
            srn: or_dash(order.srn.as_deref()),
            pickup_type: pickup_type(order),
            pickup_time: or_dash(order.scheduled_for.as_deref()),
            status: order.status.clone(),
            status_class: order.status.badge_class(),
            total: order.total.to_string(),
            created_at: order.created_at.clone(),
            item_lines: order.items.iter().map(item_summary).collect(),
            queue_label: match order.completion_queue {
                Some(q) if q > 0 => q.to_string(),
                _ => "-".to_string(),
            },
            locked: order.is_locked(),
            due_soon: order.is_due_soon(),
        }
    }

    /// Row classes for the active and cancelled tables
    pub fn row_class(&self, bucket: Bucket) -> &'static str {
        match bucket {
            Bucket::Active if self.due_soon => "due-soon",
            Bucket::Cancelled => "row-cancelled",
            _ => "",
        }
    }
}

/// Body of one dashboard table
#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    Rows(Vec<OrderRow>),
    /// A single spanning row with a message
    Placeholder(&'static str),
}

impl TableBody {
    fn from_orders(bucket: Bucket, orders: &[Order]) -> Self {
        if orders.is_empty() {
            TableBody::Placeholder(bucket.empty_message())
        } else {
            TableBody::Rows(orders.iter().map(OrderRow::new).collect())
        }
    }

    pub fn rows(&self) -> &[OrderRow] {
        match self {
            TableBody::Rows(rows) => rows,
            TableBody::Placeholder(_) => &[],
        }
    }
}

/// Everything the dashboard renders after one load
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub active: TableBody,
    pub completed: TableBody,
    pub cancelled: TableBody,
}

impl DashboardView {
    pub fn from_orders(orders: Vec<Order>) -> Self {
        let parts = partition_orders(orders);
        Self {
            active: TableBody::from_orders(Bucket::Active, &parts.active),
            completed: TableBody::from_orders(Bucket::Completed, &parts.completed),
            cancelled: TableBody::from_orders(Bucket::Cancelled, &parts.cancelled),
        }
    }

    /// Shown when the order list could not be fetched or parsed
    pub fn failed() -> Self {
        Self {
            active: TableBody::Placeholder(Bucket::Active.failed_message()),
            completed: TableBody::Placeholder(Bucket::Completed.failed_message()),
            cancelled: TableBody::Placeholder(Bucket::Cancelled.failed_message()),
        }
    }

    /// Before the first response arrives
    pub fn loading() -> Self {
        Self {
            active: TableBody::Placeholder("Loading orders..."),
            completed: TableBody::Placeholder("Loading orders..."),
            cancelled: TableBody::Placeholder("Loading orders..."),
        }
    }
}
