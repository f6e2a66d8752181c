//! Order Entity
//!
//! Orders as returned by `/api/orders` and `/api/order/{id}`.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Order lifecycle status.
///
/// Parsing is exact and case-sensitive; anything unrecognised is kept
/// verbatim in `Other` so a new backend status never breaks a refresh.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Completed,
    Cancelled,
    Other(String),
}

impl OrderStatus {
    /// Choices offered by the staff status selector, in display order
    pub const CHOICES: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Other(raw) => raw,
        }
    }

    pub fn parse(raw: &str) -> Self {
        match raw {
            "pending" => OrderStatus::Pending,
            "preparing" => OrderStatus::Preparing,
            "ready" => OrderStatus::Ready,
            "completed" => OrderStatus::Completed,
            "cancelled" => OrderStatus::Cancelled,
            other => OrderStatus::Other(other.to_string()),
        }
    }

    /// Status compared case-insensitively against a final state.
    ///
    /// Used by the customer-facing cancel rule, which is looser than the
    /// staff dashboard's exact match.
    pub fn is_final_ignoring_case(&self) -> bool {
        let lower = self.as_str().to_lowercase();
        lower == "completed" || lower == "cancelled"
    }

    /// CSS class for the status badge
    pub fn badge_class(&self) -> String {
        format!("status-badge status-{}", self.as_str().to_lowercase())
    }
}

impl From<String> for OrderStatus {
    fn from(raw: String) -> Self {
        match OrderStatus::parse(&raw) {
            OrderStatus::Other(_) => OrderStatus::Other(raw),
            known => known,
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Currency amount in rupees.
///
/// Integral amounts print without a decimal part, matching how the backend
/// sends whole-rupee prices.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(pub f64);

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_finite() && self.0.fract() == 0.0 {
            write!(f, "{:.0}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// One drink line of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub display_name: String,
    pub size: String,
    pub qty: u32,
    pub line_total: Money,
    #[serde(default)]
    pub sugar_level: Option<String>,
    #[serde(default)]
    pub milk_type: Option<String>,
    #[serde(default)]
    pub extra_shot: Option<bool>,
    #[serde(default)]
    pub drink_key: Option<String>,
    #[serde(default)]
    pub price_per_cup: Option<Money>,
}

/// Treats an explicit JSON `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Order data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub customer_name: String,
    #[serde(default)]
    pub srn: Option<String>,
    pub status: OrderStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_scheduled: bool,
    #[serde(default)]
    pub scheduled_for: Option<String>,
    #[serde(default)]
    pub completion_queue: Option<u32>,
    #[serde(default)]
    pub completion_code: Option<String>,
    /// Computed by the backend for the staff list only
    #[serde(default, deserialize_with = "null_as_default")]
    pub due_soon: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: Money,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Scheduled pickup coming up soon on an order staff still have to hand over
    pub fn is_due_soon(&self) -> bool {
        self.is_scheduled && self.due_soon && self.status != OrderStatus::Completed
    }

    /// Staff controls are locked once an order is completed
    pub fn is_locked(&self) -> bool {
        self.status == OrderStatus::Completed
    }
}

/// Empty or missing text shows as a dash
pub(crate) fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}
