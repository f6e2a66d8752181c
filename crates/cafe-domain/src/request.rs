//! Request and Response Bodies
//!
//! Payloads the front end sends and the small response shapes it reads
//! back. Full orders use `Order`.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::menu::Size;
use crate::order::{Money, OrderStatus};

/// Pickup mode chosen on the ordering page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fulfillment {
    #[default]
    Now,
    Schedule,
}

impl Fulfillment {
    /// The schedule-time input is only editable in schedule mode
    pub fn schedule_input_enabled(&self) -> bool {
        matches!(self, Fulfillment::Schedule)
    }
}

/// One cart line of a new order.
///
/// The ordering page has no customisation inputs, so sugar, milk and
/// extra shot always carry the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Drink key from the menu
    pub name: String,
    pub size: Size,
    pub qty: u32,
    pub sugar_level: String,
    pub milk_type: String,
    pub extra_shot: bool,
}

impl CartLine {
    pub fn new(drink_key: &str, size: Size, qty: u32) -> Self {
        Self {
            name: drink_key.to_string(),
            size,
            qty,
            sugar_level: "normal".to_string(),
            milk_type: "regular".to_string(),
            extra_shot: false,
        }
    }
}

/// Body of `POST /api/order`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    pub customer_name: String,
    pub srn: String,
    pub items: Vec<CartLine>,
    pub fulfillment: Fulfillment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_for: Option<String>,
}

/// Success body of `POST /api/order`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlacedOrder {
    pub order_id: String,
    #[serde(default)]
    pub pickup_code: Option<String>,
    #[serde(default)]
    pub completion_code: Option<String>,
    #[serde(default)]
    pub total: Money,
    #[serde(default)]
    pub status: String,
}

impl PlacedOrder {
    /// The backend has used both field names for the pickup code
    pub fn pickup_code(&self) -> Option<&str> {
        self.pickup_code
            .as_deref()
            .filter(|code| !code.is_empty())
            .or(self.completion_code.as_deref())
    }

    /// Confirmation block shown after placing an order
    pub fn confirmation_text(&self) -> String {
        format!(
            "Order ID: {}\nPickup Code: {}\nTotal: ₹{}\nStatus: {}",
            self.order_id,
            self.pickup_code().unwrap_or("-"),
            self.total,
            self.status,
        )
    }
}

/// Body of `PATCH /api/order/{id}/status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusUpdate {
    pub status: OrderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_code: Option<String>,
}

impl StatusUpdate {
    /// Build an update for `target`.
    ///
    /// Completing an order needs the customer's pickup code; a missing or
    /// blank code is rejected before any request is made.
    pub fn new(target: OrderStatus, code_input: Option<&str>) -> DomainResult<Self> {
        if target != OrderStatus::Completed {
            return Ok(Self { status: target, completion_code: None });
        }
        let code = code_input.map(str::trim).unwrap_or_default();
        if code.is_empty() {
            return Err(DomainError::MissingCompletionCode);
        }
        Ok(Self {
            status: target,
            completion_code: Some(code.to_string()),
        })
    }
}

/// Body of `POST /api/cancel_order`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CancelRequest {
    pub order_id: String,
}

/// Success body of `POST /api/cancel_order`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CancelResponse {
    #[serde(default)]
    pub refund_message: Option<String>,
}

impl CancelResponse {
    pub const DEFAULT_REFUND_MESSAGE: &'static str =
        "Refund initiated and will be reaching you within 2 working days.";

    pub fn refund_message(&self) -> &str {
        self.refund_message
            .as_deref()
            .filter(|msg| !msg.is_empty())
            .unwrap_or(Self::DEFAULT_REFUND_MESSAGE)
    }
}

/// Structured error body: `{ "error": "..." }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
