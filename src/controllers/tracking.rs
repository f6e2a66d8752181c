//! Order Tracking Controller
//!
//! The tracking page keeps its own store: the last order looked up plus
//! what is currently shown. Nothing is shared with other pages.

use reactive_stores::Store;

use cafe_domain::tracking::{can_cancel, order_detail_text, STATUS_UPDATED_NOTE};
use cafe_domain::{refund_href, CancelRequest, DomainError, Order};

use crate::api::CafeApi;

const PROCESSING_MESSAGE: &str = "Processing cancellation...";

/// Colour of the cancellation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageTone {
    #[default]
    Neutral,
    Error,
    Success,
}

impl MessageTone {
    pub fn color(&self) -> &'static str {
        match self {
            MessageTone::Neutral => "#374151",
            MessageTone::Error => "#b91c1c",
            MessageTone::Success => "#065f46",
        }
    }
}

/// Tracking page state with field-level reactivity
#[derive(Debug, Clone, Default, Store)]
pub struct TrackingState {
    /// Last order fetched successfully
    pub order: Option<Order>,
    pub result_text: String,
    pub message: String,
    pub tone: MessageTone,
    pub cancel_visible: bool,
    pub cancel_enabled: bool,
}

impl TrackingState {
    /// Clear the message and hide cancel before a new lookup
    pub fn begin_lookup(&mut self) {
        self.message.clear();
        self.tone = MessageTone::Neutral;
        self.cancel_visible = false;
    }

    pub fn apply_lookup(&mut self, outcome: LookupOutcome) {
        match outcome {
            LookupOutcome::Blocked(text) | LookupOutcome::Failed(text) => {
                self.result_text = text;
            }
            LookupOutcome::Found(order) => {
                self.result_text = order_detail_text(&order);
                self.cancel_visible = can_cancel(&order);
                self.cancel_enabled = self.cancel_visible;
                self.order = Some(order);
            }
        }
    }

    /// Lock the cancel button; `None` when no order has been looked up
    pub fn begin_cancel(&mut self) -> Option<String> {
        let order_id = self.order.as_ref()?.order_id.clone();
        self.cancel_enabled = false;
        self.tone = MessageTone::Neutral;
        self.message = PROCESSING_MESSAGE.to_string();
        Some(order_id)
    }

    pub fn apply_cancel(&mut self, outcome: &CancelOutcome) {
        match outcome {
            CancelOutcome::Failed(message) => {
                self.tone = MessageTone::Error;
                self.message = message.clone();
                self.cancel_enabled = true;
            }
            CancelOutcome::Cancelled { message, .. } => {
                self.tone = MessageTone::Success;
                self.message = message.clone();
                self.result_text.push_str(STATUS_UPDATED_NOTE);
                self.cancel_visible = false;
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// Rejected before sending; shown in place of the detail
    Blocked(String),
    Failed(String),
    Found(Order),
}

pub async fn lookup_order<A: CafeApi>(api: &A, raw_order_id: &str) -> LookupOutcome {
    let order_id = raw_order_id.trim();
    if order_id.is_empty() {
        return LookupOutcome::Blocked(DomainError::EmptyOrderId.to_string());
    }

    match api.get_order(order_id).await {
        Ok(order) => LookupOutcome::Found(order),
        Err(err) if err.is_server() => LookupOutcome::Failed(format!(
            "Error: {}",
            err.server_message_or("Could not fetch order")
        )),
        Err(err) => {
            log::error!("[TRACK] Lookup of {} failed: {}", order_id, err);
            LookupOutcome::Failed("Request failed while fetching status.".to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancelOutcome {
    Failed(String),
    Cancelled {
        message: String,
        /// Refund page to open after the delay
        refund_href: String,
    },
}

pub async fn cancel_order<A: CafeApi>(api: &A, order_id: &str) -> CancelOutcome {
    let request = CancelRequest {
        order_id: order_id.to_string(),
    };

    match api.cancel_order(&request).await {
        Ok(response) => {
            log::info!("[TRACK] Cancelled order {}", order_id);
            CancelOutcome::Cancelled {
                message: response.refund_message().to_string(),
                refund_href: refund_href(order_id),
            }
        }
        Err(err) if err.is_server() => CancelOutcome::Failed(
            err.server_message_or("Unable to cancel this order.").to_string(),
        ),
        Err(err) => {
            log::error!("[TRACK] Cancel of {} failed: {}", order_id, err);
            CancelOutcome::Failed("Cancellation request failed. Please try again.".to_string())
        }
    }
}
