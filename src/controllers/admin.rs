//! Staff Dashboard Controller

use cafe_domain::dashboard::{Bucket, DashboardView};
use cafe_domain::{OrderStatus, StatusUpdate};

use crate::api::CafeApi;

pub const COMPLETION_CODE_PROMPT: &str = "Enter pickup code from customer to complete this order:";

/// Fetch all orders and build the three tables
pub async fn load_dashboard<A: CafeApi>(api: &A) -> DashboardView {
    match api.list_orders().await {
        Ok(orders) => {
            let unknown = orders
                .iter()
                .filter(|o| Bucket::of(&o.status).is_none())
                .count();
            if unknown > 0 {
                log::warn!("[ADMIN] {} orders with unrecognised status not shown", unknown);
            }
            log::debug!("[ADMIN] Loaded {} orders", orders.len());
            DashboardView::from_orders(orders)
        }
        Err(err) => {
            log::error!("[ADMIN] Failed to load orders: {}", err);
            DashboardView::failed()
        }
    }
}

/// Result of pressing "Update" on an active row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Saved; the dashboard should reload
    Updated,
    /// Rejected before sending; alert text
    Blocked(String),
    /// Request failed; alert text
    Failed(String),
}

/// Send a status change for one order.
///
/// `ask_code` is only called when completing, to collect the customer's
/// pickup code.
pub async fn submit_status_update<A, P>(
    api: &A,
    order_id: &str,
    target: OrderStatus,
    ask_code: P,
) -> UpdateOutcome
where
    A: CafeApi,
    P: FnOnce() -> Option<String>,
{
    let code = if target == OrderStatus::Completed {
        ask_code()
    } else {
        None
    };

    let update = match StatusUpdate::new(target, code.as_deref()) {
        Ok(update) => update,
        Err(err) => return UpdateOutcome::Blocked(err.to_string()),
    };

    match api.update_status(order_id, &update).await {
        Ok(()) => {
            log::info!("[ADMIN] Order {} -> {}", order_id, update.status);
            UpdateOutcome::Updated
        }
        Err(err) if err.is_server() => UpdateOutcome::Failed(format!(
            "Error: {}",
            err.server_message_or("Failed to update")
        )),
        Err(err) => {
            log::error!("[ADMIN] Status update for {} failed: {}", order_id, err);
            UpdateOutcome::Failed("Network error".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::fake::{order_json, Call, FakeApi, Reply};
    use cafe_domain::dashboard::TableBody;

    #[tokio::test]
    async fn test_network_failure_shows_failed_rows() {
        let api = FakeApi::default();

        let view = load_dashboard(&api).await;

        assert_eq!(view.active, TableBody::Placeholder("Failed to load orders."));
        assert_eq!(view.completed, TableBody::Placeholder("Failed to load completed orders."));
        assert_eq!(view.cancelled, TableBody::Placeholder("Failed to load cancelled orders."));
    }

    #[tokio::test]
    async fn test_orders_are_split_into_tables() {
        let mut first_done = order_json("C2", "completed");
        first_done.completion_queue = Some(2);
        let mut second_done = order_json("C1", "completed");
        second_done.completion_queue = Some(1);
        let api = FakeApi {
            orders: Reply::Ok(vec![
                order_json("A1", "pending"),
                first_done,
                order_json("X1", "cancelled"),
                second_done,
                order_json("A2", "ready"),
            ]),
            ..FakeApi::default()
        };

        let view = load_dashboard(&api).await;

        let active: Vec<_> = view.active.rows().iter().map(|r| r.order_id.as_str()).collect();
        let completed: Vec<_> = view.completed.rows().iter().map(|r| r.order_id.as_str()).collect();
        assert_eq!(active, vec!["A1", "A2"]);
        assert_eq!(completed, vec!["C1", "C2"]);
        assert_eq!(view.cancelled.rows().len(), 1);
        assert_eq!(api.calls(), vec![Call::ListOrders]);
    }

    #[tokio::test]
    async fn test_completing_without_code_sends_nothing() {
        let api = FakeApi {
            update: Reply::Ok(()),
            ..FakeApi::default()
        };

        let outcome = submit_status_update(&api, "ORD123", OrderStatus::Completed, || None).await;

        assert_eq!(outcome, UpdateOutcome::Blocked("Pickup code is required.".to_string()));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_completing_with_code_sends_it() {
        let api = FakeApi {
            update: Reply::Ok(()),
            ..FakeApi::default()
        };

        let outcome =
            submit_status_update(&api, "ORD123", OrderStatus::Completed, || Some("0420".into()))
                .await;

        assert_eq!(outcome, UpdateOutcome::Updated);
        assert_eq!(
            api.calls(),
            vec![Call::UpdateStatus(
                "ORD123".to_string(),
                StatusUpdate {
                    status: OrderStatus::Completed,
                    completion_code: Some("0420".to_string()),
                }
            )]
        );
    }

    #[tokio::test]
    async fn test_other_targets_never_prompt() {
        let api = FakeApi {
            update: Reply::Ok(()),
            ..FakeApi::default()
        };

        let outcome = submit_status_update(&api, "ORD1", OrderStatus::Preparing, || {
            panic!("prompt shown for a non-completing update")
        })
        .await;

        assert_eq!(outcome, UpdateOutcome::Updated);
    }

    #[tokio::test]
    async fn test_server_error_is_surfaced() {
        let api = FakeApi {
            update: Reply::Server(400, Some("Invalid pickup code")),
            ..FakeApi::default()
        };

        let outcome =
            submit_status_update(&api, "ORD1", OrderStatus::Completed, || Some("1111".into()))
                .await;

        assert_eq!(outcome, UpdateOutcome::Failed("Error: Invalid pickup code".to_string()));
    }

    #[tokio::test]
    async fn test_server_error_without_message_uses_fallback() {
        let api = FakeApi {
            update: Reply::Server(500, None),
            ..FakeApi::default()
        };

        let outcome = submit_status_update(&api, "ORD1", OrderStatus::Ready, || None).await;

        assert_eq!(outcome, UpdateOutcome::Failed("Error: Failed to update".to_string()));
    }

    #[tokio::test]
    async fn test_network_error_on_update() {
        let api = FakeApi::default();

        let outcome = submit_status_update(&api, "ORD1", OrderStatus::Ready, || None).await;

        assert_eq!(outcome, UpdateOutcome::Failed("Network error".to_string()));
    }
}
