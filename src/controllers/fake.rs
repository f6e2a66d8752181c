//! Recording `CafeApi` for controller tests.

use std::cell::RefCell;

use async_trait::async_trait;
use cafe_domain::{
    CancelRequest, CancelResponse, Menu, NewOrder, Order, PlacedOrder, StatusUpdate,
};

use crate::api::{ApiError, ApiResult, CafeApi};

/// Canned reply for one endpoint
#[derive(Debug, Clone)]
pub enum Reply<T> {
    Ok(T),
    Server(u16, Option<&'static str>),
    Network,
}

impl<T: Clone> Reply<T> {
    fn to_result(&self) -> ApiResult<T> {
        match self {
            Reply::Ok(value) => Ok(value.clone()),
            Reply::Server(status, message) => Err(ApiError::Server {
                status: *status,
                message: message.map(str::to_string),
            }),
            Reply::Network => Err(ApiError::Transport("connection refused".to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListOrders,
    UpdateStatus(String, StatusUpdate),
    Menu,
    PlaceOrder(NewOrder),
    GetOrder(String),
    CancelOrder(String),
}

#[derive(Debug)]
pub struct FakeApi {
    pub orders: Reply<Vec<Order>>,
    pub update: Reply<()>,
    pub menu: Reply<Menu>,
    pub placed: Reply<PlacedOrder>,
    pub order: Reply<Order>,
    pub cancel: Reply<CancelResponse>,
    pub calls: RefCell<Vec<Call>>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            orders: Reply::Network,
            update: Reply::Network,
            menu: Reply::Network,
            placed: Reply::Network,
            order: Reply::Network,
            cancel: Reply::Network,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl FakeApi {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl CafeApi for FakeApi {
    async fn list_orders(&self) -> ApiResult<Vec<Order>> {
        self.record(Call::ListOrders);
        self.orders.to_result()
    }

    async fn update_status(&self, order_id: &str, update: &StatusUpdate) -> ApiResult<()> {
        self.record(Call::UpdateStatus(order_id.to_string(), update.clone()));
        self.update.to_result()
    }

    async fn menu(&self) -> ApiResult<Menu> {
        self.record(Call::Menu);
        self.menu.to_result()
    }

    async fn place_order(&self, order: &NewOrder) -> ApiResult<PlacedOrder> {
        self.record(Call::PlaceOrder(order.clone()));
        self.placed.to_result()
    }

    async fn get_order(&self, order_id: &str) -> ApiResult<Order> {
        self.record(Call::GetOrder(order_id.to_string()));
        self.order.to_result()
    }

    async fn cancel_order(&self, request: &CancelRequest) -> ApiResult<CancelResponse> {
        self.record(Call::CancelOrder(request.order_id.clone()));
        self.cancel.to_result()
    }
}

/// Order as the backend would send it
pub fn order_json(order_id: &str, status: &str) -> Order {
    serde_json::from_value(serde_json::json!({
        "order_id": order_id,
        "customer_name": "Asha",
        "srn": null,
        "status": status,
        "total": 120,
        "created_at": "2025-01-10 09:15:00",
        "completion_code": "0420",
        "completion_queue": null,
        "is_scheduled": false,
        "scheduled_for": null,
        "items": [{
            "display_name": "Latte",
            "size": "small",
            "qty": 1,
            "line_total": 120
        }]
    }))
    .unwrap()
}
