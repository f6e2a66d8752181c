//! Order API Client
//!
//! Frontend bindings to the café backend, behind a trait so the page
//! controllers can be driven by a fake in tests.

mod error;
mod http;

use async_trait::async_trait;
use cafe_domain::{CancelRequest, CancelResponse, Menu, NewOrder, Order, PlacedOrder, StatusUpdate};

pub use error::ApiError;
pub use http::HttpApi;

pub type ApiResult<T> = Result<T, ApiError>;

/// Operations the pages perform against the backend
#[async_trait(?Send)]
pub trait CafeApi {
    /// `GET /api/orders`
    async fn list_orders(&self) -> ApiResult<Vec<Order>>;

    /// `PATCH /api/order/{id}/status`
    async fn update_status(&self, order_id: &str, update: &StatusUpdate) -> ApiResult<()>;

    /// `GET /api/menu`
    async fn menu(&self) -> ApiResult<Menu>;

    /// `POST /api/order`
    async fn place_order(&self, order: &NewOrder) -> ApiResult<PlacedOrder>;

    /// `GET /api/order/{id}`
    async fn get_order(&self, order_id: &str) -> ApiResult<Order>;

    /// `POST /api/cancel_order`
    async fn cancel_order(&self, request: &CancelRequest) -> ApiResult<CancelResponse>;
}
