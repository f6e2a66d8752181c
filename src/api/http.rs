//! HTTP implementation of `CafeApi` using reqwest (browser fetch on wasm32).

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use cafe_domain::{
    cancel_order_path, order_path, order_status_path, CancelRequest, CancelResponse, ErrorBody,
    Menu, MenuResponse, NewOrder, Order, PlacedOrder, StatusUpdate, MENU_PATH, ORDERS_PATH,
    PLACE_ORDER_PATH,
};

use super::{ApiError, ApiResult, CafeApi};

#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        decode_body(status, &body)
    }
}

/// Decode a response body.
///
/// A non-OK status, or an `error` field on any status, becomes
/// `ApiError::Server` carrying the server's message.
pub fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> ApiResult<T> {
    let error = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error);

    if !(200..300).contains(&status) || error.is_some() {
        return Err(ApiError::Server { status, message: error });
    }
    Ok(serde_json::from_str(body)?)
}

#[async_trait(?Send)]
impl CafeApi for HttpApi {
    async fn list_orders(&self) -> ApiResult<Vec<Order>> {
        let response = self.client.get(self.url(ORDERS_PATH)).send().await?;
        Self::read(response).await
    }

    async fn update_status(&self, order_id: &str, update: &StatusUpdate) -> ApiResult<()> {
        let response = self
            .client
            .patch(self.url(&order_status_path(order_id)))
            .json(update)
            .send()
            .await?;
        Self::read::<serde_json::Value>(response).await.map(|_| ())
    }

    async fn menu(&self) -> ApiResult<Menu> {
        let response = self.client.get(self.url(MENU_PATH)).send().await?;
        Self::read::<MenuResponse>(response).await.map(|r| r.menu)
    }

    async fn place_order(&self, order: &NewOrder) -> ApiResult<PlacedOrder> {
        let response = self
            .client
            .post(self.url(PLACE_ORDER_PATH))
            .json(order)
            .send()
            .await?;
        Self::read(response).await
    }

    async fn get_order(&self, order_id: &str) -> ApiResult<Order> {
        let response = self.client.get(self.url(&order_path(order_id))).send().await?;
        Self::read(response).await
    }

    async fn cancel_order(&self, request: &CancelRequest) -> ApiResult<CancelResponse> {
        let response = self
            .client
            .post(self.url(cancel_order_path()))
            .json(request)
            .send()
            .await?;
        Self::read(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_body_decodes() {
        let orders: Vec<Order> = decode_body(200, "[]").unwrap();
        assert!(orders.is_empty());
    }

    #[test]
    fn test_error_status_carries_server_message() {
        let err = decode_body::<Order>(404, r#"{"error":"Order not found"}"#).unwrap_err();
        assert!(err.is_server());
        assert_eq!(err.server_message_or("fallback"), "Order not found");
    }

    #[test]
    fn test_error_status_without_json_uses_fallback() {
        let err = decode_body::<Order>(500, "<html>oops</html>").unwrap_err();
        assert!(matches!(err, ApiError::Server { status: 500, message: None }));
        assert_eq!(err.server_message_or("Could not fetch order"), "Could not fetch order");
    }

    #[test]
    fn test_error_field_on_ok_status_is_an_error() {
        let err = decode_body::<PlacedOrder>(200, r#"{"error":"No items in order"}"#).unwrap_err();
        assert_eq!(err.server_message_or("-"), "No items in order");
    }

    #[test]
    fn test_bad_json_is_decode_error() {
        let err = decode_body::<Vec<Order>>(200, "not json").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_url_joins_base() {
        let api = HttpApi::new("http://127.0.0.1:5001/");
        assert_eq!(api.url(ORDERS_PATH), "http://127.0.0.1:5001/api/orders");
    }
}
