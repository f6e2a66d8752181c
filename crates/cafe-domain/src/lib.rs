//! Café Domain Layer
//!
//! API models plus the pure view-model functions behind every page.
//! Nothing here touches the DOM, so it is tested natively.

mod error;
mod order;
mod menu;
mod request;
mod summary;
mod routes;
pub mod dashboard;
pub mod cart;
pub mod tracking;

pub use error::{DomainError, DomainResult};
pub use order::{Money, Order, OrderItem, OrderStatus};
pub use menu::{price_label, Menu, MenuDrink, MenuResponse, MenuRow, Size};
pub use request::{
    CancelRequest, CancelResponse, CartLine, ErrorBody, Fulfillment, NewOrder, PlacedOrder,
    StatusUpdate,
};
pub use summary::{item_summary, pickup_type, tracking_item_line};
pub use routes::{
    cancel_order_path, decode_segment, encode_segment, order_path, order_status_path, receipt_href, refund_href,
    MENU_PATH, ORDERS_PATH, PLACE_ORDER_PATH, TRACK_HREF,
};
