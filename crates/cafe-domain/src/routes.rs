//! API paths and page links.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left alone by `encodeURIComponent`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub const ORDERS_PATH: &str = "/api/orders";
pub const MENU_PATH: &str = "/api/menu";
pub const PLACE_ORDER_PATH: &str = "/api/order";
pub const TRACK_HREF: &str = "/track";

pub fn encode_segment(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}

/// Inverse of `encode_segment`; invalid UTF-8 is replaced
pub fn decode_segment(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

pub fn order_path(order_id: &str) -> String {
    format!("/api/order/{}", encode_segment(order_id))
}

pub fn order_status_path(order_id: &str) -> String {
    format!("/api/order/{}/status", encode_segment(order_id))
}

pub fn cancel_order_path() -> &'static str {
    "/api/cancel_order"
}

pub fn receipt_href(order_id: &str) -> String {
    format!("/receipt/{}", encode_segment(order_id))
}

pub fn refund_href(order_id: &str) -> String {
    format!("/refund/{}", encode_segment(order_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_ids_pass_through() {
        assert_eq!(order_path("ORD123"), "/api/order/ORD123");
        assert_eq!(order_status_path("a1b2-c3"), "/api/order/a1b2-c3/status");
        assert_eq!(refund_href("ORD456"), "/refund/ORD456");
    }

    #[test]
    fn test_ids_are_component_encoded() {
        assert_eq!(encode_segment("a b/c?"), "a%20b%2Fc%3F");
        assert_eq!(receipt_href("x#1"), "/receipt/x%231");
        assert_eq!(decode_segment("a%20b%2Fc%3F"), "a b/c?");
    }
}
