//! Cafe Ordering App
//!
//! Picks the page from the URL path and provides the shared context.

use leptos::prelude::*;

use cafe_domain::decode_segment;

use crate::browser;
use crate::components::{AdminDashboard, CustomerOrder, RefundPage, TrackOrder};
use crate::config::AppConfig;
use crate::context::AppContext;

/// Page served for a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Customer,
    Admin,
    Track,
    /// Order id from `/refund/{id}`, if present
    Refund(Option<String>),
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_end_matches('/');
        match path {
            "/admin" => Page::Admin,
            "/track" => Page::Track,
            "/refund" => Page::Refund(None),
            _ => match path.strip_prefix("/refund/") {
                Some(segment) => {
                    let id = decode_segment(segment);
                    Page::Refund((!id.is_empty()).then_some(id))
                }
                None => Page::Customer,
            },
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext::new(AppConfig::from_window()));

    let page = Page::from_path(&browser::pathname());
    log::debug!("[APP] Serving {:?}", page);

    match page {
        Page::Customer => view! { <CustomerOrder /> }.into_any(),
        Page::Admin => view! { <AdminDashboard /> }.into_any(),
        Page::Track => view! { <TrackOrder /> }.into_any(),
        Page::Refund(order_id) => view! { <RefundPage order_id /> }.into_any(),
    }
}
