//! Refund Page
//!
//! Shown after a successful cancellation; the only action goes back to
//! the tracking page.

use leptos::prelude::*;

use cafe_domain::TRACK_HREF;

use crate::browser;

#[component]
pub fn RefundPage(order_id: Option<String>) -> impl IntoView {
    view! {
        <main class="refund-page">
            <h1>"Refund Initiated"</h1>
            {order_id.map(|id| view! { <p class="refund-order">"Order ID: " {id}</p> })}
            <p>"Your refund will be reaching you within 2 working days."</p>
            <button id="backToTrackBtn" on:click=move |_| browser::navigate(TRACK_HREF)>
                "Back to Track"
            </button>
        </main>
    }
}
