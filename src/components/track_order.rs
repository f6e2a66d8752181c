//! Order Tracking Page
//!
//! Look up one order, show its details, and offer cancellation for
//! scheduled orders that are still open.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::browser;
use crate::context::use_app_context;
use crate::controllers::tracking::{
    cancel_order, lookup_order, CancelOutcome, TrackingState, TrackingStateStoreFields,
};

#[component]
pub fn TrackOrder() -> impl IntoView {
    let ctx = use_app_context();
    let store = Store::new(TrackingState::default());
    let (order_id_input, set_order_id_input) = signal(String::new());

    let on_track = move |_| {
        let raw = order_id_input.get_untracked();
        store.write().begin_lookup();

        spawn_local(async move {
            let outcome = lookup_order(&ctx.api(), &raw).await;
            store.write().apply_lookup(outcome);
        });
    };

    let on_cancel = move |_| {
        let Some(order_id) = store.write().begin_cancel() else {
            return;
        };
        let delay = ctx.config().refund_redirect_delay;

        spawn_local(async move {
            let outcome = cancel_order(&ctx.api(), &order_id).await;
            store.write().apply_cancel(&outcome);

            if let CancelOutcome::Cancelled { refund_href, .. } = outcome {
                let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
                TimeoutFuture::new(millis).await;
                browser::navigate(&refund_href);
            }
        });
    };

    view! {
        <main class="track-page">
            <h1>"Track Your Order"</h1>

            <div class="track-form">
                <input
                    id="orderIdInput"
                    type="text"
                    placeholder="Enter Order ID"
                    prop:value=move || order_id_input.get()
                    on:input=move |ev| set_order_id_input.set(event_target_value(&ev))
                />
                <button id="trackBtn" on:click=on_track>"Track"</button>
            </div>

            <pre id="trackResult">{move || store.result_text().get()}</pre>

            <Show when=move || store.cancel_visible().get()>
                <button
                    id="cancelBtn"
                    prop:disabled=move || !store.cancel_enabled().get()
                    on:click=on_cancel
                >
                    "Cancel Scheduled Order"
                </button>
            </Show>

            <p id="cancelMessage" style=move || format!("color: {}", store.tone().get().color())>
                {move || store.message().get()}
            </p>
        </main>
    }
}
