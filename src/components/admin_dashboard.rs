//! Staff Dashboard
//!
//! Polls the order list and renders the three order tables.

use leptos::prelude::*;
use leptos::task::spawn_local;

use cafe_domain::dashboard::DashboardView;
use cafe_domain::OrderStatus;

use crate::browser;
use crate::components::{ActiveOrdersTable, CancelledOrdersTable, CompletedOrdersTable};
use crate::context::use_app_context;
use crate::controllers::admin::{
    load_dashboard, submit_status_update, UpdateOutcome, COMPLETION_CODE_PROMPT,
};
use crate::poll::PollGate;

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let ctx = use_app_context();
    let dashboard = RwSignal::new(DashboardView::loading());
    let gate = StoredValue::new(PollGate::default());

    // Full reload; only the newest response is rendered
    let reload = move || {
        let mut state = gate.get_value();
        let seq = state.begin();
        gate.set_value(state);

        spawn_local(async move {
            let view = load_dashboard(&ctx.api()).await;
            if gate.with_value(|state| state.is_current(seq)) {
                dashboard.set(view);
            } else {
                log::debug!("[ADMIN] Dropping stale response #{}", seq);
            }
        });
    };

    // Initial load
    Effect::new(move |_| reload());

    // Each tick supersedes any load still outstanding
    match set_interval_with_handle(reload, ctx.config().poll_interval) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => log::error!("[ADMIN] Could not start polling: {:?}", err),
    }

    let on_update = Callback::new(move |(order_id, target): (String, OrderStatus)| {
        spawn_local(async move {
            let outcome = submit_status_update(&ctx.api(), &order_id, target, || {
                browser::prompt(COMPLETION_CODE_PROMPT)
            })
            .await;

            match outcome {
                UpdateOutcome::Updated => reload(),
                UpdateOutcome::Blocked(message) | UpdateOutcome::Failed(message) => {
                    browser::alert(&message)
                }
            }
        });
    });

    view! {
        <main class="admin-dashboard">
            <h1>"Orders Dashboard"</h1>

            <h2>"Active Orders"</h2>
            <ActiveOrdersTable
                body=Signal::derive(move || dashboard.with(|d| d.active.clone()))
                on_update=on_update
            />

            <h2>"Completed Orders"</h2>
            <CompletedOrdersTable body=Signal::derive(move || dashboard.with(|d| d.completed.clone())) />

            <h2>"Cancelled Orders"</h2>
            <CancelledOrdersTable body=Signal::derive(move || dashboard.with(|d| d.cancelled.clone())) />
        </main>
    }
}
