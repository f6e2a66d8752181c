//! Dashboard Tables
//!
//! Active, completed and cancelled order tables. Each body is replaced
//! wholesale whenever the dashboard view changes.

use leptos::prelude::*;

use cafe_domain::dashboard::{Bucket, OrderRow, TableBody};
use cafe_domain::OrderStatus;

/// Single spanning row for empty/failed tables
#[component]
fn PlaceholderRow(message: &'static str, bucket: Bucket) -> impl IntoView {
    view! {
        <tr class="placeholder-row">
            <td colspan=bucket.columns().to_string()>{message}</td>
        </tr>
    }
}

/// Item summary lines separated by line breaks
#[component]
fn ItemLines(lines: Vec<String>) -> impl IntoView {
    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| view! { {(i > 0).then(|| view! { <br/> })} {line} })
        .collect_view()
}

#[component]
fn ReceiptLink(href: String, order_id: String) -> impl IntoView {
    view! { <a href=href target="_blank">{order_id}</a> }
}

/// Active order row with the status selector
#[component]
fn ActiveOrderRow(row: OrderRow, on_update: Callback<(String, OrderStatus)>) -> impl IntoView {
    let row_class = row.row_class(Bucket::Active);
    let OrderRow {
        order_id,
        receipt_href,
        customer_name,
        srn,
        pickup_type,
        pickup_time,
        status,
        status_class,
        total,
        created_at,
        item_lines,
        locked,
        ..
    } = row;

    let (selected, set_selected) = signal(status.clone());
    let link_id = order_id.clone();
    let current = status.clone();

    view! {
        <tr class=row_class>
            <td><ReceiptLink href=receipt_href order_id=link_id /></td>
            <td>{customer_name}</td>
            <td>{srn}</td>
            <td>{pickup_type}</td>
            <td>{pickup_time}</td>
            <td><span class=status_class>{status.to_string()}</span></td>
            <td>{total}</td>
            <td>{created_at}</td>
            <td class="items"><ItemLines lines=item_lines /></td>
            <td>
                <select
                    class="status-select"
                    disabled=locked
                    on:change=move |ev| set_selected.set(OrderStatus::from(event_target_value(&ev)))
                >
                    {OrderStatus::CHOICES
                        .into_iter()
                        .map(|choice| {
                            let is_current = choice == current;
                            let value = choice.as_str().to_string();
                            let label = value.clone();
                            view! { <option value=value selected=is_current>{label}</option> }
                        })
                        .collect_view()}
                </select>
                <button
                    class="update-btn"
                    disabled=locked
                    on:click=move |_| on_update.run((order_id.clone(), selected.get_untracked()))
                >
                    "Update"
                </button>
            </td>
        </tr>
    }
}

#[component]
fn CompletedOrderRow(row: OrderRow) -> impl IntoView {
    let link_id = row.order_id.clone();
    view! {
        <tr>
            <td>{row.queue_label}</td>
            <td><ReceiptLink href=row.receipt_href order_id=link_id /></td>
            <td>{row.customer_name}</td>
            <td>{row.srn}</td>
            <td>{row.pickup_type}</td>
            <td>{row.pickup_time}</td>
            <td>{row.total}</td>
            <td>{row.created_at}</td>
            <td class="items"><ItemLines lines=row.item_lines /></td>
        </tr>
    }
}

#[component]
fn CancelledOrderRow(row: OrderRow) -> impl IntoView {
    let row_class = row.row_class(Bucket::Cancelled);
    let link_id = row.order_id.clone();
    view! {
        <tr class=row_class>
            <td><ReceiptLink href=row.receipt_href order_id=link_id /></td>
            <td>{row.customer_name}</td>
            <td>{row.srn}</td>
            <td>{row.pickup_type}</td>
            <td>{row.pickup_time}</td>
            <td><span class=row.status_class>{row.status.to_string()}</span></td>
            <td>{row.total}</td>
            <td>{row.created_at}</td>
            <td class="items"><ItemLines lines=row.item_lines /></td>
        </tr>
    }
}

#[component]
pub fn ActiveOrdersTable(
    #[prop(into)] body: Signal<TableBody>,
    on_update: Callback<(String, OrderStatus)>,
) -> impl IntoView {
    view! {
        <table class="orders-table">
            <thead>
                <tr>
                    <th>"Order ID"</th>
                    <th>"Customer"</th>
                    <th>"SRN"</th>
                    <th>"Pickup"</th>
                    <th>"Pickup Time"</th>
                    <th>"Status"</th>
                    <th>"Total"</th>
                    <th>"Created"</th>
                    <th>"Items"</th>
                    <th>"Action"</th>
                </tr>
            </thead>
            <tbody id="ordersBody">
                {move || match body.get() {
                    TableBody::Placeholder(message) => {
                        view! { <PlaceholderRow message bucket=Bucket::Active /> }.into_any()
                    }
                    TableBody::Rows(rows) => rows
                        .into_iter()
                        .map(|row| view! { <ActiveOrderRow row on_update /> })
                        .collect_view()
                        .into_any(),
                }}
            </tbody>
        </table>
    }
}

#[component]
pub fn CompletedOrdersTable(#[prop(into)] body: Signal<TableBody>) -> impl IntoView {
    view! {
        <table class="orders-table">
            <thead>
                <tr>
                    <th>"Queue #"</th>
                    <th>"Order ID"</th>
                    <th>"Customer"</th>
                    <th>"SRN"</th>
                    <th>"Pickup"</th>
                    <th>"Pickup Time"</th>
                    <th>"Total"</th>
                    <th>"Created"</th>
                    <th>"Items"</th>
                </tr>
            </thead>
            <tbody id="completedOrdersBody">
                {move || match body.get() {
                    TableBody::Placeholder(message) => {
                        view! { <PlaceholderRow message bucket=Bucket::Completed /> }.into_any()
                    }
                    TableBody::Rows(rows) => rows
                        .into_iter()
                        .map(|row| view! { <CompletedOrderRow row /> })
                        .collect_view()
                        .into_any(),
                }}
            </tbody>
        </table>
    }
}

#[component]
pub fn CancelledOrdersTable(#[prop(into)] body: Signal<TableBody>) -> impl IntoView {
    view! {
        <table class="orders-table">
            <thead>
                <tr>
                    <th>"Order ID"</th>
                    <th>"Customer"</th>
                    <th>"SRN"</th>
                    <th>"Pickup"</th>
                    <th>"Pickup Time"</th>
                    <th>"Status"</th>
                    <th>"Total"</th>
                    <th>"Created"</th>
                    <th>"Items"</th>
                </tr>
            </thead>
            <tbody id="cancelledOrdersBody">
                {move || match body.get() {
                    TableBody::Placeholder(message) => {
                        view! { <PlaceholderRow message bucket=Bucket::Cancelled /> }.into_any()
                    }
                    TableBody::Rows(rows) => rows
                        .into_iter()
                        .map(|row| view! { <CancelledOrderRow row /> })
                        .collect_view()
                        .into_any(),
                }}
            </tbody>
        </table>
    }
}
