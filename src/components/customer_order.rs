//! Customer Ordering Page
//!
//! Menu table with size and quantity per drink, customer details, pickup
//! mode, and the order confirmation.

use leptos::prelude::*;
use leptos::task::spawn_local;

use cafe_domain::cart::{MenuSelection, OrderForm};
use cafe_domain::{Fulfillment, MenuRow, Size};

use crate::browser;
use crate::context::use_app_context;
use crate::controllers::customer::{load_menu, place_order, PlaceOutcome};

/// One drink row; edits are written back into `selections[index]`
#[component]
fn MenuItemRow(
    index: usize,
    row: MenuRow,
    selections: RwSignal<Vec<MenuSelection>>,
) -> impl IntoView {
    let edit = move |apply: &dyn Fn(&mut MenuSelection)| {
        selections.update(|all| {
            if let Some(sel) = all.get_mut(index) {
                apply(sel);
            }
        });
    };

    view! {
        <tr>
            <td>{row.display_name}</td>
            <td>{row.price_label}</td>
            <td>
                <select on:change=move |ev| {
                    let size = Size::from_value(&event_target_value(&ev));
                    edit(&|sel| sel.size = size);
                }>
                    {Size::ALL
                        .into_iter()
                        .map(|size| view! { <option value=size.value()>{size.label()}</option> })
                        .collect_view()}
                </select>
            </td>
            <td>
                <input
                    type="number"
                    min="0"
                    value="0"
                    on:input=move |ev| {
                        let qty = event_target_value(&ev);
                        edit(&|sel| sel.qty = qty.clone());
                    }
                />
            </td>
        </tr>
    }
}

#[component]
pub fn CustomerOrder() -> impl IntoView {
    let ctx = use_app_context();

    let menu_rows = RwSignal::new(Vec::<MenuRow>::new());
    let selections = RwSignal::new(Vec::<MenuSelection>::new());
    let (menu_error, set_menu_error) = signal::<Option<String>>(None);

    let (name, set_name) = signal(String::new());
    let (srn, set_srn) = signal(String::new());
    let (fulfillment, set_fulfillment) = signal(Fulfillment::Now);
    let (schedule_time, set_schedule_time) = signal(String::new());
    let (order_result, set_order_result) = signal(String::new());

    // Load menu on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match load_menu(&ctx.api()).await {
                Ok(rows) => {
                    selections.set(rows.iter().map(|r| MenuSelection::new(&r.drink_key)).collect());
                    menu_rows.set(rows);
                }
                Err(message) => set_menu_error.set(Some(message)),
            }
        });
    });

    let on_place = move |_| {
        let form = OrderForm {
            customer_name: Some(name.get_untracked()),
            srn: Some(srn.get_untracked()),
            fulfillment: fulfillment.get_untracked(),
            schedule_time: schedule_time.get_untracked(),
        };
        let current = selections.get_untracked();

        spawn_local(async move {
            match place_order(&ctx.api(), &form, &current).await {
                PlaceOutcome::Placed(text) => set_order_result.set(text),
                PlaceOutcome::Blocked(message) | PlaceOutcome::Failed(message) => {
                    browser::alert(&message)
                }
            }
        });
    };

    view! {
        <main class="customer-page">
            <h1>"Order Coffee"</h1>

            <table class="menu-table">
                <thead>
                    <tr>
                        <th>"Drink"</th>
                        <th>"Prices"</th>
                        <th>"Size"</th>
                        <th>"Qty"</th>
                    </tr>
                </thead>
                <tbody id="menuBody">
                    {move || {
                        menu_rows
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, row)| view! { <MenuItemRow index row selections /> })
                            .collect_view()
                    }}
                </tbody>
            </table>
            {move || menu_error.get().map(|message| view! { <p class="menu-error">{message}</p> })}

            <div class="customer-details">
                <input
                    id="nameInput"
                    type="text"
                    placeholder="Your name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    id="srnInput"
                    type="text"
                    placeholder="SRN (optional)"
                    prop:value=move || srn.get()
                    on:input=move |ev| set_srn.set(event_target_value(&ev))
                />
            </div>

            <div class="fulfillment">
                <label>
                    <input
                        type="radio"
                        name="fulfillment"
                        id="fulfillNow"
                        prop:checked=move || fulfillment.get() == Fulfillment::Now
                        on:change=move |_| set_fulfillment.set(Fulfillment::Now)
                    />
                    "Pick up now"
                </label>
                <label>
                    <input
                        type="radio"
                        name="fulfillment"
                        id="fulfillSchedule"
                        prop:checked=move || fulfillment.get() == Fulfillment::Schedule
                        on:change=move |_| set_fulfillment.set(Fulfillment::Schedule)
                    />
                    "Schedule pickup"
                </label>
                <input
                    id="scheduleInput"
                    type="datetime-local"
                    prop:disabled=move || !fulfillment.get().schedule_input_enabled()
                    prop:value=move || schedule_time.get()
                    on:input=move |ev| set_schedule_time.set(event_target_value(&ev))
                />
            </div>

            <button id="placeOrderBtn" on:click=on_place>"Place Order"</button>

            <pre id="orderResult">{move || order_result.get()}</pre>
        </main>
    }
}
