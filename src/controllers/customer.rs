//! Customer Ordering Controller

use cafe_domain::cart::{build_new_order, MenuSelection, OrderForm};
use cafe_domain::MenuRow;

use crate::api::CafeApi;

pub const MENU_LOAD_FAILED: &str = "Could not load the menu.";
const PLACE_FAILED: &str = "Failed to place order.";

pub async fn load_menu<A: CafeApi>(api: &A) -> Result<Vec<MenuRow>, String> {
    match api.menu().await {
        Ok(menu) => {
            let rows = menu.rows();
            log::debug!("[MENU] Loaded {} drinks", rows.len());
            Ok(rows)
        }
        Err(err) => {
            log::error!("[MENU] Error loading menu: {}", err);
            Err(MENU_LOAD_FAILED.to_string())
        }
    }
}

/// Result of pressing "Place Order"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// Order accepted; confirmation text
    Placed(String),
    /// Rejected before sending; alert text
    Blocked(String),
    /// Rejected by the server or not sent; alert text
    Failed(String),
}

pub async fn place_order<A: CafeApi>(
    api: &A,
    form: &OrderForm,
    selections: &[MenuSelection],
) -> PlaceOutcome {
    let order = match build_new_order(form, selections) {
        Ok(order) => order,
        Err(err) => return PlaceOutcome::Blocked(err.to_string()),
    };

    match api.place_order(&order).await {
        Ok(placed) => {
            log::info!("[MENU] Placed order {}", placed.order_id);
            PlaceOutcome::Placed(placed.confirmation_text())
        }
        Err(err) => match err.server_message() {
            Some(message) => PlaceOutcome::Failed(format!("Error: {}", message)),
            None => {
                log::error!("[MENU] Order failed: {}", err);
                PlaceOutcome::Failed(PLACE_FAILED.to_string())
            }
        },
    }
}
