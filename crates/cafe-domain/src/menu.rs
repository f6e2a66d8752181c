//! Menu Models
//!
//! The drink menu served by `/api/menu`, plus the row model the ordering
//! page renders from it.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::order::Money;

/// A drink on the menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuDrink {
    pub display_name: String,
    /// Keyed by backend size name (`small`, `medium`, ...)
    #[serde(default)]
    pub prices: BTreeMap<String, Money>,
}

/// Menu keyed by drink identifier, in the order the server sent it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Menu {
    pub drinks: Vec<(String, MenuDrink)>,
}

impl<'de> Deserialize<'de> for Menu {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MenuVisitor;

        impl<'de> Visitor<'de> for MenuVisitor {
            type Value = Menu;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of drink key to drink")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Menu, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut drinks = Vec::new();
                while let Some((key, drink)) = map.next_entry::<String, MenuDrink>()? {
                    drinks.push((key, drink));
                }
                Ok(Menu { drinks })
            }
        }

        deserializer.deserialize_map(MenuVisitor)
    }
}

/// Body returned by `/api/menu`
#[derive(Debug, Clone, Deserialize)]
pub struct MenuResponse {
    pub menu: Menu,
}

impl Menu {
    /// Parse the `{ "menu": { ... } }` body
    pub fn from_response(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<MenuResponse>(body).map(|resp| resp.menu)
    }

    /// One row per drink, in server order
    pub fn rows(&self) -> Vec<MenuRow> {
        self.drinks
            .iter()
            .map(|(key, drink)| MenuRow::new(key, drink))
            .collect()
    }
}

/// Sizes offered on the ordering page.
///
/// `Regular` is what customers see and what the order payload carries; its
/// price lives under the menu's `medium` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    #[default]
    Small,
    Regular,
}

impl Size {
    pub const ALL: [Size; 2] = [Size::Small, Size::Regular];

    /// Value sent in the order payload
    pub fn value(&self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Regular => "regular",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Size::Small => "Small",
            Size::Regular => "Regular",
        }
    }

    /// Key of this size in `MenuDrink::prices`
    pub fn price_key(&self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Regular => "medium",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "regular" => Size::Regular,
            _ => Size::Small,
        }
    }
}

/// Menu row view model
#[derive(Debug, Clone, PartialEq)]
pub struct MenuRow {
    pub drink_key: String,
    pub display_name: String,
    pub price_label: String,
}

impl MenuRow {
    pub fn new(drink_key: &str, drink: &MenuDrink) -> Self {
        Self {
            drink_key: drink_key.to_string(),
            display_name: drink.display_name.clone(),
            price_label: price_label(drink),
        }
    }
}

fn price_for(drink: &MenuDrink, size: Size) -> String {
    drink
        .prices
        .get(size.price_key())
        .map(|p| format!("₹{}", p))
        .unwrap_or_else(|| "-".to_string())
}

/// `Small: ₹80 | Regular: ₹120`
pub fn price_label(drink: &MenuDrink) -> String {
    format!(
        "{}: {} | {}: {}",
        Size::Small.label(),
        price_for(drink, Size::Small),
        Size::Regular.label(),
        price_for(drink, Size::Regular),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_drink_menu_row() {
        let body = r#"{"menu":{"cappuccino":{"display_name":"Cappuccino","prices":{"small":80,"medium":120}}}}"#;
        let rows = Menu::from_response(body).unwrap().rows();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].drink_key, "cappuccino");
        assert_eq!(rows[0].display_name, "Cappuccino");
        assert_eq!(rows[0].price_label, "Small: ₹80 | Regular: ₹120");
    }

    #[test]
    fn test_menu_keeps_server_order() {
        let body = r#"{"menu":{
            "mocha":{"display_name":"Mocha","prices":{"small":140,"medium":170,"large":200}},
            "espresso":{"display_name":"Espresso","prices":{"small":80,"medium":100}},
            "latte":{"display_name":"Latte","prices":{"small":120,"medium":150}}
        }}"#;
        let keys: Vec<String> = Menu::from_response(body)
            .unwrap()
            .rows()
            .into_iter()
            .map(|row| row.drink_key)
            .collect();
        assert_eq!(keys, vec!["mocha", "espresso", "latte"]);
    }

    #[test]
    fn test_missing_price_shows_dash() {
        let drink = MenuDrink {
            display_name: "Tea".to_string(),
            prices: BTreeMap::from([("small".to_string(), Money(40.0))]),
        };
        assert_eq!(price_label(&drink), "Small: ₹40 | Regular: -");
    }

    #[test]
    fn test_regular_reads_medium_price() {
        assert_eq!(Size::Regular.value(), "regular");
        assert_eq!(Size::Regular.price_key(), "medium");
        assert_eq!(Size::from_value("regular"), Size::Regular);
        assert_eq!(Size::from_value("large"), Size::Small);
    }
}
