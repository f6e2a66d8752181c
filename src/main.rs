//! Cafe Ordering Frontend Entry Point

mod api;
mod app;
mod browser;
mod components;
mod config;
mod context;
mod controllers;
mod poll;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsValue;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::error_1(&JsValue::from_str(&format!("logger init failed: {}", err)));
    }

    mount_to_body(App);
}
