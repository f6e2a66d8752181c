//! Application Context
//!
//! Shared configuration and API client provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpApi;
use crate::config::AppConfig;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
    /// Built once; clones share the underlying reqwest client
    api: StoredValue<HttpApi>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let api = HttpApi::new(&config.api_base);
        log::debug!("[CONFIG] API client for {}", api.base_url());
        Self {
            config: StoredValue::new(config),
            api: StoredValue::new(api),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    pub fn api(&self) -> HttpApi {
        self.api.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
