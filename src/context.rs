//! Application Context
//!
//! Shared services provided via Leptos Context API.

use leptos::prelude::*;

use crate::commands::HttpApi;
use crate::config::AppConfig;

/// App-wide services provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Backend client
    pub api: StoredValue<HttpApi>,
    /// How long notices stay visible (ms)
    pub notice_ms: u32,
}

impl AppContext {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            api: StoredValue::new(HttpApi::for_page(&config.api_base)),
            notice_ms: config.notice_ms,
        }
    }

    /// Clone of the backend client for use in a spawned task
    pub fn api(&self) -> HttpApi {
        self.api.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
