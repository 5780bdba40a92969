#![allow(warnings)]
//! Recipe Form Frontend Entry Point

mod models;
mod category;
mod form;
mod recipes;
mod commands;
mod actions;
mod config;
mod logger;
mod bootstrap;
mod context;
mod store;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    logger::init(config.log_level);

    mount_to_body(move || view! { <App config=config /> });
}
