#![allow(warnings)]
//! Tarefa Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod filter;
mod logging;
mod markdown;
mod models;
mod notifications;
mod pages;
mod permissions;
mod stats;
mod store;
mod tree;

use app::App;
use config::ApiConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);

    let config = ApiConfig::load();
    log::info!("[APP] API base URL {}", config.base_url);
    commands::configure(config);

    mount_to_body(App);
}
