//! Inventory Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod debounce;
mod error;
mod form;
mod logging;
mod models;
mod paths;
mod store;
mod tree;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(config::config().log_level);
    log::info!("Starting, API base {:?}", config::config().api_base);
    mount_to_body(App);
}
