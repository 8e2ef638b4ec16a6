//! Todos Frontend Entry Point

mod actions;
mod app;
mod components;
mod config;
mod context;
mod error;
mod filter;
mod logging;
mod models;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Debug);
    mount_to_body(App);
}
