//! Collection Manager Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controller;
mod logger;
mod models;
mod paging;
mod prefs;
mod stats;
mod store;
mod validation;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::Level::Info);
    mount_to_body(App);
}
