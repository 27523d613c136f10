//! Kanban Board Frontend Entry Point

mod app;
mod board;
mod components;
mod context;
mod drop;
mod error;
mod filter;
mod logging;
mod models;
mod seed;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(tracing::Level::DEBUG);
    mount_to_body(App);
}
