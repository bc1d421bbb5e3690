//! Portfolio Site Frontend Entry Point

mod settings;
mod error;
mod logging;
mod models;
mod fetch;
mod storage;
mod config;
mod blog;
mod render;
mod navigation;
mod gallery;
mod mount;
mod typing;
mod dom;
mod store;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}
