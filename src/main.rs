//! Wishlist Frontend Entry Point

mod models;
mod error;
mod store;
mod filter;
mod navigation;
mod confirm;
mod config;
mod logging;
mod seed;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, warning) = AppConfig::load();
    logging::init(config.level());
    if let Some(warning) = warning {
        tracing::warn!(%warning, "bundled config rejected, using defaults");
    }
    tracing::info!(level = %config.level(), "wishlist starting");

    mount_to_body(move || view! { <App config=config.clone() /> });
}
