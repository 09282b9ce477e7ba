//! Todo Widget Frontend Entry Point

mod app;
mod components;
mod config;
mod models;
mod storage;
mod store;

use app::App;
use config::WidgetConfig;
use leptos::prelude::*;
use log::LevelFilter;
use rolling_logger::RollingLogger;

fn main() {
    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    let logger = match rolling_logger::init(level, rolling_logger::DEFAULT_CAPACITY) {
        Ok(logger) => Some(logger),
        Err(err) => {
            web_sys::console::warn_1(&format!("[APP] Logger not installed: {}", err).into());
            None
        }
    };
    install_panic_hook(logger);

    let config = WidgetConfig::load();
    mount_to_body(move || view! { <App config=config /> });
}

/// Report panics to the console, followed by the records leading up to them
fn install_panic_hook(logger: Option<&'static RollingLogger>) {
    std::panic::set_hook(Box::new(move |info| {
        console_error_panic_hook::hook(info);
        if let Some(logger) = logger {
            let history = logger.dump();
            if !history.is_empty() {
                web_sys::console::error_1(&format!("[APP] Recent log:\n{}", history).into());
            }
        }
    }));
}
