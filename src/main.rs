//! Todo Sync Frontend Entry Point

mod app;
mod components;
mod context;
mod dom;
mod logging;
mod store;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;
use todo_core::TodoConfig;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match dom::config_source() {
        Some(json) => match TodoConfig::from_json(&json) {
            Ok(config) => (config, None),
            Err(e) => (TodoConfig::default(), Some(e)),
        },
        None => (TodoConfig::default(), None),
    };

    logging::init(config.level_filter().unwrap_or(LevelFilter::Info));
    if let Some(e) = config_error {
        log::warn!("{}; falling back to default config", e);
    }
    log::info!("starting with render mode {:?}", config.render_mode);

    mount_to_body(move || view! { <App config=config /> });
}
