// src/main.rs — Activity signup (Rust + Yew + WASM)
// Lists extracurricular activities from the backend, signs students up and
// removes participants.

mod actions;
mod api;
mod app;
mod components;
mod config;
mod error;
mod model;
mod status;

use app::{App, AppProps};
use config::AppConfig;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    log::info!("Activity signup starting (api base: {:?})", config.api_base);

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
