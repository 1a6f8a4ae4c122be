mod app;
mod components;
mod config;
mod containers;
mod models;
mod pages;
mod routes;
mod services;
mod storage;


use app::App;
use yew::Renderer;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("Logger already initialised: {err}").into());
    }

    log::info!("Starting Wayfarer");

    // Mounts onto <body>
    Renderer::<App>::new().render();
}
