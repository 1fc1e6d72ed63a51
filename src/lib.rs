pub mod api;
pub mod app;
pub mod commands;
pub mod components;
pub mod db;
pub mod directory;
pub mod export;
pub mod models;
pub mod recommend;
pub mod sentiment;
pub mod utils;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    crate::utils::panic_hook::init();
    leptos::mount_to_body(App);
}
