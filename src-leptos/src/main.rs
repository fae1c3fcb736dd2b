//! Agora - Leptos web client
//!
//! Client-side rendered marketplace front-end. Every read and write goes
//! through the gateway via `agora-client`.

// Dependencies used in lib.rs submodules, acknowledged here for bin target
use agora_client as _;
use agora_types as _;
use chrono as _;
use futures as _;
use gloo_timers as _;
use js_sys as _;
use leptos_meta as _;
use leptos_router as _;
use serde as _;
use serde_json as _;
use wasm_bindgen as _;
use wasm_bindgen_futures as _;
use web_sys as _;

use agora_leptos::app::App;
use leptos::prelude::*;

fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging (ignore error if already initialized)
    drop(console_log::init_with_level(log::Level::Debug));

    log::info!("Agora web client starting...");

    mount_to_body(App);
}
