//! Strava Pro Dashboard
//!
//! Training Intelligence dashboard built with Leptos (WASM).
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application compiled to WebAssembly
//! with Trunk. The `strava-pro` host serves the build output and the
//! `/theme.css` stylesheet that `tailwind.config.js` reads brand colors from.

use leptos::*;

mod app;
mod components;
mod nav;
mod pages;
mod utils;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    web_sys::console::info_1(
        &format!("Strava Pro dashboard v{}", env!("CARGO_PKG_VERSION")).into(),
    );

    mount_to_body(|| view! { <app::App /> });
}
