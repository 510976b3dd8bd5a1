//! TagPulse Dashboard
//!
//! Hashtag sentiment insights dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Sentiment trend chart per hashtag
//! - Trend direction and min/max summary
//! - Hashtag switcher
//! - Light/dark theme persisted to local storage
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the TagPulse API over HTTP.

use leptos::*;

mod analytics;
mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
