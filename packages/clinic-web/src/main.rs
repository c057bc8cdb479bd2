//! Clinic Dashboard - Dioxus Web Application
//!
//! Role-specific dashboards (admin, doctor, nurse, pharmacist) plus patient
//! and appointment tables, all backed by the clinic REST API.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! CLINIC_API_URL=http://localhost:8000/api dx serve --features web
//! ```
//!
//! Production build:
//! ```bash
//! CLINIC_API_URL=https://clinic.example.org/api dx build --release --features web
//! ```

#![allow(non_snake_case)]

mod app;
mod auth;
mod components;
mod config;
mod display;
mod hooks;
mod nav;
mod pages;
mod routes;

fn main() {
    // Initialize logging
    init_logging();

    match config::AppConfig::load() {
        Ok(loaded) => config::init(loaded),
        Err(e) => tracing::error!("Invalid configuration, using defaults: {e:#}"),
    }
    tracing::info!(api = %config::get().api.base_url, "Starting clinic dashboard");

    dioxus::launch(app::App);
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,clinic_web=debug,clinic_client=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(target_arch = "wasm32")]
fn init_logging() {
    // The fmt subscriber needs a system clock, which the browser target lacks.
    let _ = dioxus::logger::init(tracing::Level::DEBUG);
}
