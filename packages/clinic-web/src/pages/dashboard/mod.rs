//! Role dashboards

mod admin;
mod doctor;
mod nurse;
mod pharmacist;

pub use admin::*;
pub use doctor::*;
pub use nurse::*;
pub use pharmacist::*;

use clinic_client::Role;
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::components::LoadingSpinner;
use crate::nav::dashboard_for;

/// `/`: send the user to their own dashboard
#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    use_effect(move || {
        if let Some(role) = auth.role() {
            navigator.replace(dashboard_for(role));
        }
    });

    rsx! {
        div { class: "py-24", LoadingSpinner {} }
    }
}

/// Renders `children` only for `role`; anyone else is sent to their own dashboard.
#[component]
fn RoleGate(role: Role, children: Element) -> Element {
    let auth = use_auth();
    let navigator = use_navigator();
    let current = auth.role();

    use_effect(move || {
        if let Some(actual) = auth.role() {
            if actual != role {
                tracing::debug!(%actual, expected = %role, "Redirecting to own dashboard");
                navigator.replace(dashboard_for(actual));
            }
        }
    });

    if current != Some(role) {
        return rsx! {};
    }
    children
}

#[component]
fn DashboardHeader(title: &'static str, subtitle: &'static str) -> Element {
    rsx! {
        div {
            class: "mb-6",
            h1 { class: "text-2xl font-bold text-gray-900", "{title}" }
            p { class: "mt-1 text-sm text-gray-600", "{subtitle}" }
        }
    }
}
