//! Dashboard statistics cards

use dioxus::prelude::*;

use super::ErrorBanner;
use crate::display::{accent, stat_cards, StatCardSpec};
use crate::hooks::use_dashboard_stats;

/// Statistics grid for the signed-in role.
#[component]
pub fn StatsGrid() -> Element {
    let stats = use_dashboard_stats();

    if let Some(message) = stats.error() {
        return rsx! {
            ErrorBanner { message, on_retry: move |_| stats.refetch() }
        };
    }

    rsx! {
        div {
            class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8",
            match stats.data() {
                Some(data) => rsx! {
                    for spec in stat_cards(&data) {
                        StatCard { key: "{spec.title}", spec }
                    }
                },
                None => rsx! {
                    for i in 0..4 {
                        div { key: "{i}", class: "h-28 bg-white rounded-lg border border-gray-200 animate-pulse" }
                    }
                },
            }
        }
    }
}

#[component]
pub fn StatCard(spec: StatCardSpec) -> Element {
    let colors = accent(spec.color);

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
            div {
                class: "flex items-center justify-between",
                div {
                    p { class: "text-sm text-gray-500", "{spec.title}" }
                    p { class: "text-3xl font-bold text-gray-900 mt-1", "{spec.value}" }
                }
                div {
                    class: "w-12 h-12 rounded-full {colors.bg} {colors.text} flex items-center justify-center text-2xl",
                    "{spec.icon}"
                }
            }
        }
    }
}
