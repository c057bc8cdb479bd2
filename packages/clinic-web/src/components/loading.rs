//! Loading components

use dioxus::prelude::*;

/// Bouncing-dot spinner with a caption
#[component]
pub fn LoadingSpinner(#[props(default = "Loading...")] label: &'static str) -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center",
            div {
                class: "flex space-x-2",
                div { class: "w-3 h-3 bg-teal-500 rounded-full animate-bounce" }
                div { class: "w-3 h-3 bg-teal-500 rounded-full animate-bounce", style: "animation-delay: 0.1s" }
                div { class: "w-3 h-3 bg-teal-500 rounded-full animate-bounce", style: "animation-delay: 0.2s" }
            }
            p { class: "mt-4 text-sm text-gray-500", "{label}" }
        }
    }
}

/// Inline loading indicator, shown next to a header while a refetch runs
#[component]
pub fn LoadingDots() -> Element {
    rsx! {
        div {
            class: "inline-flex space-x-1",
            div { class: "w-2 h-2 bg-gray-400 rounded-full animate-bounce" }
            div { class: "w-2 h-2 bg-gray-400 rounded-full animate-bounce", style: "animation-delay: 0.1s" }
            div { class: "w-2 h-2 bg-gray-400 rounded-full animate-bounce", style: "animation-delay: 0.2s" }
        }
    }
}

/// Grey placeholder rows while a list loads
#[component]
pub fn SkeletonRows(rows: usize) -> Element {
    rsx! {
        div {
            class: "space-y-3",
            for i in 0..rows {
                div { key: "{i}", class: "h-12 bg-gray-100 rounded animate-pulse" }
            }
        }
    }
}
