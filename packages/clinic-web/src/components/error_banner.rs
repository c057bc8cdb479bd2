//! Inline error with a retry action

use dioxus::prelude::*;

#[component]
pub fn ErrorBanner(message: String, on_retry: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "flex items-center justify-between gap-4 bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
            span { class: "text-sm", "{message}" }
            button {
                class: "px-3 py-1.5 text-sm font-medium bg-white border border-red-300 rounded-md hover:bg-red-100",
                onclick: move |_| on_retry.call(()),
                "Retry"
            }
        }
    }
}
