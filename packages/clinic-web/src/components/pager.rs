//! Table pagination footer

use dioxus::prelude::*;

#[component]
pub fn Pager(page: u32, total_pages: u32, total: u64, on_change: EventHandler<u32>) -> Element {
    let has_previous = page > 1;
    let has_next = page < total_pages;

    rsx! {
        div {
            class: "flex items-center justify-between px-6 py-3 border-t border-gray-200 text-sm text-gray-600",
            span { "{total} total" }
            div {
                class: "flex items-center gap-2",
                button {
                    class: "px-3 py-1 rounded border border-gray-300 disabled:opacity-50 disabled:cursor-not-allowed hover:bg-gray-50",
                    disabled: !has_previous,
                    onclick: move |_| on_change.call(page.saturating_sub(1).max(1)),
                    "Previous"
                }
                span { "Page {page} of {total_pages.max(1)}" }
                button {
                    class: "px-3 py-1 rounded border border-gray-300 disabled:opacity-50 disabled:cursor-not-allowed hover:bg-gray-50",
                    disabled: !has_next,
                    onclick: move |_| on_change.call(page + 1),
                    "Next"
                }
            }
        }
    }
}
