use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "min-h-screen bg-gray-100 flex items-center justify-center px-4",
            div {
                class: "text-center",
                h1 { class: "text-4xl font-bold text-gray-900 mb-2", "404" }
                p { class: "text-gray-600 mb-6", "No page at /{path}" }
                Link {
                    to: Route::Home {},
                    class: "text-teal-700 hover:text-teal-800 font-medium",
                    "Back to dashboard"
                }
            }
        }
    }
}
