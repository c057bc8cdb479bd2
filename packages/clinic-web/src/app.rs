//! Root application component

use dioxus::prelude::*;

use crate::auth::AuthProvider;
use crate::routes::Route;

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

#[component]
pub fn App() -> Element {
    rsx! {
        document::Title { "Clinic Dashboard" }
        document::Script { src: TAILWIND_CDN }

        // Session context must wrap the router so guards can read it
        AuthProvider {
            Router::<Route> {}
        }
    }
}
