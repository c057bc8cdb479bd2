//! Dashboard layout wrapper with auth protection

use dioxus::prelude::*;

use super::{LoadingSpinner, Sidebar};
use crate::auth::use_auth;
use crate::display::initials;
use crate::routes::Route;

/// Layout for every signed-in page: sidebar, top bar, routed content
#[component]
pub fn DashboardLayout() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    // Signed out (or never signed in): go to the login page
    use_effect(move || {
        if !*auth.loading.read() && !auth.is_authenticated() {
            navigator.replace(Route::Login {});
        }
    });

    // Still restoring the stored session
    if *auth.loading.read() {
        return rsx! {
            div {
                class: "min-h-screen flex items-center justify-center bg-gray-100",
                LoadingSpinner { label: "Restoring session..." }
            }
        };
    }

    let Some(role) = auth.role() else {
        return rsx! {
            div { class: "min-h-screen bg-gray-100" }
        };
    };

    rsx! {
        div {
            class: "min-h-screen flex bg-gray-100",
            Sidebar { role }
            div {
                class: "flex-1 flex flex-col min-w-0",
                TopBar {}
                main {
                    class: "p-6",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn TopBar() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();
    let name = auth.user_name().unwrap_or_default();
    let avatar = initials(&name);

    let handle_logout = move |_| {
        auth.sign_out();
        navigator.push(Route::Login {});
    };

    rsx! {
        header {
            class: "bg-white border-b border-gray-200 px-6 py-3 flex items-center justify-end gap-4",
            div {
                class: "flex items-center gap-2",
                div {
                    class: "w-8 h-8 rounded-full bg-teal-100 text-teal-800 flex items-center justify-center text-sm font-semibold",
                    "{avatar}"
                }
                span { class: "text-sm text-gray-700", "{name}" }
            }
            button {
                class: "text-sm text-gray-600 hover:text-gray-900 px-3 py-1.5 rounded hover:bg-gray-100",
                onclick: handle_logout,
                "Logout"
            }
        }
    }
}
