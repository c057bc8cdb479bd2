//! Role-specific sidebar navigation

use clinic_client::Role;
use dioxus::prelude::*;

use crate::nav::{items_for, NavItem};
use crate::routes::Route;

/// Sidebar listing the role's navigation entries
#[component]
pub fn Sidebar(role: Role) -> Element {
    rsx! {
        aside {
            class: "hidden md:flex md:flex-col w-64 shrink-0 bg-white border-r border-gray-200",
            div {
                class: "px-6 py-5 border-b border-gray-200",
                p { class: "text-xl font-bold text-teal-700", "Clinic" }
                p { class: "text-xs uppercase tracking-wide text-gray-500 mt-1", "{role.label()}" }
            }
            nav {
                class: "flex-1 px-3 py-4 space-y-1",
                for item in items_for(role).iter().copied() {
                    SidebarLink { key: "{item.label}", item, role }
                }
            }
        }
    }
}

#[component]
fn SidebarLink(item: NavItem, role: Role) -> Element {
    let current = use_route::<Route>();

    let Some(to) = item.target.route(role) else {
        return rsx! {
            span {
                class: "flex items-center gap-3 px-3 py-2 rounded-md text-sm font-medium text-gray-400 cursor-not-allowed",
                title: "Not available yet",
                span { "{item.icon}" }
                "{item.label}"
            }
        };
    };
    let is_active = current == to;

    rsx! {
        Link {
            to,
            class: if is_active {
                "flex items-center gap-3 px-3 py-2 rounded-md text-sm font-medium bg-teal-50 text-teal-800"
            } else {
                "flex items-center gap-3 px-3 py-2 rounded-md text-sm font-medium text-gray-600 hover:bg-gray-100 hover:text-gray-900"
            },
            span { "{item.icon}" }
            "{item.label}"
        }
    }
}
