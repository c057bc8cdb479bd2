//! Admin dashboard page

use clinic_client::Role;
use dioxus::prelude::*;

use super::{DashboardHeader, RoleGate};
use crate::components::{ActivityFeed, AppointmentQueue, StatsGrid};
use crate::routes::Route;

/// Admin dashboard with clinic-wide stats overview
#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        RoleGate {
            role: Role::Admin,
            DashboardHeader { title: "Admin Dashboard", subtitle: "Clinic-wide overview for today" }

            StatsGrid {}

            // Quick Actions
            div {
                class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 mb-8",
                h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Quick Actions" }
                div {
                    class: "flex flex-wrap gap-3",
                    QuickActionLink {
                        to: Route::Patients {},
                        label: "Manage Patients",
                        icon: "\u{1F465}"
                    }
                    QuickActionLink {
                        to: Route::Appointments {},
                        label: "Manage Appointments",
                        icon: "\u{1F4C5}"
                    }
                }
            }

            div {
                class: "grid grid-cols-1 lg:grid-cols-2 gap-6",
                AppointmentQueue { limit: 5 }
                ActivityFeed { limit: 5 }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct QuickActionLinkProps {
    to: Route,
    label: &'static str,
    icon: &'static str,
}

#[component]
fn QuickActionLink(props: QuickActionLinkProps) -> Element {
    rsx! {
        Link {
            to: props.to.clone(),
            class: "inline-flex items-center gap-2 px-4 py-2 bg-gray-100 hover:bg-gray-200 rounded-lg text-sm font-medium text-gray-700 transition-colors",
            span { "{props.icon}" }
            "{props.label}"
        }
    }
}
