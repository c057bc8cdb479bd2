//! Doctor dashboard page

use clinic_client::Role;
use dioxus::prelude::*;

use super::{DashboardHeader, RoleGate};
use crate::components::{ActivityFeed, AppointmentQueue, StatsGrid};

#[component]
pub fn DoctorDashboard() -> Element {
    rsx! {
        RoleGate {
            role: Role::Doctor,
            DashboardHeader { title: "Doctor Dashboard", subtitle: "Your consultations and patient queue" }
            StatsGrid {}
            div {
                class: "grid grid-cols-1 lg:grid-cols-3 gap-6",
                div {
                    class: "lg:col-span-2",
                    AppointmentQueue { limit: 5, title: "My Queue".to_string() }
                }
                ActivityFeed { limit: 5 }
            }
        }
    }
}
