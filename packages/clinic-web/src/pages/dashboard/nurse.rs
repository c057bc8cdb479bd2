//! Nurse dashboard page

use clinic_client::Role;
use dioxus::prelude::*;

use super::{DashboardHeader, RoleGate};
use crate::components::{ActivityFeed, AppointmentQueue, StatsGrid};

/// Triage view: the nurse works the queue, so it gets the longer list.
#[component]
pub fn NurseDashboard() -> Element {
    rsx! {
        RoleGate {
            role: Role::Nurse,
            DashboardHeader { title: "Nurse Dashboard", subtitle: "Check-ins, vitals and today's queue" }
            StatsGrid {}
            div {
                class: "grid grid-cols-1 lg:grid-cols-3 gap-6",
                div {
                    class: "lg:col-span-2",
                    AppointmentQueue { limit: 10, title: "Patient Queue".to_string() }
                }
                ActivityFeed { limit: 5 }
            }
        }
    }
}
