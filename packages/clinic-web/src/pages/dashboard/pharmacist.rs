//! Pharmacist dashboard page

use clinic_client::Role;
use dioxus::prelude::*;

use super::{DashboardHeader, RoleGate};
use crate::components::{ActivityFeed, StatsGrid};

#[component]
pub fn PharmacistDashboard() -> Element {
    rsx! {
        RoleGate {
            role: Role::Pharmacist,
            DashboardHeader { title: "Pharmacist Dashboard", subtitle: "Prescriptions and stock levels" }
            StatsGrid {}
            ActivityFeed { limit: 5 }
        }
    }
}
