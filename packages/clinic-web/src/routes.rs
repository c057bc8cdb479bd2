//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::DashboardLayout;
use crate::pages::{
    AdminDashboard, Appointments, DoctorDashboard, Home, Login, NotFound, NurseDashboard,
    Patients, PharmacistDashboard,
};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},

    #[layout(DashboardLayout)]
        #[route("/")]
        Home {},

        #[route("/admin/dashboard")]
        AdminDashboard {},

        #[route("/doctor/dashboard")]
        DoctorDashboard {},

        #[route("/nurse/dashboard")]
        NurseDashboard {},

        #[route("/pharmacist/dashboard")]
        PharmacistDashboard {},

        #[route("/patients")]
        Patients {},

        #[route("/appointments")]
        Appointments {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
