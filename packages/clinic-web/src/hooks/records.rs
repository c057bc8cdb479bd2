//! Hooks backing the patient and appointment tables

use clinic_client::{Appointment, AppointmentQuery, FailureMessages, Page, Patient, PatientQuery};
use dioxus::prelude::*;

use super::{use_remote_resource, RemoteResourceHandle};
use crate::auth::use_auth;

pub type PatientsResource = RemoteResourceHandle<PatientQuery, Page<Patient>>;
pub type AppointmentsResource = RemoteResourceHandle<AppointmentQuery, Page<Appointment>>;

/// One page of patients matching `query`.
pub fn use_patients(query: ReadOnlySignal<PatientQuery>) -> PatientsResource {
    let auth = use_auth();

    use_remote_resource(
        move || Some(query()),
        || FailureMessages::for_resource("patients"),
        move |query: PatientQuery| {
            let client = auth.client();
            async move { client.patients(&query).await }
        },
    )
}

/// One page of appointments matching `query`.
pub fn use_appointments(query: ReadOnlySignal<AppointmentQuery>) -> AppointmentsResource {
    let auth = use_auth();

    use_remote_resource(
        move || Some(query()),
        || FailureMessages::for_resource("appointments"),
        move |query: AppointmentQuery| {
            let client = auth.client();
            async move { client.appointments(&query).await }
        },
    )
}
