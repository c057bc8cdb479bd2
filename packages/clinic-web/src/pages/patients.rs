//! Patient directory

use clinic_client::{Patient, PatientQuery};
use dioxus::prelude::*;

use crate::components::{ErrorBanner, LoadingDots, Pager, SkeletonRows};
use crate::display::format_date;
use crate::hooks::use_patients;

#[component]
pub fn Patients() -> Element {
    let mut query = use_signal(PatientQuery::default);
    let mut search = use_signal(String::new);
    let patients = use_patients(query.into());

    let handle_search = move |_| {
        let term = search().trim().to_string();
        query.set(PatientQuery {
            search: (!term.is_empty()).then_some(term),
            page: 1,
            ..query()
        });
    };

    rsx! {
        div {
            div {
                class: "flex items-center justify-between mb-6",
                h1 { class: "text-2xl font-bold text-gray-900", "Patients" }
                if patients.loading() && patients.data().is_some() {
                    LoadingDots {}
                }
            }

            form {
                class: "flex gap-2 mb-4",
                onsubmit: handle_search,
                input {
                    r#type: "search",
                    value: "{search}",
                    oninput: move |e| search.set(e.value()),
                    placeholder: "Search by name, number or phone",
                    class: "flex-1 px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-teal-500"
                }
                button {
                    r#type: "submit",
                    class: "px-4 py-2 bg-teal-700 text-white rounded-md hover:bg-teal-800",
                    "Search"
                }
            }

            if let Some(message) = patients.error() {
                ErrorBanner { message, on_retry: move |_| patients.refetch() }
            } else {
                match patients.data() {
                    Some(page) if page.items.is_empty() => rsx! {
                        div {
                            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-12 text-center",
                            p { class: "text-gray-500", "No patients found." }
                        }
                    },
                    Some(page) => rsx! {
                        div {
                            class: "bg-white rounded-lg shadow-sm border border-gray-200 overflow-hidden",
                            table {
                                class: "min-w-full divide-y divide-gray-200",
                                thead {
                                    class: "bg-gray-50",
                                    tr {
                                        th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Patient No." }
                                        th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Name" }
                                        th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Gender" }
                                        th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Date of Birth" }
                                        th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Phone" }
                                    }
                                }
                                tbody {
                                    class: "bg-white divide-y divide-gray-200",
                                    for patient in page.items.iter() {
                                        PatientRow { key: "{patient.id}", patient: patient.clone() }
                                    }
                                }
                            }
                            Pager {
                                page: page.page,
                                total_pages: page.total_pages(),
                                total: page.total,
                                on_change: move |next: u32| query.with_mut(|q| q.page = next),
                            }
                        }
                    },
                    None => rsx! {
                        div {
                            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
                            SkeletonRows { rows: 6 }
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn PatientRow(patient: Patient) -> Element {
    let dob = patient
        .date_of_birth
        .as_deref()
        .map(format_date)
        .unwrap_or_default();

    rsx! {
        tr {
            class: "hover:bg-gray-50",
            td { class: "px-6 py-4 text-sm font-mono text-gray-600", "{patient.patient_number}" }
            td { class: "px-6 py-4 text-sm font-medium text-gray-900", "{patient.full_name()}" }
            td { class: "px-6 py-4 text-sm text-gray-500", "{patient.gender.clone().unwrap_or_default()}" }
            td { class: "px-6 py-4 text-sm text-gray-500", "{dob}" }
            td { class: "px-6 py-4 text-sm text-gray-500", "{patient.phone.clone().unwrap_or_default()}" }
        }
    }
}
