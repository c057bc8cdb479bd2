//! Appointment list with status and date filters

use clinic_client::{Appointment, AppointmentQuery, AppointmentStatus};
use dioxus::prelude::*;

use crate::components::{ErrorBanner, LoadingDots, Pager, SkeletonRows};
use crate::display::{format_date, format_time, status_badge};
use crate::hooks::use_appointments;

#[component]
pub fn Appointments() -> Element {
    let mut query = use_signal(AppointmentQuery::default);
    let appointments = use_appointments(query.into());

    let selected_status = query.read().status.map(|s| s.as_str()).unwrap_or_default();
    let selected_date = query.read().date.clone().unwrap_or_default();

    rsx! {
        div {
            div {
                class: "flex items-center justify-between mb-6",
                h1 { class: "text-2xl font-bold text-gray-900", "Appointments" }
                if appointments.loading() && appointments.data().is_some() {
                    LoadingDots {}
                }
            }

            // Filters
            div {
                class: "flex flex-wrap gap-3 mb-4",
                select {
                    class: "px-3 py-2 border border-gray-300 rounded-md bg-white text-sm focus:outline-none focus:ring-2 focus:ring-teal-500",
                    value: "{selected_status}",
                    onchange: move |e| {
                        let status = AppointmentStatus::parse(&e.value());
                        query.with_mut(|q| {
                            q.status = status;
                            q.page = 1;
                        });
                    },
                    option { value: "", "All statuses" }
                    for status in AppointmentStatus::FILTERABLE {
                        option { value: status.as_str(), "{status.label()}" }
                    }
                }
                input {
                    r#type: "date",
                    class: "px-3 py-2 border border-gray-300 rounded-md text-sm focus:outline-none focus:ring-2 focus:ring-teal-500",
                    value: "{selected_date}",
                    onchange: move |e| {
                        let date = e.value();
                        query.with_mut(|q| {
                            q.date = (!date.is_empty()).then_some(date);
                            q.page = 1;
                        });
                    }
                }
                if query.read().status.is_some() || query.read().date.is_some() {
                    button {
                        class: "px-3 py-2 text-sm text-gray-600 hover:text-gray-900",
                        onclick: move |_| query.set(AppointmentQuery::default()),
                        "Clear filters"
                    }
                }
            }

            if let Some(message) = appointments.error() {
                ErrorBanner { message, on_retry: move |_| appointments.refetch() }
            } else {
                match appointments.data() {
                    Some(page) if page.items.is_empty() => rsx! {
                        div {
                            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-12 text-center",
                            p { class: "text-gray-500", "No appointments match these filters." }
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
                                        th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Date" }
                                        th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Time" }
                                        th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Patient" }
                                        th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Doctor" }
                                        th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Type" }
                                        th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase", "Status" }
                                    }
                                }
                                tbody {
                                    class: "bg-white divide-y divide-gray-200",
                                    for appointment in page.items.iter() {
                                        AppointmentRow { key: "{appointment.id}", appointment: appointment.clone() }
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
fn AppointmentRow(appointment: Appointment) -> Element {
    let badge = status_badge(appointment.status);
    let date = format_date(&appointment.appointment_date);
    let time = format_time(&appointment.appointment_time);
    let doctor = appointment.doctor_name.clone().unwrap_or_default();

    rsx! {
        tr {
            class: "hover:bg-gray-50",
            td { class: "px-6 py-4 text-sm text-gray-700", "{date}" }
            td { class: "px-6 py-4 text-sm text-gray-700", "{time}" }
            td {
                class: "px-6 py-4",
                p { class: "text-sm font-medium text-gray-900", "{appointment.patient_name}" }
                p { class: "text-xs text-gray-500", "{appointment.patient_number}" }
            }
            td { class: "px-6 py-4 text-sm text-gray-500", "{doctor}" }
            td { class: "px-6 py-4 text-sm text-gray-500", "{appointment.appointment_type}" }
            td {
                class: "px-6 py-4",
                span {
                    class: "px-2 py-1 rounded text-xs font-medium {badge}",
                    "{appointment.status.label()}"
                }
            }
        }
    }
}
