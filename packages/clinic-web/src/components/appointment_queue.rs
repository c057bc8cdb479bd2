//! Today's appointment queue

use clinic_client::UpcomingAppointment;
use dioxus::prelude::*;

use super::{ErrorBanner, LoadingDots, SkeletonRows};
use crate::display::{format_time, status_badge};
use crate::hooks::use_upcoming_appointments;
use crate::routes::Route;

#[component]
pub fn AppointmentQueue(
    limit: u32,
    #[props(default = "Upcoming Appointments".to_string())] title: String,
) -> Element {
    let queue = use_upcoming_appointments(limit);

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
            div {
                class: "flex items-center justify-between mb-4",
                h2 { class: "text-lg font-semibold text-gray-900", "{title}" }
                div {
                    class: "flex items-center gap-3",
                    if queue.loading() && queue.data().is_some() {
                        LoadingDots {}
                    }
                    Link {
                        to: Route::Appointments {},
                        class: "text-sm text-teal-700 hover:text-teal-800 font-medium",
                        "View all"
                    }
                }
            }

            if let Some(message) = queue.error() {
                ErrorBanner { message, on_retry: move |_| queue.refetch() }
            } else {
                match queue.data() {
                    Some(items) if items.is_empty() => rsx! {
                        p { class: "text-sm text-gray-500 py-6 text-center", "No appointments waiting." }
                    },
                    Some(items) => rsx! {
                        ul {
                            class: "divide-y divide-gray-100",
                            for appointment in items {
                                QueueRow { key: "{appointment.id}", appointment }
                            }
                        }
                    },
                    None => rsx! { SkeletonRows { rows: 4 } },
                }
            }
        }
    }
}

#[component]
fn QueueRow(appointment: UpcomingAppointment) -> Element {
    let badge = status_badge(appointment.status);
    let time = format_time(&appointment.appointment_time);
    let queue_label = appointment
        .queue_number
        .map(|n| format!("#{n}"))
        .unwrap_or_else(|| "\u{2014}".to_string());

    rsx! {
        li {
            class: "flex items-center gap-4 py-3",
            span { class: "w-10 text-sm font-semibold text-gray-500", "{queue_label}" }
            div {
                class: "flex-1 min-w-0",
                p { class: "text-sm font-medium text-gray-900", "{appointment.patient_name}" }
                p {
                    class: "text-xs text-gray-500 truncate",
                    "{appointment.patient_number}"
                    if let Some(complaint) = &appointment.chief_complaint {
                        " \u{00B7} {complaint}"
                    }
                }
            }
            div {
                class: "text-right",
                p { class: "text-sm text-gray-700", "{time}" }
                span {
                    class: "px-2 py-0.5 rounded text-xs font-medium {badge}",
                    "{appointment.status.label()}"
                }
            }
        }
    }
}
