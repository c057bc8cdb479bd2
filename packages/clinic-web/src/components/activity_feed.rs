//! Recent activity panel

use clinic_client::Activity;
use dioxus::prelude::*;

use super::{ErrorBanner, LoadingDots, SkeletonRows};
use crate::display::{accent, activity_icon};
use crate::hooks::use_recent_activities;

#[component]
pub fn ActivityFeed(limit: u32) -> Element {
    let activities = use_recent_activities(limit);

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
            div {
                class: "flex items-center justify-between mb-4",
                h2 { class: "text-lg font-semibold text-gray-900", "Recent Activity" }
                if activities.loading() && activities.data().is_some() {
                    LoadingDots {}
                }
            }

            if let Some(message) = activities.error() {
                ErrorBanner { message, on_retry: move |_| activities.refetch() }
            } else {
                match activities.data() {
                    Some(items) if items.is_empty() => rsx! {
                        p { class: "text-sm text-gray-500 py-6 text-center", "No recent activity." }
                    },
                    Some(items) => rsx! {
                        ul {
                            class: "divide-y divide-gray-100",
                            for activity in items {
                                ActivityRow { key: "{activity.id}", activity }
                            }
                        }
                    },
                    None => rsx! { SkeletonRows { rows: 3 } },
                }
            }
        }
    }
}

#[component]
fn ActivityRow(activity: Activity) -> Element {
    let colors = accent(&activity.color);
    let icon = activity_icon(&activity.icon);

    rsx! {
        li {
            class: "flex items-start gap-3 py-3",
            div {
                class: "w-9 h-9 shrink-0 rounded-full {colors.bg} {colors.text} flex items-center justify-center",
                "{icon}"
            }
            div {
                class: "flex-1 min-w-0",
                p { class: "text-sm font-medium text-gray-900", "{activity.title}" }
                if !activity.description.is_empty() {
                    p { class: "text-sm text-gray-500 truncate", "{activity.description}" }
                }
            }
            span { class: "text-xs text-gray-400 whitespace-nowrap", "{activity.time}" }
        }
    }
}
