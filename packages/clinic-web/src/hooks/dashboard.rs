//! Dashboard data hooks

use clinic_client::{Activity, FailureMessages, Role, RoleStats, UpcomingAppointment};
use dioxus::prelude::*;

use super::{use_remote_resource, RemoteResourceHandle};
use crate::auth::use_auth;

pub type StatsResource = RemoteResourceHandle<Role, RoleStats>;
pub type ActivitiesResource = RemoteResourceHandle<u32, Vec<Activity>>;
pub type UpcomingResource = RemoteResourceHandle<u32, Vec<UpcomingAppointment>>;

/// Statistics for the signed-in user's role. Refetches when the role changes.
pub fn use_dashboard_stats() -> StatsResource {
    let auth = use_auth();

    use_remote_resource(
        move || auth.role(),
        || FailureMessages::for_resource("dashboard stats").with_missing_key("User role not found"),
        move |role: Role| {
            let client = auth.client();
            async move { client.dashboard_stats(role).await }
        },
    )
}

/// The `limit` most recent activities. A new `limit` triggers a refetch.
pub fn use_recent_activities(limit: u32) -> ActivitiesResource {
    let auth = use_auth();

    use_remote_resource(
        use_reactive!(|(limit,)| Some(limit)),
        || FailureMessages::for_resource("recent activities"),
        move |limit: u32| {
            let client = auth.client();
            async move { client.recent_activities(limit).await }
        },
    )
}

/// The next `limit` appointments in today's queue.
pub fn use_upcoming_appointments(limit: u32) -> UpcomingResource {
    let auth = use_auth();

    use_remote_resource(
        use_reactive!(|(limit,)| Some(limit)),
        || FailureMessages::for_resource("upcoming appointments"),
        move |limit: u32| {
            let client = auth.client();
            async move { client.upcoming_appointments(limit).await }
        },
    )
}
