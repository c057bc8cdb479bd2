//! Sidebar navigation, one static list per role.

use clinic_client::Role;

use crate::routes::Route;

/// Where a sidebar entry leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Dashboard,
    Patients,
    Appointments,
    Staff,
    Reports,
    Settings,
    Prescriptions,
    Inventory,
    Dispensing,
    Vitals,
}

impl NavTarget {
    /// Route for this entry, or `None` if the page does not exist yet.
    pub fn route(self, role: Role) -> Option<Route> {
        match self {
            NavTarget::Dashboard => Some(dashboard_for(role)),
            NavTarget::Patients => Some(Route::Patients {}),
            NavTarget::Appointments => Some(Route::Appointments {}),
            NavTarget::Staff
            | NavTarget::Reports
            | NavTarget::Settings
            | NavTarget::Prescriptions
            | NavTarget::Inventory
            | NavTarget::Dispensing
            | NavTarget::Vitals => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub icon: &'static str,
    pub target: NavTarget,
}

const fn item(label: &'static str, icon: &'static str, target: NavTarget) -> NavItem {
    NavItem {
        label,
        icon,
        target,
    }
}

pub const ADMIN_NAV: &[NavItem] = &[
    item("Dashboard", "\u{1F3E0}", NavTarget::Dashboard),       // 🏠
    item("Patients", "\u{1F465}", NavTarget::Patients),         // 👥
    item("Appointments", "\u{1F4C5}", NavTarget::Appointments), // 📅
    item("Staff", "\u{1FA7A}", NavTarget::Staff),               // 🩺
    item("Reports", "\u{1F4CA}", NavTarget::Reports),           // 📊
    item("Settings", "\u{2699}\u{FE0F}", NavTarget::Settings),  // ⚙️
];

pub const DOCTOR_NAV: &[NavItem] = &[
    item("Dashboard", "\u{1F3E0}", NavTarget::Dashboard),
    item("My Appointments", "\u{1F4C5}", NavTarget::Appointments),
    item("Patients", "\u{1F465}", NavTarget::Patients),
    item("Prescriptions", "\u{1F4DD}", NavTarget::Prescriptions), // 📝
];

pub const NURSE_NAV: &[NavItem] = &[
    item("Dashboard", "\u{1F3E0}", NavTarget::Dashboard),
    item("Patient Queue", "\u{1F4CB}", NavTarget::Appointments), // 📋
    item("Vitals", "\u{1F321}\u{FE0F}", NavTarget::Vitals),      // 🌡️
    item("Patients", "\u{1F465}", NavTarget::Patients),
];

pub const PHARMACIST_NAV: &[NavItem] = &[
    item("Dashboard", "\u{1F3E0}", NavTarget::Dashboard),
    item("Prescriptions", "\u{1F4DD}", NavTarget::Prescriptions),
    item("Inventory", "\u{1F4E6}", NavTarget::Inventory),  // 📦
    item("Dispensing", "\u{1F48A}", NavTarget::Dispensing), // 💊
];

pub fn items_for(role: Role) -> &'static [NavItem] {
    match role {
        Role::Admin => ADMIN_NAV,
        Role::Doctor => DOCTOR_NAV,
        Role::Nurse => NURSE_NAV,
        Role::Pharmacist => PHARMACIST_NAV,
    }
}

/// Landing page for a role.
pub fn dashboard_for(role: Role) -> Route {
    match role {
        Role::Admin => Route::AdminDashboard {},
        Role::Doctor => Route::DoctorDashboard {},
        Role::Nurse => Route::NurseDashboard {},
        Role::Pharmacist => Route::PharmacistDashboard {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_starts_with_its_dashboard() {
        for role in Role::ALL {
            let first = items_for(role)[0];
            assert_eq!(first.target, NavTarget::Dashboard);
            assert_eq!(first.target.route(role), Some(dashboard_for(role)));
        }
    }

    #[test]
    fn labels_are_unique_per_role() {
        for role in Role::ALL {
            let items = items_for(role);
            for (i, a) in items.iter().enumerate() {
                assert!(
                    items[i + 1..].iter().all(|b| b.label != a.label),
                    "duplicate label {:?} for {role}",
                    a.label
                );
            }
        }
    }

    #[test]
    fn dashboards_are_distinct() {
        let routes: Vec<Route> = Role::ALL.into_iter().map(dashboard_for).collect();
        for (i, a) in routes.iter().enumerate() {
            assert!(routes[i + 1..].iter().all(|b| b != a));
        }
    }

    #[test]
    fn pharmacist_has_no_patient_table() {
        assert!(PHARMACIST_NAV
            .iter()
            .all(|item| item.target != NavTarget::Patients));
    }

    #[test]
    fn unbuilt_pages_have_no_route() {
        assert_eq!(NavTarget::Inventory.route(Role::Pharmacist), None);
        assert_eq!(
            NavTarget::Appointments.route(Role::Nurse),
            Some(Route::Appointments {})
        );
    }
}
