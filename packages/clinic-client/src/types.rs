//! Wire types for the clinic REST API.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ============================================================================
// Envelope
// ============================================================================

/// Every endpoint answers `{ success, data }`, optionally with a `message`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of a failed (non-2xx) response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

// ============================================================================
// Roles
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Doctor,
    Nurse,
    Pharmacist,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Doctor, Role::Nurse, Role::Pharmacist];

    /// Path segment and wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Doctor => "doctor",
            Role::Nurse => "nurse",
            Role::Pharmacist => "pharmacist",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Doctor => "Doctor",
            Role::Nurse => "Nurse",
            Role::Pharmacist => "Pharmacist",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "doctor" => Ok(Role::Doctor),
            "nurse" => Ok(Role::Nurse),
            "pharmacist" => Ok(Role::Pharmacist),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

// ============================================================================
// Dashboard statistics
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminStats {
    pub total_patients: u64,
    pub total_doctors: u64,
    pub total_nurses: u64,
    pub total_pharmacists: u64,
    pub today_appointments: u64,
    pub pending_appointments: u64,
    pub completed_appointments: u64,
    pub total_prescriptions: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoctorStats {
    pub today_appointments: u64,
    pub waiting_patients: u64,
    pub completed_consultations: u64,
    pub pending_prescriptions: u64,
    pub total_patients: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NurseStats {
    pub patients_in_queue: u64,
    pub vitals_recorded_today: u64,
    pub pending_vitals: u64,
    pub checked_in_today: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PharmacistStats {
    pub pending_prescriptions: u64,
    pub dispensed_today: u64,
    pub low_stock_items: u64,
    pub out_of_stock_items: u64,
    pub total_medicines: u64,
}

/// Statistics for one role's dashboard. The shape is picked by the role that
/// was requested, not sniffed from the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleStats {
    Admin(AdminStats),
    Doctor(DoctorStats),
    Nurse(NurseStats),
    Pharmacist(PharmacistStats),
}

impl RoleStats {
    pub fn from_value(role: Role, value: serde_json::Value) -> serde_json::Result<Self> {
        Ok(match role {
            Role::Admin => RoleStats::Admin(serde_json::from_value(value)?),
            Role::Doctor => RoleStats::Doctor(serde_json::from_value(value)?),
            Role::Nurse => RoleStats::Nurse(serde_json::from_value(value)?),
            Role::Pharmacist => RoleStats::Pharmacist(serde_json::from_value(value)?),
        })
    }

    pub fn role(&self) -> Role {
        match self {
            RoleStats::Admin(_) => Role::Admin,
            RoleStats::Doctor(_) => Role::Doctor,
            RoleStats::Nurse(_) => Role::Nurse,
            RoleStats::Pharmacist(_) => Role::Pharmacist,
        }
    }
}

// ============================================================================
// Activity feed
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Server-formatted relative time ("5 minutes ago").
    pub time: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
}

// ============================================================================
// Appointments
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    CheckedIn,
    InProgress,
    Completed,
    Cancelled,
    NoShow,
    #[serde(other)]
    Unknown,
}

impl AppointmentStatus {
    pub const FILTERABLE: [AppointmentStatus; 6] = [
        AppointmentStatus::Scheduled,
        AppointmentStatus::CheckedIn,
        AppointmentStatus::InProgress,
        AppointmentStatus::Completed,
        AppointmentStatus::Cancelled,
        AppointmentStatus::NoShow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::CheckedIn => "checked_in",
            AppointmentStatus::InProgress => "in_progress",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::NoShow => "no_show",
            AppointmentStatus::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "Scheduled",
            AppointmentStatus::CheckedIn => "Checked In",
            AppointmentStatus::InProgress => "In Progress",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
            AppointmentStatus::NoShow => "No Show",
            AppointmentStatus::Unknown => "Unknown",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::FILTERABLE.into_iter().find(|s| s.as_str() == value)
    }
}

/// Row of the dashboard's appointment queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingAppointment {
    pub id: i64,
    pub patient_name: String,
    pub patient_number: String,
    pub appointment_time: String,
    #[serde(rename = "type")]
    pub appointment_type: String,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub queue_number: Option<u32>,
    #[serde(default)]
    pub chief_complaint: Option<String>,
}

/// Row of the appointment management table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub patient_name: String,
    pub patient_number: String,
    #[serde(default)]
    pub doctor_name: Option<String>,
    pub appointment_date: String,
    pub appointment_time: String,
    #[serde(rename = "type")]
    pub appointment_type: String,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub chief_complaint: Option<String>,
}

// ============================================================================
// Patients
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: i64,
    pub patient_number: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub blood_type: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// ============================================================================
// Pagination and list queries
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> u32 {
        if self.per_page == 0 {
            return 0;
        }
        u32::try_from(self.total.div_ceil(u64::from(self.per_page))).unwrap_or(u32::MAX)
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

pub const DEFAULT_PER_PAGE: u32 = 10;

/// Query string for `GET /patients`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatientQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub page: u32,
    pub per_page: u32,
}

impl Default for PatientQuery {
    fn default() -> Self {
        Self {
            search: None,
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Query string for `GET /appointments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppointmentQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AppointmentStatus>,
    /// `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub page: u32,
    pub per_page: u32,
}

impl Default for AppointmentQuery {
    fn default() -> Self {
        Self {
            status: None,
            date: None,
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

// ============================================================================
// Auth
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: StaffUser,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn role_round_trips_through_str() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        assert_eq!(" Nurse ".parse::<Role>().unwrap(), Role::Nurse);
        assert!("receptionist".parse::<Role>().is_err());
    }

    #[test]
    fn admin_stats_fill_missing_counters_with_zero() {
        let stats =
            RoleStats::from_value(Role::Admin, json!({ "total_patients": 42 })).unwrap();
        match stats {
            RoleStats::Admin(s) => {
                assert_eq!(s.total_patients, 42);
                assert_eq!(s.today_appointments, 0);
            }
            other => panic!("unexpected stats: {other:?}"),
        }
    }

    #[test]
    fn stats_reject_wrong_counter_type() {
        let result = RoleStats::from_value(Role::Nurse, json!({ "patients_in_queue": "many" }));
        assert!(result.is_err());
    }

    #[test]
    fn unknown_appointment_status_is_tolerated() {
        let appt: UpcomingAppointment = serde_json::from_value(json!({
            "id": 7,
            "patient_name": "Ama Mensah",
            "patient_number": "P-0007",
            "appointment_time": "09:30",
            "type": "consultation",
            "status": "rescheduled",
            "queue_number": 3,
            "chief_complaint": null
        }))
        .unwrap();
        assert_eq!(appt.status, AppointmentStatus::Unknown);
        assert_eq!(appt.queue_number, Some(3));
        assert_eq!(appt.chief_complaint, None);
    }

    #[test]
    fn envelope_without_data_parses() {
        let env: ApiEnvelope<Vec<Activity>> =
            serde_json::from_value(json!({ "success": false, "message": "nope" })).unwrap();
        assert!(!env.success);
        assert!(env.data.is_none());
        assert_eq!(env.message.as_deref(), Some("nope"));
    }

    #[test]
    fn page_navigation() {
        let page = Page::<Patient> {
            items: vec![],
            total: 21,
            page: 2,
            per_page: 10,
        };
        assert_eq!(page.total_pages(), 3);
        assert!(page.has_next());
        assert!(page.has_previous());

        let empty = Page::<Patient> {
            items: vec![],
            total: 0,
            page: 1,
            per_page: 10,
        };
        assert_eq!(empty.total_pages(), 0);
        assert!(!empty.has_next());
        assert!(!empty.has_previous());
    }

    #[test]
    fn page_count_saturates_on_huge_totals() {
        let page = Page::<Patient> {
            items: vec![],
            total: 1 << 32,
            page: 1,
            per_page: 1,
        };
        assert_eq!(page.total_pages(), u32::MAX);
        assert!(page.has_next());
    }

    #[test]
    fn appointment_query_skips_empty_filters() {
        let query = AppointmentQuery {
            status: Some(AppointmentStatus::CheckedIn),
            ..Default::default()
        };
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(
            value,
            json!({ "status": "checked_in", "page": 1, "per_page": 10 })
        );
    }
}
