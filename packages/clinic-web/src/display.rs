//! Presentation helpers: Tailwind classes, stat card definitions, formatting.

use chrono::{DateTime, NaiveDate, NaiveTime};
use clinic_client::{AppointmentStatus, RoleStats};

/// Background and text classes for a named accent colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accent {
    pub bg: &'static str,
    pub text: &'static str,
}

pub fn accent(color: &str) -> Accent {
    match color {
        "blue" => Accent { bg: "bg-blue-50", text: "text-blue-700" },
        "green" => Accent { bg: "bg-green-50", text: "text-green-700" },
        "amber" | "yellow" => Accent { bg: "bg-amber-50", text: "text-amber-700" },
        "red" => Accent { bg: "bg-red-50", text: "text-red-700" },
        "purple" => Accent { bg: "bg-purple-50", text: "text-purple-700" },
        "indigo" => Accent { bg: "bg-indigo-50", text: "text-indigo-700" },
        "teal" => Accent { bg: "bg-teal-50", text: "text-teal-700" },
        "orange" => Accent { bg: "bg-orange-50", text: "text-orange-700" },
        _ => Accent { bg: "bg-gray-50", text: "text-gray-700" },
    }
}

pub fn status_badge(status: AppointmentStatus) -> &'static str {
    match status {
        AppointmentStatus::Scheduled => "bg-blue-100 text-blue-700",
        AppointmentStatus::CheckedIn => "bg-amber-100 text-amber-700",
        AppointmentStatus::InProgress => "bg-indigo-100 text-indigo-700",
        AppointmentStatus::Completed => "bg-green-100 text-green-700",
        AppointmentStatus::Cancelled => "bg-red-100 text-red-700",
        AppointmentStatus::NoShow | AppointmentStatus::Unknown => "bg-gray-100 text-gray-700",
    }
}

/// Map the API's icon names to glyphs.
pub fn activity_icon(name: &str) -> &'static str {
    match name {
        "user-plus" | "user" | "patient" => "\u{1F464}",     // 👤
        "calendar" | "appointment" => "\u{1F4C5}",           // 📅
        "pill" | "prescription" | "medication" => "\u{1F48A}", // 💊
        "heart" | "vitals" | "activity" => "\u{1FA7A}",      // 🩺
        "check" | "check-circle" => "\u{2705}",              // ✅
        "alert" | "warning" => "\u{26A0}\u{FE0F}",           // ⚠️
        "file" | "file-text" | "report" => "\u{1F4C4}",      // 📄
        _ => "\u{1F514}",                                    // 🔔
    }
}

/// One card in a dashboard's statistics grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCardSpec {
    pub title: &'static str,
    pub value: u64,
    pub icon: &'static str,
    pub color: &'static str,
}

const fn card(title: &'static str, value: u64, icon: &'static str, color: &'static str) -> StatCardSpec {
    StatCardSpec {
        title,
        value,
        icon,
        color,
    }
}

pub fn stat_cards(stats: &RoleStats) -> Vec<StatCardSpec> {
    match stats {
        RoleStats::Admin(s) => vec![
            card("Total Patients", s.total_patients, "\u{1F465}", "blue"),
            card("Today's Appointments", s.today_appointments, "\u{1F4C5}", "green"),
            card("Pending Appointments", s.pending_appointments, "\u{23F3}", "amber"),
            card("Doctors", s.total_doctors, "\u{1FA7A}", "indigo"),
            card("Nurses", s.total_nurses, "\u{1F469}\u{200D}\u{2695}\u{FE0F}", "teal"),
            card("Pharmacists", s.total_pharmacists, "\u{1F48A}", "purple"),
            card("Completed Appointments", s.completed_appointments, "\u{2705}", "green"),
            card("Prescriptions", s.total_prescriptions, "\u{1F4DD}", "orange"),
        ],
        RoleStats::Doctor(s) => vec![
            card("Today's Appointments", s.today_appointments, "\u{1F4C5}", "blue"),
            card("Waiting Patients", s.waiting_patients, "\u{23F3}", "amber"),
            card("Completed Consultations", s.completed_consultations, "\u{2705}", "green"),
            card("Pending Prescriptions", s.pending_prescriptions, "\u{1F4DD}", "purple"),
            card("My Patients", s.total_patients, "\u{1F465}", "indigo"),
        ],
        RoleStats::Nurse(s) => vec![
            card("Patients in Queue", s.patients_in_queue, "\u{1F4CB}", "blue"),
            card("Checked In Today", s.checked_in_today, "\u{2705}", "green"),
            card("Vitals Recorded", s.vitals_recorded_today, "\u{1FA7A}", "teal"),
            card("Pending Vitals", s.pending_vitals, "\u{23F3}", "amber"),
        ],
        RoleStats::Pharmacist(s) => vec![
            card("Pending Prescriptions", s.pending_prescriptions, "\u{1F4DD}", "amber"),
            card("Dispensed Today", s.dispensed_today, "\u{1F48A}", "green"),
            card("Low Stock", s.low_stock_items, "\u{26A0}\u{FE0F}", "orange"),
            card("Out of Stock", s.out_of_stock_items, "\u{1F6AB}", "red"),
            card("Medicines", s.total_medicines, "\u{1F4E6}", "blue"),
        ],
    }
}

/// `2026-10-16T09:30:00Z` or `09:30:00` become `09:30`; anything else is
/// shown as sent.
pub fn format_time(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%H:%M").to_string();
    }
    for pattern in ["%H:%M:%S", "%H:%M"] {
        if let Ok(t) = NaiveTime::parse_from_str(raw, pattern) {
            return t.format("%H:%M").to_string();
        }
    }
    raw.to_string()
}

/// `2026-10-16` becomes `16 Oct 2026`.
pub fn format_date(raw: &str) -> String {
    let date_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map(|d| d.format("%d %b %Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Up to two initials for an avatar bubble.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter(|part| !part.ends_with('.'))
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}
