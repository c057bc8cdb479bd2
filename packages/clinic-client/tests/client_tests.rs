//! ClinicClient against an in-process API.
//!
//! Each test mounts a small axum router on an ephemeral port and points a real
//! client at it, so the envelope handling and error mapping run end to end.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use clinic_client::{
    ApiError, AppointmentQuery, AppointmentStatus, ClinicClient, FailureMessages, KeyChange,
    PatientQuery, RemoteResource, Role, RoleStats,
};
use serde_json::{json, Value};

// ============================================================================
// Test Helpers
// ============================================================================

async fn spawn_api(router: Router) -> ClinicClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Test API crashed");
    });
    ClinicClient::new(format!("http://{addr}/api/"))
}

fn stats_router() -> Router {
    Router::new().route(
        "/api/dashboard/:role",
        get(|Path(role): Path<String>| async move {
            match role.as_str() {
                "admin" => (
                    StatusCode::OK,
                    Json(json!({
                        "success": true,
                        "data": { "total_patients": 42, "today_appointments": 9 }
                    })),
                ),
                "nurse" => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "DB down" })),
                ),
                "doctor" => (
                    StatusCode::OK,
                    Json(json!({ "success": false, "message": "doctor profile incomplete" })),
                ),
                _ => (StatusCode::BAD_GATEWAY, Json(json!({}))),
            }
        }),
    )
}

// ============================================================================
// Dashboard statistics
// ============================================================================

#[tokio::test]
async fn admin_stats_are_decoded() {
    let client = spawn_api(stats_router()).await;

    let stats = client.dashboard_stats(Role::Admin).await.unwrap();
    match stats {
        RoleStats::Admin(s) => {
            assert_eq!(s.total_patients, 42);
            assert_eq!(s.today_appointments, 9);
            assert_eq!(s.total_doctors, 0);
        }
        other => panic!("expected admin stats, got {other:?}"),
    }
}

#[tokio::test]
async fn server_error_message_is_kept() {
    let client = spawn_api(stats_router()).await;

    let err = client.dashboard_stats(Role::Nurse).await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Http {
            status: 500,
            message: Some("DB down".to_string())
        }
    );
    let messages = FailureMessages::for_resource("dashboard stats");
    assert_eq!(err.display_message(&messages), "DB down");
}

#[tokio::test]
async fn success_false_is_a_rejection() {
    let client = spawn_api(stats_router()).await;

    let err = client.dashboard_stats(Role::Doctor).await.unwrap_err();
    assert!(matches!(err, ApiError::Rejected { .. }));
    let messages = FailureMessages::for_resource("dashboard stats");
    assert_eq!(err.display_message(&messages), "Failed to fetch dashboard stats");
}

#[tokio::test]
async fn error_without_message_falls_back() {
    let client = spawn_api(stats_router()).await;

    let err = client.dashboard_stats(Role::Pharmacist).await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Http {
            status: 502,
            message: None
        }
    );
    let messages = FailureMessages::for_resource("dashboard stats");
    assert_eq!(
        err.display_message(&messages),
        "An error occurred while fetching dashboard stats"
    );
}

#[tokio::test]
async fn non_json_error_body_falls_back() {
    let router = Router::new().route(
        "/api/dashboard/:role",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "upstream timeout") }),
    );
    let client = spawn_api(router).await;

    let err = client.dashboard_stats(Role::Admin).await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Http {
            status: 503,
            message: None
        }
    );
}

#[tokio::test]
async fn malformed_payload_is_a_parse_error() {
    let router = Router::new().route(
        "/api/dashboard/:role",
        get(|| async { Json(json!({ "success": true, "data": { "total_patients": "lots" } })) }),
    );
    let client = spawn_api(router).await;

    let err = client.dashboard_stats(Role::Admin).await.unwrap_err();
    assert!(matches!(err, ApiError::Parse(_)), "got {err:?}");
}

#[tokio::test]
async fn success_with_null_data_is_a_parse_error() {
    let router = Router::new().route(
        "/api/dashboard/activities",
        get(|| async { Json(json!({ "success": true, "data": null })) }),
    );
    let client = spawn_api(router).await;

    let err = client.recent_activities(5).await.unwrap_err();
    assert!(matches!(err, ApiError::Parse(_)), "got {err:?}");
    let messages = FailureMessages::for_resource("recent activities");
    assert_eq!(
        err.display_message(&messages),
        "An error occurred while fetching recent activities"
    );
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ClinicClient::new(format!("http://{addr}"));
    let err = client.dashboard_stats(Role::Admin).await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)), "got {err:?}");
}

// ============================================================================
// Activities and appointment queue
// ============================================================================

#[tokio::test]
async fn empty_activity_list_with_limit() {
    let router = Router::new().route(
        "/api/dashboard/activities",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            assert_eq!(params.get("limit").map(String::as_str), Some("5"));
            Json(json!({ "success": true, "data": [] }))
        }),
    );
    let client = spawn_api(router).await;

    let activities = client.recent_activities(5).await.unwrap();
    assert!(activities.is_empty());
}

#[tokio::test]
async fn upcoming_appointments_are_decoded() {
    let router = Router::new().route(
        "/api/dashboard/appointments",
        get(|| async {
            Json(json!({
                "success": true,
                "data": [{
                    "id": 1,
                    "patient_name": "Kofi Boateng",
                    "patient_number": "P-0001",
                    "appointment_time": "2026-10-16T09:00:00Z",
                    "type": "follow_up",
                    "status": "checked_in",
                    "queue_number": 2,
                    "chief_complaint": "Persistent cough"
                }]
            }))
        }),
    );
    let client = spawn_api(router).await;

    let queue = client.upcoming_appointments(5).await.unwrap();
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].status, AppointmentStatus::CheckedIn);
    assert_eq!(queue[0].queue_number, Some(2));
    assert_eq!(queue[0].appointment_type, "follow_up");
}

// ============================================================================
// Management tables
// ============================================================================

#[tokio::test]
async fn patient_query_is_sent_as_query_string() {
    let router = Router::new().route(
        "/api/patients",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            assert_eq!(params.get("search").map(String::as_str), Some("mensah"));
            assert_eq!(params.get("page").map(String::as_str), Some("2"));
            Json(json!({
                "success": true,
                "data": {
                    "items": [{
                        "id": 11,
                        "patient_number": "P-0011",
                        "first_name": "Ama",
                        "last_name": "Mensah"
                    }],
                    "total": 11,
                    "page": 2,
                    "per_page": 10
                }
            }))
        }),
    );
    let client = spawn_api(router).await;

    let page = client
        .patients(&PatientQuery {
            search: Some("mensah".to_string()),
            page: 2,
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(page.items[0].full_name(), "Ama Mensah");
    assert_eq!(page.total_pages(), 2);
    assert!(!page.has_next());
}

#[tokio::test]
async fn appointment_filters_are_optional() {
    let router = Router::new().route(
        "/api/appointments",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            assert!(!params.contains_key("status"));
            assert_eq!(params.get("date").map(String::as_str), Some("2026-10-16"));
            Json(json!({
                "success": true,
                "data": { "items": [], "total": 0, "page": 1, "per_page": 10 }
            }))
        }),
    );
    let client = spawn_api(router).await;

    let page = client
        .appointments(&AppointmentQuery {
            date: Some("2026-10-16".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(page.items.is_empty());
}

// ============================================================================
// Auth
// ============================================================================

#[tokio::test]
async fn bearer_token_is_attached() {
    let router = Router::new().route(
        "/api/dashboard/activities",
        get(|headers: HeaderMap| async move {
            let auth = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            if auth == "Bearer secret-token" {
                (StatusCode::OK, Json(json!({ "success": true, "data": [] })))
            } else {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "message": "Unauthenticated." })),
                )
            }
        }),
    );
    let client = spawn_api(router).await;

    let err = client.recent_activities(5).await.unwrap_err();
    let messages = FailureMessages::for_resource("recent activities");
    assert_eq!(err.display_message(&messages), "Unauthenticated.");

    let authed = client.with_token("secret-token");
    assert!(authed.recent_activities(5).await.unwrap().is_empty());
}

#[tokio::test]
async fn login_returns_token_and_user() {
    let router = Router::new().route(
        "/api/auth/login",
        post(|Json(body): Json<Value>| async move {
            if body["password"] == "correct horse" {
                (
                    StatusCode::OK,
                    Json(json!({
                        "success": true,
                        "data": {
                            "token": "abc.def.ghi",
                            "user": { "id": 3, "name": "Dr. Owusu", "email": body["email"], "role": "doctor" }
                        }
                    })),
                )
            } else {
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({ "message": "Invalid credentials" })),
                )
            }
        }),
    );
    let client = spawn_api(router).await;

    let login = client
        .login("owusu@clinic.test", "correct horse")
        .await
        .unwrap();
    assert_eq!(login.token, "abc.def.ghi");
    assert_eq!(login.user.role, Role::Doctor);

    let err = client.login("owusu@clinic.test", "wrong").await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Http {
            status: 422,
            message: Some("Invalid credentials".to_string())
        }
    );
}

// ============================================================================
// Resource state driven by the real client
// ============================================================================

#[tokio::test]
async fn resource_tracks_one_request_per_distinct_key() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let router = Router::new().route(
        "/api/dashboard/activities",
        get(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Json(json!({ "success": true, "data": [] }))
            }
        }),
    );
    let client = spawn_api(router).await;
    let mut resource = RemoteResource::new(FailureMessages::for_resource("recent activities"));

    for limit in [5u32, 5, 10, 10, 5] {
        if let KeyChange::Fetch(limit) = resource.observe_key(Some(limit)) {
            let attempt = resource.begin();
            let outcome = client.recent_activities(limit).await;
            resource.settle(attempt, outcome);
        }
    }

    assert_eq!(hits.load(Ordering::SeqCst), 3);
    assert_eq!(resource.attempts_issued(), 3);
    assert_eq!(resource.data(), Some(&Vec::new()));
    assert!(!resource.loading());
    assert_eq!(resource.error(), None);
}

#[tokio::test]
async fn resource_surfaces_server_message() {
    let client = spawn_api(stats_router()).await;
    let mut resource = RemoteResource::new(FailureMessages::for_resource("dashboard stats"));

    let KeyChange::Fetch(role) = resource.observe_key(Some(Role::Nurse)) else {
        panic!("first key must fetch");
    };
    let attempt = resource.begin();
    let outcome = client.dashboard_stats(role).await;
    resource.settle(attempt, outcome);

    assert_eq!(resource.error(), Some("DB down"));
    assert_eq!(resource.data(), None);
    assert!(!resource.loading());
}
