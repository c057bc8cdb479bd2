//! Clinic REST API client.
//!
//! A typed client for the clinic backend used by the dashboards, plus the
//! framework-agnostic state machine that turns one of its calls into a
//! `{data, loading, error}` resource.
//!
//! # Example
//!
//! ```rust,ignore
//! use clinic_client::{ClinicClient, Role};
//!
//! let client = ClinicClient::new("https://clinic.example.org/api").with_token(token);
//!
//! let stats = client.dashboard_stats(Role::Doctor).await?;
//! let queue = client.upcoming_appointments(5).await?;
//! ```
//!
//! Every endpoint answers `{ success, data }`. The client checks the envelope
//! at the boundary and returns `Result<T, ApiError>`; see [`ApiError`] for how
//! each failure is classified.

pub mod config;
pub mod error;
pub mod resource;
pub mod types;

pub use config::ClientConfig;
pub use error::{ApiError, Result};
pub use resource::{Attempt, FailureMessages, KeyChange, RemoteResource, ResourceState, Settlement};
pub use types::*;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

/// Clinic API client. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ClinicClient {
    http_client: Client,
    base_url: String,
    token: Option<String>,
}

impl ClinicClient {
    /// Create a client for the API rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::from_config(&ClientConfig::new(base_url))
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            http_client: Client::new(),
            base_url: config.base_url.clone(),
            token: None,
        }
    }

    /// Attach a bearer token to every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// `GET /dashboard/{role}`
    pub async fn dashboard_stats(&self, role: Role) -> Result<RoleStats> {
        let request = self.http_client.get(self.url(&format!("/dashboard/{role}")));
        let data = self.send(request).await?;
        Ok(RoleStats::from_value(role, data)?)
    }

    /// `GET /dashboard/activities?limit={n}`
    pub async fn recent_activities(&self, limit: u32) -> Result<Vec<Activity>> {
        let request = self
            .http_client
            .get(self.url("/dashboard/activities"))
            .query(&[("limit", limit)]);
        self.send_typed(request).await
    }

    /// `GET /dashboard/appointments?limit={n}`
    pub async fn upcoming_appointments(&self, limit: u32) -> Result<Vec<UpcomingAppointment>> {
        let request = self
            .http_client
            .get(self.url("/dashboard/appointments"))
            .query(&[("limit", limit)]);
        self.send_typed(request).await
    }

    /// `GET /patients`
    pub async fn patients(&self, query: &PatientQuery) -> Result<Page<Patient>> {
        let request = self.http_client.get(self.url("/patients")).query(query);
        self.send_typed(request).await
    }

    /// `GET /appointments`
    pub async fn appointments(&self, query: &AppointmentQuery) -> Result<Page<Appointment>> {
        let request = self.http_client.get(self.url("/appointments")).query(query);
        self.send_typed(request).await
    }

    /// `POST /auth/login`. The returned token is not stored on this client;
    /// build a new one with [`ClinicClient::with_token`].
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let request = self
            .http_client
            .post(self.url("/auth/login"))
            .json(&LoginRequest { email, password });
        self.send_typed(request).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send_typed<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let data = self.send(request).await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Send the request and unwrap the `{ success, data }` envelope.
    async fn send(&self, request: RequestBuilder) -> Result<Value> {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();
        let url = response.url().path().to_string();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message);
            warn!(%url, status = status.as_u16(), ?message, "clinic API returned an error");
            return Err(ApiError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: ApiEnvelope<Value> = serde_json::from_str(&body)?;
        if !envelope.success {
            warn!(%url, message = ?envelope.message, "clinic API reported failure");
            return Err(ApiError::Rejected {
                message: envelope.message,
            });
        }

        debug!(%url, "clinic API request succeeded");
        envelope
            .data
            .ok_or_else(|| ApiError::Parse("response is missing `data`".to_string()))
    }
}
