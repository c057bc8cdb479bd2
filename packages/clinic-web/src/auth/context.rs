//! Authentication context provider

use clinic_client::{ApiError, ClinicClient, Role};
use dioxus::prelude::*;

use super::session::{storage, Session};
use crate::config;

/// Authentication context that provides session state to the entire app
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Current session (if any)
    pub session: Signal<Option<Session>>,
    /// Whether the stored session is still being restored
    pub loading: Signal<bool>,
    /// Unauthenticated client; the token is attached per call
    base_client: Signal<ClinicClient>,
}

impl AuthContext {
    /// Check if the user is authenticated
    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_some()
    }

    /// Role of the signed-in user. Reading this subscribes the caller.
    pub fn role(&self) -> Option<Role> {
        self.session.read().as_ref().map(Session::role)
    }

    pub fn user_name(&self) -> Option<String> {
        self.session.read().as_ref().map(|s| s.user.name.clone())
    }

    /// API client carrying the current session's token.
    pub fn client(&self) -> ClinicClient {
        let base = self.base_client.peek().clone();
        match self.session.peek().as_ref() {
            Some(session) => base.with_token(session.token.clone()),
            None => base,
        }
    }

    /// Restore a persisted session, dropping it if unreadable or expired.
    pub fn restore(&self) {
        let mut session = self.session;
        let mut loading = self.loading;

        if let Some(raw) = storage::load() {
            match Session::from_json(&raw) {
                Ok(restored) if restored.is_expired_at(chrono::Utc::now().timestamp()) => {
                    tracing::info!("Stored session has expired");
                    storage::clear();
                }
                Ok(restored) => {
                    tracing::debug!(role = %restored.role(), "Restored session");
                    session.set(Some(restored));
                }
                Err(e) => {
                    tracing::warn!("Discarding unreadable session: {e}");
                    storage::clear();
                }
            }
        }
        loading.set(false);
    }

    /// Sign in and persist the session. Returns the user's role.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Role, ApiError> {
        let client = self.base_client.peek().clone();
        let login = client.login(email, password).await?;
        let signed_in = Session::from_login(login);
        let role = signed_in.role();

        match signed_in.to_json() {
            Ok(raw) => storage::save(&raw),
            Err(e) => tracing::warn!("Failed to serialize session: {e}"),
        }
        tracing::info!(%role, "Signed in");

        let mut session = self.session;
        session.set(Some(signed_in));
        Ok(role)
    }

    /// Clear the session (logout)
    pub fn sign_out(&self) {
        let mut session = self.session;
        storage::clear();
        session.set(None);
        tracing::info!("Signed out");
    }
}

/// Auth provider component that wraps the app
#[component]
pub fn AuthProvider(children: Element) -> Element {
    // Create auth signals
    let session = use_signal(|| None::<Session>);
    let loading = use_signal(|| true);
    let base_client = use_signal(|| ClinicClient::from_config(&config::get().api));

    // Provide to children
    let auth = use_context_provider(|| AuthContext {
        session,
        loading,
        base_client,
    });

    // Load persisted session
    use_effect(move || auth.restore());

    children
}

/// Hook to access the auth context
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}
