//! Signed-in session and its persistence.

use base64::Engine;
use clinic_client::{LoginResponse, Role, StaffUser};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Invalid JWT format")]
    MalformedToken,

    #[error("Failed to decode JWT: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Failed to parse session: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: StaffUser,
    /// Unix seconds, from the token's `exp` claim when the token is a JWT.
    #[serde(default)]
    pub expires_at: Option<i64>,
}

impl Session {
    pub fn from_login(login: LoginResponse) -> Self {
        // Opaque tokens are fine; they just never expire client-side.
        let expires_at = token_expiry(&login.token).ok().flatten();
        Self {
            token: login.token,
            user: login.user,
            expires_at,
        }
    }

    pub fn role(&self) -> Role {
        self.user.role
    }

    pub fn is_expired_at(&self, now: i64) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now)
    }

    pub fn to_json(&self) -> Result<String, SessionError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self, SessionError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Read the `exp` claim without verifying the signature; the API is the
/// authority, this only avoids restoring a session that is known dead.
pub fn token_expiry(token: &str) -> Result<Option<i64>, SessionError> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(SessionError::MalformedToken);
    }

    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1].trim_end_matches('='))?;

    #[derive(Deserialize)]
    struct JwtClaims {
        exp: Option<i64>,
    }

    let claims: JwtClaims = serde_json::from_slice(&payload)?;
    Ok(claims.exp)
}

// ============================================================================
// Storage (localStorage on the web target, nothing elsewhere)
// ============================================================================

#[cfg(feature = "web")]
pub mod storage {
    /// localStorage key holding the serialized session.
    const STORAGE_KEY: &str = "clinic.session";

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    pub fn load() -> Option<String> {
        local_storage()?.get_item(STORAGE_KEY).ok().flatten()
    }

    pub fn save(raw: &str) {
        if let Some(storage) = local_storage() {
            if storage.set_item(STORAGE_KEY, raw).is_err() {
                tracing::warn!("Failed to persist session");
            }
        }
    }

    pub fn clear() {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}

#[cfg(not(feature = "web"))]
pub mod storage {
    pub fn load() -> Option<String> {
        None
    }

    pub fn save(_raw: &str) {}

    pub fn clear() {}
}
