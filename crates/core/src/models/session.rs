use base64::Engine as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::CoreError;
use crate::normalize::{keys, pick_str};

/// Coarse role flag read from the session credential. Only used for
/// admin-vs-user UI branching; real access control lives in the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Map a raw role claim to a role. Anything that is not exactly
    /// "Admin" is a regular user, matching the backend's convention.
    pub fn from_claim(claim: &str) -> Role {
        if claim == "Admin" {
            Role::Admin
        } else {
            Role::User
        }
    }
}

/// Decoded view of the opaque bearer credential: display name plus role.
///
/// Threaded explicitly into the components that need it — never stashed in
/// ambient global state. The token itself stays opaque; no signature
/// verification happens here (the backend validates on every request).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    pub user_name: String,
    pub role: Role,
}

impl SessionContext {
    /// Decode a compact JWT's payload segment for the name and role claims.
    ///
    /// The role claim appears either as `role` or under the long
    /// Microsoft-schema claim URI depending on the backend build; both are
    /// accepted, defaulting to a regular user. A credential that does not
    /// split into three segments or whose payload is not base64url JSON is
    /// a `CoreError::Session` — the caller should drop to the
    /// unauthenticated state.
    pub fn decode(token: &str) -> Result<SessionContext, CoreError> {
        let mut segments = token.split('.');
        let payload = match (segments.next(), segments.next(), segments.next()) {
            (Some(_), Some(payload), Some(_)) => payload,
            _ => {
                return Err(CoreError::Session(
                    "credential is not a compact JWT".to_string(),
                ))
            }
        };

        let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD.decode(payload)?;
        let claims: Value = serde_json::from_slice(&bytes)
            .map_err(|e| CoreError::Session(format!("payload is not valid JSON: {e}")))?;

        let user_name = pick_str(&claims, keys::CLAIM_NAME, "");
        let role = Role::from_claim(&pick_str(&claims, keys::CLAIM_ROLE, "User"));

        Ok(SessionContext { user_name, role })
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
