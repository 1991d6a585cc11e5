//! Request/response DTOs for the backend boundary.
//!
//! DESIGN
//! ======
//! Application payloads are the `workflow` crate's types; this module adds
//! the auth session shape and the small request bodies the pages send.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub use workflow::{Application, ApplicationDetail, ApplicationSummary, FormData, Role, Stamp};
use workflow::ActionType;

/// Signed-in user as reported by the auth provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Backend role identifier, e.g. `MANAJER_TU`.
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl User {
    /// Workflow role, `None` when absent or unrecognised.
    #[must_use]
    pub fn workflow_role(&self) -> Option<Role> {
        self.role.as_deref().and_then(|raw| raw.parse().ok())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub id: String,
    #[serde(default)]
    pub expires_at: Option<String>,
}

/// Body of `GET /api/auth/get-session`; the endpoint returns `null` when
/// signed out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPayload {
    pub user: User,
    pub session: SessionInfo,
}

/// Backend responses are either the bare payload or `{ "data": ... }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            Self::Wrapped { data } | Self::Bare(data) => data,
        }
    }
}

/// Decode a response body that may or may not be wrapped in `{ "data": ... }`.
///
/// # Errors
///
/// Returns the serde error when neither shape matches.
pub fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str::<Envelope<T>>(body).map(Envelope::into_inner)
}

/// Decode the session endpoint body. Not routed through [`Envelope`]: a
/// missing `data` field would read as a wrapped `None`.
///
/// # Errors
///
/// Returns the serde error for anything other than `null` or a session.
pub fn decode_session(body: &str) -> Result<Option<SessionPayload>, serde_json::Error> {
    serde_json::from_str(body)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Reviewer decision sent to `POST /applications/:id/verify`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    pub action: ActionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catatan: Option<String>,
}

/// Body for creating or updating a draft.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationForm {
    pub scholarship_name: String,
    pub form_data: FormData,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterNumberRequest {
    pub application_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterNumberResponse {
    pub letter_number: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishRequest {
    pub letter_number: String,
    pub stamp_id: String,
}
