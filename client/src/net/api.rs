//! REST API helpers for communicating with the backend through `/api`.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! calls are only made from the browser after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Any non-2xx response is a generic fetch failure ([`ApiError::Status`]).
//! There is no partial success: a call either yields a fully decoded payload
//! or an error, and callers degrade to inline fallbacks instead of panicking.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use serde::Serialize;
#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

use super::types::{ApplicationDetail, ApplicationForm, ApplicationSummary, Stamp, User};
#[cfg(feature = "hydrate")]
use super::types::{
    LetterNumberRequest, LetterNumberResponse, PublishRequest, SignInRequest, VerifyRequest, decode_body,
    decode_session,
};
use workflow::Action;

/// Error returned by every backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("{endpoint} failed: {status}")]
    Status { endpoint: String, status: u16 },
    /// The body did not match the expected payload.
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }
}

#[cfg(any(test, feature = "hydrate"))]
const APPLICATIONS_ENDPOINT: &str = "/api/surat-rekomendasi/applications";
#[cfg(any(test, feature = "hydrate"))]
const LETTER_NUMBER_ENDPOINT: &str = "/api/surat-rekomendasi/letter-number";
#[cfg(any(test, feature = "hydrate"))]
const STAMPS_ENDPOINT: &str = "/api/stamps";
#[cfg(any(test, feature = "hydrate"))]
const SESSION_ENDPOINT: &str = "/api/auth/get-session";
#[cfg(any(test, feature = "hydrate"))]
const SIGN_IN_ENDPOINT: &str = "/api/auth/sign-in/email";
#[cfg(any(test, feature = "hydrate"))]
const SIGN_OUT_ENDPOINT: &str = "/api/auth/sign-out";

/// Application ids come from route params, so they are encoded as one path
/// segment before reaching the backend.
#[cfg(feature = "hydrate")]
fn path_segment(id: &str) -> String {
    String::from(js_sys::encode_uri_component(id))
}

/// `segment` must already be encoded with [`path_segment`].
#[cfg(any(test, feature = "hydrate"))]
fn application_endpoint(segment: &str) -> String {
    format!("{APPLICATIONS_ENDPOINT}/{segment}")
}

#[cfg(any(test, feature = "hydrate"))]
fn application_action_endpoint(segment: &str, action: Action) -> String {
    let leaf = match action {
        Action::Submit => "submit",
        Action::Publish => "publish",
        Action::Approve | Action::Reject | Action::RequestRevision => "verify",
    };
    format!("{}/{leaf}", application_endpoint(segment))
}

#[cfg(any(test, feature = "hydrate"))]
fn status_error(endpoint: &str, status: u16) -> ApiError {
    ApiError::Status { endpoint: endpoint.to_owned(), status }
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[cfg(feature = "hydrate")]
async fn read_body(resp: gloo_net::http::Response, endpoint: &str) -> Result<String, ApiError> {
    if !resp.ok() {
        return Err(status_error(endpoint, resp.status()));
    }
    resp.text().await.map_err(|e| ApiError::Network(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn get_json<T: DeserializeOwned>(endpoint: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(endpoint)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let body = read_body(resp, endpoint).await?;
    decode_body(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn post_json<B: Serialize, T: DeserializeOwned>(endpoint: &str, body: &B) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::post(endpoint)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let body = read_body(resp, endpoint).await?;
    decode_body(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn patch_json<B: Serialize, T: DeserializeOwned>(endpoint: &str, body: &B) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::patch(endpoint)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let body = read_body(resp, endpoint).await?;
    decode_body(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

// =============================================================================
// AUTH
// =============================================================================

/// Fetch the current session from the auth provider.
/// `Ok(None)` means signed out.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request or decode fails.
pub async fn fetch_session() -> Result<Option<User>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(SESSION_ENDPOINT)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if resp.status() == 401 {
            return Ok(None);
        }
        let body = read_body(resp, SESSION_ENDPOINT).await?;
        let payload = decode_session(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(payload.map(|p| p.user))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Sign in with email and password; the provider sets the session cookie.
///
/// # Errors
///
/// Returns an [`ApiError`] if the credentials are rejected or the request fails.
pub async fn sign_in_email(email: &str, password: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = SignInRequest { email: email.to_owned(), password: password.to_owned() };
        let _: serde_json::Value = post_json(SIGN_IN_ENDPOINT, &body).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// End the session at the auth provider.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails; callers clear local state
/// regardless.
pub async fn sign_out() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(SIGN_OUT_ENDPOINT)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_body(resp, SIGN_OUT_ENDPOINT).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// APPLICATIONS
// =============================================================================

/// `GET /api/surat-rekomendasi/applications`, scoped by the backend to the
/// signed-in user's role.
///
/// # Errors
///
/// Returns an [`ApiError`] on any failure.
pub async fn fetch_applications() -> Result<Vec<ApplicationSummary>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(APPLICATIONS_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/surat-rekomendasi/applications/:id`.
///
/// # Errors
///
/// Returns an [`ApiError`] on any failure.
pub async fn fetch_application(id: &str) -> Result<ApplicationDetail, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&application_endpoint(&path_segment(id))).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Create a draft, or update an existing one when `id` is given.
///
/// # Errors
///
/// Returns an [`ApiError`] on any failure.
pub async fn save_application(id: Option<&str>, form: &ApplicationForm) -> Result<ApplicationDetail, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        match id {
            Some(id) => patch_json(&application_endpoint(&path_segment(id)), form).await,
            None => post_json(APPLICATIONS_ENDPOINT, form).await,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, form);
        Err(ApiError::Unavailable)
    }
}

/// Send a workflow action to the backend and return the updated application.
///
/// Submit and publish have their own endpoints; approve, reject and revision
/// share `verify`.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] for a publish without number or stamp, and
/// any transport or status error.
pub async fn send_action(
    id: &str,
    action: Action,
    catatan: Option<String>,
    publish: Option<(String, String)>,
) -> Result<ApplicationDetail, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let endpoint = application_action_endpoint(&path_segment(id), action);
        match action {
            Action::Submit => post_json(&endpoint, &serde_json::json!({})).await,
            Action::Publish => {
                let (letter_number, stamp_id) =
                    publish.ok_or_else(|| ApiError::Decode("publish requires letter number and stamp".to_owned()))?;
                post_json(&endpoint, &PublishRequest { letter_number, stamp_id }).await
            }
            Action::Approve | Action::Reject | Action::RequestRevision => {
                post_json(&endpoint, &VerifyRequest { action: action.action_type(), catatan }).await
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, action, catatan, publish);
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// NUMBERING + STAMPS
// =============================================================================

/// Reserve the next letter number for an application.
///
/// # Errors
///
/// Returns an [`ApiError`] on any failure.
pub async fn reserve_letter_number(application_id: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = LetterNumberRequest { application_id: application_id.to_owned() };
        let resp: LetterNumberResponse = post_json(LETTER_NUMBER_ENDPOINT, &body).await?;
        Ok(resp.letter_number)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = application_id;
        Err(ApiError::Unavailable)
    }
}

/// List the stamps UPA may apply.
///
/// # Errors
///
/// Returns an [`ApiError`] on any failure.
pub async fn fetch_stamps() -> Result<Vec<Stamp>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(STAMPS_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}
