//! Page route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs in front of Leptos SSR. Requests for `/dashboard/**` without a session
//! cookie are redirected to `/login?redirect=<path+query>`; a signed-in visit
//! to `/login` goes to `/dashboard`. The cookie is only checked for presence;
//! the backend validates it on every API call.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use workflow::navigation::{LOGIN_PATH, REDIRECT_PARAM};
use workflow::{GuardDecision, SESSION_COOKIE, guard};

/// Prefix the auth provider adds to the cookie name when it is set `Secure`.
const SECURE_COOKIE_PREFIX: &str = "__Secure-";

pub async fn require_session(req: Request, next: Next) -> Response {
    let jar = CookieJar::from_headers(req.headers());
    let decision = guard(req.uri().path(), req.uri().query(), has_session_cookie(&jar));
    match decision {
        GuardDecision::Allow => next.run(req).await,
        GuardDecision::Login { redirect } => {
            tracing::debug!(%redirect, "no session; redirecting to login");
            Redirect::temporary(&login_url(&redirect)).into_response()
        }
        GuardDecision::Redirect(target) => Redirect::temporary(&target).into_response(),
    }
}

/// Whether a non-empty session cookie is present, plain or `__Secure-`.
#[must_use]
pub fn has_session_cookie(jar: &CookieJar) -> bool {
    let secure = format!("{SECURE_COOKIE_PREFIX}{SESSION_COOKIE}");
    [SESSION_COOKIE, secure.as_str()]
        .into_iter()
        .any(|name| jar.get(name).is_some_and(|cookie| !cookie.value().is_empty()))
}

/// `/login?redirect=<encoded>`.
#[must_use]
pub fn login_url(redirect: &str) -> String {
    let Ok(mut url) = reqwest::Url::parse(&format!("http://localhost{LOGIN_PATH}")) else {
        return LOGIN_PATH.to_owned();
    };
    url.query_pairs_mut().append_pair(REDIRECT_PARAM, redirect);
    match url.query() {
        Some(query) => format!("{}?{query}", url.path()),
        None => url.path().to_owned(),
    }
}
