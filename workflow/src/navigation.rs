//! Route guarding and per-viewer navigation targets.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server applies [`guard`] to every page request before SSR, and the
//! hydrated client re-checks after sign-out. Path builders here are the only
//! place page URLs are spelled out.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use crate::application::Application;
use crate::machine::{Action, available_actions};
use crate::role::Role;

/// Cookie set by the external auth provider.
pub const SESSION_COOKIE: &str = "better-auth.session_token";
pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_ROOT: &str = "/dashboard";
/// Query parameter carrying the original destination to the login page.
pub const REDIRECT_PARAM: &str = "redirect";

const PROTECTED_PREFIXES: [&str; 1] = [DASHBOARD_ROOT];

/// Outcome of checking a page request against the session state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// Send to the login page; `redirect` is the path (and query) to return to.
    Login { redirect: String },
    /// Send elsewhere, e.g. a signed-in user hitting `/login`.
    Redirect(String),
}

#[must_use]
pub fn is_protected(path: &str) -> bool {
    PROTECTED_PREFIXES
        .iter()
        .any(|prefix| path == *prefix || path.starts_with(&format!("{prefix}/")))
}

/// Decide what to do with a request for `path`.
#[must_use]
pub fn guard(path: &str, query: Option<&str>, has_session: bool) -> GuardDecision {
    if is_protected(path) && !has_session {
        let redirect = match query.filter(|q| !q.is_empty()) {
            Some(q) => format!("{path}?{q}"),
            None => path.to_owned(),
        };
        return GuardDecision::Login { redirect };
    }
    if path == LOGIN_PATH && has_session {
        return GuardDecision::Redirect(DASHBOARD_ROOT.to_owned());
    }
    GuardDecision::Allow
}

/// Validate a post-login redirect target. Only same-site absolute paths are
/// honoured; anything else falls back to the dashboard root.
#[must_use]
pub fn safe_redirect_target(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(target) if target.starts_with('/') && !target.starts_with("//") && !target.contains("://") => {
            target.to_owned()
        }
        _ => DASHBOARD_ROOT.to_owned(),
    }
}

/// Landing page for a signed-in user.
#[must_use]
pub fn home_for(role: Option<Role>) -> String {
    role.map_or_else(|| LOGIN_PATH.to_owned(), Role::dashboard_path)
}

#[must_use]
pub fn detail_path(viewer: Role, application_id: &str) -> String {
    format!("{}/surat-rekomendasi/{application_id}", viewer.dashboard_path())
}

#[must_use]
pub fn preview_path(viewer: Role, application_id: &str) -> String {
    format!("{}/preview", detail_path(viewer, application_id))
}

/// Submission form; `Some(id)` edits an existing draft or revision.
#[must_use]
pub fn form_path(application_id: Option<&str>) -> String {
    let base = format!("{}/pengajuan", Role::Mahasiswa.dashboard_path());
    match application_id {
        Some(id) => format!("{base}?id={id}"),
        None => base,
    }
}

/// Where `viewer` should land when opening `app`.
///
/// UPA goes straight to the preview when publishing is available; the
/// Mahasiswa goes to the form while the application is editable.
#[must_use]
pub fn route_for(app: &Application, viewer: Role) -> String {
    let actions = available_actions(app, viewer);
    if actions.contains(&Action::Publish) {
        return preview_path(viewer, &app.id);
    }
    if actions.contains(&Action::Submit) {
        return form_path(Some(&app.id));
    }
    detail_path(viewer, &app.id)
}

/// Where to go after an action succeeded.
#[must_use]
pub fn after_action_redirect(viewer: Role) -> String {
    viewer.dashboard_path()
}
