//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical unauthenticated and wrong-role redirect
//! behavior. The server guard already bounced cookie-less requests before SSR;
//! these checks cover sessions that expire or end while the page is open.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use workflow::Role;
use workflow::navigation::{LOGIN_PATH, REDIRECT_PARAM, home_for};

use crate::state::auth::AuthState;

/// Whether the route should redirect to the login page.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Where to send a signed-in user whose role does not own the route, or
/// `None` when the route is theirs. `route_role` is `None` for an unknown slug.
/// Users without a recognised role stay put; pages render a notice for them.
#[must_use]
pub fn role_mismatch_redirect(state: &AuthState, route_role: Option<Role>) -> Option<String> {
    if state.loading || state.user.is_none() {
        return None;
    }
    let own = state.role()?;
    (route_role != Some(own)).then(|| home_for(Some(own)))
}

/// Fetch the session once and resolve `auth`. Failures read as signed out.
pub fn init_session(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_session().await {
            Ok(user) => auth.update(|a| a.resolve(user)),
            Err(e) => {
                log::warn!("session fetch failed: {e}");
                auth.update(AuthState::clear);
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = auth;
}

/// End the session at the provider, clear local state and leave for `/login`.
pub fn sign_out(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Err(e) = crate::net::api::sign_out().await {
            log::warn!("sign-out request failed: {e}");
        }
        auth.update(AuthState::clear);
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(LOGIN_PATH);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    auth.update(AuthState::clear);
}

/// Redirect to `/login?redirect=<current page>` whenever auth has loaded and no
/// user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        if should_redirect_unauth(&state) {
            navigate(&login_url_for_current(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Redirect a signed-in user away from another role's pages.
pub fn install_role_redirect<F, R>(auth: RwSignal<AuthState>, route_role: R, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
    R: Fn() -> Option<Role> + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        if let Some(target) = role_mismatch_redirect(&state, route_role()) {
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

fn login_url_for_current() -> String {
    #[cfg(feature = "hydrate")]
    {
        let current = web_sys::window()
            .and_then(|w| {
                let loc = w.location();
                Some(format!("{}{}", loc.pathname().ok()?, loc.search().unwrap_or_default()))
            })
            .unwrap_or_default();
        if current.is_empty() {
            return LOGIN_PATH.to_owned();
        }
        let encoded = String::from(js_sys::encode_uri_component(&current));
        format!("{LOGIN_PATH}?{REDIRECT_PARAM}={encoded}")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = REDIRECT_PARAM;
        LOGIN_PATH.to_owned()
    }
}
