//! Login page: email + password sign-in against the auth provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server guard sends cookie-less dashboard requests here with
//! `?redirect=<original path>`. After sign-in the session is re-fetched so the
//! role is known, then the browser does a full navigation so the guard sees
//! the new cookie.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use workflow::Role;
use workflow::navigation::{DASHBOARD_ROOT, REDIRECT_PARAM, home_for, safe_redirect_target};

#[cfg(feature = "hydrate")]
use crate::state::auth::AuthState;

#[component]
pub fn LoginPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let auth = expect_context::<RwSignal<AuthState>>();
    let query = use_query_map();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(pair) => pair,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        let redirect = query.with_untracked(|q| q.get(REDIRECT_PARAM));
        busy.set(true);
        info.set("Masuk...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = async {
                crate::net::api::sign_in_email(&email_value, &password_value).await?;
                crate::net::api::fetch_session().await
            }
            .await;
            match result {
                Ok(Some(user)) => {
                    let role = user.workflow_role();
                    auth.update(|a| a.resolve(Some(user)));
                    let target = post_login_target(redirect.as_deref(), role);
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(&target);
                    }
                }
                Ok(None) => {
                    info.set("Sesi tidak ditemukan setelah masuk. Coba lagi.".to_owned());
                    busy.set(false);
                }
                Err(e) => {
                    log::warn!("sign-in failed: {e}");
                    info.set("Email atau kata sandi salah.".to_owned());
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, redirect);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"e-Surat"</h1>
                <p class="login-card__subtitle">"Surat Rekomendasi Beasiswa"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="nama@kampus.ac.id"
                        autocomplete="username"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Kata sandi"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Masuk"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}

/// Trim the email and require both fields.
///
/// # Errors
///
/// Returns the inline message when a field is missing.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Masukkan email dan kata sandi.");
    }
    if !email.contains('@') {
        return Err("Email tidak valid.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Where to go after signing in: a safe `redirect` target, else the user's
/// own dashboard.
#[must_use]
pub fn post_login_target(redirect: Option<&str>, role: Option<Role>) -> String {
    let target = safe_redirect_target(redirect);
    if target == DASHBOARD_ROOT {
        return role.map_or(target, |role| home_for(Some(role)));
    }
    target
}
