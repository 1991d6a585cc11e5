//! Top bar with the signed-in identity and sign-out.

#[cfg(test)]
#[path = "app_header_test.rs"]
mod app_header_test;

use leptos::prelude::*;
use workflow::RoleTable;

use crate::state::auth::AuthState;

#[component]
pub fn AppHeader() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let identity = move || header_identity(&auth.get());
    let home = move || auth.get().role().map_or_else(|| "/dashboard".to_owned(), |r| r.dashboard_path());
    let on_sign_out = move |_| crate::util::auth::sign_out(auth);

    view! {
        <header class="app-header">
            <a class="app-header__brand" href=home>
                "e-Surat"
            </a>
            <span class="app-header__spacer"></span>
            <span class="app-header__user">{move || identity().0}</span>
            <span class="app-header__role">{move || identity().1}</span>
            <button class="btn app-header__logout" on:click=on_sign_out>
                "Keluar"
            </button>
        </header>
    }
}

/// `(name, role label)` for the header; placeholders while signed out.
fn header_identity(state: &AuthState) -> (String, String) {
    let Some(user) = state.user.as_ref() else {
        return (String::new(), String::new());
    };
    let role = state
        .role()
        .and_then(|role| RoleTable::standard().route(role).map(|route| route.label.to_owned()))
        .unwrap_or_else(|| "Peran tidak dikenali".to_owned());
    (user.name.clone(), role)
}
