//! Letter preview and publishing.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every role can view the letter as it stands. When UPA holds the final
//! step, the page also loads the stamp catalogue, reserves a letter number
//! from the backend and publishes. The number is reserved once per visit and
//! reused if publishing has to be retried; the backend owns numbering.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use time::OffsetDateTime;
use workflow::navigation::detail_path;
use workflow::preview::PreviewData;
use workflow::{Action, ActionPayload, ApplicationDetail, Role, Stamp, apply_action, available_actions};

use crate::components::action_panel::action_error_message;
use crate::components::app_header::AppHeader;
use crate::components::letter_preview::LetterPreview;
use crate::state::applications::{DetailState, not_found_message};
use crate::state::auth::AuthState;
use crate::util::auth::{install_role_redirect, install_unauth_redirect};

#[component]
pub fn PreviewPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();
    let navigate = use_navigate();
    let route_role = move || params.with(|p| p.get("role")).and_then(|slug| Role::from_slug(&slug));
    let app_id = move || params.with(|p| p.get("id")).unwrap_or_default();

    install_unauth_redirect(auth, navigate.clone());
    install_role_redirect(auth, route_role, navigate);

    let detail = RwSignal::new(DetailState::default());
    let stamps = RwSignal::new(Vec::<Stamp>::new());
    let selected_stamp = RwSignal::new(None::<String>);
    let reserved = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let info = RwSignal::new(String::new());

    let requested = RwSignal::new(None::<String>);
    Effect::new(move || {
        let state = auth.get();
        let id = app_id();
        if state.loading || state.role().is_none() || state.role() != route_role() {
            return;
        }
        if requested.get_untracked().as_deref() == Some(id.as_str()) {
            return;
        }
        requested.set(Some(id.clone()));
        detail.set(DetailState::Loading);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_application(&id).await;
            detail.set(DetailState::from_result(&id, result));
        });
    });

    let can_publish = move || {
        let viewer = route_role()?;
        detail.with(|d| d.detail().map(|app| available_actions(app, viewer).contains(&Action::Publish)))
    };

    let stamps_requested = RwSignal::new(false);
    Effect::new(move || {
        if can_publish() != Some(true) || stamps_requested.get_untracked() {
            return;
        }
        stamps_requested.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_stamps().await {
                Ok(list) => stamps.set(list),
                Err(e) => info.set(format!("Gagal memuat stempel: {e}")),
            }
        });
    });

    let on_reserve = move |_| {
        if busy.get() || reserved.get().is_some() {
            return;
        }
        busy.set(true);
        info.set("Meminta nomor surat...".to_owned());
        #[cfg(feature = "hydrate")]
        {
            let id = app_id();
            leptos::task::spawn_local(async move {
                match crate::net::api::reserve_letter_number(&id).await {
                    Ok(number) => {
                        reserved.set(Some(number));
                        info.set(String::new());
                    }
                    Err(e) => info.set(format!("Gagal mendapatkan nomor surat: {e}")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        busy.set(false);
    };

    let on_publish = move |_| {
        if busy.get() {
            return;
        }
        let Some(viewer) = route_role() else {
            return;
        };
        let stamp = selected_stamp.get().and_then(|id| stamps.get().into_iter().find(|s| s.id == id));
        let number = reserved.get();
        let checked = detail.with(|d| {
            d.detail().map(|app| {
                publish_check(app, viewer, number.as_deref(), stamp.as_ref(), OffsetDateTime::now_utc())
            })
        });
        let (letter_number, stamp_id) = match checked {
            Some(Ok(pair)) => pair,
            Some(Err(msg)) => {
                info.set(msg);
                return;
            }
            None => return,
        };
        busy.set(true);
        info.set("Menerbitkan surat...".to_owned());
        #[cfg(feature = "hydrate")]
        {
            let id = app_id();
            leptos::task::spawn_local(async move {
                match crate::net::api::send_action(&id, Action::Publish, None, Some((letter_number, stamp_id))).await {
                    Ok(updated) => {
                        detail.set(DetailState::Loaded(Box::new(updated)));
                        info.set("Surat berhasil diterbitkan.".to_owned());
                    }
                    Err(e) => info.set(format!("Penerbitan gagal: {e}")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (letter_number, stamp_id);
            busy.set(false);
        }
    };

    let on_print = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.print();
            }
        }
    };

    let letter = move || {
        let viewer = route_role()?;
        let state = detail.get();
        Some(match state {
            DetailState::Loading => view! { <p>"Memuat pratinjau..."</p> }.into_any(),
            DetailState::NotFound { id } => view! {
                <div class="detail-page__missing">
                    <p>{not_found_message(&id)}</p>
                    <a href=viewer.dashboard_path()>"Kembali ke dashboard"</a>
                </div>
            }
            .into_any(),
            DetailState::Loaded(app) => {
                let stamp = selected_stamp.get().and_then(|id| stamps.get().into_iter().find(|s| s.id == id));
                let data = preview_for(&app, reserved.get(), stamp, OffsetDateTime::now_utc());
                view! {
                    <a class="detail-page__back" href=detail_path(viewer, &app.id)>
                        "\u{2190} Detail pengajuan"
                    </a>
                    <LetterPreview data=data/>
                }
                .into_any()
            }
        })
    };

    let stamp_options = move || {
        stamps
            .get()
            .into_iter()
            .map(|stamp| view! { <option value=stamp.id.clone()>{stamp.name.clone()}</option> })
            .collect_view()
    };

    view! {
        <div class="preview-page">
            <AppHeader/>
            <div class="preview-page__toolbar">
                <button class="btn" on:click=on_print>
                    "Cetak"
                </button>
                <Show when=move || can_publish() == Some(true)>
                    <select
                        class="preview-page__stamp"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            selected_stamp.set((!value.is_empty()).then_some(value));
                        }
                    >
                        <option value="">"Pilih stempel"</option>
                        {stamp_options}
                    </select>
                    <button
                        class="btn"
                        disabled=move || busy.get() || reserved.get().is_some()
                        on:click=on_reserve
                    >
                        {move || reserved.get().map_or_else(|| "Ambil Nomor Surat".to_owned(), |n| format!("Nomor: {n}"))}
                    </button>
                    <button class="btn btn--primary" disabled=move || busy.get() on:click=on_publish>
                        "Terbitkan"
                    </button>
                </Show>
            </div>
            <Show when=move || !info.get().is_empty()>
                <p class="preview-page__message">{move || info.get()}</p>
            </Show>
            {letter}
        </div>
    }
}

/// Letter data for `app`. Unpublished letters carry the reserved number and
/// selected stamp so UPA sees what will be issued.
fn preview_for(app: &ApplicationDetail, reserved: Option<String>, stamp: Option<Stamp>, at: OffsetDateTime) -> PreviewData {
    let data = PreviewData::from_detail(app);
    if app.is_published() { data } else { data.with_reservation(reserved, stamp, at) }
}

/// Check a publish against the local state machine and return the
/// `(letter number, stamp id)` to send.
///
/// # Errors
///
/// Returns the inline message when the number or stamp is missing or the
/// application cannot be published by `viewer`.
fn publish_check(
    app: &ApplicationDetail,
    viewer: Role,
    letter_number: Option<&str>,
    stamp: Option<&Stamp>,
    at: OffsetDateTime,
) -> Result<(String, String), String> {
    let mut payload = ActionPayload::new(viewer, at);
    if let Some(number) = letter_number {
        payload = payload.with_letter_number(number);
    }
    if let Some(stamp) = stamp {
        payload = payload.with_stamp(stamp.clone());
    }
    let published = apply_action(app, Action::Publish, &payload).map_err(|e| action_error_message(&e).to_owned())?;
    match (published.letter_number, published.stamp_id) {
        (Some(number), Some(stamp_id)) => Ok((number, stamp_id)),
        _ => Err(action_error_message(&workflow::WorkflowError::MissingLetterNumber).to_owned()),
    }
}
