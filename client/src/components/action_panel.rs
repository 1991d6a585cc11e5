//! Reviewer action panel on the detail page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Offers exactly the actions `workflow::available_actions` allows the
//! viewer. Each action is first applied locally so a missing catatan or an
//! out-of-turn click is reported inline without a round trip; the backend
//! result then replaces the page's application.
//!
//! Submit and publish need more input than a comment, so they link to the
//! form and the preview page instead of posting from here.

#[cfg(test)]
#[path = "action_panel_test.rs"]
mod action_panel_test;

use leptos::prelude::*;
use time::OffsetDateTime;
use workflow::navigation::{form_path, preview_path};
use workflow::{Action, ActionPayload, ApplicationDetail, ApplicationStatus, Role, WorkflowError, apply_action, available_actions};

#[component]
pub fn ActionPanel(application: ApplicationDetail, viewer: Role, on_updated: Callback<ApplicationDetail>) -> impl IntoView {
    let actions = available_actions(&application, viewer);
    if actions.is_empty() {
        let message = idle_message(application.status, application.current_step);
        return view! { <p class="action-panel action-panel--idle">{message}</p> }.into_any();
    }

    let catatan = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let info = RwSignal::new(String::new());
    let id = application.id.clone();
    let app = StoredValue::new(application);

    let run = move |action: Action| {
        if busy.get_untracked() {
            return;
        }
        let input = catatan.get_untracked();
        let checked = app.with_value(|a| validate_action_input(a, action, viewer, &input, OffsetDateTime::now_utc()));
        let note = match checked {
            Ok(note) => note,
            Err(msg) => {
                info.set(msg);
                return;
            }
        };
        busy.set(true);
        info.set(format!("{}...", action.label()));

        #[cfg(feature = "hydrate")]
        {
            let id = app.with_value(|a| a.id.clone());
            leptos::task::spawn_local(async move {
                match crate::net::api::send_action(&id, action, note, None).await {
                    Ok(updated) => {
                        info.set(String::new());
                        on_updated.run(updated);
                    }
                    Err(e) => info.set(format!("{} gagal: {e}", action.label())),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (note, on_updated);
            busy.set(false);
        }
    };

    let needs_comment = actions.contains(&Action::RequestRevision) || actions.contains(&Action::Reject);
    let buttons = actions
        .into_iter()
        .map(|action| match action {
            Action::Publish => view! {
                <a class="btn btn--primary" href=preview_path(viewer, &id)>
                    "Pratinjau & Terbitkan"
                </a>
            }
            .into_any(),
            Action::Submit => view! {
                <a class="btn btn--primary" href=form_path(Some(&id))>
                    "Lengkapi & Ajukan"
                </a>
            }
            .into_any(),
            Action::Approve | Action::Reject | Action::RequestRevision => view! {
                <button
                    class=format!("btn {}", button_class(action))
                    disabled=move || busy.get()
                    on:click=move |_| run(action)
                >
                    {action.label()}
                </button>
            }
            .into_any(),
        })
        .collect_view();

    view! {
        <section class="action-panel">
            <h3>"Tindakan"</h3>
            <Show when=move || needs_comment>
                <label class="action-panel__label" for="catatan">
                    "Catatan (wajib untuk revisi)"
                </label>
                <textarea
                    id="catatan"
                    class="action-panel__catatan"
                    rows="3"
                    prop:value=move || catatan.get()
                    on:input=move |ev| catatan.set(event_target_value(&ev))
                ></textarea>
            </Show>
            <div class="action-panel__buttons">{buttons}</div>
            <Show when=move || !info.get().is_empty()>
                <p class="action-panel__message">{move || info.get()}</p>
            </Show>
        </section>
    }
    .into_any()
}

/// Check `action` against the local state machine and return the catatan to
/// send (trimmed, `None` when blank).
///
/// # Errors
///
/// Returns the inline message to show when the action would be refused.
pub fn validate_action_input(
    app: &ApplicationDetail,
    action: Action,
    viewer: Role,
    catatan: &str,
    at: OffsetDateTime,
) -> Result<Option<String>, String> {
    let trimmed = catatan.trim();
    let mut payload = ActionPayload::new(viewer, at);
    if !trimmed.is_empty() {
        payload = payload.with_catatan(trimmed);
    }
    apply_action(app, action, &payload).map_err(|e| action_error_message(&e).to_owned())?;
    Ok(payload.catatan)
}

/// Indonesian message for a refused action.
#[must_use]
pub fn action_error_message(err: &WorkflowError) -> &'static str {
    match err {
        WorkflowError::InvalidStep { .. } => "Tahap pengajuan tidak dikenali.",
        WorkflowError::InvalidTransition { .. } => "Tindakan ini tidak tersedia untuk pengajuan ini.",
        WorkflowError::MissingComment => "Catatan wajib diisi untuk meminta revisi.",
        WorkflowError::MissingLetterNumber => "Nomor surat belum tersedia.",
        WorkflowError::MissingStamp => "Pilih stempel terlebih dahulu.",
    }
}

fn button_class(action: Action) -> &'static str {
    match action {
        Action::Approve | Action::Submit | Action::Publish => "btn--primary",
        Action::Reject => "btn--danger",
        Action::RequestRevision => "btn--warning",
    }
}

fn idle_message(status: ApplicationStatus, current_step: i32) -> String {
    if status.is_terminal() {
        return format!("Pengajuan sudah {}.", status.label().to_lowercase());
    }
    match Role::at_step(current_step) {
        Some(role) => format!("Menunggu tindakan {}.", role.label()),
        None => "Tahap pengajuan tidak dikenali.".to_owned(),
    }
}
