//! Application detail page shared by every role.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows applicant data, attachments, the workflow stepper and Riwayat, plus
//! the action panel for whoever holds the current step. A failed fetch renders
//! an inline not-found notice with the requested id; nothing here is fatal.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};
use workflow::navigation::{after_action_redirect, preview_path};
use workflow::preview::format_tanggal;
use workflow::{ApplicationDetail, ApplicationStatus, FormData, Role};

use crate::components::action_panel::ActionPanel;
use crate::components::app_header::AppHeader;
use crate::components::attachment_list::AttachmentList;
use crate::components::riwayat_timeline::RiwayatTimeline;
use crate::components::status_badge::StatusBadge;
use crate::components::stepper::WorkflowStepper;
use crate::state::applications::{DetailState, not_found_message};
use crate::state::auth::AuthState;
use crate::util::auth::{install_role_redirect, install_unauth_redirect};

#[component]
pub fn DetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();
    let navigate = use_navigate();
    let route_role = move || params.with(|p| p.get("role")).and_then(|slug| Role::from_slug(&slug));
    let app_id = move || params.with(|p| p.get("id")).unwrap_or_default();

    install_unauth_redirect(auth, navigate.clone());
    install_role_redirect(auth, route_role, navigate.clone());

    let detail = RwSignal::new(DetailState::default());
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

    let redirect_to = RwSignal::new(None::<String>);
    Effect::new(move || {
        if let Some(target) = redirect_to.get() {
            redirect_to.set(None);
            navigate(&target, NavigateOptions::default());
        }
    });

    let body = move || {
        let Some(viewer) = route_role() else {
            return view! { <p>"Memuat..."</p> }.into_any();
        };
        match detail.get() {
            DetailState::Loading => view! { <p>"Memuat pengajuan..."</p> }.into_any(),
            DetailState::NotFound { id } => view! {
                <div class="detail-page__missing">
                    <p>{not_found_message(&id)}</p>
                    <a href=viewer.dashboard_path()>"Kembali ke dashboard"</a>
                </div>
            }
            .into_any(),
            DetailState::Loaded(app) => {
                let on_updated = Callback::new(move |updated: ApplicationDetail| {
                    detail.set(DetailState::Loaded(Box::new(updated)));
                    redirect_to.set(Some(after_action_redirect(viewer)));
                });
                view! { <DetailBody app=*app viewer=viewer on_updated=on_updated/> }.into_any()
            }
        }
    };

    view! {
        <div class="detail-page">
            <AppHeader/>
            <a class="detail-page__back" href=move || route_role().map(Role::dashboard_path).unwrap_or_default()>
                "\u{2190} Kembali"
            </a>
            {body}
        </div>
    }
}

#[component]
fn DetailBody(app: ApplicationDetail, viewer: Role, on_updated: Callback<ApplicationDetail>) -> impl IntoView {
    let rows = detail_rows(&app.form_data)
        .into_iter()
        .map(|(label, value)| view! { <tr><th>{label}</th><td>{value}</td></tr> })
        .collect_view();
    let revision_note = (app.status == ApplicationStatus::RevisionRequired)
        .then(|| app.latest_revision_note().map(str::to_owned))
        .flatten()
        .map(|note| {
            view! {
                <div class="callout callout--warning">
                    <strong>"Catatan revisi: "</strong>
                    {note}
                </div>
            }
        });
    let preview_href = preview_path(viewer, &app.id);
    let letter_number = app.letter_number.clone();

    view! {
        <section class="detail-page__header">
            <h1>{app.scholarship_name.clone()}</h1>
            <StatusBadge status=app.status/>
            {letter_number.map(|n| view! { <span class="detail-page__number">"No. " {n}</span> })}
        </section>
        <WorkflowStepper status=app.status current_step=app.current_step/>
        {revision_note}
        <div class="detail-page__grid">
            <section class="card">
                <h3>"Data Pemohon"</h3>
                <table class="kv-table">{rows}</table>
            </section>
            <section class="card">
                <h3>"Lampiran"</h3>
                <AttachmentList attachments=app.attachments.clone()/>
            </section>
            <section class="card">
                <h3>"Riwayat"</h3>
                <RiwayatTimeline entries=app.riwayat.clone()/>
            </section>
            <section class="card">
                <ActionPanel application=app viewer=viewer on_updated=on_updated/>
                <a class="btn" href=preview_href>
                    "Lihat Pratinjau Surat"
                </a>
            </section>
        </div>
    }
}

/// Applicant rows in display order; blanks show as `-`.
fn detail_rows(form: &FormData) -> Vec<(&'static str, String)> {
    let text = |value: &str| if value.trim().is_empty() { "-".to_owned() } else { value.trim().to_owned() };
    vec![
        ("Nama Lengkap", text(&form.nama_lengkap)),
        ("NIM", text(&form.nim)),
        ("Email", text(&form.email)),
        ("No. HP", text(&form.no_hp)),
        ("Tempat Lahir", text(&form.tempat_lahir)),
        ("Tanggal Lahir", text(&format_tanggal(&form.tanggal_lahir))),
        ("Departemen", text(&form.departemen)),
        ("Program Studi", text(&form.program_studi)),
        ("Semester", form.semester.map_or_else(|| "-".to_owned(), |s| s.to_string())),
        ("IPK", form.ipk.map_or_else(|| "-".to_owned(), |ipk| format!("{ipk:.2}"))),
    ]
}
