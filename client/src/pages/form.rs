//! Mahasiswa submission form (`/dashboard/mahasiswa/pengajuan[?id=]`).
//!
//! SYSTEM CONTEXT
//! ==============
//! A four-step wizard over `FormState`. "Simpan Draft" creates or updates the
//! draft without validation; "Ajukan" validates every step, saves, then posts
//! the submit action. With `?id=` the existing application is loaded and only
//! editable while it is a draft or returned for revision.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};
use workflow::Role;
use workflow::navigation::{after_action_redirect, detail_path};

use crate::components::app_header::AppHeader;
use crate::state::applications::not_found_message;
use crate::state::auth::AuthState;
use crate::state::form::{FormState, FormStep, is_editable};
use crate::util::auth::{install_role_redirect, install_unauth_redirect};

/// Load outcome for the form route.
#[derive(Clone, Debug, PartialEq)]
enum FormLoad {
    Loading,
    Ready,
    Locked { id: String },
    Missing { id: String },
}

/// Text input bound to one `FormState` field.
#[derive(Clone, Copy)]
struct Field {
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    get: fn(&FormState) -> String,
    set: fn(&mut FormState, String),
}

const DATA_DIRI: [Field; 6] = [
    Field {
        label: "Nama Lengkap",
        input_type: "text",
        placeholder: "",
        get: |f| f.nama_lengkap.clone(),
        set: |f, v| f.nama_lengkap = v,
    },
    Field { label: "NIM", input_type: "text", placeholder: "1301190001", get: |f| f.nim.clone(), set: |f, v| f.nim = v },
    Field { label: "Email", input_type: "email", placeholder: "", get: |f| f.email.clone(), set: |f, v| f.email = v },
    Field {
        label: "No. HP",
        input_type: "tel",
        placeholder: "+62812...",
        get: |f| f.no_hp.clone(),
        set: |f, v| f.no_hp = v,
    },
    Field {
        label: "Tempat Lahir",
        input_type: "text",
        placeholder: "",
        get: |f| f.tempat_lahir.clone(),
        set: |f, v| f.tempat_lahir = v,
    },
    Field {
        label: "Tanggal Lahir",
        input_type: "date",
        placeholder: "",
        get: |f| f.tanggal_lahir.clone(),
        set: |f, v| f.tanggal_lahir = v,
    },
];

const DATA_AKADEMIK: [Field; 4] = [
    Field {
        label: "Departemen",
        input_type: "text",
        placeholder: "",
        get: |f| f.departemen.clone(),
        set: |f, v| f.departemen = v,
    },
    Field {
        label: "Program Studi",
        input_type: "text",
        placeholder: "",
        get: |f| f.program_studi.clone(),
        set: |f, v| f.program_studi = v,
    },
    Field {
        label: "Semester",
        input_type: "number",
        placeholder: "1-14",
        get: |f| f.semester.clone(),
        set: |f, v| f.semester = v,
    },
    Field { label: "IPK", input_type: "text", placeholder: "3.75", get: |f| f.ipk.clone(), set: |f, v| f.ipk = v },
];

const BEASISWA: [Field; 1] = [Field {
    label: "Nama Beasiswa",
    input_type: "text",
    placeholder: "Beasiswa Unggulan",
    get: |f| f.scholarship_name.clone(),
    set: |f, v| f.scholarship_name = v,
}];

fn fields_for(step: FormStep) -> &'static [Field] {
    match step {
        FormStep::DataDiri => &DATA_DIRI,
        FormStep::DataAkademik => &DATA_AKADEMIK,
        FormStep::Beasiswa => &BEASISWA,
        FormStep::Tinjau => &[],
    }
}

/// `(label, value)` pairs shown on the review step.
fn review_rows(form: &FormState) -> Vec<(&'static str, String)> {
    DATA_DIRI
        .iter()
        .chain(DATA_AKADEMIK.iter())
        .chain(BEASISWA.iter())
        .map(|field| {
            let value = (field.get)(form);
            (field.label, if value.trim().is_empty() { "-".to_owned() } else { value.trim().to_owned() })
        })
        .collect()
}

#[component]
pub fn FormPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let query = use_query_map();
    let navigate = use_navigate();
    let edit_id = move || query.with(|q| q.get("id")).filter(|id| !id.is_empty());

    install_unauth_redirect(auth, navigate.clone());
    install_role_redirect(auth, || Some(Role::Mahasiswa), navigate.clone());

    let form = RwSignal::new(FormState::default());
    let load = RwSignal::new(FormLoad::Loading);
    let requested = RwSignal::new(false);
    Effect::new(move || {
        let state = auth.get();
        if requested.get_untracked() || state.loading || state.role() != Some(Role::Mahasiswa) {
            return;
        }
        requested.set(true);
        match edit_id() {
            None => {
                let (nama, email) = state.user.as_ref().map(|u| (u.name.clone(), u.email.clone())).unwrap_or_default();
                form.set(FormState::blank(&nama, &email));
                load.set(FormLoad::Ready);
            }
            Some(id) => {
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    match crate::net::api::fetch_application(&id).await {
                        Ok(detail) if is_editable(&detail) => {
                            form.set(FormState::from_detail(&detail));
                            load.set(FormLoad::Ready);
                        }
                        Ok(_) => load.set(FormLoad::Locked { id }),
                        Err(e) => {
                            log::warn!("application {id} unavailable: {e}");
                            load.set(FormLoad::Missing { id });
                        }
                    }
                });
                #[cfg(not(feature = "hydrate"))]
                let _ = (id, is_editable);
            }
        }
    });

    let redirect_to = RwSignal::new(None::<String>);
    Effect::new(move || {
        if let Some(target) = redirect_to.get() {
            redirect_to.set(None);
            navigate(&target, NavigateOptions::default());
        }
    });

    let on_save = move |_| {
        let state = form.get();
        if state.saving {
            return;
        }
        let request = state.draft_request();
        form.update(FormState::begin_save);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::save_application(state.id.as_deref(), &request).await {
                Ok(saved) => form.update(|f| f.draft_saved(saved.id)),
                Err(e) => form.update(|f| f.fail(format!("Gagal menyimpan draft: {e}"))),
            }
            form.update(|f| f.saving = false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            form.update(|f| f.saving = false);
        }
    };

    let on_submit = move |_| {
        let state = form.get();
        if state.saving {
            return;
        }
        let request = match state.to_request() {
            Ok(request) => request,
            Err(msg) => {
                form.update(|f| f.fail(msg));
                return;
            }
        };
        form.update(FormState::begin_save);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match crate::net::api::save_application(state.id.as_deref(), &request).await {
                Ok(saved) => {
                    form.update(|f| f.record_saved(saved.id.clone()));
                    crate::net::api::send_action(&saved.id, workflow::Action::Submit, None, None).await
                }
                Err(e) => Err(e),
            };
            match result {
                Ok(_) => redirect_to.set(Some(after_action_redirect(Role::Mahasiswa))),
                Err(e) => form.update(|f| f.fail(format!("Pengajuan gagal: {e}"))),
            }
            form.update(|f| f.saving = false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            form.update(|f| f.saving = false);
        }
    };

    let step_tabs = move || {
        let current = form.with(|f| f.step);
        FormStep::ALL
            .into_iter()
            .map(|step| {
                let class = if step == current { "wizard__step wizard__step--active" } else { "wizard__step" };
                view! { <li class=class>{step.label()}</li> }
            })
            .collect_view()
    };

    let step_body = move || {
        let step = form.with(|f| f.step);
        if step == FormStep::Tinjau {
            let rows = form
                .with(review_rows)
                .into_iter()
                .map(|(label, value)| view! { <tr><th>{label}</th><td>{value}</td></tr> })
                .collect_view();
            return view! { <table class="kv-table">{rows}</table> }.into_any();
        }
        fields_for(step)
            .iter()
            .copied()
            .map(|field| {
                view! {
                    <label class="form-field">
                        <span>{field.label}</span>
                        <input
                            type=field.input_type
                            placeholder=field.placeholder
                            prop:value=move || form.with(field.get)
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| (field.set)(f, value));
                            }
                        />
                    </label>
                }
            })
            .collect_view()
            .into_any()
    };

    let body = move || match load.get() {
        FormLoad::Loading => view! { <p>"Memuat formulir..."</p> }.into_any(),
        FormLoad::Missing { id } => view! { <p class="form-page__notice">{not_found_message(&id)}</p> }.into_any(),
        FormLoad::Locked { id } => view! {
            <p class="form-page__notice">
                "Pengajuan ini sedang diproses dan tidak dapat diubah. "
                <a href=detail_path(Role::Mahasiswa, &id)>"Lihat detail"</a>
            </p>
        }
        .into_any(),
        FormLoad::Ready => view! {
            <Show when=move || form.with(|f| f.revision_note.is_some())>
                <div class="callout callout--warning">
                    <strong>"Catatan revisi: "</strong>
                    {move || form.with(|f| f.revision_note.clone().unwrap_or_default())}
                </div>
            </Show>
            <ol class="wizard">{step_tabs}</ol>
            <div class="form-page__fields">{step_body}</div>
            <Show when=move || form.with(|f| f.error.is_some())>
                <p class="form-page__message">{move || form.with(|f| f.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show when=move || form.with(|f| f.notice.is_some())>
                <p class="form-page__notice-ok">{move || form.with(|f| f.notice.clone().unwrap_or_default())}</p>
            </Show>
            <div class="form-page__buttons">
                <button
                    class="btn"
                    disabled=move || form.with(|f| f.step.prev().is_none())
                    on:click=move |_| form.update(FormState::back)
                >
                    "Kembali"
                </button>
                <button class="btn" disabled=move || form.with(|f| f.saving) on:click=on_save>
                    "Simpan Draft"
                </button>
                <Show
                    when=move || form.with(|f| f.step == FormStep::Tinjau)
                    fallback=move || {
                        view! {
                            <button class="btn btn--primary" on:click=move |_| form.update(FormState::advance)>
                                "Lanjut"
                            </button>
                        }
                    }
                >
                    <button class="btn btn--primary" disabled=move || form.with(|f| f.saving) on:click=on_submit>
                        "Ajukan"
                    </button>
                </Show>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="form-page">
            <AppHeader/>
            <a class="detail-page__back" href=Role::Mahasiswa.dashboard_path()>
                "\u{2190} Kembali ke dashboard"
            </a>
            <h1>"Pengajuan Surat Rekomendasi Beasiswa"</h1>
            {body}
        </div>
    }
}
