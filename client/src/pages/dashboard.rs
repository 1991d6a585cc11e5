//! Role dashboards: summary counters and the application table.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/dashboard` forwards a signed-in user to their own role dashboard.
//! `/dashboard/:role` is one page for every role; the role slug selects the
//! `RoleView` row and the backend scopes the list to the signed-in user.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};
use workflow::dashboard::{DashboardFilter, DashboardStats};
use workflow::navigation::{detail_path, form_path, preview_path};
use workflow::preview::format_date;
use workflow::{Action, ApplicationSummary, Role, actions_at};

use crate::components::app_header::AppHeader;
use crate::components::status_badge::StatusBadge;
use crate::pages::role_view::RoleView;
use crate::state::applications::ApplicationsState;
use crate::state::auth::AuthState;
use crate::util::auth::{install_role_redirect, install_unauth_redirect};

/// `/` and `/dashboard`: send the user to their role dashboard.
#[component]
pub fn DashboardHome() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());

    Effect::new(move || {
        if let Some(role) = auth.get().role() {
            navigate(&role.dashboard_path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <div class="dashboard-page">
            <p>
                {move || {
                    let state = auth.get();
                    if state.loading || state.role().is_some() {
                        "Memuat..."
                    } else if state.is_authenticated() {
                        "Akun Anda belum memiliki peran. Hubungi administrator."
                    } else {
                        "Mengalihkan ke halaman masuk..."
                    }
                }}
            </p>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();
    let navigate = use_navigate();
    let route_role = move || params.with(|p| p.get("role")).and_then(|slug| Role::from_slug(&slug));

    install_unauth_redirect(auth, navigate.clone());
    install_role_redirect(auth, route_role, navigate);

    let list = RwSignal::new(ApplicationsState::default());
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        let state = auth.get();
        if state.loading || state.role().is_none() || state.role() != route_role() {
            return;
        }
        requested.set(true);
        list.update(ApplicationsState::begin);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_applications().await;
            list.update(|l| l.apply(result));
        });
    });

    let ready = move || {
        let state = auth.get();
        !state.loading && state.role().is_some() && state.role() == route_role()
    };

    view! {
        <Show
            when=ready
            fallback=move || view! { <div class="dashboard-page"><p>"Memuat..."</p></div> }
        >
            {move || route_role().map(|viewer| view! { <RoleDashboard viewer=viewer list=list/> })}
        </Show>
    }
}

#[component]
fn RoleDashboard(viewer: Role, list: RwSignal<ApplicationsState>) -> impl IntoView {
    let view_cfg = RoleView::for_role(viewer);
    let cards = move || {
        stat_cards(&list.get().stats(viewer))
            .into_iter()
            .map(|(label, value)| {
                view! {
                    <div class="stat-card">
                        <span class="stat-card__value">{value}</span>
                        <span class="stat-card__label">{label}</span>
                    </div>
                }
            })
            .collect_view()
    };
    let tabs = move || {
        DashboardFilter::ALL
            .into_iter()
            .map(|filter| {
                let class = move || if list.get().filter == filter { "tab tab--active" } else { "tab" };
                view! {
                    <button
                        class=class
                        on:click=move |_| list.update(|l| l.filter = filter)
                    >
                        {filter.label()}
                    </button>
                }
            })
            .collect_view()
    };
    let rows = move || {
        let state = list.get();
        if state.loading {
            return view! { <p>"Memuat pengajuan..."</p> }.into_any();
        }
        if let Some(error) = state.error.clone() {
            return view! { <p class="dashboard-page__error">{error}</p> }.into_any();
        }
        let rows = state.rows(viewer);
        if rows.is_empty() {
            return view! { <p class="dashboard-page__empty">{view_cfg.empty_message}</p> }.into_any();
        }
        let body = rows
            .into_iter()
            .map(|row| {
                let href = row_link(&row, viewer);
                let tanggal = row.created_at.map(|at| format_date(at.date())).unwrap_or_default();
                let number = row.letter_number.clone().unwrap_or_else(|| "-".to_owned());
                view! {
                    <tr>
                        <td>
                            <a href=href>{row.scholarship_name.clone()}</a>
                        </td>
                        {view_cfg
                            .show_applicant
                            .then(|| view! { <td>{row.applicant_name.clone()} " " <small>{row.nim.clone()}</small></td> })}
                        <td>{tanggal}</td>
                        <td>
                            <StatusBadge status=row.status/>
                        </td>
                        {view_cfg.show_letter_number.then(|| view! { <td>{number}</td> })}
                    </tr>
                }
            })
            .collect_view();
        view! {
            <table class="app-table">
                <thead>
                    <tr>
                        <th>"Beasiswa"</th>
                        {view_cfg.show_applicant.then(|| view! { <th>"Pemohon"</th> })}
                        <th>"Tanggal"</th>
                        <th>"Status"</th>
                        {view_cfg.show_letter_number.then(|| view! { <th>"Nomor Surat"</th> })}
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        }
        .into_any()
    };

    view! {
        <div class="dashboard-page">
            <AppHeader/>
            <section class="dashboard-page__intro">
                <h1>{view_cfg.title}</h1>
                <p>{view_cfg.description()}</p>
                {view_cfg
                    .can_create
                    .then(|| {
                        view! {
                            <a class="btn btn--primary" href=form_path(None)>
                                "+ Ajukan Surat Rekomendasi"
                            </a>
                        }
                    })}
            </section>
            <section class="dashboard-page__stats">{cards}</section>
            <section class="dashboard-page__list">
                <h2>{view_cfg.list_heading}</h2>
                <div class="tabs">{tabs}</div>
                {rows}
            </section>
        </div>
    }
}

/// Counter cards in display order.
fn stat_cards(stats: &DashboardStats) -> [(&'static str, usize); 4] {
    [
        ("Total Pengajuan", stats.total),
        ("Perlu Tindakan", stats.awaiting_viewer),
        ("Selesai", stats.completed),
        ("Ditolak", stats.rejected),
    ]
}

/// Where a table row links for `viewer`: preview when UPA can publish, the form
/// when the Mahasiswa can edit, otherwise the detail page.
fn row_link(row: &ApplicationSummary, viewer: Role) -> String {
    let actions = actions_at(row.status, row.current_step, viewer);
    if actions.contains(&Action::Publish) {
        preview_path(viewer, &row.id)
    } else if actions.contains(&Action::Submit) {
        form_path(Some(&row.id))
    } else {
        detail_path(viewer, &row.id)
    }
}
