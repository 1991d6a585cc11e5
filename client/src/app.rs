//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    dashboard::{DashboardHome, DashboardPage},
    detail::DetailPage,
    form::FormPage,
    login::LoginPage,
    preview::PreviewPage,
};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="id">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context and sets up client-side routing. The session
/// is fetched once on mount; pages read it through `RwSignal<AuthState>`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);
    crate::util::auth::init_session(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/esurat.css"/>
        <Title text="e-Surat | Surat Rekomendasi Beasiswa"/>

        <Router>
            <main class="app">
                <Routes fallback=|| "Halaman tidak ditemukan.".into_view()>
                    <Route path=StaticSegment("") view=DashboardHome/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardHome/>
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("mahasiswa"), StaticSegment("pengajuan"))
                        view=FormPage
                    />
                    <Route path=(StaticSegment("dashboard"), ParamSegment("role")) view=DashboardPage/>
                    <Route
                        path=(
                            StaticSegment("dashboard"),
                            ParamSegment("role"),
                            StaticSegment("surat-rekomendasi"),
                            ParamSegment("id"),
                        )
                        view=DetailPage
                    />
                    <Route
                        path=(
                            StaticSegment("dashboard"),
                            ParamSegment("role"),
                            StaticSegment("surat-rekomendasi"),
                            ParamSegment("id"),
                            StaticSegment("preview"),
                        )
                        view=PreviewPage
                    />
                </Routes>
            </main>
        </Router>
    }
}
