use super::*;
use crate::application::FormData;
use crate::status::ApplicationStatus;

fn app(status: ApplicationStatus, step: i32) -> Application {
    let mut app = Application::new_draft("a-42", "Beasiswa", FormData::default());
    app.status = status;
    app.current_step = step;
    app
}

#[test]
fn protected_prefix_matches_segments_only() {
    assert!(is_protected("/dashboard"));
    assert!(is_protected("/dashboard/upa"));
    assert!(!is_protected("/dashboards"));
    assert!(!is_protected("/login"));
    assert!(!is_protected("/"));
}

#[test]
fn unauthenticated_dashboard_goes_to_login_with_destination() {
    assert_eq!(
        guard("/dashboard/upa/surat-rekomendasi/a1", None, false),
        GuardDecision::Login { redirect: "/dashboard/upa/surat-rekomendasi/a1".to_owned() }
    );
    assert_eq!(
        guard("/dashboard/mahasiswa/pengajuan", Some("id=a1"), false),
        GuardDecision::Login { redirect: "/dashboard/mahasiswa/pengajuan?id=a1".to_owned() }
    );
    assert_eq!(
        guard("/dashboard", Some(""), false),
        GuardDecision::Login { redirect: "/dashboard".to_owned() }
    );
}

#[test]
fn authenticated_requests_pass_and_login_bounces() {
    assert_eq!(guard("/dashboard/upa", None, true), GuardDecision::Allow);
    assert_eq!(guard("/login", None, true), GuardDecision::Redirect("/dashboard".to_owned()));
    assert_eq!(guard("/login", None, false), GuardDecision::Allow);
    assert_eq!(guard("/", None, false), GuardDecision::Allow);
}

#[test]
fn safe_redirect_target_rejects_external_urls() {
    assert_eq!(safe_redirect_target(Some("/dashboard/upa")), "/dashboard/upa");
    assert_eq!(safe_redirect_target(Some("//evil.example")), "/dashboard");
    assert_eq!(safe_redirect_target(Some("https://evil.example")), "/dashboard");
    assert_eq!(safe_redirect_target(Some("/x?next=http://a")), "/dashboard");
    assert_eq!(safe_redirect_target(None), "/dashboard");
}

#[test]
fn home_for_uses_role_dashboard() {
    assert_eq!(home_for(Some(Role::ManajerTu)), "/dashboard/manajer-tu");
    assert_eq!(home_for(None), "/login");
}

#[test]
fn route_for_sends_upa_to_preview_when_publishable() {
    let at_upa = app(ApplicationStatus::InProgress, 4);
    assert_eq!(route_for(&at_upa, Role::Upa), "/dashboard/upa/surat-rekomendasi/a-42/preview");
    assert_eq!(route_for(&at_upa, Role::ManajerTu), "/dashboard/manajer-tu/surat-rekomendasi/a-42");
}

#[test]
fn route_for_sends_mahasiswa_to_form_while_editable() {
    let revision = app(ApplicationStatus::RevisionRequired, 0);
    assert_eq!(route_for(&revision, Role::Mahasiswa), "/dashboard/mahasiswa/pengajuan?id=a-42");
    let pending = app(ApplicationStatus::Pending, 1);
    assert_eq!(route_for(&pending, Role::Mahasiswa), "/dashboard/mahasiswa/surat-rekomendasi/a-42");
}

#[test]
fn after_action_returns_to_dashboard() {
    assert_eq!(after_action_redirect(Role::WakilDekan1), "/dashboard/wakil-dekan-1");
    assert_eq!(form_path(None), "/dashboard/mahasiswa/pengajuan");
}
