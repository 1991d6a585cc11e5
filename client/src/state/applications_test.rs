use super::*;
use workflow::ApplicationStatus;

fn summary(id: &str, status: ApplicationStatus, step: i32) -> ApplicationSummary {
    ApplicationSummary {
        id: id.to_owned(),
        scholarship_name: "Beasiswa Unggulan".to_owned(),
        applicant_name: "Siti".to_owned(),
        nim: "12345".to_owned(),
        status,
        current_step: step,
        letter_number: None,
        created_at: None,
    }
}

#[test]
fn begin_sets_loading_and_clears_error() {
    let mut state = ApplicationsState { error: Some("old".to_owned()), ..ApplicationsState::default() };
    state.begin();
    assert!(state.loading);
    assert_eq!(state.error, None);
}

#[test]
fn apply_success_stores_items() {
    let mut state = ApplicationsState::default();
    state.begin();
    state.apply(Ok(vec![summary("a", ApplicationStatus::Pending, 1)]));
    assert!(!state.loading);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.error, None);
}

#[test]
fn apply_failure_clears_items_and_sets_message() {
    let mut state = ApplicationsState { items: vec![summary("a", ApplicationStatus::Pending, 1)], ..Default::default() };
    state.apply(Err(ApiError::Status { endpoint: "/api/x".to_owned(), status: 500 }));
    assert!(state.items.is_empty());
    assert_eq!(state.error.as_deref(), Some("Gagal memuat pengajuan: /api/x failed: 500"));
}

#[test]
fn stats_and_rows_follow_viewer_and_filter() {
    let mut state = ApplicationsState::default();
    state.apply(Ok(vec![
        summary("a", ApplicationStatus::Pending, 1),
        summary("b", ApplicationStatus::InProgress, 2),
        summary("c", ApplicationStatus::Rejected, 1),
    ]));
    let stats = state.stats(Role::SupervisorAkademik);
    assert_eq!(stats.total, 3);
    assert_eq!(stats.awaiting_viewer, 1);
    assert_eq!(stats.rejected, 1);

    state.filter = DashboardFilter::NeedsAction;
    let rows = state.rows(Role::SupervisorAkademik);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, "a");
}

#[test]
fn detail_failure_is_not_found_with_id() {
    let state = DetailState::from_result("app-9", Err(ApiError::Network("offline".to_owned())));
    assert_eq!(state, DetailState::NotFound { id: "app-9".to_owned() });
    assert!(state.detail().is_none());
}

#[test]
fn detail_success_is_loaded() {
    let detail = ApplicationDetail::new_draft("app-1", "Beasiswa", workflow::FormData::default());
    let state = DetailState::from_result("app-1", Ok(detail));
    assert_eq!(state.detail().map(|d| d.id.as_str()), Some("app-1"));
}

#[test]
fn not_found_message_echoes_id() {
    assert_eq!(not_found_message("xyz"), "Pengajuan dengan ID \"xyz\" tidak ditemukan.");
}
