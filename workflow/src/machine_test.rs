use time::macros::datetime;

use super::*;
use crate::application::FormData;
use crate::role::ROLE_SEQUENCE;

fn app(status: ApplicationStatus, step: i32) -> Application {
    let mut app = Application::new_draft("app-1", "Beasiswa Unggulan", FormData::default());
    app.status = status;
    app.current_step = step;
    app
}

fn payload(viewer: Role) -> ActionPayload {
    ActionPayload::new(viewer, datetime!(2025-03-04 09:30 UTC))
}

fn stamp() -> Stamp {
    Stamp { id: "stp-1".to_owned(), name: "Stempel Fakultas".to_owned(), image_url: None }
}

fn actions(list: &[Action]) -> BTreeSet<Action> {
    list.iter().copied().collect()
}

// =============================================================================
// acting_role
// =============================================================================

#[test]
fn acting_role_follows_step() {
    for (idx, role) in ROLE_SEQUENCE.iter().enumerate() {
        let step = i32::try_from(idx).unwrap();
        assert_eq!(acting_role(&app(ApplicationStatus::InProgress, step)), Ok(*role));
    }
}

#[test]
fn acting_role_out_of_range_is_invalid_step() {
    assert_eq!(acting_role(&app(ApplicationStatus::InProgress, 5)), Err(WorkflowError::InvalidStep { step: 5 }));
    assert_eq!(acting_role(&app(ApplicationStatus::InProgress, -1)), Err(WorkflowError::InvalidStep { step: -1 }));
}

#[test]
fn acting_role_in_conflicting_table_takes_first_in_sequence() {
    let mut entries = RoleTable::standard().entries().to_vec();
    entries[1].position = 0;
    let table = RoleTable::from_entries(entries);

    assert_eq!(table.conflicts(), vec![(0, vec![Role::Mahasiswa, Role::SupervisorAkademik])]);
    let draft = app(ApplicationStatus::Draft, 0);
    assert_eq!(acting_role_in(&table, &draft), Ok(Role::Mahasiswa));
    assert_eq!(acting_role_in(&table, &app(ApplicationStatus::Pending, 1)), Err(WorkflowError::InvalidStep { step: 1 }));
    assert_eq!(actions_at_in(&table, draft.status, 0, Role::Mahasiswa), actions(&[Action::Submit]));
    assert!(actions_at_in(&table, draft.status, 0, Role::SupervisorAkademik).is_empty());
}

// =============================================================================
// available_actions
// =============================================================================

#[test]
fn pending_at_step_zero_offers_nothing_to_anyone() {
    let pending = app(ApplicationStatus::Pending, 0);
    assert!(available_actions(&pending, Role::SupervisorAkademik).is_empty());
    assert!(available_actions(&pending, Role::Mahasiswa).is_empty());
}

#[test]
fn draft_offers_submit_to_mahasiswa_only() {
    let draft = app(ApplicationStatus::Draft, 0);
    assert_eq!(available_actions(&draft, Role::Mahasiswa), actions(&[Action::Submit]));
    assert!(available_actions(&draft, Role::SupervisorAkademik).is_empty());
}

#[test]
fn reviewers_get_approve_reject_revision_on_their_step() {
    for role in [Role::SupervisorAkademik, Role::ManajerTu, Role::WakilDekan1] {
        let current = app(ApplicationStatus::InProgress, role.position_step());
        assert_eq!(
            available_actions(&current, role),
            actions(&[Action::Approve, Action::Reject, Action::RequestRevision])
        );
        assert!(available_actions(&current, Role::Upa).is_empty());
    }
}

#[test]
fn upa_gets_publish_and_revision() {
    let at_upa = app(ApplicationStatus::InProgress, 4);
    assert_eq!(available_actions(&at_upa, Role::Upa), actions(&[Action::Publish, Action::RequestRevision]));
    assert!(available_actions(&at_upa, Role::WakilDekan1).is_empty());
}

#[test]
fn terminal_statuses_offer_nothing() {
    for status in [ApplicationStatus::Completed, ApplicationStatus::Rejected] {
        for step in 0..5 {
            for role in ROLE_SEQUENCE {
                assert!(available_actions(&app(status, step), role).is_empty());
            }
        }
    }
}

#[test]
fn out_of_range_step_offers_nothing() {
    for role in ROLE_SEQUENCE {
        assert!(available_actions(&app(ApplicationStatus::InProgress, 9), role).is_empty());
    }
}

// =============================================================================
// apply_action
// =============================================================================

#[test]
fn submit_draft_moves_to_pending_at_supervisor() {
    let next = apply_action(&app(ApplicationStatus::Draft, 0), Action::Submit, &payload(Role::Mahasiswa)).unwrap();
    assert_eq!(next.status, ApplicationStatus::Pending);
    assert_eq!(next.current_step, 1);
    let entry = next.latest_entry().unwrap();
    assert_eq!(entry.action_type, ActionType::Submit);
    assert_eq!(entry.sender_role, Role::Mahasiswa);
    assert_eq!(entry.receiver_role, Some(Role::SupervisorAkademik));
    assert_eq!(entry.date, "2025-03-04");
    assert_eq!(entry.time, "09:30");
}

#[test]
fn approve_advances_one_step() {
    let current = app(ApplicationStatus::Pending, 1);
    let next = apply_action(&current, Action::Approve, &payload(Role::SupervisorAkademik)).unwrap();
    assert_eq!(next.status, ApplicationStatus::InProgress);
    assert_eq!(next.current_step, 2);
    assert_eq!(next.riwayat.len(), current.riwayat.len() + 1);
    assert_eq!(next.latest_entry().unwrap().receiver_role, Some(Role::ManajerTu));
}

#[test]
fn approve_out_of_turn_is_invalid_transition() {
    let current = app(ApplicationStatus::InProgress, 2);
    let err = apply_action(&current, Action::Approve, &payload(Role::SupervisorAkademik)).unwrap_err();
    assert_eq!(
        err,
        WorkflowError::InvalidTransition {
            status: ApplicationStatus::InProgress,
            action: Action::Approve,
            viewer: Role::SupervisorAkademik,
        }
    );
}

#[test]
fn revision_without_catatan_fails() {
    let current = app(ApplicationStatus::InProgress, 3);
    let err = apply_action(&current, Action::RequestRevision, &payload(Role::WakilDekan1)).unwrap_err();
    assert_eq!(err, WorkflowError::MissingComment);

    let blank = payload(Role::WakilDekan1).with_catatan("   ");
    assert_eq!(apply_action(&current, Action::RequestRevision, &blank).unwrap_err(), WorkflowError::MissingComment);
}

#[test]
fn revision_with_catatan_resets_to_mahasiswa() {
    let current = app(ApplicationStatus::InProgress, 3);
    let with_note = payload(Role::WakilDekan1).with_catatan("  Lampirkan transkrip terbaru ");
    let next = apply_action(&current, Action::RequestRevision, &with_note).unwrap();
    assert_eq!(next.status, ApplicationStatus::RevisionRequired);
    assert_eq!(next.current_step, 0);
    assert_eq!(acting_role(&next), Ok(Role::Mahasiswa));
    let entry = next.latest_entry().unwrap();
    assert_eq!(entry.action_type, ActionType::Revision);
    assert_eq!(entry.catatan.as_deref(), Some("Lampirkan transkrip terbaru"));
}

#[test]
fn resubmission_after_revision_resumes_in_progress() {
    let current = app(ApplicationStatus::RevisionRequired, 0);
    let next = apply_action(&current, Action::Submit, &payload(Role::Mahasiswa)).unwrap();
    assert_eq!(next.status, ApplicationStatus::InProgress);
    assert_eq!(next.current_step, 1);
}

#[test]
fn reject_is_terminal_and_cannot_repeat() {
    let current = app(ApplicationStatus::InProgress, 2);
    let rejected = apply_action(&current, Action::Reject, &payload(Role::ManajerTu)).unwrap();
    assert_eq!(rejected.status, ApplicationStatus::Rejected);
    assert_eq!(rejected.current_step, 2);

    let err = apply_action(&rejected, Action::Reject, &payload(Role::ManajerTu)).unwrap_err();
    assert!(matches!(err, WorkflowError::InvalidTransition { status: ApplicationStatus::Rejected, .. }));
}

#[test]
fn publish_assigns_number_and_stamp_once() {
    let current = app(ApplicationStatus::InProgress, 4);
    let publish = payload(Role::Upa).with_letter_number("012/UN2.F4/KM.01/2025").with_stamp(stamp());
    let done = apply_action(&current, Action::Publish, &publish).unwrap();
    assert_eq!(done.status, ApplicationStatus::Completed);
    assert_eq!(done.letter_number.as_deref(), Some("012/UN2.F4/KM.01/2025"));
    assert_eq!(done.stamp_id.as_deref(), Some("stp-1"));
    assert_eq!(done.latest_entry().unwrap().action_type, ActionType::Publish);

    let again = payload(Role::Upa).with_letter_number("013/UN2.F4/KM.01/2025").with_stamp(stamp());
    let err = apply_action(&done, Action::Publish, &again).unwrap_err();
    assert!(matches!(err, WorkflowError::InvalidTransition { action: Action::Publish, .. }));
}

#[test]
fn publish_requires_number_and_stamp() {
    let current = app(ApplicationStatus::InProgress, 4);
    let no_number = payload(Role::Upa).with_stamp(stamp());
    assert_eq!(apply_action(&current, Action::Publish, &no_number).unwrap_err(), WorkflowError::MissingLetterNumber);

    let no_stamp = payload(Role::Upa).with_letter_number("012/UN2/2025");
    assert_eq!(apply_action(&current, Action::Publish, &no_stamp).unwrap_err(), WorkflowError::MissingStamp);
}

#[test]
fn publish_by_non_upa_is_invalid() {
    let current = app(ApplicationStatus::InProgress, 4);
    let publish = payload(Role::WakilDekan1).with_letter_number("012").with_stamp(stamp());
    assert!(matches!(
        apply_action(&current, Action::Publish, &publish),
        Err(WorkflowError::InvalidTransition { .. })
    ));
}

#[test]
fn invalid_step_surfaces_before_availability() {
    let broken = app(ApplicationStatus::InProgress, 7);
    assert_eq!(
        apply_action(&broken, Action::Approve, &payload(Role::Upa)),
        Err(WorkflowError::InvalidStep { step: 7 })
    );
}

#[test]
fn apply_does_not_mutate_input() {
    let current = app(ApplicationStatus::Pending, 1);
    let before = current.clone();
    let _ = apply_action(&current, Action::Approve, &payload(Role::SupervisorAkademik)).unwrap();
    assert_eq!(current, before);
}

// =============================================================================
// project
// =============================================================================

#[test]
fn project_matches_full_happy_path() {
    let mut current = app(ApplicationStatus::Draft, 0);
    current = apply_action(&current, Action::Submit, &payload(Role::Mahasiswa)).unwrap();
    for role in [Role::SupervisorAkademik, Role::ManajerTu, Role::WakilDekan1] {
        current = apply_action(&current, Action::Approve, &payload(role)).unwrap();
    }
    let publish = payload(Role::Upa).with_letter_number("001/2025").with_stamp(stamp());
    current = apply_action(&current, Action::Publish, &publish).unwrap();

    assert_eq!(current.riwayat.len(), 5);
    assert_eq!(project(&current.riwayat), Ok((ApplicationStatus::Completed, 4)));
}

#[test]
fn project_handles_revision_loop() {
    let mut current = app(ApplicationStatus::Draft, 0);
    current = apply_action(&current, Action::Submit, &payload(Role::Mahasiswa)).unwrap();
    current = apply_action(&current, Action::Approve, &payload(Role::SupervisorAkademik)).unwrap();
    let revise = payload(Role::ManajerTu).with_catatan("Lengkapi surat keterangan aktif");
    current = apply_action(&current, Action::RequestRevision, &revise).unwrap();
    current = apply_action(&current, Action::Submit, &payload(Role::Mahasiswa)).unwrap();

    assert_eq!(project(&current.riwayat), Ok((current.status, current.current_step)));
    assert_eq!(current.status, ApplicationStatus::InProgress);
    assert_eq!(current.current_step, 1);
}

#[test]
fn project_rejects_out_of_order_history() {
    let mut current = app(ApplicationStatus::Pending, 1);
    current = apply_action(&current, Action::Approve, &payload(Role::SupervisorAkademik)).unwrap();
    // History starts with an approval before any submission.
    let err = project(&current.riwayat).unwrap_err();
    assert!(matches!(err, WorkflowError::InvalidTransition { status: ApplicationStatus::Draft, .. }));
}

#[test]
fn project_empty_history_is_draft() {
    assert_eq!(project(&[]), Ok((ApplicationStatus::Draft, 0)));
}
