use proptest::prelude::*;
use proptest::test_runner::Config;
use time::macros::datetime;
use workflow::preview::PreviewData;
use workflow::{
    Action, ActionPayload, Application, ApplicationStatus, FormData, ROLE_SEQUENCE, Role, Stamp, WorkflowError,
    acting_role, apply_action, available_actions,
};

fn status_strategy() -> impl Strategy<Value = ApplicationStatus> {
    prop::sample::select(ApplicationStatus::ALL.to_vec())
}

fn role_strategy() -> impl Strategy<Value = Role> {
    prop::sample::select(ROLE_SEQUENCE.to_vec())
}

fn app(status: ApplicationStatus, step: i32) -> Application {
    let mut app = Application::new_draft("prop", "Beasiswa", FormData::default());
    app.status = status;
    app.current_step = step;
    app
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn acting_role_defined_iff_step_in_range(status in status_strategy(), step in -10_i32..15) {
        let result = acting_role(&app(status, step));
        if (0..5).contains(&step) {
            let role = result.expect("in-range step has a role");
            let claimants = ROLE_SEQUENCE.iter().filter(|r| r.position_step() == step).count();
            prop_assert_eq!(claimants, 1);
            prop_assert_eq!(role.position_step(), step);
        } else {
            prop_assert_eq!(result, Err(WorkflowError::InvalidStep { step }));
        }
    }

    #[test]
    fn terminal_applications_offer_no_actions(
        terminal in prop::sample::select(vec![ApplicationStatus::Completed, ApplicationStatus::Rejected]),
        step in -2_i32..7,
        viewer in role_strategy(),
    ) {
        prop_assert!(available_actions(&app(terminal, step), viewer).is_empty());
    }

    #[test]
    fn only_the_acting_role_sees_actions(status in status_strategy(), step in 0_i32..5, viewer in role_strategy()) {
        let current = app(status, step);
        if viewer.position_step() != step {
            prop_assert!(available_actions(&current, viewer).is_empty());
        }
    }

    #[test]
    fn every_offered_action_applies_and_appends_one_entry(status in status_strategy(), step in 0_i32..5) {
        let current = app(status, step);
        let Some(viewer) = Role::at_step(step) else { return Ok(()); };
        for action in available_actions(&current, viewer) {
            let payload = ActionPayload::new(viewer, datetime!(2025-01-01 00:00 UTC))
                .with_catatan("catatan")
                .with_letter_number("001/2025")
                .with_stamp(Stamp { id: "s".to_owned(), name: "S".to_owned(), image_url: None });
            let next = apply_action(&current, action, &payload).expect("offered action applies");
            prop_assert_eq!(next.riwayat.len(), current.riwayat.len() + 1);
            prop_assert!(next.current_step >= current.current_step || action == Action::RequestRevision);
        }
    }

    #[test]
    fn preview_round_trip_keeps_identity(
        id in "[a-z0-9-]{1,12}",
        nama in "[A-Za-z ]{0,24}",
        nim in "[0-9]{8,10}",
        year in 1970_i32..2010,
        month in 1_u8..=12,
        day in 1_u8..=28,
    ) {
        let form = FormData {
            nama_lengkap: nama.clone(),
            nim: nim.clone(),
            tanggal_lahir: format!("{year:04}-{month:02}-{day:02}"),
            ..FormData::default()
        };
        let detail = Application::new_draft(id.clone(), "Beasiswa", form);
        let preview = PreviewData::from_detail(&detail);
        let back = PreviewData::from_detail(&preview.to_detail());
        prop_assert_eq!(&back.application_id, &id);
        prop_assert_eq!(&back.nama, &nama);
        prop_assert_eq!(&back.nim, &nim);
        prop_assert_eq!(&back.tanggal_lahir, &preview.tanggal_lahir);
    }
}
