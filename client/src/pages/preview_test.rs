use super::*;
use time::macros::datetime;
use workflow::{ApplicationStatus, FormData};

const AT: OffsetDateTime = datetime!(2025-05-20 10:00 UTC);

fn stamp() -> Stamp {
    Stamp { id: "stp-1".to_owned(), name: "Stempel Fakultas".to_owned(), image_url: None }
}

fn at_upa() -> ApplicationDetail {
    let mut app = ApplicationDetail::new_draft("app-1", "Beasiswa Unggulan", FormData {
        nama_lengkap: "Siti".to_owned(),
        ..FormData::default()
    });
    app.status = ApplicationStatus::InProgress;
    app.current_step = 4;
    app
}

#[test]
fn publish_check_returns_number_and_stamp_id() {
    assert_eq!(
        publish_check(&at_upa(), Role::Upa, Some("001/SRB/2025"), Some(&stamp()), AT),
        Ok(("001/SRB/2025".to_owned(), "stp-1".to_owned()))
    );
}

#[test]
fn publish_check_requires_number_then_stamp() {
    assert_eq!(
        publish_check(&at_upa(), Role::Upa, None, Some(&stamp()), AT),
        Err("Nomor surat belum tersedia.".to_owned())
    );
    assert_eq!(
        publish_check(&at_upa(), Role::Upa, Some("001/SRB/2025"), None, AT),
        Err("Pilih stempel terlebih dahulu.".to_owned())
    );
}

#[test]
fn publish_check_refuses_other_roles() {
    assert_eq!(
        publish_check(&at_upa(), Role::WakilDekan1, Some("001/SRB/2025"), Some(&stamp()), AT),
        Err("Tindakan ini tidak tersedia untuk pengajuan ini.".to_owned())
    );
}

#[test]
fn preview_for_unpublished_shows_reservation() {
    let data = preview_for(&at_upa(), Some("001/SRB/2025".to_owned()), Some(stamp()), AT);
    assert_eq!(data.letter_number.as_deref(), Some("001/SRB/2025"));
    assert_eq!(data.stamp, Some(stamp()));
    assert_eq!(data.tanggal_surat.as_deref(), Some("20 Mei 2025"));
}

#[test]
fn preview_for_published_ignores_reservation() {
    let mut app = at_upa();
    app.status = ApplicationStatus::Completed;
    app.letter_number = Some("009/SRB/2025".to_owned());
    let data = preview_for(&app, Some("010/SRB/2025".to_owned()), None, AT);
    assert_eq!(data.letter_number.as_deref(), Some("009/SRB/2025"));
    assert_eq!(data.tanggal_surat, None);
}
