use time::macros::{date, datetime};

use super::*;
use crate::riwayat::RiwayatEntry;
use crate::role::Role;

fn detail() -> ApplicationDetail {
    let form = FormData {
        nama_lengkap: "Siti Rahma".to_owned(),
        nim: "2106123456".to_owned(),
        tempat_lahir: "Depok".to_owned(),
        tanggal_lahir: "2003-08-17".to_owned(),
        program_studi: "Ilmu Komputer".to_owned(),
        ipk: Some(3.82),
        ..FormData::default()
    };
    let mut app = Application::new_draft("app-9", "Beasiswa Unggulan", form);
    app.status = ApplicationStatus::InProgress;
    app.current_step = 4;
    app
}

#[test]
fn format_tanggal_uses_indonesian_months() {
    assert_eq!(format_tanggal("2003-08-17"), "17 Agustus 2003");
    assert_eq!(format_tanggal("2000-01-05"), "5 Januari 2000");
    assert_eq!(format_tanggal("1999-12-31"), "31 Desember 1999");
}

#[test]
fn format_tanggal_passes_through_garbage() {
    assert_eq!(format_tanggal(""), "");
    assert_eq!(format_tanggal("17/08/2003"), "17/08/2003");
}

#[test]
fn parse_tanggal_inverts_format() {
    assert_eq!(parse_tanggal("17 Agustus 2003"), "2003-08-17");
    assert_eq!(parse_tanggal("5 januari 2000"), "2000-01-05");
    assert_eq!(parse_tanggal("31 Februari 2000"), "31 Februari 2000");
    assert_eq!(parse_tanggal("tujuh belas"), "tujuh belas");
}

#[test]
fn from_detail_projects_letter_fields() {
    let preview = PreviewData::from_detail(&detail());
    assert_eq!(preview.application_id, "app-9");
    assert_eq!(preview.nama, "Siti Rahma");
    assert_eq!(preview.tanggal_lahir, "17 Agustus 2003");
    assert_eq!(preview.ttl(), "Depok, 17 Agustus 2003");
    assert!(preview.letter_number.is_none());
    assert!(preview.tanggal_surat.is_none());
}

#[test]
fn round_trip_preserves_identity_fields() {
    let original = detail();
    let preview = PreviewData::from_detail(&original);
    let back = preview.to_detail();
    let again = PreviewData::from_detail(&back);

    assert_eq!(back.id, original.id);
    assert_eq!(back.form_data.nama_lengkap, original.form_data.nama_lengkap);
    assert_eq!(back.form_data.nim, original.form_data.nim);
    assert_eq!(back.form_data.tanggal_lahir, original.form_data.tanggal_lahir);
    assert_eq!(again, preview);
}

#[test]
fn tanggal_surat_comes_from_publish_entry() {
    let mut published = detail();
    published.status = ApplicationStatus::Completed;
    published.letter_number = Some("007/UN2.F4/KM/2025".to_owned());
    published.riwayat.push(RiwayatEntry::recorded_at(
        datetime!(2025-06-02 13:00 UTC),
        Role::Upa,
        Some(Role::Mahasiswa),
        ApplicationStatus::Completed,
        ActionType::Publish,
        None,
    ));
    let preview = PreviewData::from_detail(&published);
    assert_eq!(preview.tanggal_surat.as_deref(), Some("2 Juni 2025"));
    assert_eq!(preview.letter_number.as_deref(), Some("007/UN2.F4/KM/2025"));
}

#[test]
fn with_reservation_fills_only_missing_fields() {
    let stamp = Stamp { id: "s1".to_owned(), name: "Stempel".to_owned(), image_url: None };
    let preview = PreviewData::from_detail(&detail()).with_reservation(
        Some("010/2025".to_owned()),
        Some(stamp.clone()),
        datetime!(2025-07-09 08:00 UTC),
    );
    assert_eq!(preview.letter_number.as_deref(), Some("010/2025"));
    assert_eq!(preview.stamp, Some(stamp));
    assert_eq!(preview.tanggal_surat.as_deref(), Some("9 Juli 2025"));
}

#[test]
fn ttl_handles_missing_parts() {
    let mut preview = PreviewData::from_detail(&detail());
    preview.tempat_lahir.clear();
    assert_eq!(preview.ttl(), "17 Agustus 2003");
    preview.tanggal_lahir.clear();
    assert_eq!(preview.ttl(), "-");
    assert_eq!(format_date(date!(2024 - 02 - 29)), "29 Februari 2024");
}

#[test]
fn is_iso_date_checks_calendar() {
    assert!(is_iso_date("2003-08-17"));
    assert!(!is_iso_date("2003-02-30"));
    assert!(!is_iso_date("17 Agustus 2003"));
}
