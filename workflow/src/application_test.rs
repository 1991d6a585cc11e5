use super::*;
use crate::riwayat::ActionType;

const DETAIL_JSON: &str = r#"{
    "id": "app-7",
    "status": "IN_PROGRESS",
    "currentStep": 2,
    "scholarshipName": "Beasiswa Unggulan",
    "formData": {
        "namaLengkap": "Siti Rahma",
        "nim": "2106123456",
        "email": "siti@ui.ac.id",
        "tanggalLahir": "2003-08-17",
        "ipk": 3.82,
        "semester": 5,
        "alasan": "Membantu biaya kuliah"
    },
    "attachments": [
        {"id": "f1", "filename": "ktm.pdf", "category": "Utama", "type": "File"},
        {"id": "f2", "filename": "foto.jpg", "category": "Tambahan", "type": "Foto", "size": 2048}
    ],
    "riwayat": [
        {"senderRole": "MAHASISWA", "receiverRole": "SUPERVISOR_AKADEMIK", "status": "PENDING",
         "date": "2025-02-01", "time": "08:15", "actionType": "SUBMIT"},
        {"senderRole": "SUPERVISOR_AKADEMIK", "receiverRole": "MANAJER_TU", "status": "IN_PROGRESS",
         "date": "2025-02-02", "time": "10:00", "actionType": "APPROVE"}
    ],
    "createdAt": "2025-02-01T08:15:00Z"
}"#;

#[test]
fn detail_deserializes_backend_payload() {
    let app: Application = serde_json::from_str(DETAIL_JSON).unwrap();
    assert_eq!(app.id, "app-7");
    assert_eq!(app.status, ApplicationStatus::InProgress);
    assert_eq!(app.current_step, 2);
    assert_eq!(app.form_data.nama_lengkap, "Siti Rahma");
    assert_eq!(app.form_data.semester, Some(5));
    assert_eq!(app.attachments.len(), 2);
    assert_eq!(app.attachments[1].kind, AttachmentKind::Foto);
    assert_eq!(app.riwayat.len(), 2);
    assert_eq!(app.latest_entry().map(|e| e.action_type), Some(ActionType::Approve));
    assert!(app.created_at.is_some());
    assert!(app.letter_number.is_none());
}

#[test]
fn unknown_form_fields_are_preserved() {
    let app: Application = serde_json::from_str(DETAIL_JSON).unwrap();
    assert_eq!(
        app.form_data.extra.get("alasan"),
        Some(&serde_json::Value::String("Membantu biaya kuliah".to_owned()))
    );
    let out = serde_json::to_value(&app).unwrap();
    assert_eq!(out["formData"]["alasan"], "Membantu biaya kuliah");
}

#[test]
fn attachments_in_filters_by_category_in_order() {
    let app: Application = serde_json::from_str(DETAIL_JSON).unwrap();
    let utama: Vec<&str> = app.attachments_in(AttachmentCategory::Utama).map(|a| a.filename.as_str()).collect();
    assert_eq!(utama, vec!["ktm.pdf"]);
}

#[test]
fn new_draft_starts_at_step_zero_unpublished() {
    let app = Application::new_draft("a1", "Beasiswa", FormData::default());
    assert_eq!(app.status, ApplicationStatus::Draft);
    assert_eq!(app.current_step, 0);
    assert!(!app.is_published());
    assert!(app.riwayat.is_empty());
}

#[test]
fn blank_letter_number_is_not_published() {
    let mut app = Application::new_draft("a1", "Beasiswa", FormData::default());
    app.letter_number = Some("   ".to_owned());
    assert!(!app.is_published());
    app.letter_number = Some("001/UN2.F1/KM/2025".to_owned());
    assert!(app.is_published());
}

#[test]
fn summary_reports_pending_role_for_live_rows_only() {
    let app: Application = serde_json::from_str(DETAIL_JSON).unwrap();
    let mut summary = ApplicationSummary::from(&app);
    assert_eq!(summary.applicant_name, "Siti Rahma");
    assert_eq!(summary.pending_role(), Some(Role::ManajerTu));
    summary.status = ApplicationStatus::Rejected;
    assert_eq!(summary.pending_role(), None);
}

#[test]
fn latest_revision_note_finds_most_recent() {
    let mut app = Application::new_draft("a1", "Beasiswa", FormData::default());
    for note in ["lengkapi KTM", "perbaiki IPK"] {
        app.riwayat.push(RiwayatEntry {
            sender_role: Role::ManajerTu,
            receiver_role: Some(Role::Mahasiswa),
            status: ApplicationStatus::RevisionRequired,
            date: "2025-01-01".to_owned(),
            time: "09:00".to_owned(),
            catatan: Some(note.to_owned()),
            action_type: ActionType::Revision,
        });
    }
    assert_eq!(app.latest_revision_note(), Some("perbaiki IPK"));
}
