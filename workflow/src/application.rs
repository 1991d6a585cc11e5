//! Application records as exchanged with the backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase JSON so serde round-trips stay
//! lossless. Unknown form fields are kept in `FormData::extra` rather than
//! dropped.

#[cfg(test)]
#[path = "application_test.rs"]
mod application_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::riwayat::RiwayatEntry;
use crate::role::Role;
use crate::status::ApplicationStatus;

/// Whether an attachment is a required (`Utama`) or supporting (`Tambahan`) file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttachmentCategory {
    #[default]
    Utama,
    Tambahan,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttachmentKind {
    #[default]
    File,
    Foto,
    Lainnya,
}

/// An uploaded file attached to an application.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: String,
    pub filename: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub category: AttachmentCategory,
    #[serde(rename = "type", default)]
    pub kind: AttachmentKind,
    #[serde(default)]
    pub size: Option<u64>,
}

/// Digital stamp (stempel) applied to a published letter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stamp {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Applicant-supplied form fields.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormData {
    pub nama_lengkap: String,
    pub nim: String,
    pub email: String,
    pub departemen: String,
    pub program_studi: String,
    pub tempat_lahir: String,
    /// ISO `YYYY-MM-DD`.
    pub tanggal_lahir: String,
    pub no_hp: String,
    pub semester: Option<u32>,
    pub ipk: Option<f64>,
    pub ips: Option<f64>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// The unit of work moving through the approval sequence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub status: ApplicationStatus,
    pub current_step: i32,
    #[serde(default)]
    pub scholarship_name: String,
    #[serde(default)]
    pub form_data: FormData,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub letter_number: Option<String>,
    #[serde(default)]
    pub stamp_id: Option<String>,
    #[serde(default)]
    pub stamp: Option<Stamp>,
    #[serde(default)]
    pub riwayat: Vec<RiwayatEntry>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

/// Full application payload returned by `GET /applications/:id`.
pub type ApplicationDetail = Application;

impl Application {
    /// A fresh draft owned by the Mahasiswa at step 0.
    #[must_use]
    pub fn new_draft(id: impl Into<String>, scholarship_name: impl Into<String>, form_data: FormData) -> Self {
        Self {
            id: id.into(),
            status: ApplicationStatus::Draft,
            current_step: 0,
            scholarship_name: scholarship_name.into(),
            form_data,
            attachments: Vec::new(),
            letter_number: None,
            stamp_id: None,
            stamp: None,
            riwayat: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Whether a letter number has been assigned.
    #[must_use]
    pub fn is_published(&self) -> bool {
        self.letter_number.as_deref().is_some_and(|n| !n.trim().is_empty())
    }

    /// Attachments in one category, in upload order.
    pub fn attachments_in(&self, category: AttachmentCategory) -> impl Iterator<Item = &Attachment> {
        self.attachments.iter().filter(move |a| a.category == category)
    }

    #[must_use]
    pub fn latest_entry(&self) -> Option<&RiwayatEntry> {
        self.riwayat.last()
    }

    /// Most recent catatan left with a revision request, if any.
    #[must_use]
    pub fn latest_revision_note(&self) -> Option<&str> {
        self.riwayat
            .iter()
            .rev()
            .find(|entry| entry.action_type == crate::riwayat::ActionType::Revision)
            .and_then(|entry| entry.catatan.as_deref())
    }
}

/// Row shape returned by `GET /applications`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSummary {
    pub id: String,
    #[serde(default)]
    pub scholarship_name: String,
    #[serde(default)]
    pub applicant_name: String,
    #[serde(default)]
    pub nim: String,
    pub status: ApplicationStatus,
    pub current_step: i32,
    #[serde(default)]
    pub letter_number: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
}

impl ApplicationSummary {
    /// Role whose action is pending, `None` when the step is out of range.
    #[must_use]
    pub fn pending_role(&self) -> Option<Role> {
        if self.status.is_terminal() {
            return None;
        }
        Role::at_step(self.current_step)
    }
}

impl From<&Application> for ApplicationSummary {
    fn from(app: &Application) -> Self {
        Self {
            id: app.id.clone(),
            scholarship_name: app.scholarship_name.clone(),
            applicant_name: app.form_data.nama_lengkap.clone(),
            nim: app.form_data.nim.clone(),
            status: app.status,
            current_step: app.current_step,
            letter_number: app.letter_number.clone(),
            created_at: app.created_at,
        }
    }
}
