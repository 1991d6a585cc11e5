//! Riwayat (history) entries: the append-only audit trail of an application.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::macros::format_description;

use crate::role::Role;
use crate::status::ApplicationStatus;

/// Kind of action recorded in a Riwayat entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    Approve,
    Reject,
    Revision,
    Submit,
    Publish,
}

impl ActionType {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Approve => "Disetujui",
            Self::Reject => "Ditolak",
            Self::Revision => "Revisi",
            Self::Submit => "Diajukan",
            Self::Publish => "Diterbitkan",
        }
    }
}

/// One immutable audit record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiwayatEntry {
    pub sender_role: Role,
    #[serde(default)]
    pub receiver_role: Option<Role>,
    /// Status the application moved into with this action.
    pub status: ApplicationStatus,
    /// `YYYY-MM-DD`.
    pub date: String,
    /// `HH:MM` (24h).
    pub time: String,
    #[serde(default)]
    pub catatan: Option<String>,
    pub action_type: ActionType,
}

impl RiwayatEntry {
    /// Build an entry whose date/time columns are taken from `at`.
    #[must_use]
    pub fn recorded_at(
        at: OffsetDateTime,
        sender_role: Role,
        receiver_role: Option<Role>,
        status: ApplicationStatus,
        action_type: ActionType,
        catatan: Option<String>,
    ) -> Self {
        let date = at.format(format_description!("[year]-[month]-[day]")).unwrap_or_default();
        let time = at.format(format_description!("[hour]:[minute]")).unwrap_or_default();
        Self { sender_role, receiver_role, status, date, time, catatan, action_type }
    }
}
