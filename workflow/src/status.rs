//! Application status values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle status of an application. Exactly one value at any time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    #[default]
    Draft,
    Pending,
    InProgress,
    RevisionRequired,
    Rejected,
    Completed,
}

impl ApplicationStatus {
    pub const ALL: [Self; 6] = [
        Self::Draft,
        Self::Pending,
        Self::InProgress,
        Self::RevisionRequired,
        Self::Rejected,
        Self::Completed,
    ];

    /// `COMPLETED` and `REJECTED` accept no further actions.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Rejected)
    }

    #[must_use]
    pub fn wire_id(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Pending => "PENDING",
            Self::InProgress => "IN_PROGRESS",
            Self::RevisionRequired => "REVISION_REQUIRED",
            Self::Rejected => "REJECTED",
            Self::Completed => "COMPLETED",
        }
    }

    /// Indonesian label shown in badges and tables.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Pending => "Menunggu",
            Self::InProgress => "Diproses",
            Self::RevisionRequired => "Perlu Revisi",
            Self::Rejected => "Ditolak",
            Self::Completed => "Selesai",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_id())
    }
}
