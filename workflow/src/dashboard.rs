//! Dashboard aggregation over application summaries.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use serde::Serialize;

use crate::application::ApplicationSummary;
use crate::machine::actions_at;
use crate::role::Role;
use crate::status::ApplicationStatus;

/// Counters shown at the top of every role dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total: usize,
    /// Applications waiting on the viewer's action.
    pub awaiting_viewer: usize,
    pub in_progress: usize,
    pub revision: usize,
    pub completed: usize,
    pub rejected: usize,
}

/// Whether `viewer` has anything to do on this row.
#[must_use]
pub fn needs_action(summary: &ApplicationSummary, viewer: Role) -> bool {
    !actions_at(summary.status, summary.current_step, viewer).is_empty()
}

#[must_use]
pub fn summarize(items: &[ApplicationSummary], viewer: Role) -> DashboardStats {
    let mut stats = DashboardStats { total: items.len(), ..DashboardStats::default() };
    for item in items {
        if needs_action(item, viewer) {
            stats.awaiting_viewer += 1;
        }
        match item.status {
            ApplicationStatus::Pending | ApplicationStatus::InProgress => stats.in_progress += 1,
            ApplicationStatus::RevisionRequired => stats.revision += 1,
            ApplicationStatus::Completed => stats.completed += 1,
            ApplicationStatus::Rejected => stats.rejected += 1,
            ApplicationStatus::Draft => {}
        }
    }
    stats
}

/// Tabs on the dashboard table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardFilter {
    #[default]
    All,
    NeedsAction,
    Completed,
    Rejected,
}

impl DashboardFilter {
    pub const ALL: [Self; 4] = [Self::All, Self::NeedsAction, Self::Completed, Self::Rejected];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "Semua",
            Self::NeedsAction => "Perlu Tindakan",
            Self::Completed => "Selesai",
            Self::Rejected => "Ditolak",
        }
    }

    #[must_use]
    pub fn matches(self, summary: &ApplicationSummary, viewer: Role) -> bool {
        match self {
            Self::All => true,
            Self::NeedsAction => needs_action(summary, viewer),
            Self::Completed => summary.status == ApplicationStatus::Completed,
            Self::Rejected => summary.status == ApplicationStatus::Rejected,
        }
    }
}

/// Rows matching `filter`, newest first. Rows without a timestamp sort last.
#[must_use]
pub fn filter_rows(items: &[ApplicationSummary], viewer: Role, filter: DashboardFilter) -> Vec<ApplicationSummary> {
    let mut rows: Vec<ApplicationSummary> =
        items.iter().filter(|item| filter.matches(item, viewer)).cloned().collect();
    rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    rows
}
