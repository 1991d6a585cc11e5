//! Application list and detail state for the dashboard and detail pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages fetch once on mount and store the outcome here. A failed fetch is not
//! an error screen: the list shows an inline message and the detail page shows
//! a not-found notice echoing the requested id.

#[cfg(test)]
#[path = "applications_test.rs"]
mod applications_test;

use workflow::dashboard::{DashboardFilter, DashboardStats, filter_rows, summarize};
use workflow::{ApplicationDetail, ApplicationSummary, Role};

use crate::net::api::ApiError;

/// Dashboard list state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApplicationsState {
    pub items: Vec<ApplicationSummary>,
    pub loading: bool,
    pub error: Option<String>,
    pub filter: DashboardFilter,
}

impl ApplicationsState {
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn apply(&mut self, result: Result<Vec<ApplicationSummary>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => {
                self.items.clear();
                self.error = Some(format!("Gagal memuat pengajuan: {e}"));
            }
        }
    }

    #[must_use]
    pub fn stats(&self, viewer: Role) -> DashboardStats {
        summarize(&self.items, viewer)
    }

    /// Rows under the active filter tab.
    #[must_use]
    pub fn rows(&self, viewer: Role) -> Vec<ApplicationSummary> {
        filter_rows(&self.items, viewer, self.filter)
    }
}

/// Detail page state.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DetailState {
    #[default]
    Loading,
    Loaded(Box<ApplicationDetail>),
    NotFound { id: String },
}

impl DetailState {
    /// Outcome of fetching application `id`. Any failure reads as not found.
    #[must_use]
    pub fn from_result(id: &str, result: Result<ApplicationDetail, ApiError>) -> Self {
        match result {
            Ok(detail) => Self::Loaded(Box::new(detail)),
            Err(e) => {
                log::warn!("application {id} unavailable: {e}");
                Self::NotFound { id: id.to_owned() }
            }
        }
    }

    #[must_use]
    pub fn detail(&self) -> Option<&ApplicationDetail> {
        match self {
            Self::Loaded(detail) => Some(detail),
            Self::Loading | Self::NotFound { .. } => None,
        }
    }
}

#[must_use]
pub fn not_found_message(id: &str) -> String {
    format!("Pengajuan dengan ID \"{id}\" tidak ditemukan.")
}
