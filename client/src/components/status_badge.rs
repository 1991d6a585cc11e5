//! Colored pill showing an application status.

#[cfg(test)]
#[path = "status_badge_test.rs"]
mod status_badge_test;

use leptos::prelude::*;
use workflow::ApplicationStatus;

#[component]
pub fn StatusBadge(status: ApplicationStatus) -> impl IntoView {
    view! { <span class=format!("status-badge {}", status_class(status))>{status.label()}</span> }
}

fn status_class(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Draft => "status-badge--draft",
        ApplicationStatus::Pending | ApplicationStatus::InProgress => "status-badge--progress",
        ApplicationStatus::RevisionRequired => "status-badge--revision",
        ApplicationStatus::Completed => "status-badge--done",
        ApplicationStatus::Rejected => "status-badge--rejected",
    }
}
