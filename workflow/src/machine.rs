//! Workflow state machine.
//!
//! STATES
//! ======
//! `DRAFT` (initial), `PENDING`, `IN_PROGRESS`, `REVISION_REQUIRED`, and the
//! terminal `COMPLETED` / `REJECTED`.
//!
//! TRANSITIONS
//! ===========
//! - submit:           Mahasiswa @0, DRAFT -> PENDING, REVISION_REQUIRED -> IN_PROGRESS; step -> 1
//! - approve:          reviewer @1..=3 -> IN_PROGRESS; step + 1
//! - reject:           reviewer @1..=3 -> REJECTED
//! - request-revision: reviewer @1..=4 -> REVISION_REQUIRED; step -> 0, catatan required
//! - publish:          UPA @4, IN_PROGRESS -> COMPLETED; letter number + stamp assigned once
//!
//! Every transition appends exactly one Riwayat entry.

#[cfg(test)]
#[path = "machine_test.rs"]
mod machine_test;

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::application::{Application, Stamp};
use crate::error::WorkflowError;
use crate::riwayat::{ActionType, RiwayatEntry};
use crate::role::{Role, RoleTable};
use crate::status::ApplicationStatus;

/// Action a viewer may take on an application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    Submit,
    Approve,
    Reject,
    RequestRevision,
    Publish,
}

impl Action {
    /// The Riwayat action type this action records.
    #[must_use]
    pub fn action_type(self) -> ActionType {
        match self {
            Self::Submit => ActionType::Submit,
            Self::Approve => ActionType::Approve,
            Self::Reject => ActionType::Reject,
            Self::RequestRevision => ActionType::Revision,
            Self::Publish => ActionType::Publish,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Submit => "Ajukan",
            Self::Approve => "Setujui",
            Self::Reject => "Tolak",
            Self::RequestRevision => "Minta Revisi",
            Self::Publish => "Terbitkan",
        }
    }
}

impl From<ActionType> for Action {
    fn from(kind: ActionType) -> Self {
        match kind {
            ActionType::Submit => Self::Submit,
            ActionType::Approve => Self::Approve,
            ActionType::Reject => Self::Reject,
            ActionType::Revision => Self::RequestRevision,
            ActionType::Publish => Self::Publish,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Submit => "submit",
            Self::Approve => "approve",
            Self::Reject => "reject",
            Self::RequestRevision => "request-revision",
            Self::Publish => "publish",
        })
    }
}

/// Inputs accompanying an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionPayload {
    pub viewer: Role,
    pub catatan: Option<String>,
    pub letter_number: Option<String>,
    pub stamp: Option<Stamp>,
    /// When the action happened; becomes the Riwayat date/time.
    pub at: OffsetDateTime,
}

impl ActionPayload {
    #[must_use]
    pub fn new(viewer: Role, at: OffsetDateTime) -> Self {
        Self { viewer, catatan: None, letter_number: None, stamp: None, at }
    }

    #[must_use]
    pub fn with_catatan(mut self, catatan: impl Into<String>) -> Self {
        self.catatan = Some(catatan.into());
        self
    }

    #[must_use]
    pub fn with_letter_number(mut self, letter_number: impl Into<String>) -> Self {
        self.letter_number = Some(letter_number.into());
        self
    }

    #[must_use]
    pub fn with_stamp(mut self, stamp: Stamp) -> Self {
        self.stamp = Some(stamp);
        self
    }
}

/// Role whose action is pending at the application's current step.
///
/// # Errors
///
/// Returns [`WorkflowError::InvalidStep`] when `current_step` is outside the
/// role sequence.
pub fn acting_role(app: &Application) -> Result<Role, WorkflowError> {
    acting_role_in(&RoleTable::standard(), app)
}

/// [`acting_role`] against an explicit role table. A step claimed by several
/// roles goes to the earliest in the sequence, with a warning.
///
/// # Errors
///
/// Returns [`WorkflowError::InvalidStep`] when no row of `table` claims
/// `current_step`.
pub fn acting_role_in(table: &RoleTable, app: &Application) -> Result<Role, WorkflowError> {
    table.resolve(app.current_step).ok_or(WorkflowError::InvalidStep { step: app.current_step })
}

/// Actions `viewer` may take given a bare status and step.
///
/// Shared by [`available_actions`] and list views that only hold summaries.
#[must_use]
pub fn actions_at(status: ApplicationStatus, step: i32, viewer: Role) -> BTreeSet<Action> {
    actions_at_in(&RoleTable::standard(), status, step, viewer)
}

/// [`actions_at`] against an explicit role table.
#[must_use]
pub fn actions_at_in(table: &RoleTable, status: ApplicationStatus, step: i32, viewer: Role) -> BTreeSet<Action> {
    if status.is_terminal() || table.resolve(step) != Some(viewer) {
        return BTreeSet::new();
    }
    let allowed: &[Action] = match (viewer, status) {
        (Role::Mahasiswa, ApplicationStatus::Draft | ApplicationStatus::RevisionRequired) => &[Action::Submit],
        (
            Role::SupervisorAkademik | Role::ManajerTu | Role::WakilDekan1,
            ApplicationStatus::Pending | ApplicationStatus::InProgress,
        ) => &[Action::Approve, Action::Reject, Action::RequestRevision],
        (Role::Upa, ApplicationStatus::InProgress) => &[Action::Publish, Action::RequestRevision],
        _ => &[],
    };
    allowed.iter().copied().collect()
}

/// Actions available to `viewer` on `app`. Empty when it is not the viewer's
/// turn or the application is terminal.
#[must_use]
pub fn available_actions(app: &Application, viewer: Role) -> BTreeSet<Action> {
    actions_at(app.status, app.current_step, viewer)
}

/// Apply `action` on behalf of `payload.viewer`, returning the new application.
///
/// # Errors
///
/// - [`WorkflowError::InvalidStep`] if the current step names no role.
/// - [`WorkflowError::InvalidTransition`] if the application is terminal, it
///   is not the viewer's turn, or the action is not offered in this state.
/// - [`WorkflowError::MissingComment`] for a revision without catatan.
/// - [`WorkflowError::MissingLetterNumber`] / [`WorkflowError::MissingStamp`]
///   when publishing without a reserved number or stamp.
pub fn apply_action(app: &Application, action: Action, payload: &ActionPayload) -> Result<Application, WorkflowError> {
    let viewer = payload.viewer;
    let invalid = || WorkflowError::InvalidTransition { status: app.status, action, viewer };

    if app.status.is_terminal() {
        return Err(invalid());
    }
    acting_role(app)?;
    if !available_actions(app, viewer).contains(&action) {
        return Err(invalid());
    }

    let catatan = non_blank(payload.catatan.as_deref());
    let mut next = app.clone();

    let (status, step, receiver) = match action {
        Action::Submit => {
            let status = if app.status == ApplicationStatus::Draft {
                ApplicationStatus::Pending
            } else {
                ApplicationStatus::InProgress
            };
            (status, Role::SupervisorAkademik.position_step(), Some(Role::SupervisorAkademik))
        }
        Action::Approve => {
            let receiver = viewer.next().ok_or_else(invalid)?;
            (ApplicationStatus::InProgress, app.current_step + 1, Some(receiver))
        }
        Action::Reject => (ApplicationStatus::Rejected, app.current_step, Some(Role::Mahasiswa)),
        Action::RequestRevision => {
            if catatan.is_none() {
                return Err(WorkflowError::MissingComment);
            }
            (ApplicationStatus::RevisionRequired, Role::Mahasiswa.position_step(), Some(Role::Mahasiswa))
        }
        Action::Publish => {
            if app.is_published() || app.stamp.is_some() {
                return Err(invalid());
            }
            let letter_number = non_blank(payload.letter_number.as_deref()).ok_or(WorkflowError::MissingLetterNumber)?;
            let stamp = payload.stamp.clone().ok_or(WorkflowError::MissingStamp)?;
            next.letter_number = Some(letter_number);
            next.stamp_id = Some(stamp.id.clone());
            next.stamp = Some(stamp);
            (ApplicationStatus::Completed, app.current_step, Some(Role::Mahasiswa))
        }
    };

    next.status = status;
    next.current_step = step;
    next.updated_at = Some(payload.at);
    next.riwayat
        .push(RiwayatEntry::recorded_at(payload.at, viewer, receiver, status, action.action_type(), catatan));
    Ok(next)
}

/// Replay a Riwayat into the `(status, current_step)` it implies.
///
/// # Errors
///
/// Returns [`WorkflowError::InvalidTransition`] if an entry was recorded by a
/// role that could not act at that point, or after a terminal entry.
pub fn project(entries: &[RiwayatEntry]) -> Result<(ApplicationStatus, i32), WorkflowError> {
    let mut status = ApplicationStatus::Draft;
    let mut step = 0;
    for entry in entries {
        let action = Action::from(entry.action_type);
        if !actions_at(status, step, entry.sender_role).contains(&action) {
            return Err(WorkflowError::InvalidTransition { status, action, viewer: entry.sender_role });
        }
        (status, step) = match action {
            Action::Submit if status == ApplicationStatus::Draft => (ApplicationStatus::Pending, 1),
            Action::Submit => (ApplicationStatus::InProgress, 1),
            Action::Approve => (ApplicationStatus::InProgress, step + 1),
            Action::Reject => (ApplicationStatus::Rejected, step),
            Action::RequestRevision => (ApplicationStatus::RevisionRequired, 0),
            Action::Publish => (ApplicationStatus::Completed, step),
        };
    }
    Ok((status, step))
}

fn non_blank(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned)
}
