//! Application workflow model for scholarship recommendation letters (SRB).
//!
//! This crate is UI-framework agnostic so the `client` pages and the `server`
//! route guard can share one definition of roles, statuses, steps and the
//! transitions between them.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every application moves through a fixed role sequence:
//! Mahasiswa -> Supervisor Akademik -> Manajer TU -> Wakil Dekan 1 -> UPA.
//! `currentStep` names the role whose action is pending, and each action
//! appends one Riwayat entry. The backend is the source of truth; this crate
//! decides what the front end may offer and where it routes a viewer.

pub mod application;
pub mod dashboard;
pub mod error;
pub mod machine;
pub mod navigation;
pub mod preview;
pub mod riwayat;
pub mod role;
pub mod status;

pub use application::{Application, ApplicationDetail, ApplicationSummary, Attachment, FormData, Stamp};
pub use error::WorkflowError;
pub use machine::{
    Action, ActionPayload, acting_role, acting_role_in, actions_at, actions_at_in, apply_action, available_actions, project,
};
pub use navigation::{GuardDecision, SESSION_COOKIE, guard};
pub use riwayat::{ActionType, RiwayatEntry};
pub use role::{ROLE_SEQUENCE, Role, RoleRoute, RoleTable};
pub use status::ApplicationStatus;
