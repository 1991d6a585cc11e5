//! Error taxonomy for workflow decisions.

use crate::machine::Action;
use crate::role::Role;
use crate::status::ApplicationStatus;

/// Error returned when a workflow query or transition cannot be honoured.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorkflowError {
    /// `currentStep` does not name any role in the sequence.
    #[error("invalid workflow step: {step}")]
    InvalidStep { step: i32 },
    /// The action is not allowed for this viewer in the current state.
    #[error("cannot {action} an application in status {status} as {viewer}")]
    InvalidTransition {
        status: ApplicationStatus,
        action: Action,
        viewer: Role,
    },
    /// A revision was requested without a catatan.
    #[error("a catatan is required when requesting a revision")]
    MissingComment,
    /// Publishing was attempted without a reserved letter number.
    #[error("a letter number is required to publish")]
    MissingLetterNumber,
    /// Publishing was attempted without selecting a stamp.
    #[error("a stamp is required to publish")]
    MissingStamp,
}
