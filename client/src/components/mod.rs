//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render pieces of an application (status, progress, history,
//! attachments, actions, letter) and take their data as props. Only the
//! header and action panel read shared context.

pub mod action_panel;
pub mod app_header;
pub mod attachment_list;
pub mod letter_preview;
pub mod riwayat_timeline;
pub mod status_badge;
pub mod stepper;
