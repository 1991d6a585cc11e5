//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (params, fetches, redirects) and
//! delegates rendering details to `components`. Pages are parameterized by
//! role; per-role differences come from the `role_view` table.

pub mod dashboard;
pub mod detail;
pub mod form;
pub mod login;
pub mod preview;
pub mod role_view;
