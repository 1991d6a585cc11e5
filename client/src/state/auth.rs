//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once by `App` as `RwSignal<AuthState>`. Route guards and
//! role-aware pages read it to coordinate login redirects and role-dependent
//! rendering.
//!
//! LIFECYCLE
//! =========
//! `default()` starts in the loading state. The session fetch on mount calls
//! [`AuthState::resolve`]; sign-out and fetch failures call
//! [`AuthState::clear`]. A cleared state is never repopulated from a cached
//! user.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use workflow::Role;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// Finish loading with the session result.
    pub fn resolve(&mut self, user: Option<User>) {
        self.user = user;
        self.loading = false;
    }

    /// Drop the session, e.g. after sign-out.
    pub fn clear(&mut self) {
        self.user = None;
        self.loading = false;
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Workflow role of the signed-in user.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().and_then(User::workflow_role)
    }
}
