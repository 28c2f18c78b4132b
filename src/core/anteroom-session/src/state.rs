//! Session state snapshot.

use crate::provider::Principal;

/// Local snapshot of whether a user is currently considered signed in.
///
/// Invariant: `authenticated == principal.is_some()`. The two fields move in
/// lockstep because the only constructors are [`SessionState::signed_in`]
/// and [`SessionState::signed_out`].
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    principal: Option<Principal>,
    authenticated: bool,
}

impl SessionState {
    /// State for an authenticated principal.
    pub fn signed_in(principal: Principal) -> Self {
        Self {
            principal: Some(principal),
            authenticated: true,
        }
    }

    /// The logged-out state. Also the initial state at mount.
    pub fn signed_out() -> Self {
        Self::default()
    }

    /// The authenticated principal, if any.
    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    /// Whether a user is currently signed in.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}
