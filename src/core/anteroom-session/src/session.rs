//! The session state holder.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::error::ProviderError;
use crate::provider::{IdentityProvider, Principal};
use crate::state::SessionState;

/// Single source of truth for the current sign-in state.
///
/// Every mutation delegates to the injected [`IdentityProvider`]; the holder
/// never infers authentication locally. The snapshot lives behind an async
/// mutex that is held across the provider round trip, so overlapping
/// operations (including duplicate login submissions) are serialized rather
/// than left racing.
pub struct Session {
    provider: Arc<dyn IdentityProvider>,
    state: Mutex<SessionState>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Creates a holder in the logged-out state.
    ///
    /// The provider is an explicit constructor dependency; there is no
    /// process-global configuration step.
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self {
            provider,
            state: Mutex::new(SessionState::signed_out()),
        }
    }

    /// Restores an existing provider session, if one is active.
    ///
    /// Any failure (no session, expired session, network error) collapses
    /// into the logged-out state and is never surfaced to the caller.
    /// Returns whether a session was restored, for logging purposes only.
    pub async fn initialize(&self) -> bool {
        let mut state = self.state.lock().await;
        match self.provider.current_user().await {
            Ok(principal) => {
                info!(
                    provider = self.provider.name(),
                    username = principal.username(),
                    "restored existing session"
                );
                *state = SessionState::signed_in(principal);
                true
            }
            Err(err) => {
                debug!(provider = self.provider.name(), %err, "no session to restore");
                *state = SessionState::signed_out();
                false
            }
        }
    }

    /// Authenticates with the provider.
    ///
    /// Credentials are forwarded verbatim. On success the state becomes
    /// authenticated; on failure the provider error is propagated and the
    /// state is left exactly as it was before the call.
    pub async fn login(&self, username: &str, password: &str) -> Result<Principal, ProviderError> {
        let mut state = self.state.lock().await;
        let principal = self.provider.sign_in(username, password).await?;
        info!(
            provider = self.provider.name(),
            username = principal.username(),
            "login succeeded"
        );
        *state = SessionState::signed_in(principal.clone());
        Ok(principal)
    }

    /// Ends the session.
    ///
    /// Policy: logout is best-effort locally regardless of remote outcome.
    /// The provider's sign-out is requested, a failure is logged and
    /// discarded, and the local state is unconditionally logged out.
    /// Idempotent from the logged-out state.
    pub async fn logout(&self) {
        let mut state = self.state.lock().await;
        if let Err(err) = self.provider.sign_out().await {
            warn!(provider = self.provider.name(), %err, "provider sign-out failed, clearing local session anyway");
        }
        *state = SessionState::signed_out();
    }

    /// A clone of the current session state.
    pub async fn snapshot(&self) -> SessionState {
        self.state.lock().await.clone()
    }

    /// Whether a user is currently signed in.
    pub async fn is_authenticated(&self) -> bool {
        self.state.lock().await.is_authenticated()
    }
}
