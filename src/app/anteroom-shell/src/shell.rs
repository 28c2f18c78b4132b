//! Shell bootstrap.

use std::sync::Arc;

use tracing::info;

use anteroom_session::{IdentityProvider, Session};

use crate::error::ShellError;

/// Owner of the session for the lifetime of the application.
///
/// `bootstrap` replaces the process-global "configure before anything else"
/// step: the caller builds a provider from an explicit configuration value
/// and hands it over exactly once. Consumers obtain the session through
/// [`Shell::session`], which fails deterministically until bootstrap has run.
#[derive(Default)]
pub struct Shell {
    session: Option<Session>,
}

impl Shell {
    /// Creates an un-bootstrapped shell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wires the provider into a session and restores any existing
    /// provider-side session.
    ///
    /// Must run exactly once; a second call fails with
    /// [`ShellError::AlreadyBootstrapped`].
    pub async fn bootstrap(
        &mut self,
        provider: Arc<dyn IdentityProvider>,
    ) -> Result<(), ShellError> {
        if self.session.is_some() {
            return Err(ShellError::AlreadyBootstrapped);
        }

        let name = provider.name();
        let session = Session::new(provider);
        let restored = session.initialize().await;
        info!(provider = name, restored, "shell bootstrapped");

        self.session = Some(session);
        Ok(())
    }

    /// The session, available once the shell is bootstrapped.
    pub fn session(&self) -> Result<&Session, ShellError> {
        self.session.as_ref().ok_or(ShellError::NotBootstrapped)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use anteroom_session::{Principal, ProviderError};

    use super::*;

    struct NoSessionProvider;

    #[async_trait]
    impl IdentityProvider for NoSessionProvider {
        async fn sign_in(&self, username: &str, _: &str) -> Result<Principal, ProviderError> {
            Ok(Principal::new(username))
        }

        async fn sign_out(&self) -> Result<(), ProviderError> {
            Ok(())
        }

        async fn current_user(&self) -> Result<Principal, ProviderError> {
            Err(ProviderError::NoSession)
        }

        fn name(&self) -> &'static str {
            "no-session"
        }
    }

    #[test]
    fn session_before_bootstrap_fails_deterministically() {
        let shell = Shell::new();
        assert_eq!(shell.session().unwrap_err(), ShellError::NotBootstrapped);
        // Same error on every read, not just the first.
        assert_eq!(shell.session().unwrap_err(), ShellError::NotBootstrapped);
    }

    #[tokio::test]
    async fn bootstrap_runs_exactly_once() {
        let mut shell = Shell::new();
        shell.bootstrap(Arc::new(NoSessionProvider)).await.unwrap();

        let result = shell.bootstrap(Arc::new(NoSessionProvider)).await;
        assert_eq!(result.unwrap_err(), ShellError::AlreadyBootstrapped);
    }

    #[tokio::test]
    async fn bootstrap_initializes_session_silently() {
        let mut shell = Shell::new();
        shell.bootstrap(Arc::new(NoSessionProvider)).await.unwrap();

        let session = shell.session().unwrap();
        assert!(!session.is_authenticated().await);
    }
}
