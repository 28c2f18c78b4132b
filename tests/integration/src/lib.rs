//! Integration tests for the Anteroom shell.
//!
//! These drive the complete flow (bootstrap, login, dashboard, logout)
//! against an in-process scripted identity provider.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex as StdMutex;

use async_trait::async_trait;

use anteroom_session::{IdentityProvider, Principal, ProviderError};
use anteroom_shell::Navigator;

// ============================================================================
// Scripted provider
// ============================================================================

/// In-process identity provider with a fixed credential table.
///
/// Mimics the observable behavior of the real client: a successful sign-in
/// establishes a provider-side session that `current_user` reports until
/// sign-out clears it.
pub struct ScriptedIdentity {
    credentials: HashMap<&'static str, &'static str>,
    active: StdMutex<Option<Principal>>,
    sign_out_fails: bool,
    pub sign_in_calls: AtomicUsize,
    pub sign_out_calls: AtomicUsize,
}

impl ScriptedIdentity {
    pub fn new(credentials: HashMap<&'static str, &'static str>) -> Self {
        Self {
            credentials,
            active: StdMutex::new(None),
            sign_out_fails: false,
            sign_in_calls: AtomicUsize::new(0),
            sign_out_calls: AtomicUsize::new(0),
        }
    }

    pub fn single_user(username: &'static str, password: &'static str) -> Self {
        Self::new(HashMap::from([(username, password)]))
    }

    /// Pre-establishes a provider-side session, as if a previous process
    /// signed in and the provider persisted it.
    pub fn with_active_session(self, username: &str) -> Self {
        *self.active.lock().unwrap() = Some(Principal::new(username));
        self
    }

    /// Makes remote sign-out fail while local behavior stays observable.
    pub fn failing_sign_out(mut self) -> Self {
        self.sign_out_fails = true;
        self
    }
}

#[async_trait]
impl IdentityProvider for ScriptedIdentity {
    async fn sign_in(&self, username: &str, password: &str) -> Result<Principal, ProviderError> {
        self.sign_in_calls.fetch_add(1, Ordering::SeqCst);
        match self.credentials.get(username) {
            Some(expected) if *expected == password => {
                let principal = Principal::new(username);
                *self.active.lock().unwrap() = Some(principal.clone());
                Ok(principal)
            }
            _ => Err(ProviderError::InvalidCredentials),
        }
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        self.sign_out_calls.fetch_add(1, Ordering::SeqCst);
        *self.active.lock().unwrap() = None;
        if self.sign_out_fails {
            Err(ProviderError::Service("sign-out unavailable".into()))
        } else {
            Ok(())
        }
    }

    async fn current_user(&self) -> Result<Principal, ProviderError> {
        self.active
            .lock()
            .unwrap()
            .clone()
            .ok_or(ProviderError::NoSession)
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

// ============================================================================
// Recording navigator
// ============================================================================

/// Navigator that records every route change.
#[derive(Default)]
pub struct RouteLog {
    routes: StdMutex<Vec<String>>,
}

impl RouteLog {
    pub fn routes(&self) -> Vec<String> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RouteLog {
    fn navigate(&self, path: &str) {
        self.routes.lock().unwrap().push(path.to_string());
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use anteroom_session::Session;
    use anteroom_shell::{Dashboard, Shell, ShellError};

    use super::*;

    #[tokio::test]
    async fn bootstrap_restores_persisted_provider_session() {
        let provider = ScriptedIdentity::single_user("alice", "correct horse")
            .with_active_session("alice");

        let mut shell = Shell::new();
        shell.bootstrap(Arc::new(provider)).await.unwrap();

        let session = shell.session().unwrap();
        assert!(session.is_authenticated().await);

        let log = RouteLog::default();
        let dashboard = Dashboard::new(session, &log);
        assert_eq!(dashboard.greeting().await, "Welcome, alice");
    }

    #[tokio::test]
    async fn full_login_logout_lifecycle() {
        let provider = Arc::new(ScriptedIdentity::single_user("alice", "correct horse"));
        let mut shell = Shell::new();
        shell.bootstrap(provider.clone()).await.unwrap();
        let session = shell.session().unwrap();

        // Fresh mount with no provider session.
        assert!(!session.is_authenticated().await);

        // Bad credentials surface to the caller and leave state untouched.
        let rejected = session.login("alice", "wrong").await;
        assert!(matches!(rejected, Err(ProviderError::InvalidCredentials)));
        assert!(!session.is_authenticated().await);

        // Good credentials establish the session.
        session.login("alice", "correct horse").await.unwrap();
        let state = session.snapshot().await;
        assert!(state.is_authenticated());
        assert_eq!(state.principal().unwrap().username(), "alice");

        // Dashboard logout lands on the login route.
        let log = RouteLog::default();
        Dashboard::new(session, &log).sign_out().await;
        assert!(!session.is_authenticated().await);
        assert_eq!(log.routes(), vec!["/login"]);
    }

    #[tokio::test]
    async fn logout_is_local_even_when_remote_sign_out_fails() {
        let provider = Arc::new(
            ScriptedIdentity::single_user("alice", "correct horse")
                .with_active_session("alice")
                .failing_sign_out(),
        );
        let mut shell = Shell::new();
        shell.bootstrap(provider.clone()).await.unwrap();
        let session = shell.session().unwrap();
        assert!(session.is_authenticated().await);

        let log = RouteLog::default();
        Dashboard::new(session, &log).sign_out().await;

        assert_eq!(provider.sign_out_calls.load(Ordering::SeqCst), 1);
        assert!(!session.is_authenticated().await);
        assert_eq!(log.routes(), vec!["/login"]);
    }

    #[tokio::test]
    async fn redundant_logout_is_harmless() {
        let provider = Arc::new(ScriptedIdentity::single_user("alice", "correct horse"));
        let session = Session::new(provider.clone());
        session.initialize().await;

        session.logout().await;
        session.logout().await;

        assert_eq!(provider.sign_out_calls.load(Ordering::SeqCst), 2);
        assert!(!session.is_authenticated().await);
    }

    #[tokio::test]
    async fn overlapping_logins_are_serialized() {
        let provider = Arc::new(ScriptedIdentity::new(HashMap::from([
            ("alice", "pw-a"),
            ("bob", "pw-b"),
        ])));
        let session = Arc::new(Session::new(provider.clone()));

        let first = {
            let session = session.clone();
            tokio::spawn(async move { session.login("alice", "pw-a").await })
        };
        let second = {
            let session = session.clone();
            tokio::spawn(async move { session.login("bob", "pw-b").await })
        };

        first.await.unwrap().unwrap();
        second.await.unwrap().unwrap();

        // Both round trips happened; the state is whichever finished last,
        // and it is internally consistent.
        assert_eq!(provider.sign_in_calls.load(Ordering::SeqCst), 2);
        let state = session.snapshot().await;
        assert!(state.is_authenticated());
        assert!(matches!(
            state.principal().unwrap().username(),
            "alice" | "bob"
        ));
    }

    #[tokio::test]
    async fn session_read_outside_bootstrap_is_a_configuration_error() {
        let shell = Shell::new();
        assert_eq!(shell.session().unwrap_err(), ShellError::NotBootstrapped);
    }
}
