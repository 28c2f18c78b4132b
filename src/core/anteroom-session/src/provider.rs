//! Identity provider trait and principal type.

use async_trait::async_trait;

use crate::error::ProviderError;

/// Authenticated identity returned by a provider.
///
/// Opaque to the session layer: the only attribute consumers rely on is the
/// human-readable username. Providers may attach the attributes they report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    username: String,
    email: Option<String>,
}

impl Principal {
    /// Creates a principal with the given username.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: None,
        }
    }

    /// Attaches an email address reported by the provider.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// The human-readable username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Email address, if the provider reported one.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

/// Client boundary to the external identity provider.
///
/// Implementations own everything substantive: credential validation, token
/// issuance and custody, session durability. Each method is a single round
/// trip with no retry or timeout policy of its own.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Authenticates with the given credentials and returns the principal.
    ///
    /// Both arguments are forwarded verbatim; the session layer performs no
    /// validation of its own.
    async fn sign_in(&self, username: &str, password: &str) -> Result<Principal, ProviderError>;

    /// Terminates the provider-side session.
    async fn sign_out(&self) -> Result<(), ProviderError>;

    /// Returns the currently authenticated principal.
    ///
    /// Fails with [`ProviderError::NoSession`] when no session is active.
    async fn current_user(&self) -> Result<Principal, ProviderError>;

    /// Returns the name of this provider for logging/debugging.
    fn name(&self) -> &'static str;
}
