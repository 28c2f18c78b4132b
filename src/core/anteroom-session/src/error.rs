//! Provider error types.

use thiserror::Error;

/// Errors surfaced by an identity provider.
///
/// Provider SDK errors are treated as opaque: the session layer only relays
/// or discards them, it never branches on their content beyond this taxonomy.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No active session exists for this client.
    ///
    /// An expected outcome of the initial session check, never an
    /// exceptional one.
    #[error("no active session")]
    NoSession,

    /// The supplied credentials were rejected.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The provider throttled the request.
    #[error("request throttled by provider")]
    Throttled,

    /// The provider reported a service-side error.
    #[error("provider error: {0}")]
    Service(String),

    /// The request never reached the provider (DNS, TLS, connect, timeout).
    #[error("transport error: {0}")]
    Transport(String),
}
