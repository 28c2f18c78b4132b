//! Shell error types.

use thiserror::Error;

/// Integration mistakes caught by the shell.
///
/// These are programming errors, raised immediately so wiring bugs surface
/// during development rather than as runtime surprises.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellError {
    /// The session was read before the shell was bootstrapped.
    #[error("session must be used within a bootstrapped shell")]
    NotBootstrapped,

    /// Bootstrap was invoked a second time in the same process.
    #[error("shell is already bootstrapped")]
    AlreadyBootstrapped,
}
