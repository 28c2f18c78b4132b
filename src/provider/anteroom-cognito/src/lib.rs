//! # Anteroom Cognito
//!
//! [`IdentityProvider`](anteroom_session::IdentityProvider) implementation
//! backed by an AWS Cognito user pool.
//!
//! Two access paths are covered:
//!
//! - the SDK-style credential flow (`InitiateAuth` with `USER_PASSWORD_AUTH`,
//!   `GetUser`, `GlobalSignOut`) used by the session holder;
//! - the hosted-UI OAuth2 code flow (login URL construction and
//!   authorization-code exchange) used by the gateway.
//!
//! Token custody lives entirely inside this crate: the session layer never
//! sees access or refresh tokens.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod hosted;

mod wire;

pub use client::CognitoProvider;
pub use config::CognitoConfig;
pub use hosted::{HostedUi, TokenResponse};
