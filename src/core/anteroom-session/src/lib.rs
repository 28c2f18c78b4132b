//! # Anteroom Session
//!
//! Session state holder for applications that delegate authentication to a
//! managed identity provider.
//!
//! The holder keeps a single in-memory snapshot of "is a user currently
//! signed in" and computes it purely by delegation: every mutation is the
//! result of a round trip to an [`IdentityProvider`]. Credential validation,
//! token issuance and refresh, and session durability are all owned by the
//! provider, never re-implemented here.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod provider;
pub mod session;
pub mod state;

pub use error::ProviderError;
pub use provider::{IdentityProvider, Principal};
pub use session::Session;
pub use state::SessionState;
