//! # Anteroom Shell
//!
//! Application shell around the session holder: one-time bootstrap wiring,
//! the dashboard page, and the navigation boundary.
//!
//! The shell replaces two pieces of ambient state the pattern is usually
//! built on: provider configuration becomes an explicit constructor argument
//! threaded through [`Shell::bootstrap`], and consumers receive the session
//! by reference instead of looking it up from an ambient scope. Reading the
//! session before bootstrap is a deterministic configuration error.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod dashboard;
pub mod error;
pub mod navigator;
pub mod shell;

pub use dashboard::Dashboard;
pub use error::ShellError;
pub use navigator::Navigator;
pub use shell::Shell;
