//! Navigation boundary.

/// Route-change primitive invoked by pages with a literal path.
///
/// Implementations decide what a route change means for their surface: a
/// prompt switch in a terminal, a location change in an embedded webview.
pub trait Navigator: Send + Sync {
    /// Navigates to the given path.
    fn navigate(&self, path: &str);
}

/// Route pages send the user to after logout.
pub const LOGIN_ROUTE: &str = "/login";
