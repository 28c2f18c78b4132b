//! Dashboard page.

use anteroom_session::Session;

use crate::navigator::{Navigator, LOGIN_ROUTE};

/// The signed-in landing page.
///
/// Reads the current principal for display and offers a single action:
/// sign out, then navigate to the login route.
pub struct Dashboard<'a> {
    session: &'a Session,
    navigator: &'a dyn Navigator,
}

impl<'a> Dashboard<'a> {
    /// Creates the page over an explicit session and navigator.
    pub fn new(session: &'a Session, navigator: &'a dyn Navigator) -> Self {
        Self { session, navigator }
    }

    /// Greeting line for the current principal.
    pub async fn greeting(&self) -> String {
        match self.session.snapshot().await.principal() {
            Some(principal) => format!("Welcome, {}", principal.username()),
            None => "Welcome".to_string(),
        }
    }

    /// Signs out and navigates to the login route.
    ///
    /// Navigation happens unconditionally once the logout call resolves,
    /// irrespective of the provider-side outcome.
    pub async fn sign_out(&self) {
        self.session.logout().await;
        self.navigator.navigate(LOGIN_ROUTE);
    }
}
