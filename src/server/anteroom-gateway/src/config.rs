//! Gateway configuration.

use anteroom_cognito::HostedUi;

/// Explicit configuration for the gateway.
///
/// Built once in `main` from CLI/environment arguments and threaded into the
/// router state; nothing here is process-global.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Hosted-UI settings for the identity provider.
    pub hosted: HostedUi,
    /// Where users land after a successful login.
    pub protected_url: String,
    /// Allowed CORS origins; `*` enables the wildcard policy.
    pub cors_allowed_origins: Vec<String>,
}
