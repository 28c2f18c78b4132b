//! Cognito client configuration.

/// Configuration for the Cognito identity provider API.
///
/// Passed explicitly to [`CognitoProvider::new`](crate::CognitoProvider::new);
/// there is no process-global configure step.
#[derive(Debug, Clone)]
pub struct CognitoConfig {
    /// AWS region hosting the user pool (e.g., "eu-west-1").
    pub region: String,
    /// App client ID of the user pool client.
    pub client_id: String,
    /// Endpoint override, mainly for tests against a local stub.
    pub endpoint: Option<String>,
}

impl CognitoConfig {
    /// Creates a configuration for the given region and app client.
    pub fn new(region: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            client_id: client_id.into(),
            endpoint: None,
        }
    }

    /// Overrides the service endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// The Cognito IDP endpoint requests are sent to.
    pub fn endpoint(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => format!("https://cognito-idp.{}.amazonaws.com", self.region),
        }
    }
}
