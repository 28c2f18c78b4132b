//! Hosted-UI OAuth2 helpers (authorization-code flow).
//!
//! Covers the two pieces of glue the gateway needs: building the provider's
//! hosted login URL and exchanging an authorization code at the provider's
//! token endpoint. Token issuance itself stays with the provider.

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use anteroom_session::ProviderError;

use crate::client::transport;

/// Hosted-UI client settings.
#[derive(Debug, Clone)]
pub struct HostedUi {
    /// Hosted-UI domain (e.g., "https://myapp.auth.eu-west-1.amazoncognito.com").
    pub domain: String,
    /// App client ID.
    pub client_id: String,
    /// App client secret, used as HTTP basic credentials at the token endpoint.
    pub client_secret: String,
    /// Redirect URI registered with the provider (the gateway's `/callback`).
    pub redirect_uri: String,
}

/// Form body for the authorization-code exchange.
#[derive(Debug, Serialize)]
struct TokenRequest<'a> {
    grant_type: &'static str,
    client_id: &'a str,
    code: &'a str,
    redirect_uri: &'a str,
}

/// Token set issued by the provider's token endpoint.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    /// OAuth2 access token.
    pub access_token: String,
    /// Token type (always "Bearer" for this provider).
    pub token_type: String,
    /// Lifetime of the access token in seconds.
    pub expires_in: u32,
    /// OpenID Connect identity token, when the `openid` scope was granted.
    #[serde(default)]
    pub id_token: Option<String>,
}

impl HostedUi {
    /// The hosted login page URL users are redirected to.
    pub fn login_url(&self) -> Result<Url, ProviderError> {
        let mut url = Url::parse(&format!("{}/login", self.domain))
            .map_err(|err| ProviderError::Service(format!("invalid hosted-ui domain: {err}")))?;

        url.query_pairs_mut()
            .append_pair("client_id", &self.client_id)
            .append_pair("response_type", "code")
            .append_pair("scope", "openid")
            .append_pair("redirect_uri", &self.redirect_uri);

        Ok(url)
    }

    /// Exchanges an authorization code for tokens at the provider.
    pub async fn exchange_code(
        &self,
        http: &reqwest::Client,
        code: &str,
    ) -> Result<TokenResponse, ProviderError> {
        let token_url = format!("{}/oauth2/token", self.domain);

        let response = http
            .post(&token_url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&TokenRequest {
                grant_type: "authorization_code",
                client_id: &self.client_id,
                code,
                redirect_uri: &self.redirect_uri,
            })
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.map_err(transport)?;
            debug!(%status, body = %body, "token exchange rejected");
            // 4xx means the code was bad, expired, or already redeemed.
            if status.is_client_error() {
                return Err(ProviderError::InvalidCredentials);
            }
            return Err(ProviderError::Service(format!(
                "token exchange failed with status {status}"
            )));
        }

        response.json::<TokenResponse>().await.map_err(transport)
    }
}
