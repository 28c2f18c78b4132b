//! Cognito identity provider client.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::debug;

use anteroom_session::{IdentityProvider, Principal, ProviderError};

use crate::config::CognitoConfig;
use crate::wire::{
    ApiError, GetUserRequest, GetUserResponse, GlobalSignOutRequest, InitiateAuthRequest,
    InitiateAuthResponse,
};

const AMZ_JSON: &str = "application/x-amz-json-1.1";

const TARGET_INITIATE_AUTH: &str = "AWSCognitoIdentityProviderService.InitiateAuth";
const TARGET_GET_USER: &str = "AWSCognitoIdentityProviderService.GetUser";
const TARGET_GLOBAL_SIGN_OUT: &str = "AWSCognitoIdentityProviderService.GlobalSignOut";

/// Identity provider backed by a Cognito user pool.
///
/// Holds the issued access token internally for the lifetime of the
/// provider-side session. Consumers only ever see [`Principal`] values.
pub struct CognitoProvider {
    http: reqwest::Client,
    config: CognitoConfig,
    access_token: Mutex<Option<String>>,
}

impl CognitoProvider {
    /// Creates a client from an explicit configuration.
    pub fn new(config: CognitoConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            access_token: Mutex::new(None),
        }
    }

    /// One round trip to the service; returns the raw success body.
    async fn call_raw<Req>(&self, target: &str, request: &Req) -> Result<Vec<u8>, ProviderError>
    where
        Req: Serialize,
    {
        let payload = serde_json::to_vec(request)
            .map_err(|err| ProviderError::Service(format!("request encoding: {err}")))?;

        debug!(operation = target, endpoint = %self.config.endpoint(), "cognito request");

        let response = self
            .http
            .post(self.config.endpoint())
            .header("x-amz-target", target)
            .header(CONTENT_TYPE, AMZ_JSON)
            .body(payload)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(transport)?;

        if !status.is_success() {
            return Err(map_api_error(&body));
        }

        Ok(body.to_vec())
    }

    async fn call<Req, Resp>(&self, target: &str, request: &Req) -> Result<Resp, ProviderError>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let body = self.call_raw(target, request).await?;
        serde_json::from_slice(&body)
            .map_err(|err| ProviderError::Service(format!("malformed response: {err}")))
    }

    async fn fetch_principal(&self, access_token: &str) -> Result<Principal, ProviderError> {
        let user: GetUserResponse = self
            .call(
                TARGET_GET_USER,
                &GetUserRequest {
                    access_token: access_token.to_owned(),
                },
            )
            .await?;
        Ok(principal_from(user))
    }
}

#[async_trait]
impl IdentityProvider for CognitoProvider {
    async fn sign_in(&self, username: &str, password: &str) -> Result<Principal, ProviderError> {
        let mut auth_parameters = HashMap::new();
        auth_parameters.insert("USERNAME", username.to_owned());
        auth_parameters.insert("PASSWORD", password.to_owned());

        let InitiateAuthResponse {
            authentication_result,
            challenge_name,
        } = self
            .call(
                TARGET_INITIATE_AUTH,
                &InitiateAuthRequest {
                    auth_flow: "USER_PASSWORD_AUTH",
                    client_id: self.config.client_id.clone(),
                    auth_parameters,
                },
            )
            .await?;

        let result = authentication_result.ok_or_else(|| {
            // MFA and password-reset challenges are not part of this flow.
            let challenge = challenge_name.unwrap_or_else(|| "unknown".into());
            ProviderError::Service(format!("unsupported auth challenge: {challenge}"))
        })?;

        let principal = self.fetch_principal(&result.access_token).await?;
        *self.access_token.lock().await = Some(result.access_token);
        Ok(principal)
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        // Take the token first: local custody ends now even if the remote
        // revocation fails.
        let token = self.access_token.lock().await.take();
        let Some(access_token) = token else {
            debug!("sign-out without provider tokens, nothing to revoke");
            return Ok(());
        };

        // GlobalSignOut answers with an empty body on success.
        self.call_raw(TARGET_GLOBAL_SIGN_OUT, &GlobalSignOutRequest { access_token })
            .await?;
        Ok(())
    }

    async fn current_user(&self) -> Result<Principal, ProviderError> {
        let token = self.access_token.lock().await.clone();
        let Some(access_token) = token else {
            return Err(ProviderError::NoSession);
        };

        self.fetch_principal(&access_token).await.map_err(|err| {
            // A rejected token means the provider-side session is gone.
            match err {
                ProviderError::InvalidCredentials => ProviderError::NoSession,
                other => other,
            }
        })
    }

    fn name(&self) -> &'static str {
        "cognito"
    }
}

pub(crate) fn transport(err: reqwest::Error) -> ProviderError {
    ProviderError::Transport(err.to_string())
}

/// Maps the service's `__type` discriminator onto the provider taxonomy.
fn map_api_error(body: &[u8]) -> ProviderError {
    let Ok(api_error) = serde_json::from_slice::<ApiError>(body) else {
        return ProviderError::Service("unrecognized provider error".into());
    };

    // The discriminator is sometimes namespaced ("com.amazon...#Name").
    let kind = api_error.kind.rsplit('#').next().unwrap_or(&api_error.kind);
    match kind {
        "NotAuthorizedException"
        | "UserNotFoundException"
        | "UserNotConfirmedException"
        | "PasswordResetRequiredException" => ProviderError::InvalidCredentials,
        "TooManyRequestsException" | "LimitExceededException" => ProviderError::Throttled,
        _ => match api_error.message {
            Some(message) => ProviderError::Service(format!("{kind}: {message}")),
            None => ProviderError::Service(kind.to_owned()),
        },
    }
}

fn principal_from(user: GetUserResponse) -> Principal {
    let email = user
        .user_attributes
        .into_iter()
        .find(|attribute| attribute.name == "email")
        .map(|attribute| attribute.value);

    let principal = Principal::new(user.username);
    match email {
        Some(email) => principal.with_email(email),
        None => principal,
    }
}
