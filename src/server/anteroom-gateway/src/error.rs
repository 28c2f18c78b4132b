//! Gateway error types and HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use anteroom_session::ProviderError;

/// Errors surfaced by gateway handlers.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The login flow was aborted or came back without a usable code.
    #[error("authentication error: {0}")]
    Auth(String),

    /// The identity provider rejected or failed a delegated call.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Internal gateway error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            GatewayError::Auth(message) => (StatusCode::UNAUTHORIZED, message),
            GatewayError::Provider(err) => {
                let status = match &err {
                    ProviderError::InvalidCredentials | ProviderError::NoSession => {
                        StatusCode::UNAUTHORIZED
                    }
                    ProviderError::Throttled => StatusCode::TOO_MANY_REQUESTS,
                    ProviderError::Service(_) | ProviderError::Transport(_) => {
                        StatusCode::BAD_GATEWAY
                    }
                };
                (status, err.to_string())
            }
            GatewayError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (status, message).into_response()
    }
}
