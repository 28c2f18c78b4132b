//! Gateway routes.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::response::Redirect;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::debug;

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::middleware::access_log;

/// Shared handler state.
#[derive(Clone)]
pub struct GatewayState {
    /// Gateway configuration.
    pub config: Arc<GatewayConfig>,
    /// HTTP client reused across delegated provider calls.
    pub http: reqwest::Client,
}

impl GatewayState {
    /// Creates the state from a configuration.
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            config: Arc::new(config),
            http: reqwest::Client::new(),
        }
    }
}

/// Builds the gateway router.
pub fn router(state: GatewayState) -> Router {
    let cors = cors_layer(&state.config.cors_allowed_origins);

    Router::new()
        .route("/", get(login))
        .route("/callback", get(callback))
        .route("/health", get(health))
        .layer(axum::middleware::from_fn(access_log))
        .layer(cors)
        .with_state(state)
}

/// Query parameters the hosted UI appends to the callback redirect.
#[derive(Debug, Deserialize)]
struct CallbackParams {
    code: Option<String>,
    error: Option<String>,
}

/// Redirects the user to the provider's hosted login page.
async fn login(State(state): State<GatewayState>) -> Result<Redirect, GatewayError> {
    let url = state.config.hosted.login_url()?;
    Ok(Redirect::to(url.as_str()))
}

/// Completes the code flow: exchanges the authorization code at the provider,
/// then sends the user to the protected site.
async fn callback(
    State(state): State<GatewayState>,
    Query(params): Query<CallbackParams>,
) -> Result<Redirect, GatewayError> {
    if let Some(error) = params.error {
        return Err(GatewayError::Auth(error));
    }

    let code = params
        .code
        .ok_or_else(|| GatewayError::Auth("no authorization code provided".into()))?;

    let tokens = state.config.hosted.exchange_code(&state.http, &code).await?;
    debug!(token_type = tokens.token_type, "authorization code exchanged");

    Ok(Redirect::to(&state.config.protected_url))
}

async fn health() -> StatusCode {
    StatusCode::OK
}

/// CORS policy from the configured origins.
///
/// The wildcard origin cannot carry credentials, so the two branches differ
/// on more than the origin list.
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|origin| origin == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
            .max_age(Duration::from_secs(3600))
    } else {
        let allowed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(allowed))
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([AUTHORIZATION, ACCEPT, CONTENT_TYPE])
            .allow_credentials(true)
            .max_age(Duration::from_secs(3600))
    }
}
