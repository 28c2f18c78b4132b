//! Anteroom gateway - main entry point.
//!
//! Front door for the hosted-UI login flow: redirects unauthenticated users
//! to the identity provider's login page, completes the authorization-code
//! exchange on the callback, and forwards them to the protected site.

mod config;
mod error;
mod middleware;
mod routes;

use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use anteroom_cognito::HostedUi;

use crate::config::GatewayConfig;
use crate::routes::GatewayState;

#[derive(Parser)]
#[command(name = "anteroom-gateway")]
#[command(about = "Anteroom - hosted-UI authentication gateway")]
#[command(version)]
struct Cli {
    /// Server bind address
    #[arg(long, default_value = "0.0.0.0:3000", env = "ANTEROOM_BIND_ADDRESS")]
    bind: String,

    /// Hosted-UI domain of the identity provider
    #[arg(long, env = "COGNITO_DOMAIN")]
    cognito_domain: String,

    /// App client ID
    #[arg(long, env = "COGNITO_CLIENT_ID")]
    cognito_client_id: String,

    /// App client secret
    #[arg(long, env = "COGNITO_CLIENT_SECRET")]
    cognito_client_secret: String,

    /// Public base URL of this gateway (callback host)
    #[arg(long, env = "SERVER_DOMAIN")]
    server_domain: String,

    /// Where to send users after a successful login
    #[arg(long, env = "PROTECTED_WEBSITE_URL")]
    protected_website_url: String,

    /// Allowed CORS origins, comma separated ("*" for wildcard)
    #[arg(
        long,
        env = "CORS_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    cors_allowed_origins: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = GatewayConfig {
        hosted: HostedUi {
            domain: cli.cognito_domain,
            client_id: cli.cognito_client_id,
            client_secret: cli.cognito_client_secret,
            redirect_uri: format!("{}/callback", cli.server_domain),
        },
        protected_url: cli.protected_website_url,
        cors_allowed_origins: cli.cors_allowed_origins,
    };

    let app = routes::router(GatewayState::new(config));

    tracing::info!("gateway listening on {}", cli.bind);
    let listener = tokio::net::TcpListener::bind(&cli.bind).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
