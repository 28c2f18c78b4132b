//! Access-log middleware.

use std::net::SocketAddr;
use std::time::Instant;

use axum::extract::{ConnectInfo, Request};
use axum::middleware::Next;
use axum::response::Response;
use tracing::{info, warn};

/// Logs one line per request: client, method, uri, status, duration.
pub async fn access_log(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let client_ip = client_ip(&req);

    let response = next.run(req).await;

    let status = response.status();
    let elapsed_ms = start.elapsed().as_millis() as u64;

    if status.is_client_error() || status.is_server_error() {
        warn!(
            target: "access_log",
            %client_ip, %method, %uri, status = status.as_u16(), elapsed_ms,
        );
    } else {
        info!(
            target: "access_log",
            %client_ip, %method, %uri, status = status.as_u16(), elapsed_ms,
        );
    }

    response
}

/// Client address from `x-forwarded-for`, falling back to the socket peer.
fn client_ip(req: &Request) -> String {
    req.headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .unwrap_or_else(|| {
            req.extensions()
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip().to_string())
                .unwrap_or_else(|| "unknown".to_string())
        })
}
