use anyhow::Result;
use rmcp::{
    ServiceExt,
    transport::{
        stdio,
        streamable_http_server::tower::{StreamableHttpServerConfig, StreamableHttpService},
    },
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

// Axum HTTP server for remote MCP
use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::{
    Router,
    http::{HeaderMap, StatusCode},
    middleware,
    response::IntoResponse,
};

use mood_sync::config::Config;
use mood_sync::service::MoodSyncService;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing to stderr for MCP compatibility
    tracing_subscriber::fmt()
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = Arc::new(Config::load());

    // Create service
    let service = MoodSyncService::new(config)?;

    // Choose transport: stdio (default) or http
    let transport = std::env::var("MOODSYNC_TRANSPORT").unwrap_or_else(|_| "stdio".to_string());
    match transport.as_str() {
        "http" | "streamable_http" => {
            // Bind address and route path
            let bind: SocketAddr = std::env::var("MOODSYNC_HTTP_BIND")
                .unwrap_or_else(|_| "127.0.0.1:8780".to_string())
                .parse()
                .expect("Invalid MOODSYNC_HTTP_BIND (expected host:port)");
            let path = std::env::var("MOODSYNC_HTTP_PATH").unwrap_or_else(|_| "/mcp".to_string());

            // Optional bearer token auth
            let bearer_token = std::env::var("MOODSYNC_BEARER_TOKEN").ok();

            // Create streamable HTTP service using the existing service (Clone)
            let svc_factory_service = service.clone();
            let session_manager: rmcp::transport::streamable_http_server::session::local::LocalSessionManager = Default::default();
            let http_service: StreamableHttpService<MoodSyncService, _> =
                StreamableHttpService::new(
                    move || Ok(svc_factory_service.clone()),
                    Arc::new(session_manager),
                    StreamableHttpServerConfig {
                        stateful_mode: true,
                        sse_keep_alive: Some(Duration::from_secs(15)),
                    },
                );

            // Axum router with optional bearer auth middleware
            let mut router = Router::new().nest_service(path.as_str(), http_service);
            if let Some(expected) = bearer_token.clone() {
                let expected = Arc::new(expected);
                router = router.layer(middleware::from_fn_with_state(
                    expected.clone(),
                    require_bearer,
                ));
            }

            // Add a simple health endpoint
            let router = router.route("/health", axum::routing::get(|| async { "ok" }));

            let listener = tokio::net::TcpListener::bind(bind).await?;
            tracing::info!(
                %bind,
                path = %path,
                auth = %bearer_token.as_deref().map(|_| "bearer").unwrap_or("none"),
                "Starting Streamable HTTP MCP server"
            );

            axum::serve(listener, router).await?;
            Ok(())
        }
        _ => {
            tracing::info!("main: Service created, starting server on stdio transport");
            let server = service.serve(stdio()).await?;
            tracing::info!("main: Server started, waiting for connection to close");
            server.waiting().await?;
            tracing::info!("main: Server connection closed");
            eprintln!("Server shutting down");
            Ok(())
        }
    }
}

async fn require_bearer(
    State(expected): State<Arc<String>>,
    req: Request<Body>,
    next: Next,
) -> impl IntoResponse {
    if req.uri().path().eq("/health") {
        return next.run(req).await;
    }
    let headers: &HeaderMap = req.headers();
    let authorized = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {}", expected.as_str()))
        || {
            // Fallback: allow token via query parameter for clients that cannot set headers
            // Accepted keys: access_token, token
            if let Some(q) = req.uri().query() {
                for pair in q.split('&') {
                    if let Some((k, v)) = pair.split_once('=') {
                        if (k == "access_token" || k == "token") && v == expected.as_str() {
                            return next.run(req).await;
                        }
                    }
                }
            }
            false
        };
    if !authorized {
        return (StatusCode::UNAUTHORIZED, "Unauthorized").into_response();
    }
    next.run(req).await
}
