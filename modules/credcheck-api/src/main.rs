use std::sync::Arc;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use credcheck_common::Config;

mod analyzer;
mod rest;

use analyzer::Analyzer;

pub struct AppState {
    pub analyzer: Analyzer,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("credcheck_api=info".parse()?))
        .init();

    let config = Config::from_env();
    if config.google_api_key.is_none() {
        warn!("GOOGLE_API_KEY not set; analysis requests will fail with a configuration error");
    }

    let state = Arc::new(AppState {
        analyzer: Analyzer::from_config(&config),
    });

    let app = Router::new()
        // Health check
        .route("/health", get(rest::health))
        // REST API
        .route(
            "/api/analyze-text",
            post(rest::analyze::api_analyze_text).get(rest::analyze::api_analyze_text_usage),
        )
        .route(
            "/api/misinformation-trends",
            get(rest::trends::api_misinformation_trends),
        )
        .fallback(rest::not_found)
        .with_state(state)
        // CORS
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        // Logging layer: method + path + status + latency only
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        );

    let addr = format!("{}:{}", config.web_host, config.web_port);
    info!("CredCheck API starting on {addr}");
    info!("Health check: http://{addr}/health");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
