//! Storefront API Server
//!
//! Order intake for the storefront frontend. Order-creation payloads are
//! validated by a middleware before reaching the order service, and every
//! violated rule is reported back in a single response.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app;
mod config;
mod domain;
mod error;
mod handlers;
mod middleware;

#[cfg(test)]
mod test_utils;


use app::OrderService;
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub order_service: Arc<OrderService>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            order_service: Arc::new(OrderService::new()),
            config,
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

fn cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    Ok(match &config.cors_allowed_origin {
        Some(origin) => cors.allow_origin(
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("invalid CORS_ALLOWED_ORIGIN: {}", origin))?,
        ),
        None => cors.allow_origin(Any),
    })
}

/// Build the application router
pub fn build_router(state: AppState) -> anyhow::Result<Router> {
    let config = state.config.clone();

    // Order creation: validation runs before the handler
    let mut order_routes: Router<AppState> = Router::new()
        .route("/orders", post(handlers::create_order))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::validate_order,
        ));

    if config.rate_limit_enabled() {
        // One request replenished every interval, keyed by peer IP
        let governor_config = Arc::new(
            GovernorConfigBuilder::default()
                .key_extractor(PeerIpKeyExtractor)
                .per_millisecond(config.replenish_interval_ms())
                .burst_size(config.rate_limit_burst)
                .finish()
                .context("invalid rate limit configuration")?,
        );
        order_routes = order_routes.layer(GovernorLayer {
            config: governor_config,
        });
    }

    let app = Router::new()
        .route("/health", get(health))
        .merge(order_routes)
        .fallback(handlers::not_found)
        .layer(cors_layer(&config)?)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,storefront_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Storefront API...");

    let config = Config::from_env();
    if !config.rate_limit_enabled() {
        tracing::warn!("Order rate limiting disabled");
    }

    let port = config.port;
    let app = build_router(AppState::new(config))?;

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("server error")?;

    Ok(())
}
