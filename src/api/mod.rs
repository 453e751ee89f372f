pub mod routes;

use crate::config::Config;
use crate::storefront::Storefront;
use axum::error_handling::HandleErrorLayer;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::{BoxError, ServiceBuilder};

#[derive(Clone)]
pub struct AppState {
    pub storefront: Storefront,
}

impl AppState {
    pub fn new(storefront: Storefront) -> Self {
        Self { storefront }
    }
}

pub fn router_with_defaults(config: &Config) -> Router<AppState> {
    // the listing may need several RPC round trips, leave room beyond the resolve timeout
    let timeout = config.request_timeout() + Duration::from_secs(5);

    Router::new()
        .route("/health", get(routes::health))
        .route("/listing", get(routes::listing))
        .route("/quote", get(routes::quote))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(|error: BoxError| async move {
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("Unhandled error: {:?}", error),
                    )
                }))
                .layer(tower_http::trace::TraceLayer::new_for_http())
                .layer(tower::timeout::TimeoutLayer::new(timeout))
                .layer(tower_http::cors::CorsLayer::new().allow_origin(tower_http::cors::Any))
                .layer(tower_http::compression::CompressionLayer::new().gzip(true)),
        )
}

pub async fn start_api(
    config: &Config,
    storefront: Storefront,
    router: Router<AppState>,
) -> eyre::Result<()> {
    let router = router.with_state(AppState::new(storefront));
    let addr = format!("{}:{}", config.initial_network_ip(), config.api_port);
    let listener = TcpListener::bind(addr.clone()).await?;

    tracing::info!(address = addr, "Starting API server");
    tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, router).await {
            tracing::error!(error = err.to_string(), "API server failed");
        }
    });
    Ok(())
}
