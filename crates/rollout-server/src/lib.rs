pub mod brain;
pub mod error;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use rollout_core::config::{AdvisorConfig, ServerConfig};
use rollout_core::deliverable::Deliverable;
use rollout_core::franchise_group::FranchiseGroup;
use rollout_core::initiative::Initiative;
use rollout_core::issue::Issue;
use rollout_core::Store;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::records;

/// Build the axum Router with all API routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(store: Arc<Store>, advisor: AdvisorConfig) -> Router {
    let app_state = state::AppState::new(store, advisor);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Stats
        .route("/api/stats", get(routes::stats::get_stats))
        .route("/api/health", get(routes::stats::health))
        // Records
        .merge(records::routes::<Initiative>("/api/initiatives"))
        .merge(records::routes::<FranchiseGroup>("/api/franchise-groups"))
        .merge(records::routes::<Deliverable>("/api/deliverables"))
        .merge(records::routes::<Issue>("/api/issues"))
        // Initiative lifecycle
        .route(
            "/api/initiatives/{id}/start",
            post(routes::initiatives::start_initiative),
        )
        .route(
            "/api/initiatives/{id}/stop",
            post(routes::initiatives::stop_initiative),
        )
        // Advisor
        .route("/api/brain/health", get(routes::brain::health))
        .route("/api/brain/query", post(routes::brain::query))
        .route("/api/brain/log_use", post(routes::brain::log_use))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

/// Start the dashboard API server on `config.port`.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    serve_on(config, listener).await
}

/// Start the dashboard API server on a pre-bound listener.
///
/// Unlike `serve`, this accepts a `TcpListener` that was already bound so the
/// caller can read the actual port before starting (useful when `port = 0` and
/// the OS picks a free port).
pub async fn serve_on(config: ServerConfig, listener: tokio::net::TcpListener) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();
    let store = if config.seed {
        Store::seeded()
    } else {
        Store::new()
    };
    let app = build_router(Arc::new(store), config.advisor.clone());

    tracing::info!(
        brain = %config.advisor.base_url,
        seed = config.seed,
        "rollout API listening on http://localhost:{actual_port}"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
