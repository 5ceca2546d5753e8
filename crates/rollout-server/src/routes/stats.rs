use axum::extract::State;
use axum::Json;
use rollout_core::stats::DashboardStats;

use crate::state::AppState;

/// GET /api/stats: dashboard headline numbers.
pub async fn get_stats(State(app): State<AppState>) -> Json<DashboardStats> {
    Json(app.store.stats())
}

/// GET /api/health: liveness of this service, not the advisor.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "ok": true,
        "service": "rollout",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
