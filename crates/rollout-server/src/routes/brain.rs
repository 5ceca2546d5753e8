use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rollout_core::context::advisor_context;
use serde::Deserialize;

use crate::brain::{extract_answer, extract_sources, QueryPayload};
use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct QueryBody {
    #[serde(default)]
    pub need: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

// ---------------------------------------------------------------------------
// POST /api/brain/query
// ---------------------------------------------------------------------------

/// Forward a question, with a dashboard snapshot, to the advisor.
pub async fn query(
    State(app): State<AppState>,
    body: Result<Json<QueryBody>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(body) = body.map_err(|e| AppError::bad_request(e.body_text()))?;
    let need = non_empty(body.need);
    let image = non_empty(body.image);
    if need.is_none() && image.is_none() {
        return Err(AppError::bad_request("need or image is required"));
    }

    let config = app.brain.config();
    let session_id = non_empty(body.session_id).unwrap_or_else(|| config.session_id.clone());
    let context = advisor_context(
        &app.store,
        config.context_slice,
        image.as_deref(),
        chrono::Utc::now(),
    );
    let payload = QueryPayload {
        session_id: session_id.clone(),
        user_id: config.user_id.clone(),
        need: need.unwrap_or_default(),
        mode: config.mode.clone(),
        hints: config.hints.clone(),
        context,
    };

    let reply = app.brain.query(&payload).await?;
    if !reply.is_success() {
        tracing::warn!(status = reply.status.as_u16(), "brain query rejected upstream");
        return Ok(reply.relay());
    }

    let upstream = reply.json();
    Ok(Json(serde_json::json!({
        "response": extract_answer(&upstream),
        "session_id": session_id,
        "sources": extract_sources(&upstream),
    }))
    .into_response())
}

// ---------------------------------------------------------------------------
// GET /api/brain/health
// ---------------------------------------------------------------------------

/// Probe the advisor with the short timeout.
pub async fn health(State(app): State<AppState>) -> Response {
    let upstream = app.brain.config().endpoint("health");
    match app.brain.health().await {
        Ok(reply) if reply.is_success() => Json(serde_json::json!({
            "ok": true,
            "upstream": upstream,
            "status": reply.status.as_u16(),
            "brain": reply.json(),
        }))
        .into_response(),
        Ok(reply) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({
                "ok": false,
                "upstream": upstream,
                "status": reply.status.as_u16(),
            })),
        )
            .into_response(),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({
                "ok": false,
                "upstream": e.upstream,
                "error": "brain_unavailable",
                "detail": e.detail,
            })),
        )
            .into_response(),
    }
}

// ---------------------------------------------------------------------------
// POST /api/brain/log_use
// ---------------------------------------------------------------------------

/// Relay a usage-log payload verbatim.
pub async fn log_use(State(app): State<AppState>, body: Bytes) -> Result<Response, AppError> {
    let reply = app.brain.log_use(body).await?;
    Ok(reply.relay())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_strings_count_as_missing() {
        assert_eq!(non_empty(Some("   ".into())), None);
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("hi".into())).as_deref(), Some("hi"));
    }
}
