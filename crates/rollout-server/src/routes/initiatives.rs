use axum::extract::{Path, State};
use axum::Json;
use rollout_core::initiative::{Initiative, InitiativePatch};
use rollout_core::types::InitiativeStatus;
use rollout_core::Record;

use crate::error::AppError;
use crate::state::AppState;

fn set_status(
    app: &AppState,
    id: &str,
    status: InitiativeStatus,
) -> Result<Json<Initiative>, AppError> {
    let patch = InitiativePatch::status_change(status, chrono::Utc::now());
    let initiative = app
        .store
        .initiatives()
        .update(id, patch)
        .ok_or_else(|| AppError::not_found(Initiative::LABEL))?;
    tracing::info!(id = %id, status = %status, "initiative status changed");
    Ok(Json(initiative))
}

/// POST /api/initiatives/{id}/start: mark running.
pub async fn start_initiative(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Initiative>, AppError> {
    set_status(&app, &id, InitiativeStatus::Running)
}

/// POST /api/initiatives/{id}/stop: mark stopped.
pub async fn stop_initiative(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Initiative>, AppError> {
    set_status(&app, &id, InitiativeStatus::Stopped)
}
