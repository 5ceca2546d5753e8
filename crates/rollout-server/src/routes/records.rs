//! CRUD handlers shared by every record collection.
//!
//! Handlers are generic over [`Record`]; `routes::<T>(path)` mounts the
//! five endpoints for one collection. Validation always runs before the
//! store is touched.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use rollout_core::validate::ValidationError;
use rollout_core::Record;
use serde_json::Value;

use crate::error::AppError;
use crate::state::AppState;

/// Mount list/get/create/update/delete for `T` under `path`.
pub fn routes<T: Record>(path: &str) -> Router<AppState> {
    Router::new()
        .route(path, get(list::<T>).post(create::<T>))
        .route(
            &format!("{path}/{{id}}"),
            get(get_one::<T>).patch(update::<T>).delete(delete::<T>),
        )
}

/// Unwrap a JSON body, turning a malformed one into a 400 with details.
pub(crate) fn json_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, AppError> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(AppError::invalid(ValidationError::single(
            "body",
            rejection.body_text(),
        ))),
    }
}

/// GET /api/<collection>: all records.
pub async fn list<T: Record>(State(app): State<AppState>) -> Json<Vec<T>> {
    Json(app.store.records::<T>().list())
}

/// GET /api/<collection>/{id}
pub async fn get_one<T: Record>(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<T>, AppError> {
    app.store
        .records::<T>()
        .get(&id)
        .map(Json)
        .ok_or_else(|| AppError::not_found(T::LABEL))
}

/// POST /api/<collection>: validate, then create.
pub async fn create<T: Record>(
    State(app): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<T>), AppError> {
    let body = json_body(body)?;
    let new = T::validate_new(&body).map_err(AppError::invalid)?;
    let record = app.store.records::<T>().create(new);
    tracing::info!(kind = T::LABEL, id = record.id(), "created");
    Ok((StatusCode::CREATED, Json(record)))
}

/// PATCH /api/<collection>/{id}: validate, then merge.
pub async fn update<T: Record>(
    State(app): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<T>, AppError> {
    let body = json_body(body)?;
    let patch = T::validate_patch(&body).map_err(AppError::invalid)?;
    let record = app
        .store
        .records::<T>()
        .update(&id, patch)
        .ok_or_else(|| AppError::not_found(T::LABEL))?;
    tracing::info!(kind = T::LABEL, id = %id, "updated");
    Ok(Json(record))
}

/// DELETE /api/<collection>/{id}: 204 on success.
pub async fn delete<T: Record>(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if !app.store.records::<T>().delete(&id) {
        return Err(AppError::not_found(T::LABEL));
    }
    tracing::info!(kind = T::LABEL, id = %id, "deleted");
    Ok(StatusCode::NO_CONTENT)
}
