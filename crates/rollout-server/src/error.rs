use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rollout_core::error::RolloutError;
use rollout_core::validate::ValidationError;

// ---------------------------------------------------------------------------
// Internal sentinels
// ---------------------------------------------------------------------------

/// Carries an explicit HTTP 400 with a plain message through the
/// `anyhow::Error` chain.
#[derive(Debug)]
struct BadRequestError(String);

impl std::fmt::Display for BadRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for BadRequestError {}

/// The advisor could not be reached: connect failure, timeout, or a broken
/// response stream.
#[derive(Debug)]
pub struct UpstreamUnavailable {
    pub upstream: String,
    pub detail: String,
}

impl std::fmt::Display for UpstreamUnavailable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "brain unavailable at {}: {}", self.upstream, self.detail)
    }
}

impl std::error::Error for UpstreamUnavailable {}

// ---------------------------------------------------------------------------
// AppError: unified error type for HTTP responses
// ---------------------------------------------------------------------------

/// Unified error type for HTTP responses.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    /// Construct a 400 Bad Request error with the given message.
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self(BadRequestError(msg.into()).into())
    }

    /// Construct a 404 for the record type labelled `label`.
    pub fn not_found(label: &'static str) -> Self {
        Self(RolloutError::NotFound(label).into())
    }

    /// Construct a 400 carrying per-field details.
    pub fn invalid(err: ValidationError) -> Self {
        Self(RolloutError::Validation(err).into())
    }

    /// Construct a 503 `brain_unavailable` error.
    pub fn brain_unavailable(upstream: impl Into<String>, detail: impl Into<String>) -> Self {
        Self(
            UpstreamUnavailable {
                upstream: upstream.into(),
                detail: detail.into(),
            }
            .into(),
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(b) = self.0.downcast_ref::<BadRequestError>() {
            let body = serde_json::json!({ "error": b.0.clone() });
            return (StatusCode::BAD_REQUEST, axum::Json(body)).into_response();
        }
        if let Some(u) = self.0.downcast_ref::<UpstreamUnavailable>() {
            let body = serde_json::json!({
                "error": "brain_unavailable",
                "upstream": u.upstream.clone(),
                "detail": u.detail.clone(),
            });
            return (StatusCode::SERVICE_UNAVAILABLE, axum::Json(body)).into_response();
        }

        if let Some(e) = self.0.downcast_ref::<RolloutError>() {
            match e {
                RolloutError::Validation(v) => {
                    let body = serde_json::json!({
                        "error": "Validation failed",
                        "details": v.details,
                    });
                    return (StatusCode::BAD_REQUEST, axum::Json(body)).into_response();
                }
                RolloutError::NotFound(_) => {
                    let body = serde_json::json!({ "error": e.to_string() });
                    return (StatusCode::NOT_FOUND, axum::Json(body)).into_response();
                }
                RolloutError::InvalidEnum { .. } => {
                    let body = serde_json::json!({ "error": e.to_string() });
                    return (StatusCode::BAD_REQUEST, axum::Json(body)).into_response();
                }
                RolloutError::Io(_) | RolloutError::Yaml(_) | RolloutError::Json(_) => {}
            }
        }

        tracing::error!(error = %self.0, "request failed");
        let body = serde_json::json!({ "error": self.0.to_string() });
        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
