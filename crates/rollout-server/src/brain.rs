//! HTTP client for the upstream advisory ("brain") service.
//!
//! Each call is a single request with its own timeout and no retries. A
//! transport failure or timeout becomes [`UpstreamUnavailable`]; any HTTP
//! response, successful or not, comes back as an [`UpstreamReply`] so the
//! caller can relay it.

use std::sync::Arc;
use std::time::Duration;

use axum::body::{Body, Bytes};
use axum::http::{header, StatusCode};
use axum::response::Response;
use rollout_core::config::AdvisorConfig;
use serde::Serialize;
use serde_json::Value;

use crate::error::UpstreamUnavailable;

/// Field names an upstream answer may arrive under, in preference order.
const ANSWER_FIELDS: &[&str] = &["response", "answer", "message", "text", "output"];

/// Body posted to `<base>/query`.
#[derive(Debug, Clone, Serialize)]
pub struct QueryPayload {
    pub session_id: String,
    pub user_id: String,
    pub need: String,
    pub mode: String,
    pub hints: Vec<String>,
    pub context: Value,
}

/// A complete upstream HTTP response.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl UpstreamReply {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// The body as JSON; a non-JSON body becomes a JSON string.
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&self.body).into_owned()))
    }

    /// Pass the reply through unchanged: same status, content type and body.
    pub fn relay(self) -> Response {
        let mut builder = Response::builder().status(self.status);
        if let Some(ct) = &self.content_type {
            builder = builder.header(header::CONTENT_TYPE, ct.as_str());
        }
        builder
            .body(Body::from(self.body))
            .unwrap_or_else(|_| Response::new(Body::empty()))
    }
}

#[derive(Clone)]
pub struct BrainClient {
    http: reqwest::Client,
    config: Arc<AdvisorConfig>,
}

impl BrainClient {
    pub fn new(config: AdvisorConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    pub async fn query(&self, payload: &QueryPayload) -> Result<UpstreamReply, UpstreamUnavailable> {
        let url = self.config.endpoint("query");
        let timeout = Duration::from_millis(self.config.query_timeout_ms);
        let req = self.http.post(&url).json(payload).timeout(timeout);
        send(req, &url, timeout).await
    }

    pub async fn health(&self) -> Result<UpstreamReply, UpstreamUnavailable> {
        let url = self.config.endpoint("health");
        let timeout = Duration::from_millis(self.config.probe_timeout_ms);
        let req = self.http.get(&url).timeout(timeout);
        send(req, &url, timeout).await
    }

    /// Forward an arbitrary usage-log payload.
    pub async fn log_use(&self, body: Bytes) -> Result<UpstreamReply, UpstreamUnavailable> {
        let url = self.config.endpoint("log_use");
        let timeout = Duration::from_millis(self.config.probe_timeout_ms);
        let req = self
            .http
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .timeout(timeout);
        send(req, &url, timeout).await
    }
}

async fn send(
    req: reqwest::RequestBuilder,
    url: &str,
    timeout: Duration,
) -> Result<UpstreamReply, UpstreamUnavailable> {
    let unavailable = |e: reqwest::Error| {
        let detail = if e.is_timeout() {
            format!("timed out after {} ms", timeout.as_millis())
        } else {
            e.to_string()
        };
        tracing::warn!(upstream = %url, %detail, "brain request failed");
        UpstreamUnavailable {
            upstream: url.to_string(),
            detail,
        }
    };

    let resp = req.send().await.map_err(unavailable)?;
    let status = StatusCode::from_u16(resp.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = resp
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = resp.bytes().await.map_err(unavailable)?;

    tracing::debug!(upstream = %url, status = status.as_u16(), "brain replied");
    Ok(UpstreamReply {
        status,
        content_type,
        body,
    })
}

// ---------------------------------------------------------------------------
// Response normalisation
// ---------------------------------------------------------------------------

/// Pick the answer text from whichever field the upstream populated.
pub fn extract_answer(body: &Value) -> String {
    if let Value::String(s) = body {
        return s.clone();
    }
    ANSWER_FIELDS
        .iter()
        .filter_map(|field| body.get(field).and_then(Value::as_str))
        .find(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| body.to_string())
}

/// Upstream `sources` when it is an array, otherwise empty.
pub fn extract_sources(body: &Value) -> Value {
    match body.get("sources") {
        Some(Value::Array(items)) => Value::Array(items.clone()),
        _ => Value::Array(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn answer_prefers_response_field() {
        let body = json!({ "answer": "b", "response": "a" });
        assert_eq!(extract_answer(&body), "a");
    }

    #[test]
    fn answer_falls_through_empty_fields() {
        let body = json!({ "response": "", "message": "from message" });
        assert_eq!(extract_answer(&body), "from message");
    }

    #[test]
    fn answer_from_plain_string_body() {
        assert_eq!(extract_answer(&json!("just text")), "just text");
    }

    #[test]
    fn answer_defaults_to_serialized_body() {
        let body = json!({ "unexpected": 1 });
        assert_eq!(extract_answer(&body), r#"{"unexpected":1}"#);
    }

    #[test]
    fn sources_only_relayed_when_array() {
        assert_eq!(
            extract_sources(&json!({ "sources": ["doc-1"] })),
            json!(["doc-1"])
        );
        assert_eq!(extract_sources(&json!({ "sources": "doc-1" })), json!([]));
        assert_eq!(extract_sources(&json!({})), json!([]));
    }

    #[test]
    fn reply_json_wraps_non_json_body() {
        let reply = UpstreamReply {
            status: StatusCode::OK,
            content_type: Some("text/plain".into()),
            body: Bytes::from_static(b"hello"),
        };
        assert_eq!(reply.json(), json!("hello"));
    }

    #[test]
    fn relay_keeps_status_and_content_type() {
        let reply = UpstreamReply {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            content_type: Some("application/json".into()),
            body: Bytes::from_static(br#"{"detail":"bad"}"#),
        };
        let response = reply.relay();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn query_payload_field_names() {
        let payload = QueryPayload {
            session_id: "s".into(),
            user_id: "u".into(),
            need: "n".into(),
            mode: "quick".into(),
            hints: vec!["toast".into()],
            context: json!({}),
        };
        let json = serde_json::to_value(&payload).unwrap();
        for key in ["session_id", "user_id", "need", "mode", "hints", "context"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }
}
