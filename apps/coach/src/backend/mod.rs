//! Backend client — the single point of contact with the career coach service.
//!
//! Every feature goes through `CoachBackend`; the orchestrator never builds URLs
//! or touches `reqwest` itself. `HttpBackend` is the real implementation, tests
//! swap in fakes.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::Config;
use crate::errors::ClientError;

pub mod wire;

/// Transport seam between the orchestrator and the coach service.
#[async_trait]
pub trait CoachBackend: Send + Sync {
    /// POSTs `body` as JSON to `path` and returns the decoded JSON response.
    /// Non-2xx statuses and undecodable bodies are errors.
    async fn post_json(&self, path: &str, body: Value) -> Result<Value, ClientError>;

    /// Fire-and-forget request that wakes a sleeping backend. Never fails.
    async fn warm_up(&self);
}

/// `CoachBackend` over plain HTTP. No retries: a failed call is reported once.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.backend_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl CoachBackend for HttpBackend {
    async fn post_json(&self, path: &str, body: Value) -> Result<Value, ClientError> {
        let url = self.url(path);
        debug!("POST {url}");

        let response = self.client.post(&url).json(&body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            warn!("Backend returned {} for {}: {}", status, path, text);
            return Err(ClientError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }

    async fn warm_up(&self) {
        match self.client.get(&self.base_url).send().await {
            Ok(r) => debug!("Warm-up request answered with {}", r.status()),
            Err(e) => debug!("Warm-up request failed (ignored): {e}"),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{http_backend, serve};
    use super::*;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::json;

    #[tokio::test]
    async fn test_post_json_sends_body_and_decodes_reply() {
        let router = Router::new().route(
            "/api/chat",
            post(|Json(body): Json<Value>| async move {
                Json(json!({ "reply": format!("echo: {}", body["message"].as_str().unwrap()) }))
            }),
        );
        let backend = http_backend(&serve(router).await);

        let reply = backend
            .post_json("/api/chat", json!({ "message": "hello" }))
            .await
            .unwrap();
        assert_eq!(reply, json!({ "reply": "echo: hello" }));
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let router = Router::new().route(
            "/api/roadmap",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "roadmap": ["x"] }))) }),
        );
        let backend = http_backend(&serve(router).await);

        let err = backend.post_json("/api/roadmap", json!({})).await.unwrap_err();
        assert!(matches!(err, ClientError::Status { status: 500, .. }));
        assert_eq!(err.kind(), "status");
    }

    #[tokio::test]
    async fn test_non_json_body_is_malformed() {
        let router = Router::new().route("/api/profile", post(|| async { "<html>oops</html>" }));
        let backend = http_backend(&serve(router).await);

        let err = backend.post_json("/api/profile", json!({})).await.unwrap_err();
        assert!(matches!(err, ClientError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Bind then drop to get a port nothing listens on.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let backend = http_backend(&format!("http://{addr}"));
        let err = backend.post_json("/api/chat", json!({})).await.unwrap_err();
        assert!(matches!(err, ClientError::Http(_)));

        // Warm-up swallows the same failure.
        backend.warm_up().await;
    }
}
