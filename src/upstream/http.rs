//! HTTP Upstream
//!
//! reqwest-backed client for the statistics API.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use super::UpstreamClient;
use crate::error::{ProxyError, Result};

/// Fetches JSON from `{base_url}{path}` with a per-request timeout.
#[derive(Debug, Clone)]
pub struct HttpUpstream {
    client: reqwest::Client,
    base_url: String,
}

impl HttpUpstream {
    /// Builds the client; fails only if the TLS backend can't initialize.
    ///
    /// This is a startup failure, so it is reported as the plain
    /// `reqwest::Error` rather than as an upstream error.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("fpl_proxy/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl UpstreamClient for HttpUpstream {
    async fn fetch_json(&self, path: &str) -> Result<Value> {
        let url = self.url_for(path);
        debug!("Fetching upstream {}", url);

        let unavailable = |e: reqwest::Error| ProxyError::UpstreamUnavailable {
            path: path.to_string(),
            message: e.to_string(),
        };

        let resp = self.client.get(&url).send().await.map_err(|e| {
            warn!("Upstream request to {} failed: {}", url, e);
            unavailable(e)
        })?;

        let status = resp.status();
        if !status.is_success() {
            warn!("Upstream returned {} for {}", status, url);
            return Err(ProxyError::UpstreamHttp {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        let body = resp.bytes().await.map_err(unavailable)?;
        serde_json::from_slice(&body).map_err(|e| {
            warn!("Upstream body for {} is not JSON: {}", url, e);
            ProxyError::UpstreamMalformed {
                path: path.to_string(),
                message: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_joins_base_and_path() {
        let upstream = HttpUpstream::new(
            "https://fantasy.premierleague.com/api/",
            Duration::from_secs(5),
        )
        .unwrap();

        assert_eq!(
            upstream.url_for("/event/3/live/"),
            "https://fantasy.premierleague.com/api/event/3/live/"
        );
    }

    /// Serves canned responses on an ephemeral loopback port.
    async fn spawn_fake_upstream() -> String {
        use axum::{http::StatusCode, routing::get, Router};

        let app = Router::new()
            .route(
                "/api/event/1/live/",
                get(|| async { axum::Json(serde_json::json!({"elements": []})) }),
            )
            .route(
                "/api/event/2/live/",
                get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "The game is being updated.") }),
            )
            .route("/api/event/3/live/", get(|| async { "<html>not json</html>" }));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}/api", addr)
    }

    #[tokio::test]
    async fn test_fetch_json_success() {
        let base = spawn_fake_upstream().await;
        let upstream = HttpUpstream::new(base, Duration::from_secs(5)).unwrap();

        let value = upstream.fetch_json("/event/1/live/").await.unwrap();
        assert_eq!(value, serde_json::json!({"elements": []}));
    }

    #[tokio::test]
    async fn test_non_2xx_is_http_error() {
        let base = spawn_fake_upstream().await;
        let upstream = HttpUpstream::new(base, Duration::from_secs(5)).unwrap();

        let err = upstream.fetch_json("/event/2/live/").await.unwrap_err();
        assert!(matches!(err, ProxyError::UpstreamHttp { status: 503, .. }));

        let err = upstream.fetch_json("/event/99/live/").await.unwrap_err();
        assert!(matches!(err, ProxyError::UpstreamHttp { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_non_json_body_is_malformed() {
        let base = spawn_fake_upstream().await;
        let upstream = HttpUpstream::new(base, Duration::from_secs(5)).unwrap();

        let err = upstream.fetch_json("/event/3/live/").await.unwrap_err();
        assert!(matches!(err, ProxyError::UpstreamMalformed { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_unavailable() {
        // Port 9 on loopback: connection refused without touching the network
        let upstream = HttpUpstream::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();

        let err = upstream.fetch_json("/event/1/live/").await.unwrap_err();
        match err {
            ProxyError::UpstreamUnavailable { path, .. } => assert_eq!(path, "/event/1/live/"),
            other => panic!("expected UpstreamUnavailable, got {:?}", other),
        }
    }
}
