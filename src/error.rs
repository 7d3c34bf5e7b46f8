//! Error types for the proxy
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Proxy Error Enum ==
/// Unified error type for the proxy.
///
/// Upstream failures are split by class so callers can tell a dead network
/// from a rejected request or a garbled body. None of them is ever cached.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// Transport failure or timeout talking to the upstream API
    #[error("Upstream unavailable for {path}: {message}")]
    UpstreamUnavailable { path: String, message: String },

    /// Upstream answered with a non-2xx status
    #[error("Upstream returned HTTP {status} for {path}")]
    UpstreamHttp { path: String, status: u16 },

    /// Upstream body is not JSON, or not the expected shape
    #[error("Malformed upstream response for {path}: {message}")]
    UpstreamMalformed { path: String, message: String },

    /// A required identifier was not supplied or configured
    #[error("Configuration missing: {0}")]
    ConfigurationMissing(String),

    /// Invalid request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A per-entry sub-fetch failed and aborted the aggregation
    #[error("Fetching entry {entry} failed: {source}")]
    EntryFetch {
        entry: u64,
        #[source]
        source: Box<ProxyError>,
    },
}

impl ProxyError {
    // == Status Code ==
    /// HTTP status this error maps to.
    ///
    /// Missing configuration is the client's problem (4xx); everything that
    /// went wrong upstream is a gateway-class failure (5xx).
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::ConfigurationMissing(_) | ProxyError::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ProxyError::UpstreamUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            ProxyError::UpstreamHttp { .. } | ProxyError::UpstreamMalformed { .. } => {
                StatusCode::BAD_GATEWAY
            }
            ProxyError::EntryFetch { source, .. } => source.status_code(),
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the proxy.
pub type Result<T> = std::result::Result<T, ProxyError>;
