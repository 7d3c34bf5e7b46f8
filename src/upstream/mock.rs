//! Scripted upstream for tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::UpstreamClient;
use crate::error::{ProxyError, Result};

#[derive(Debug, Clone)]
pub enum Reply {
    Json(Value),
    Status(u16),
    Unavailable,
}

/// Answers from a path -> reply table and records every call.
///
/// Paths with a delay answer only after sleeping for it; `completions`
/// records the order in which answers were actually produced.
#[derive(Debug, Default)]
pub struct MockUpstream {
    replies: Mutex<HashMap<String, Reply>>,
    delays: Mutex<HashMap<String, Duration>>,
    calls: Mutex<Vec<String>>,
    completions: Mutex<Vec<String>>,
}

impl MockUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(self, path: impl Into<String>, value: Value) -> Self {
        self.reply(path, Reply::Json(value));
        self
    }

    pub fn with_reply(self, path: impl Into<String>, reply: Reply) -> Self {
        self.reply(path, reply);
        self
    }

    pub fn reply(&self, path: impl Into<String>, reply: Reply) {
        self.replies.lock().unwrap().insert(path.into(), reply);
    }

    pub fn delay(&self, path: impl Into<String>, delay: Duration) {
        self.delays.lock().unwrap().insert(path.into(), delay);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, path: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|p| *p == path).count()
    }

    pub fn completions(&self) -> Vec<String> {
        self.completions.lock().unwrap().clone()
    }
}

#[async_trait]
impl UpstreamClient for MockUpstream {
    async fn fetch_json(&self, path: &str) -> Result<Value> {
        self.calls.lock().unwrap().push(path.to_string());
        let reply = self.replies.lock().unwrap().get(path).cloned();
        let delay = self.delays.lock().unwrap().get(path).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.completions.lock().unwrap().push(path.to_string());

        match reply {
            Some(Reply::Json(value)) => Ok(value),
            Some(Reply::Status(status)) => Err(ProxyError::UpstreamHttp {
                path: path.to_string(),
                status,
            }),
            Some(Reply::Unavailable) => Err(ProxyError::UpstreamUnavailable {
                path: path.to_string(),
                message: "connection refused".to_string(),
            }),
            None => Err(ProxyError::UpstreamHttp {
                path: path.to_string(),
                status: 404,
            }),
        }
    }
}
