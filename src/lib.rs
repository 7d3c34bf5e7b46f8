//! FPL Proxy - A caching proxy for the Fantasy Premier League API
//!
//! Serves league, live and picks data through a shared TTL cache and computes
//! gameweek prize winners by fanning out over a league's top entries.

pub mod api;
pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use engine::AggregationEngine;
pub use error::{ProxyError, Result};
pub use fetcher::CachedFetcher;
