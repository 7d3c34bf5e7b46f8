//! API Handlers
//!
//! HTTP request handlers for each proxy endpoint. Handlers only extract
//! parameters and delegate to the aggregation engine.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};

use crate::cache::JsonCache;
use crate::config::Config;
use crate::engine::AggregationEngine;
use crate::error::{ProxyError, Result};
use crate::fetcher::CachedFetcher;
use crate::models::{HealthResponse, LeagueSummary, PrizeQuery, PrizeResult, StatsResponse};
use crate::upstream::{HttpUpstream, UpstreamClient};

/// Application state shared across all handlers.
///
/// The engine holds the one process-wide cache; cloning the state clones
/// handles, not data.
#[derive(Clone)]
pub struct AppState {
    pub engine: AggregationEngine,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wires a fresh cache and the given upstream into an engine.
    pub fn new(config: Config, upstream: Arc<dyn UpstreamClient>) -> Self {
        let fetcher = CachedFetcher::new(Arc::new(JsonCache::new()), upstream);
        let engine = AggregationEngine::new(fetcher, config.ttls(), config.fanout_concurrency);
        Self {
            engine,
            config: Arc::new(config),
        }
    }

    /// Creates a new AppState talking to the real upstream API.
    pub fn from_config(config: Config) -> reqwest::Result<Self> {
        let upstream = HttpUpstream::new(config.base_url.clone(), config.upstream_timeout())?;
        Ok(Self::new(config, Arc::new(upstream)))
    }
}

/// Handler for GET /api/league
///
/// Standings of the configured main league.
pub async fn default_league_handler(State(state): State<AppState>) -> Result<Response> {
    let league_id = state
        .config
        .main_league_id
        .ok_or_else(|| ProxyError::ConfigurationMissing("MAIN_LEAGUE_ID not set".to_string()))?;

    let standings = state.engine.league_standings(league_id).await?;
    Ok(Json(standings.as_ref()).into_response())
}

/// Handler for GET /api/leagues/:league_id
pub async fn league_standings_handler(
    State(state): State<AppState>,
    Path(league_id): Path<u64>,
) -> Result<Response> {
    let standings = state.engine.league_standings(league_id).await?;
    Ok(Json(standings.as_ref()).into_response())
}

/// Handler for GET /api/league/:league_id/summary
pub async fn league_summary_handler(
    State(state): State<AppState>,
    Path(league_id): Path<u64>,
) -> Result<Json<LeagueSummary>> {
    Ok(Json(state.engine.league_summary(league_id).await?))
}

/// Handler for GET /api/event/:event_id/live
pub async fn event_live_handler(
    State(state): State<AppState>,
    Path(event_id): Path<u64>,
) -> Result<Response> {
    let live = state.engine.event_live(event_id).await?;
    Ok(Json(live.as_ref()).into_response())
}

/// Handler for GET /api/entry/:entry_id/gw/:event_id
pub async fn entry_picks_handler(
    State(state): State<AppState>,
    Path((entry_id, event_id)): Path<(u64, u64)>,
) -> Result<Response> {
    let picks = state.engine.entry_picks(entry_id, event_id).await?;
    Ok(Json(picks.as_ref()).into_response())
}

/// Handler for GET /api/prizes/:league_id/gw/:event_id
///
/// Uses the configured top-N and rules; `?top_n=` overrides the former.
pub async fn prizes_handler(
    State(state): State<AppState>,
    Path((league_id, event_id)): Path<(u64, u64)>,
    Query(query): Query<PrizeQuery>,
) -> Result<Json<PrizeResult>> {
    if let Some(error_msg) = query.validate() {
        return Err(ProxyError::InvalidRequest(error_msg));
    }

    let top_n = query.top_n_or(state.config.prize_top_n);
    let rules = state.config.prize_rules.clone();
    let result = state
        .engine
        .compute_prizes(league_id, event_id, top_n, rules)
        .await?;

    Ok(Json(result))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.engine.fetcher().cache().stats().await;
    Json(StatsResponse::from(stats))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
