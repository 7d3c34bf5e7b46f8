//! Response DTOs for the proxy API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use serde_json::Value;

use crate::cache::CacheStats;
use crate::models::StandingsRow;

/// Response body for GET /api/league/:league_id/summary
#[derive(Debug, Clone, Serialize)]
pub struct LeagueSummary {
    pub league_id: u64,
    pub league_name: Option<String>,
    /// First five rows in upstream rank order
    pub top5: Vec<StandingsRow>,
    /// Upstream-reported manager count, or the number of rows returned
    pub managers: u64,
}

/// Highest gameweek scorer among the scanned entries
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestEntry {
    pub entry: u64,
    pub entry_name: String,
    pub player_name: String,
    pub points: i64,
}

/// Response body for GET /api/prizes/:league_id/gw/:event_id
#[derive(Debug, Clone, Serialize)]
pub struct PrizeResult {
    pub league_id: u64,
    pub event_id: u64,
    #[serde(rename = "topN")]
    pub top_n: usize,
    /// None when no scanned row had a usable entry id
    pub highest_gw_points: Option<BestEntry>,
    /// Opaque rule payload, echoed as configured
    pub rules: Value,
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses (absent or stale)
    pub misses: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            total_entries: stats.total_entries,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status ("ok")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
