//! Configuration Module
//!
//! Handles loading and managing proxy configuration from environment variables.

use std::env;
use std::time::Duration;

use serde_json::Value;

/// Default upstream base URL (Fantasy Premier League public API)
pub const DEFAULT_BASE_URL: &str = "https://fantasy.premierleague.com/api";

/// Default number of top-ranked entries considered for prizes
pub const DEFAULT_TOP_N: usize = 20;

/// Proxy configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Base URL of the upstream statistics API
    pub base_url: String,
    /// Per-request upstream timeout in seconds
    pub upstream_timeout: u64,
    /// League served by `/api/league`, None when unset
    pub main_league_id: Option<u64>,
    /// How many top-ranked entries the prize computation queries
    pub prize_top_n: usize,
    /// Opaque prize rules echoed back to callers
    pub prize_rules: Value,
    /// TTL in seconds for league standings
    pub standings_ttl: u64,
    /// TTL in seconds for live event data
    pub live_ttl: u64,
    /// TTL in seconds for per-entry picks
    pub picks_ttl: u64,
    /// Maximum number of concurrent per-entry fetches
    pub fanout_concurrency: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8000)
    /// - `FPL_BASE_URL` - Upstream base URL (default: FPL public API)
    /// - `UPSTREAM_TIMEOUT` - Upstream timeout in seconds (default: 20)
    /// - `MAIN_LEAGUE_ID` - Default league id (default: unset, 0 counts as unset)
    /// - `PRIZE_TOP_N` - Entries considered for prizes (default: 20)
    /// - `PRIZE_RULES_JSON` - Opaque rules payload (default: `[]`)
    /// - `STANDINGS_TTL` / `LIVE_TTL` / `PICKS_TTL` - Cache TTLs (default: 60/30/60)
    /// - `FANOUT_CONCURRENCY` - Parallel per-entry fetches (default: 4)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            server_port: parse_env("SERVER_PORT").unwrap_or(defaults.server_port),
            base_url: env::var("FPL_BASE_URL")
                .ok()
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.base_url),
            upstream_timeout: parse_env("UPSTREAM_TIMEOUT")
                .filter(|&v| v > 0)
                .unwrap_or(defaults.upstream_timeout),
            main_league_id: parse_env("MAIN_LEAGUE_ID").filter(|&v| v != 0),
            prize_top_n: parse_env("PRIZE_TOP_N")
                .filter(|&v| v > 0)
                .unwrap_or(defaults.prize_top_n),
            prize_rules: load_json_env("PRIZE_RULES_JSON").unwrap_or(defaults.prize_rules),
            standings_ttl: parse_env("STANDINGS_TTL").unwrap_or(defaults.standings_ttl),
            live_ttl: parse_env("LIVE_TTL").unwrap_or(defaults.live_ttl),
            picks_ttl: parse_env("PICKS_TTL").unwrap_or(defaults.picks_ttl),
            fanout_concurrency: parse_env("FANOUT_CONCURRENCY")
                .map(|v: usize| v.max(1))
                .unwrap_or(defaults.fanout_concurrency),
        }
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout)
    }

    /// Cache TTLs as durations, in the shape the engine consumes.
    pub fn ttls(&self) -> CacheTtls {
        CacheTtls {
            standings: Duration::from_secs(self.standings_ttl),
            live: Duration::from_secs(self.live_ttl),
            picks: Duration::from_secs(self.picks_ttl),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8000,
            base_url: DEFAULT_BASE_URL.to_string(),
            upstream_timeout: 20,
            main_league_id: None,
            prize_top_n: DEFAULT_TOP_N,
            prize_rules: Value::Array(Vec::new()),
            standings_ttl: 60,
            live_ttl: 30,
            picks_ttl: 60,
            fanout_concurrency: 4,
        }
    }
}

// == Cache TTLs ==
/// Freshness window per data class.
///
/// The same cache serves all three; the TTL is chosen by the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheTtls {
    pub standings: Duration,
    pub live: Duration,
    pub picks: Duration,
}

impl Default for CacheTtls {
    fn default() -> Self {
        Config::default().ttls()
    }
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

/// Reads a JSON value from the environment; blank or invalid yields None.
fn load_json_env(name: &str) -> Option<Value> {
    let raw = env::var(name).ok()?;
    if raw.trim().is_empty() {
        return None;
    }
    serde_json::from_str(&raw).ok()
}
