//! Aggregation Engine
//!
//! League-level operations built on the cached fetcher: standings and
//! summaries, verbatim pass-through reads, and the prize fan-out (see
//! [`prizes`]).

pub mod prizes;

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::config::CacheTtls;
use crate::error::{ProxyError, Result};
use crate::fetcher::CachedFetcher;
use crate::models::{LeagueSummary, StandingsResponse};
use crate::upstream::{entry_picks_path, event_live_path, standings_path};

pub use prizes::keep_higher;

/// Rows included in a league summary
pub const SUMMARY_ROWS: usize = 5;

#[derive(Clone)]
pub struct AggregationEngine {
    fetcher: CachedFetcher,
    ttls: CacheTtls,
    /// Upper bound on in-flight per-entry fetches
    fanout_concurrency: usize,
}

impl AggregationEngine {
    pub fn new(fetcher: CachedFetcher, ttls: CacheTtls, fanout_concurrency: usize) -> Self {
        Self {
            fetcher,
            ttls,
            fanout_concurrency: fanout_concurrency.max(1),
        }
    }

    pub fn fetcher(&self) -> &CachedFetcher {
        &self.fetcher
    }

    // == League Standings ==
    /// Raw standings document for `league_id`.
    pub async fn league_standings(&self, league_id: u64) -> Result<Arc<Value>> {
        require_league(league_id)?;
        self.fetcher
            .fetch(&standings_path(league_id), self.ttls.standings)
            .await
    }

    /// Standings decoded into rows, in upstream rank order.
    pub async fn standings(&self, league_id: u64) -> Result<StandingsResponse> {
        require_league(league_id)?;
        self.fetcher
            .fetch_as(&standings_path(league_id), self.ttls.standings)
            .await
    }

    // == League Summary ==
    /// League name, first five rows and manager count.
    pub async fn league_summary(&self, league_id: u64) -> Result<LeagueSummary> {
        let standings = self.standings(league_id).await?;
        debug!(
            "League {} has {} standings rows",
            league_id,
            standings.standings.results.len()
        );
        let top5 = standings
            .leading_rows(SUMMARY_ROWS)
            .map_err(|e| malformed_standings(league_id, e))?;

        Ok(LeagueSummary {
            league_id,
            league_name: standings.league_name().map(str::to_string),
            managers: standings.managers(),
            top5,
        })
    }

    // == Pass-through Reads ==
    pub async fn event_live(&self, event_id: u64) -> Result<Arc<Value>> {
        self.fetcher
            .fetch(&event_live_path(event_id), self.ttls.live)
            .await
    }

    pub async fn entry_picks(&self, entry_id: u64, event_id: u64) -> Result<Arc<Value>> {
        self.fetcher
            .fetch(&entry_picks_path(entry_id, event_id), self.ttls.picks)
            .await
    }
}

/// A zero league id means none was supplied.
fn require_league(league_id: u64) -> Result<()> {
    if league_id == 0 {
        return Err(ProxyError::ConfigurationMissing(
            "league id not supplied".to_string(),
        ));
    }
    Ok(())
}

fn malformed_standings(league_id: u64, e: serde_json::Error) -> ProxyError {
    ProxyError::UpstreamMalformed {
        path: standings_path(league_id),
        message: e.to_string(),
    }
}
