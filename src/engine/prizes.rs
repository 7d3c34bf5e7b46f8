//! Prize Aggregation
//!
//! Finds the highest gameweek scorer among a league's top-N entries.
//!
//! Per-entry picks are fetched concurrently, but results are consumed in
//! rank order and reduced with a strict-greater comparison, so ties always
//! go to the higher-ranked entry regardless of which fetch finished first.

use futures::stream::{self, StreamExt, TryStreamExt};
use serde_json::Value;
use tracing::{debug, info, warn};

use super::{malformed_standings, AggregationEngine};
use crate::error::{ProxyError, Result};
use crate::models::{BestEntry, PicksResponse, PrizeResult, StandingsRow};
use crate::upstream::entry_picks_path;

impl AggregationEngine {
    // == Compute Prizes ==
    /// Highest gameweek score among the first `top_n` standings rows.
    ///
    /// Rows without a usable entry id are skipped and never decoded, and rows
    /// past `top_n` are not looked at. Any failed picks fetch
    /// aborts the whole computation with [`ProxyError::EntryFetch`]; no
    /// partial winner is ever returned. `rules` is attached untouched.
    pub async fn compute_prizes(
        &self,
        league_id: u64,
        event_id: u64,
        top_n: usize,
        rules: Value,
    ) -> Result<PrizeResult> {
        let standings = self.standings(league_id).await?;

        let candidates = standings
            .standings
            .results
            .iter()
            .take(top_n)
            .filter_map(|raw| StandingsRow::raw_entry_id(raw).map(|entry| (entry, raw)))
            .map(|(entry, raw)| StandingsRow::decode(raw).map(|row| (entry, row)))
            .collect::<serde_json::Result<Vec<_>>>()
            .map_err(|e| malformed_standings(league_id, e))?;
        debug!(
            "League {} GW {}: scanning {} candidate entries",
            league_id,
            event_id,
            candidates.len()
        );

        let picks_ttl = self.ttls.picks;
        let best = stream::iter(candidates)
            .map(|(entry, row)| {
                let fetcher = self.fetcher.clone();
                async move {
                    let path = entry_picks_path(entry, event_id);
                    let picks: PicksResponse =
                        fetcher.fetch_as(&path, picks_ttl).await.map_err(|e| {
                            warn!("Aborting prizes for league {}: entry {} failed", league_id, entry);
                            ProxyError::EntryFetch {
                                entry,
                                source: Box::new(e),
                            }
                        })?;

                    Ok::<_, ProxyError>(BestEntry {
                        entry,
                        entry_name: row.entry_name,
                        player_name: row.player_name,
                        points: picks.points(),
                    })
                }
            })
            .buffered(self.fanout_concurrency)
            .try_fold(None, |best, candidate| async move {
                Ok::<_, ProxyError>(keep_higher(best, candidate))
            })
            .await?;

        match &best {
            Some(winner) => info!(
                "League {} GW {}: top scorer entry {} with {} points",
                league_id, event_id, winner.entry, winner.points
            ),
            None => info!("League {} GW {}: no candidates", league_id, event_id),
        }

        Ok(PrizeResult {
            league_id,
            event_id,
            top_n,
            highest_gw_points: best,
            rules,
        })
    }
}

// == Reduction ==
/// One fold step: `candidate` replaces `best` only with strictly more points.
pub fn keep_higher(best: Option<BestEntry>, candidate: BestEntry) -> Option<BestEntry> {
    match best {
        Some(current) if candidate.points <= current.points => Some(current),
        _ => Some(candidate),
    }
}
