//! Upstream Module
//!
//! Access to the third-party statistics API.
//!
//! # Upstream paths
//! - `/leagues-classic/{league_id}/standings/` - Classic league standings
//! - `/entry/{entry_id}/event/{event_id}/picks/` - One entry's gameweek picks
//! - `/event/{event_id}/live/` - Live gameweek data

mod http;
#[cfg(test)]
pub(crate) mod mock;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

pub use http::HttpUpstream;

// == Upstream Client ==
/// Source of raw JSON documents addressed by path.
///
/// Implementations fail with `UpstreamUnavailable`, `UpstreamHttp` or
/// `UpstreamMalformed` and never retry.
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    async fn fetch_json(&self, path: &str) -> Result<Value>;
}

// == Paths ==
pub fn standings_path(league_id: u64) -> String {
    format!("/leagues-classic/{}/standings/", league_id)
}

pub fn entry_picks_path(entry_id: u64, event_id: u64) -> String {
    format!("/entry/{}/event/{}/picks/", entry_id, event_id)
}

pub fn event_live_path(event_id: u64) -> String {
    format!("/event/{}/live/", event_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(standings_path(314), "/leagues-classic/314/standings/");
        assert_eq!(entry_picks_path(7, 12), "/entry/7/event/12/picks/");
        assert_eq!(event_live_path(12), "/event/12/live/");
    }

    #[test]
    fn test_paths_are_distinct_per_identifier() {
        assert_ne!(entry_picks_path(1, 23), entry_picks_path(12, 3));
    }
}
