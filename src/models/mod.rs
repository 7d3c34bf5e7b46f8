//! Data models for the proxy
//!
//! Typed upstream documents plus the DTOs used for HTTP request and
//! response bodies.

pub mod requests;
pub mod responses;
pub mod upstream;

// Re-export commonly used types
pub use requests::PrizeQuery;
pub use responses::{BestEntry, HealthResponse, LeagueSummary, PrizeResult, StatsResponse};
pub use upstream::{EntryHistory, LeagueInfo, PicksResponse, Standings, StandingsResponse, StandingsRow};
