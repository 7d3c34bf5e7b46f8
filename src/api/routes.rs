//! API Routes
//!
//! Configures the Axum router with all proxy endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    default_league_handler, entry_picks_handler, event_live_handler, health_handler,
    league_standings_handler, league_summary_handler, prizes_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /health` - Health check
/// - `GET /stats` - Cache statistics
/// - `GET /api/league` - Standings of the configured main league
/// - `GET /api/leagues/:league_id` - Raw league standings
/// - `GET /api/league/:league_id/summary` - League name, top 5, manager count
/// - `GET /api/event/:event_id/live` - Raw live gameweek data
/// - `GET /api/entry/:entry_id/gw/:event_id` - Raw gameweek picks of one entry
/// - `GET /api/prizes/:league_id/gw/:event_id` - Highest gameweek scorer
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/stats", get(stats_handler))
        .route("/api/league", get(default_league_handler))
        .route("/api/leagues/:league_id", get(league_standings_handler))
        .route("/api/league/:league_id/summary", get(league_summary_handler))
        .route("/api/event/:event_id/live", get(event_live_handler))
        .route("/api/entry/:entry_id/gw/:event_id", get(entry_picks_handler))
        .route("/api/prizes/:league_id/gw/:event_id", get(prizes_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
