//! API Module
//!
//! HTTP handlers and routing for the proxy REST API.
//!
//! # Endpoints
//! - `GET /health` - Health check endpoint
//! - `GET /stats` - Cache statistics
//! - `GET /api/league` - Main league standings
//! - `GET /api/leagues/:league_id` - League standings
//! - `GET /api/league/:league_id/summary` - League summary
//! - `GET /api/event/:event_id/live` - Live gameweek data
//! - `GET /api/entry/:entry_id/gw/:event_id` - Entry picks
//! - `GET /api/prizes/:league_id/gw/:event_id` - Gameweek prize winner

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
