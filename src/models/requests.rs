//! Request DTOs for the proxy API
//!
//! Defines the query parameters accepted by the HTTP endpoints.

use serde::Deserialize;

/// Query parameters for the prize endpoint (GET /api/prizes/:league_id/gw/:event_id)
///
/// # Fields
/// - `top_n`: Optional override of the configured number of entries to scan
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PrizeQuery {
    #[serde(default)]
    pub top_n: Option<usize>,
}

impl PrizeQuery {
    /// Validates the query
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        match self.top_n {
            Some(0) => Some("top_n must be a positive integer".to_string()),
            _ => None,
        }
    }

    /// The requested top-N, or `default` when not given.
    pub fn top_n_or(&self, default: usize) -> usize {
        self.top_n.unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prize_query_deserialize() {
        let query: PrizeQuery = serde_json::from_str(r#"{"top_n": 5}"#).unwrap();
        assert_eq!(query.top_n, Some(5));
        assert!(query.validate().is_none());
        assert_eq!(query.top_n_or(20), 5);
    }

    #[test]
    fn test_prize_query_default() {
        let query: PrizeQuery = serde_json::from_str("{}").unwrap();
        assert!(query.top_n.is_none());
        assert_eq!(query.top_n_or(20), 20);
    }

    #[test]
    fn test_validate_zero_top_n() {
        let query = PrizeQuery { top_n: Some(0) };
        assert!(query.validate().is_some());
    }
}
