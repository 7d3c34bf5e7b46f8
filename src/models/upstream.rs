//! Typed shapes of the upstream documents the engine reads.
//!
//! Only the fields the engine uses are decoded. Defaults are limited to what
//! the upstream legitimately omits: an empty league, a missing entry id, and
//! a missing gameweek score.
//!
//! Standings rows stay undecoded until a caller asks for them, so a bad row
//! the caller never looks at can't fail the whole document.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `GET /leagues-classic/{league_id}/standings/`
#[derive(Debug, Clone, Deserialize)]
pub struct StandingsResponse {
    #[serde(default)]
    pub league: Option<LeagueInfo>,
    #[serde(default)]
    pub standings: Standings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeagueInfo {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Standings {
    /// Raw rows in upstream rank order
    #[serde(default)]
    pub results: Vec<Value>,
    /// Upstream-reported manager count, when present
    #[serde(default)]
    pub total: Option<u64>,
}

impl StandingsResponse {
    pub fn league_name(&self) -> Option<&str> {
        self.league.as_ref().and_then(|l| l.name.as_deref())
    }

    /// Manager count: upstream total, else the number of rows returned.
    pub fn managers(&self) -> u64 {
        self.standings
            .total
            .unwrap_or(self.standings.results.len() as u64)
    }

    /// Decodes the first `limit` rows; rows past the limit are not inspected.
    pub fn leading_rows(&self, limit: usize) -> serde_json::Result<Vec<StandingsRow>> {
        self.standings
            .results
            .iter()
            .take(limit)
            .map(StandingsRow::decode)
            .collect()
    }
}

/// One ranked row of a league table.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StandingsRow {
    pub rank: i64,
    /// Entry id; absent or zero means the row can't be looked up
    #[serde(default)]
    pub entry: Option<u64>,
    pub entry_name: String,
    pub player_name: String,
    pub total: i64,
}

impl StandingsRow {
    pub fn decode(raw: &Value) -> serde_json::Result<Self> {
        Self::deserialize(raw)
    }

    pub fn entry_id(&self) -> Option<u64> {
        self.entry.filter(|&id| id != 0)
    }

    /// Usable entry id of an undecoded row.
    pub fn raw_entry_id(raw: &Value) -> Option<u64> {
        raw.get("entry").and_then(Value::as_u64).filter(|&id| id != 0)
    }
}

/// `GET /entry/{entry_id}/event/{event_id}/picks/`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PicksResponse {
    #[serde(default)]
    pub entry_history: Option<EntryHistory>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryHistory {
    #[serde(default)]
    pub points: Option<i64>,
}

impl PicksResponse {
    /// Gameweek points; no recorded score counts as 0.
    pub fn points(&self) -> i64 {
        self.entry_history
            .as_ref()
            .and_then(|h| h.points)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_standings_deserialize() {
        let doc = json!({
            "league": {"id": 314, "name": "Office League"},
            "standings": {
                "has_next": false,
                "results": [
                    {"rank": 1, "entry": 7, "entry_name": "Pep Talk", "player_name": "Ana", "total": 100},
                    {"rank": 2, "entry": 9, "entry_name": "Klopp Shop", "player_name": "Ben", "total": 95}
                ]
            }
        });

        let parsed: StandingsResponse = serde_json::from_value(doc).unwrap();
        assert_eq!(parsed.league_name(), Some("Office League"));
        assert_eq!(parsed.standings.results.len(), 2);
        assert_eq!(parsed.managers(), 2);

        let rows = parsed.leading_rows(5).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].entry_id(), Some(9));
        assert_eq!(rows[1].entry_name, "Klopp Shop");
    }

    #[test]
    fn test_standings_reported_total_wins() {
        let doc = json!({"standings": {"results": [], "total": 58}});
        let parsed: StandingsResponse = serde_json::from_value(doc).unwrap();
        assert_eq!(parsed.managers(), 58);
        assert_eq!(parsed.league_name(), None);
    }

    #[test]
    fn test_standings_missing_section_is_empty() {
        let parsed: StandingsResponse = serde_json::from_value(json!({})).unwrap();
        assert!(parsed.standings.results.is_empty());
    }

    #[test]
    fn test_row_without_usable_entry() {
        let missing: StandingsRow = serde_json::from_value(json!(
            {"rank": 3, "entry_name": "Ghost", "player_name": "?", "total": 0}
        ))
        .unwrap();
        let zero: StandingsRow = serde_json::from_value(json!(
            {"rank": 4, "entry": 0, "entry_name": "Ghost", "player_name": "?", "total": 0}
        ))
        .unwrap();

        assert_eq!(missing.entry_id(), None);
        assert_eq!(zero.entry_id(), None);
    }

    #[test]
    fn test_row_missing_required_field_is_error() {
        let result: Result<StandingsRow, _> =
            serde_json::from_value(json!({"rank": 1, "entry": 7, "entry_name": "Pep Talk"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_rows_past_the_limit_are_not_decoded() {
        let doc = json!({"standings": {"results": [
            {"rank": 1, "entry": 7, "entry_name": "Pep Talk", "player_name": "Ana", "total": 100},
            {"rank": 2, "entry_name": null}
        ]}});

        let parsed: StandingsResponse = serde_json::from_value(doc).unwrap();
        assert_eq!(parsed.managers(), 2);
        assert_eq!(parsed.leading_rows(1).unwrap().len(), 1);
        assert!(parsed.leading_rows(2).is_err());
    }

    #[test]
    fn test_raw_entry_id() {
        assert_eq!(StandingsRow::raw_entry_id(&json!({"entry": 9})), Some(9));
        assert_eq!(StandingsRow::raw_entry_id(&json!({"entry": 0})), None);
        assert_eq!(StandingsRow::raw_entry_id(&json!({"entry": null})), None);
        assert_eq!(StandingsRow::raw_entry_id(&json!({"rank": 1, "total": 0})), None);
    }

    #[test]
    fn test_picks_points_default_to_zero() {
        let empty: PicksResponse = serde_json::from_value(json!({})).unwrap();
        let no_points: PicksResponse =
            serde_json::from_value(json!({"entry_history": {"event": 3}})).unwrap();
        let scored: PicksResponse =
            serde_json::from_value(json!({"entry_history": {"points": 61}})).unwrap();

        assert_eq!(empty.points(), 0);
        assert_eq!(no_points.points(), 0);
        assert_eq!(scored.points(), 61);
    }
}
