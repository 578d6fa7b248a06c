//! Per-Side Score and Team Resolution
//!
//! Answers two questions about one side (home or away) of one match:
//! how many goals it scored in total, and which team it was. Both are
//! aggregates over the full event table, since the feed carries them
//! only row by row.
//!
//! `team_score` and `team_id` filter the table per call. `SideTotals`
//! precomputes the same answers for every (match, side) in one pass and
//! is what the pipeline consumes; the two views must agree.

use crate::data::EventRow;
use anyhow::{Context, Result};
use polars::prelude::*;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// A match/side combination with no rows in the table. Malformed input,
/// not a transient condition: the run aborts.
#[derive(Debug, Error)]
#[error("no {side} rows for match {match_id}")]
pub struct MissingSide {
    pub match_id: i64,
    pub side: &'static str,
}

pub fn side_label(is_home: bool) -> &'static str {
    if is_home {
        "home"
    } else {
        "away"
    }
}

fn side_events(events: &DataFrame, match_id: i64, is_home: bool) -> Result<DataFrame> {
    events
        .clone()
        .lazy()
        .filter(
            col("match_id")
                .eq(lit(match_id))
                .and(col("is_home").eq(lit(is_home))),
        )
        .collect()
        .with_context(|| format!("Failed to filter match {} {} rows", match_id, side_label(is_home)))
}

/// Total goals scored by one side of a match
///
/// An empty filter sums to 0.
pub fn team_score(events: &DataFrame, match_id: i64, is_home: bool) -> Result<i64> {
    let side = side_events(events, match_id, is_home)?;
    Ok(side.column("goals_scored")?.i64()?.sum().unwrap_or(0))
}

/// Team id of one side of a match: the `team_id` of the first matching
/// row in table order
pub fn team_id(events: &DataFrame, match_id: i64, is_home: bool) -> Result<i64> {
    let side = side_events(events, match_id, is_home)?;
    side.column("team_id")?.i64()?.get(0).ok_or_else(|| {
        anyhow::Error::new(MissingSide {
            match_id,
            side: side_label(is_home),
        })
    })
}

/// Team id and goal total of one side of one match
#[derive(Debug, Clone, Copy)]
pub struct SideEntry {
    pub team_id: i64,
    pub goals: i64,
}

/// Precomputed per-side aggregates for every (match, side) in the table
///
/// Built in a single pass: goals are summed, the team id is the one
/// from the first row of that side in table order.
#[derive(Debug, Default)]
pub struct SideTotals {
    sides: FxHashMap<(i64, bool), SideEntry>,
}

impl SideTotals {
    pub fn from_rows(rows: &[EventRow]) -> Self {
        let mut sides: FxHashMap<(i64, bool), SideEntry> = FxHashMap::default();

        for row in rows {
            let entry = sides.entry((row.match_id, row.is_home)).or_insert(SideEntry {
                team_id: row.team_id,
                goals: 0,
            });
            entry.goals += row.goals_scored;
        }

        SideTotals { sides }
    }

    pub fn side(&self, match_id: i64, is_home: bool) -> Result<&SideEntry> {
        self.sides.get(&(match_id, is_home)).ok_or_else(|| {
            anyhow::Error::new(MissingSide {
                match_id,
                side: side_label(is_home),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MatchEvents;

    fn fixture() -> MatchEvents {
        let df = df!(
            "match_id" => [1i64, 1, 1, 10, 10],
            "match_name" => [
                "Rovers v United", "Rovers v United", "Rovers v United",
                "United v City", "United v City",
            ],
            "team_id" => [11i64, 11, 12, 12, 13],
            "team_name" => ["Rovers", "Rovers", "United", "United", "City"],
            "is_home" => [true, true, false, true, false],
            "player_id" => [101i64, 102, 201, 201, 301],
            "player_name" => ["Avery", "Blake", "Casey", "Casey", "Drew"],
            "goals_scored" => [2i64, 1, 1, 0, 3],
            "minutes_played" => [90i64, 90, 90, 88, 90],
        )
        .unwrap();

        MatchEvents::from_dataframe(df).unwrap()
    }

    #[test]
    fn sums_goals_for_one_side() {
        let events = fixture();
        assert_eq!(team_score(&events.events, 1, true).unwrap(), 3);
        assert_eq!(team_score(&events.events, 1, false).unwrap(), 1);
        assert_eq!(team_score(&events.events, 10, false).unwrap(), 3);
    }

    #[test]
    fn empty_side_sums_to_zero() {
        let events = fixture();
        assert_eq!(team_score(&events.events, 99, true).unwrap(), 0);
    }

    #[test]
    fn resolves_team_id_from_first_matching_row() {
        let events = fixture();
        assert_eq!(team_id(&events.events, 1, true).unwrap(), 11);
        assert_eq!(team_id(&events.events, 1, false).unwrap(), 12);
        assert_eq!(team_id(&events.events, 10, true).unwrap(), 12);
    }

    #[test]
    fn missing_side_is_a_lookup_error() {
        let events = fixture();
        let err = team_id(&events.events, 99, false).unwrap_err();
        let missing = err.downcast_ref::<MissingSide>().unwrap();
        assert_eq!(missing.match_id, 99);
        assert_eq!(missing.side, "away");
    }

    #[test]
    fn side_totals_agree_with_direct_aggregation() {
        let events = fixture();
        let rows = events.rows().unwrap();
        let totals = SideTotals::from_rows(&rows);

        for (match_id, is_home) in [(1, true), (1, false), (10, true), (10, false)] {
            let entry = totals.side(match_id, is_home).unwrap();
            assert_eq!(entry.goals, team_score(&events.events, match_id, is_home).unwrap());
            assert_eq!(entry.team_id, team_id(&events.events, match_id, is_home).unwrap());
        }

        let err = totals.side(99, true).unwrap_err();
        assert!(err.downcast_ref::<MissingSide>().is_some());
    }
}
