//! Row Processing and Run Loop
//!
//! Turns each event row into four keyed records (match, team, player,
//! stat), gates the entity records through the dedup policy, and
//! accumulates the four output collections in table order.

use crate::aggregate::SideTotals;
use crate::data::{EventRow, MatchEvents};
use crate::fractions::{goal_fraction, minutes_fraction};
use crate::records::{build_record, Record};
use anyhow::Result;
use rustc_hash::FxHashSet;
use serde_json::json;
use uuid::Uuid;

/// The four output collections, each in row-iteration order
#[derive(Debug, Default)]
pub struct NormalizedOutput {
    pub matches: Vec<Record>,
    pub teams: Vec<Record>,
    pub players: Vec<Record>,
    pub stats: Vec<Record>,
}

/// The four records derived from a single event row
#[derive(Debug)]
pub struct RowRecords {
    pub match_rec: Record,
    pub team_rec: Record,
    pub player_rec: Record,
    pub stat_rec: Record,
}

/// Admit-once gate for entity records, first row wins
///
/// Tracks which match/team/player ids have already produced a record.
/// Statistics never pass through here: every row keeps its own.
#[derive(Debug, Default)]
pub struct DedupTracker {
    seen_matches: FxHashSet<i64>,
    seen_teams: FxHashSet<i64>,
    seen_players: FxHashSet<i64>,
}

impl DedupTracker {
    pub fn admit_match(&mut self, match_id: i64) -> bool {
        self.seen_matches.insert(match_id)
    }

    pub fn admit_team(&mut self, team_id: i64) -> bool {
        self.seen_teams.insert(team_id)
    }

    pub fn admit_player(&mut self, player_id: i64) -> bool {
        self.seen_players.insert(player_id)
    }
}

/// Derive the four records for one event row
///
/// Resolves both sides of the row's match from the precomputed totals
/// (the opposite side's existence is an input requirement, not a
/// given), computes the two contribution fractions against the
/// combined goal total, and mints a fresh `stat_id`.
pub fn process_row(row: &EventRow, totals: &SideTotals, match_minutes: i64) -> Result<RowRecords> {
    let home = totals.side(row.match_id, true)?;
    let away = totals.side(row.match_id, false)?;

    let goal_frac = goal_fraction(row.goals_scored, home.goals + away.goals);
    let minutes_frac = minutes_fraction(row.minutes_played, match_minutes);

    // Unique per run; no ordering or semantic meaning.
    let stat_id = Uuid::new_v4().simple().to_string();

    let match_rec = build_record(
        "match",
        vec![
            json!(row.match_id),
            json!(row.match_name.clone()),
            json!(home.team_id),
            json!(away.team_id),
            json!(home.goals),
            json!(away.goals),
        ],
    );

    let team_rec = build_record(
        "team",
        vec![json!(row.team_id), json!(row.team_name.clone())],
    );

    let player_rec = build_record(
        "player",
        vec![
            json!(row.player_id),
            json!(row.team_id),
            json!(row.player_name.clone()),
        ],
    );

    let stat_rec = build_record(
        "stat",
        vec![
            json!(stat_id),
            json!(row.player_id),
            json!(row.match_id),
            json!(row.goals_scored),
            json!(row.minutes_played),
            json!(minutes_frac),
            json!(goal_frac),
        ],
    );

    Ok(RowRecords {
        match_rec,
        team_rec,
        player_rec,
        stat_rec,
    })
}

/// Run the full transformation over the event table
///
/// With `drop_duplicates`, match/team/player records are admitted once
/// per id, keeping the fields of the first row that carried that id.
/// Without it, every row contributes all three entity records, exact
/// duplicates included. One stat record is emitted per row in both
/// modes.
pub fn run(events: &MatchEvents, drop_duplicates: bool, match_minutes: i64) -> Result<NormalizedOutput> {
    let rows = events.rows()?;
    let totals = SideTotals::from_rows(&rows);

    let mut dedup = DedupTracker::default();
    let mut output = NormalizedOutput::default();

    for row in &rows {
        let records = process_row(row, &totals, match_minutes)?;

        if drop_duplicates {
            if dedup.admit_player(row.player_id) {
                output.players.push(records.player_rec);
            }
            if dedup.admit_team(row.team_id) {
                output.teams.push(records.team_rec);
            }
            if dedup.admit_match(row.match_id) {
                output.matches.push(records.match_rec);
            }
        } else {
            output.teams.push(records.team_rec);
            output.players.push(records.player_rec);
            output.matches.push(records.match_rec);
        }

        output.stats.push(records.stat_rec);
    }

    Ok(output)
}
