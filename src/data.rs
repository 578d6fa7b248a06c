//! Event Feed Loading
//!
//! Loads the flat match-event table (one row per player-per-match
//! appearance) using Polars and canonicalizes it to the nine contract
//! columns. Anything outside that contract aborts the load.

use anyhow::{Context, Result};
use polars::prelude::*;
use std::collections::HashSet;
use std::path::Path;

/// Contract columns of the event feed. Renamed, added, or missing
/// columns break the transformation, so presence is checked up front.
pub const REQUIRED_EVENT_COLS: &[&str] = &[
    "match_id",
    "match_name",
    "team_id",
    "team_name",
    "is_home",
    "player_id",
    "player_name",
    "goals_scored",
    "minutes_played",
];

/// The loaded event table
///
/// Wraps the canonicalized DataFrame; all lookups and aggregations in
/// the pipeline run against this table.
#[derive(Debug)]
pub struct MatchEvents {
    pub events: DataFrame,
}

/// One event row, extracted with concrete types for the processing loop
#[derive(Debug, Clone)]
pub struct EventRow {
    pub match_id: i64,
    pub match_name: String,
    pub team_id: i64,
    pub team_name: String,
    pub is_home: bool,
    pub player_id: i64,
    pub player_name: String,
    pub goals_scored: i64,
    pub minutes_played: i64,
}

impl MatchEvents {
    /// Load the event feed from a CSV file
    pub fn load(path: &Path) -> Result<Self> {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(None) // Scan entire file
            .try_into_reader_with_file_path(Some(path.into()))
            .with_context(|| format!("Failed to create CSV reader: {:?}", path))?
            .finish()
            .with_context(|| format!("Failed to load event feed: {:?}", path))?;

        let events = Self::from_dataframe(df)?;
        println!("Loaded events: {} rows from {:?}", events.events.height(), path);

        Ok(events)
    }

    /// Wrap an already-loaded table, validating and canonicalizing it
    pub fn from_dataframe(df: DataFrame) -> Result<Self> {
        Self::validate_columns(&df)?;

        // Strict casts: a malformed cell fails the run instead of
        // silently becoming null.
        let events = df
            .lazy()
            .select(&[
                col("match_id").strict_cast(DataType::Int64),
                col("match_name").strict_cast(DataType::String),
                col("team_id").strict_cast(DataType::Int64),
                col("team_name").strict_cast(DataType::String),
                col("is_home").strict_cast(DataType::Boolean),
                col("player_id").strict_cast(DataType::Int64),
                col("player_name").strict_cast(DataType::String),
                col("goals_scored").strict_cast(DataType::Int64),
                col("minutes_played").strict_cast(DataType::Int64),
            ])
            .collect()
            .with_context(|| "Failed to canonicalize event feed columns")?;

        Ok(MatchEvents { events })
    }

    fn validate_columns(df: &DataFrame) -> Result<()> {
        let actual_cols: HashSet<String> = df
            .get_column_names()
            .into_iter()
            .map(|s| s.to_string())
            .collect();

        for &expected in REQUIRED_EVENT_COLS {
            if !actual_cols.contains(expected) {
                anyhow::bail!(
                    "Missing expected column '{}'. Available columns: {:?}",
                    expected,
                    actual_cols
                );
            }
        }

        Ok(())
    }

    /// Extract all rows in table order
    ///
    /// A null in any cell is malformed input and aborts the extraction.
    pub fn rows(&self) -> Result<Vec<EventRow>> {
        let n = self.events.height();
        let mut rows = Vec::with_capacity(n);

        let match_ids = self.events.column("match_id")?.i64()?;
        let match_names = self.events.column("match_name")?.str()?;
        let team_ids = self.events.column("team_id")?.i64()?;
        let team_names = self.events.column("team_name")?.str()?;
        let is_home = self.events.column("is_home")?.bool()?;
        let player_ids = self.events.column("player_id")?.i64()?;
        let player_names = self.events.column("player_name")?.str()?;
        let goals = self.events.column("goals_scored")?.i64()?;
        let minutes = self.events.column("minutes_played")?.i64()?;

        for i in 0..n {
            rows.push(EventRow {
                match_id: require(match_ids.get(i), i, "match_id")?,
                match_name: require(match_names.get(i), i, "match_name")?.to_string(),
                team_id: require(team_ids.get(i), i, "team_id")?,
                team_name: require(team_names.get(i), i, "team_name")?.to_string(),
                is_home: require(is_home.get(i), i, "is_home")?,
                player_id: require(player_ids.get(i), i, "player_id")?,
                player_name: require(player_names.get(i), i, "player_name")?.to_string(),
                goals_scored: require(goals.get(i), i, "goals_scored")?,
                minutes_played: require(minutes.get(i), i, "minutes_played")?,
            });
        }

        Ok(rows)
    }
}

fn require<T>(value: Option<T>, row: usize, column: &str) -> Result<T> {
    value.ok_or_else(|| anyhow::anyhow!("Row {} has missing '{}' data", row, column))
}
