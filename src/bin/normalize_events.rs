//! Normalize a match-event feed into entity JSONL files
//!
//! Loads the flat event CSV, runs the row-to-record transformation,
//! and writes the four output streams (match, team, player, statistic)
//! as line-delimited JSON.
//!
//! Usage:
//!   cargo run --bin normalize_events -- --data data/events.csv --out-dir output

use anyhow::Result;
use clap::Parser;
use match_normalizer_rust::data::MatchEvents;
use match_normalizer_rust::fractions::MATCH_TOTAL_MINUTES;
use match_normalizer_rust::{output, pipeline};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "normalize_events", about = "Normalize a match-event feed into entity JSONL files")]
struct Args {
    /// Input event feed CSV
    #[arg(long, default_value = "data/events.csv")]
    data: PathBuf,

    /// Directory for the four JSONL output files
    #[arg(long, default_value = "output")]
    out_dir: PathBuf,

    /// Emit one match/team/player record per row instead of one per id
    #[arg(long)]
    keep_duplicates: bool,

    /// Regulation match length in minutes
    #[arg(long, default_value_t = MATCH_TOTAL_MINUTES)]
    match_minutes: i64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let events = MatchEvents::load(&args.data)?;
    let normalized = pipeline::run(&events, !args.keep_duplicates, args.match_minutes)?;

    println!(
        "Normalized: {} matches, {} teams, {} players, {} statistics",
        normalized.matches.len(),
        normalized.teams.len(),
        normalized.players.len(),
        normalized.stats.len(),
    );

    output::write_outputs(&args.out_dir, &normalized)?;

    Ok(())
}
