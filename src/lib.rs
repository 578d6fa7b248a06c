//! Match Event Normalizer
//!
//! Flattens a per-player match-event feed into four entity collections
//! (matches, teams, players, per-player statistics), enriched with
//! derived team scores and contribution fractions, for line-delimited
//! JSON export.
//!
//! - `data`: Event feed loading with Polars
//! - `aggregate`: Per-side score and team resolution
//! - `fractions`: Contribution fraction helpers
//! - `records`: Output record shaping
//! - `pipeline`: Row processing, dedup policy, run loop
//! - `output`: JSON Lines export

pub mod aggregate;
pub mod data;
pub mod fractions;
pub mod output;
pub mod pipeline;
pub mod records;

// Re-export commonly used types
pub use aggregate::{team_id, team_score, MissingSide, SideTotals};
pub use data::{EventRow, MatchEvents, REQUIRED_EVENT_COLS};
pub use fractions::{goal_fraction, minutes_fraction, MATCH_TOTAL_MINUTES};
pub use pipeline::{run, NormalizedOutput};
pub use records::{build_record, Record};
