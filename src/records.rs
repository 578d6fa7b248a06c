//! Output Record Shaping
//!
//! Maps a record kind tag plus positional values to a keyed JSON
//! object. Key names and their order are part of the output contract;
//! `serde_json` is built with `preserve_order` so objects serialize in
//! insertion order.

use serde_json::{Map, Value};

/// One output record: an insertion-ordered JSON object
pub type Record = Map<String, Value>;

const MATCH_KEYS: &[&str] = &[
    "match_id",
    "match_name",
    "home_team_id",
    "away_team_id",
    "home_goals",
    "away_goals",
];

const TEAM_KEYS: &[&str] = &["team_id", "team_name"];

const PLAYER_KEYS: &[&str] = &["player_id", "team_id", "player_name"];

const STAT_KEYS: &[&str] = &[
    "stat_id",
    "player_id",
    "match_id",
    "goal_scored",
    "minutes_played",
    "fraction_of_total_minutes_played",
    "fraction_of_total_goals_scored",
];

/// Build a keyed record from a kind tag and positional values
///
/// An unknown kind yields an empty object. Downstream consumers rely on
/// that fallback, so it stays lenient rather than becoming an error.
pub fn build_record(kind: &str, values: Vec<Value>) -> Record {
    let keys: &[&str] = match kind {
        "match" => MATCH_KEYS,
        "team" => TEAM_KEYS,
        "player" => PLAYER_KEYS,
        "stat" => STAT_KEYS,
        _ => return Record::new(),
    };

    keys.iter()
        .map(|k| (*k).to_string())
        .zip(values)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn match_record_keys_in_contract_order() {
        let record = build_record(
            "match",
            vec![json!(1), json!("Rovers v United"), json!(11), json!(12), json!(3), json!(1)],
        );

        let keys: Vec<&str> = record.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, MATCH_KEYS);
        assert_eq!(record["home_team_id"], json!(11));
        assert_eq!(record["away_goals"], json!(1));
    }

    #[test]
    fn team_and_player_records() {
        let team = build_record("team", vec![json!(11), json!("Rovers")]);
        assert_eq!(team["team_id"], json!(11));
        assert_eq!(team["team_name"], json!("Rovers"));

        let player = build_record("player", vec![json!(101), json!(11), json!("Avery")]);
        let keys: Vec<&str> = player.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, PLAYER_KEYS);
    }

    #[test]
    fn stat_record_keys_in_contract_order() {
        let record = build_record(
            "stat",
            vec![
                json!("a1b2"),
                json!(101),
                json!(1),
                json!(2),
                json!(90),
                json!(1.0),
                json!(0.5),
            ],
        );

        let keys: Vec<&str> = record.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, STAT_KEYS);
        assert_eq!(record["goal_scored"], json!(2));
        assert_eq!(record["fraction_of_total_goals_scored"], json!(0.5));
    }

    #[test]
    fn unknown_kind_yields_empty_record() {
        let record = build_record("fixture", vec![json!(1)]);
        assert!(record.is_empty());
    }
}
