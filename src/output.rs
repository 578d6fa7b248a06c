//! JSON Lines Export
//!
//! Writes the output collections as line-delimited JSON, one compact
//! object per line, under the contract stream names `match`, `team`,
//! `player`, `statistic`.

use crate::pipeline::NormalizedOutput;
use crate::records::Record;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Write one record collection as `<name>.jsonl` in `dir`
pub fn save_jsonl(dir: &Path, name: &str, records: &[Record]) -> Result<PathBuf> {
    let path = dir.join(format!("{}.jsonl", name));
    let file =
        File::create(&path).with_context(|| format!("Failed to create output file: {:?}", path))?;
    let mut writer = BufWriter::new(file);

    for record in records {
        serde_json::to_writer(&mut writer, record)
            .with_context(|| format!("Failed to serialize {} record", name))?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    println!("File generated: {:?}", path);

    Ok(path)
}

/// Write all four output streams, creating the output directory
pub fn write_outputs(dir: &Path, output: &NormalizedOutput) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {:?}", dir))?;

    save_jsonl(dir, "match", &output.matches)?;
    save_jsonl(dir, "team", &output.teams)?;
    save_jsonl(dir, "player", &output.players)?;
    save_jsonl(dir, "statistic", &output.stats)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::build_record;
    use serde_json::json;

    #[test]
    fn writes_one_compact_object_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let records = vec![
            build_record("team", vec![json!(11), json!("Rovers")]),
            build_record("team", vec![json!(12), json!("United")]),
        ];

        let path = save_jsonl(dir.path(), "team", &records).unwrap();
        let contents = std::fs::read_to_string(path).unwrap();

        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], r#"{"team_id":11,"team_name":"Rovers"}"#);
        assert_eq!(lines[1], r#"{"team_id":12,"team_name":"United"}"#);
    }
}
