//! Statistics aggregation over JSONL round records.
//!
//! Counts rounds, showdown wins per player and how often each combination took a
//! pot. Corrupt lines are reported and skipped.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use fivedraw_engine::logger::RoundRecord;

use crate::error::CliError;
use crate::io_utils::read_text;
use crate::parse_json_or_continue;
use crate::ui;

#[derive(Debug, Default)]
struct StatsState {
    rounds: u64,
    games: BTreeMap<u64, u64>,
    wins: BTreeMap<String, u64>,
    combinations: BTreeMap<String, u64>,
    unclaimed: u64,
    total_pot: u64,
    max_pot: u32,
    skipped: u64,
}

impl StatsState {
    fn add(&mut self, rec: RoundRecord) {
        self.rounds += 1;
        *self.games.entry(rec.seed).or_default() += 1;
        match rec.winner {
            Some(name) => *self.wins.entry(name).or_default() += 1,
            None => self.unclaimed += 1,
        }
        if let Some(c) = rec.combination {
            *self.combinations.entry(c.name().to_string()).or_default() += 1;
        }
        self.total_pot += u64::from(rec.pot);
        self.max_pot = self.max_pot.max(rec.pot);
    }

    fn consume(&mut self, source: &Path, content: &str, err: &mut dyn Write) -> Result<(), CliError> {
        for (i, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let rec: RoundRecord = parse_json_or_continue!(
                line,
                err,
                format!("{}:{}", source.display(), i + 1),
                self.skipped
            );
            self.add(rec);
        }
        Ok(())
    }
}

/// JSONL files under `dir`, sorted so directory output is stable.
fn jsonl_files(dir: &Path) -> Result<Vec<PathBuf>, CliError> {
    let mut files = Vec::new();
    let mut stack = vec![dir.to_path_buf()];
    while let Some(d) = stack.pop() {
        for entry in std::fs::read_dir(&d)?.filter_map(Result::ok) {
            let p = entry.path();
            if p.is_dir() {
                stack.push(p);
            } else if p.extension().is_some_and(|e| e == "jsonl") {
                files.push(p);
            }
        }
    }
    files.sort();
    Ok(files)
}

/// Aggregates statistics from a JSONL file, or every `.jsonl` file under a directory.
///
/// Fails when the input cannot be read, or when it holds lines but none of them
/// is a round record.
pub fn handle_stats_command(
    input: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let path = Path::new(input);
    let files = if path.is_dir() {
        jsonl_files(path)?
    } else {
        vec![path.to_path_buf()]
    };

    let mut state = StatsState::default();
    for file in &files {
        let content = match read_text(file) {
            Ok(s) => s,
            Err(e) => {
                let msg = format!("Failed to read {}: {}", file.display(), e);
                ui::write_error(err, &msg)?;
                return Err(CliError::InvalidInput(msg));
            }
        };
        state.consume(file, &content, err)?;
    }

    if state.skipped > 0 {
        ui::display_warning(err, &format!("Skipped {} corrupt record(s)", state.skipped))?;
        if state.rounds == 0 {
            ui::write_error(err, "Invalid record")?;
            return Err(CliError::InvalidInput("no readable round records".into()));
        }
    }

    let summary = serde_json::json!({
        "rounds": state.rounds,
        "games": state.games.len(),
        "wins": state.wins,
        "unclaimed": state.unclaimed,
        "combinations": state.combinations,
        "pot": {
            "total": state.total_pot,
            "max": state.max_pot,
        },
    });
    let json_output = serde_json::to_string_pretty(&summary).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_output)?;
    Ok(())
}
